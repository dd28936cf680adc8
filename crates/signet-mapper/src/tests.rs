//! Mapper integration tests over the worked pipeline examples

use crate::{remove_conflicting, select_significant, NetworkMapper, TableRegulatorSource};
use signet_domain::{AntibodyInfo, EdgeType, MeanChange, MeasurementRecord, Relation, SiteEffect};
use std::collections::BTreeSet;
use std::sync::Arc;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn total_record(id: &str, gene: &str, values: Vec<f64>) -> MeasurementRecord {
    let info = AntibodyInfo::new(id, set(&[gene]), BTreeSet::new(), SiteEffect::Unknown);
    MeasurementRecord::new(Arc::new(info), values, Arc::new(MeanChange))
}

fn phospho_record(
    id: &str,
    gene: &str,
    site: &str,
    effect: SiteEffect,
    values: Vec<f64>,
) -> MeasurementRecord {
    let info = AntibodyInfo::new(id, set(&[gene]), set(&[site]), effect);
    MeasurementRecord::new(Arc::new(info), values, Arc::new(MeanChange))
}

#[test]
fn upregulation_from_each_known_regulator() {
    // Non-phospho record with mean +0.5 over threshold 0.2 yields one
    // expression edge per known regulator
    let mut regulators = TableRegulatorSource::new();
    regulators.insert("MYC", "CCND1", None);
    regulators.insert("E2F1", "CCND1", None);

    let records = vec![total_record("CCND1_total", "CCND1", vec![0.4, 0.6])];
    let significant = select_significant(records, 0.2).unwrap();
    assert_eq!(significant.len(), 1);

    let mapper = NetworkMapper::new(regulators);
    let relations = mapper.map(&significant).unwrap();

    assert_eq!(
        relations,
        vec![
            Relation::new("E2F1", "CCND1", EdgeType::UpregulatesExpression),
            Relation::new("MYC", "CCND1", EdgeType::UpregulatesExpression),
        ]
    );
}

#[test]
fn filtered_records_never_reach_the_mapper() {
    let mut regulators = TableRegulatorSource::new();
    regulators.insert("MYC", "CCND1", None);

    let records = vec![total_record("CCND1_total", "CCND1", vec![0.05])];
    let significant = select_significant(records, 0.2).unwrap();

    let mapper = NetworkMapper::new(regulators);
    let relations = mapper.map(&significant).unwrap();
    assert!(relations.is_empty());
}

#[test]
fn measured_sign_picks_phospho_edge_type() {
    let mut regulators = TableRegulatorSource::new();
    regulators.insert("CDK4", "RB1", Some("S780"));

    let up = phospho_record("RB1_pS780", "RB1", "S780", SiteEffect::Inhibiting, vec![0.9]);
    let down = phospho_record("RB1_pS780", "RB1", "S780", SiteEffect::Inhibiting, vec![-0.9]);

    let mapper = NetworkMapper::new(regulators);

    let rels = mapper.map(&[up]).unwrap();
    assert_eq!(rels, vec![Relation::new("CDK4", "RB1", EdgeType::Phosphorylates)]);

    let rels = mapper.map(&[down]).unwrap();
    assert_eq!(rels, vec![Relation::new("CDK4", "RB1", EdgeType::Dephosphorylates)]);
}

#[test]
fn unresolved_effect_still_maps_from_measured_sign() {
    // Complex/unknown effects keep the measured edge; only activity
    // reasoning is blocked
    let mut regulators = TableRegulatorSource::new();
    regulators.insert("CDK1", "CDC25C", Some("S216"));

    let record = phospho_record(
        "CDC25C_pS216",
        "CDC25C",
        "S216",
        SiteEffect::Complex,
        vec![0.7],
    );

    assert!(record.activity_change_sign().is_err());

    let mapper = NetworkMapper::new(regulators);
    let rels = mapper.map(&[record]).unwrap();
    assert_eq!(
        rels,
        vec![Relation::new("CDK1", "CDC25C", EdgeType::Phosphorylates)]
    );
}

#[test]
fn conflicting_measurements_cancel_out() {
    // Two records on the same pair implying opposite phospho edges both
    // vanish; an unrelated relation survives untouched
    let mut regulators = TableRegulatorSource::new();
    regulators.insert("CDK4", "RB1", Some("S780"));
    regulators.insert("CDK4", "RB1", Some("S807"));
    regulators.insert("MYC", "CCND1", None);

    let records = vec![
        phospho_record("RB1_pS780", "RB1", "S780", SiteEffect::Inhibiting, vec![0.8]),
        phospho_record("RB1_pS807", "RB1", "S807", SiteEffect::Inhibiting, vec![-0.8]),
        total_record("CCND1_total", "CCND1", vec![0.5]),
    ];

    let mapper = NetworkMapper::new(regulators);
    let mut relations = mapper.map(&records).unwrap();
    assert_eq!(relations.len(), 3);

    remove_conflicting(&mut relations);

    assert_eq!(
        relations,
        vec![Relation::new("MYC", "CCND1", EdgeType::UpregulatesExpression)]
    );
}

#[test]
fn multi_gene_antibody_maps_every_gene() {
    let mut regulators = TableRegulatorSource::new();
    regulators.insert("PDK1", "AKT1", Some("T308"));
    regulators.insert("PDK1", "AKT2", Some("T308"));

    let info = AntibodyInfo::new(
        "AKT_pT308",
        set(&["AKT1", "AKT2"]),
        set(&["T308"]),
        SiteEffect::Activating,
    );
    let record = MeasurementRecord::new(Arc::new(info), vec![0.6], Arc::new(MeanChange));

    let mapper = NetworkMapper::new(regulators);
    let rels = mapper.map(&[record]).unwrap();

    assert_eq!(
        rels,
        vec![
            Relation::new("PDK1", "AKT1", EdgeType::Phosphorylates),
            Relation::new("PDK1", "AKT2", EdgeType::Phosphorylates),
        ]
    );
}
