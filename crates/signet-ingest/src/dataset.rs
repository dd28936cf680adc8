//! Assembly of per-condition record sets

use crate::antibody::AntibodyTable;
use crate::matrix::MeasurementMatrix;
use signet_domain::{ChangeDetector, ConditionKey, MeasurementRecord};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{info, warn};

/// One analysis run's worth of per-condition measurement records
///
/// Every measured antibody id is cloned from its canonical table entry with
/// the condition's accumulated replicates and the configured change
/// detector. Ids missing from the reference table are skipped and recorded.
#[derive(Debug)]
pub struct Dataset {
    conditions: BTreeMap<ConditionKey, Vec<MeasurementRecord>>,
    unknown_antibodies: BTreeSet<String>,
}

impl Dataset {
    /// Join the reference table with the measurement matrix
    pub fn assemble(
        table: &AntibodyTable,
        matrix: &MeasurementMatrix,
        detector: Arc<dyn ChangeDetector>,
    ) -> Self {
        let mut conditions: BTreeMap<ConditionKey, Vec<MeasurementRecord>> = BTreeMap::new();
        let mut unknown_antibodies = BTreeSet::new();

        for condition in matrix.conditions() {
            let mut records = Vec::new();

            for (antibody, values) in matrix.condition_entries(&condition) {
                let Some(info) = table.get(antibody) else {
                    if unknown_antibodies.insert(antibody.to_string()) {
                        warn!(antibody, "measured antibody missing from reference table");
                    }
                    continue;
                };

                records.push(MeasurementRecord::new(
                    info.clone(),
                    values.to_vec(),
                    detector.clone(),
                ));
            }

            conditions.insert(condition, records);
        }

        info!(
            conditions = conditions.len(),
            skipped = unknown_antibodies.len(),
            "assembled dataset"
        );

        Self {
            conditions,
            unknown_antibodies,
        }
    }

    /// All conditions, with their record sets, in key order
    pub fn conditions(&self) -> impl Iterator<Item = (&ConditionKey, &[MeasurementRecord])> {
        self.conditions
            .iter()
            .map(|(key, records)| (key, records.as_slice()))
    }

    /// The records for one condition, if it was measured
    pub fn records(&self, condition: &ConditionKey) -> Option<&[MeasurementRecord]> {
        self.conditions.get(condition).map(|r| r.as_slice())
    }

    /// Distinct cell lines, in order
    pub fn cell_lines(&self) -> BTreeSet<&str> {
        self.conditions
            .keys()
            .map(|key| key.cell_line.as_str())
            .collect()
    }

    /// Measured ids that had no reference entry and were skipped
    pub fn unknown_antibodies(&self) -> &BTreeSet<String> {
        &self.unknown_antibodies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::antibody::AntibodyTable;
    use signet_domain::MeanChange;
    use signet_resolve::{EffectResolver, TableEffectSource};

    fn dataset() -> Dataset {
        let mut kb = TableEffectSource::new();
        kb.insert("AKT1", "S473", 1);
        let resolver = EffectResolver::new(kb);

        let table = AntibodyTable::read(
            "AKT_pS473\tcst\tAKT1\ta\tS473\nCCND1\tcst\tCCND1\t\tT\n".as_bytes(),
            &resolver,
        )
        .unwrap();

        let matrix = MeasurementMatrix::read(
            "sample\trep\tAKT_pS473\tCCND1\tGHOST\n\
             JQ1_A2058_r1_0.1\t1\t0.5\t-0.2\t0.0\n\
             JQ1_A2058_r2_0.1\t2\t0.7\t-0.4\t0.0\n"
                .as_bytes(),
        )
        .unwrap();

        Dataset::assemble(&table, &matrix, Arc::new(MeanChange))
    }

    #[test]
    fn test_records_carry_replicates_and_detector() {
        let ds = dataset();
        let condition = ConditionKey::new("A2058", "0.1");
        let records = ds.records(&condition).unwrap();

        assert_eq!(records.len(), 2);
        let akt = records.iter().find(|r| r.id() == "AKT_pS473").unwrap();
        assert_eq!(akt.values(), &[0.5, 0.7]);
        assert!((akt.change_value().unwrap() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_antibody_skipped_not_fatal() {
        let ds = dataset();
        assert!(ds.unknown_antibodies().contains("GHOST"));

        let condition = ConditionKey::new("A2058", "0.1");
        assert!(ds
            .records(&condition)
            .unwrap()
            .iter()
            .all(|r| r.id() != "GHOST"));
    }

    #[test]
    fn test_cell_lines() {
        let ds = dataset();
        assert_eq!(ds.cell_lines().into_iter().collect::<Vec<_>>(), vec!["A2058"]);
    }
}
