//! Record-to-relation mapping

use crate::error::MapperError;
use signet_domain::traits::RegulatorSource;
use signet_domain::{EdgeType, MeasurementRecord, Relation};
use std::collections::BTreeSet;
use tracing::debug;

/// Maps a condition's significant records to the relations they imply
///
/// Each record contributes one relation per known upstream regulator of its
/// gene(s). The caller is responsible for filtering non-significant records
/// first ([`crate::select_significant`]); every record handed to the mapper
/// produces edges.
pub struct NetworkMapper<R: RegulatorSource> {
    regulators: R,
}

impl<R: RegulatorSource> NetworkMapper<R> {
    /// Create a mapper over the given regulator source
    pub fn new(regulators: R) -> Self {
        Self { regulators }
    }

    /// The underlying regulator source
    pub fn regulator_source(&self) -> &R {
        &self.regulators
    }

    /// Produce the relations implied by one condition's records
    ///
    /// Total-protein records imply expression edges signed by the measured
    /// change; phospho records imply (de)phosphorylation edges signed by the
    /// measured phosphorylation level. Phospho records with a complex or
    /// unknown site effect still yield their measured edge; only
    /// activity-based reasoning is off-limits for them.
    pub fn map(&self, records: &[MeasurementRecord]) -> Result<Vec<Relation>, MapperError> {
        let mut relations = Vec::new();

        for record in records {
            let sign = record.change_sign()?;

            if record.is_phospho() {
                self.map_phospho(record, sign, &mut relations);
            } else {
                self.map_total(record, sign, &mut relations);
            }
        }

        debug!(
            records = records.len(),
            relations = relations.len(),
            "mapped condition records"
        );

        Ok(relations)
    }

    /// Total protein abundance: expression regulation from each upstream
    /// regulator of the gene
    fn map_total(&self, record: &MeasurementRecord, sign: i32, out: &mut Vec<Relation>) {
        let edge_type = if sign > 0 {
            EdgeType::UpregulatesExpression
        } else {
            EdgeType::DownregulatesExpression
        };

        for gene in record.genes() {
            for regulator in self.regulators.regulators_of(gene, None) {
                out.push(Relation::new(regulator, gene.clone(), edge_type));
            }
        }
    }

    /// Phosphosite level: a (de)phosphorylation edge from each regulator
    /// known to act on the measured site(s)
    ///
    /// The measured phosphorylation sign picks the edge type; the activity
    /// sign (when the effect is resolved) is a styling concern, not a
    /// mapping one.
    fn map_phospho(&self, record: &MeasurementRecord, sign: i32, out: &mut Vec<Relation>) {
        let edge_type = if sign > 0 {
            EdgeType::Phosphorylates
        } else {
            EdgeType::Dephosphorylates
        };

        for gene in record.genes() {
            let mut regulators = BTreeSet::new();
            for site in record.sites() {
                regulators.extend(self.regulators.regulators_of(gene, Some(site)));
            }

            for regulator in regulators {
                out.push(Relation::new(regulator, gene.clone(), edge_type));
            }
        }
    }
}
