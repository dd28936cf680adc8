//! End-to-end analysis pipeline

use crate::config::Config;
use signet_domain::{MeanChange, MeasurementRecord, Relation};
use signet_export::{write_sif_path, DoseGroup, StyleSeries};
use signet_ingest::{AntibodyTable, Dataset, MeasurementMatrix};
use signet_mapper::{remove_conflicting, select_significant, NetworkMapper, TableRegulatorSource};
use signet_resolve::{EffectResolver, TableEffectSource};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Counts reported after a completed run
#[derive(Debug, Clone, Default)]
pub struct AnalysisSummary {
    /// Cell lines written
    pub cell_lines: usize,

    /// Conditions processed
    pub conditions: usize,

    /// Relations surviving conflict resolution, summed over conditions
    pub relations: usize,

    /// Measured antibody ids with no reference entry
    pub skipped_antibodies: usize,

    /// Annotation polarities overridden by the knowledge base
    pub polarity_overrides: usize,
}

impl AnalysisSummary {
    /// Human-readable run report
    pub fn report(&self) -> String {
        let mut lines = vec![
            format!("Analysis complete"),
            format!("================="),
            format!("Cell lines: {}", self.cell_lines),
            format!("Conditions: {}", self.conditions),
            format!("Relations:  {}", self.relations),
        ];

        if self.skipped_antibodies > 0 {
            lines.push(format!(
                "Skipped antibodies (no reference entry): {}",
                self.skipped_antibodies
            ));
        }
        if self.polarity_overrides > 0 {
            lines.push(format!(
                "Annotation polarities overridden: {}",
                self.polarity_overrides
            ));
        }

        lines.join("\n")
    }
}

// Per-dose outcome kept alive until both output files are written
struct DoseResult {
    dose: String,
    records: Vec<MeasurementRecord>,
    relations: Vec<Relation>,
}

/// Run one analysis over a data directory, writing one edge list and one
/// styling series per cell line into `out_dir`
pub fn run_analysis(dir: &Path, out_dir: &Path, config: &Config) -> anyhow::Result<AnalysisSummary> {
    let resolver = EffectResolver::new(load_effects(dir, config)?);
    let regulators = load_regulators(dir, config)?;

    let table = AntibodyTable::read_path(dir.join(&config.antibody_file), &resolver)?;
    let matrix = MeasurementMatrix::read_path(dir.join(&config.matrix_file))?;

    info!(
        antibodies = table.len(),
        series = matrix.len(),
        "inputs loaded"
    );

    let dataset = Dataset::assemble(&table, &matrix, Arc::new(MeanChange));
    let mapper = NetworkMapper::new(regulators);

    let mut per_cell: BTreeMap<String, Vec<DoseResult>> = BTreeMap::new();
    let mut summary = AnalysisSummary {
        skipped_antibodies: dataset.unknown_antibodies().len(),
        polarity_overrides: table.mismatches().len(),
        ..AnalysisSummary::default()
    };

    for (key, records) in dataset.conditions() {
        let significant = select_significant(records.to_vec(), config.threshold)?;
        let mut relations = mapper.map(&significant)?;
        remove_conflicting(&mut relations);

        info!(
            condition = %key,
            significant = significant.len(),
            relations = relations.len(),
            "condition processed"
        );

        summary.conditions += 1;
        summary.relations += relations.len();

        per_cell.entry(key.cell_line.clone()).or_default().push(DoseResult {
            dose: key.dose.clone(),
            records: significant,
            relations,
        });
    }

    std::fs::create_dir_all(out_dir)?;
    let style = StyleSeries::new(config.color_max);

    for (cell_line, doses) in &per_cell {
        write_sif_path(
            out_dir.join(format!("{}.sif", cell_line)),
            doses.iter().flat_map(|d| d.relations.iter()),
        )?;

        let groups: Vec<DoseGroup<'_>> = doses
            .iter()
            .map(|d| DoseGroup {
                dose: d.dose.clone(),
                relations: &d.relations,
                records: &d.records,
            })
            .collect();
        style.write_path(out_dir.join(format!("{}.formatseries", cell_line)), groups)?;

        summary.cell_lines += 1;
    }

    Ok(summary)
}

fn load_effects(dir: &Path, config: &Config) -> anyhow::Result<TableEffectSource> {
    let path = dir.join(&config.effects_file);
    if !path.is_file() {
        warn!(path = %path.display(), "no site-effect table; relying on annotations");
        return Ok(TableEffectSource::new());
    }
    let file = std::io::BufReader::new(std::fs::File::open(path)?);
    Ok(TableEffectSource::from_reader(file)?)
}

fn load_regulators(dir: &Path, config: &Config) -> anyhow::Result<TableRegulatorSource> {
    let path = dir.join(&config.regulators_file);
    if !path.is_file() {
        warn!(path = %path.display(), "no regulator table; no edges will be inferred");
        return Ok(TableRegulatorSource::new());
    }
    let file = std::io::BufReader::new(std::fs::File::open(path)?);
    Ok(TableRegulatorSource::from_reader(file)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    fn fixture(dir: &Path) {
        write(
            dir,
            "abdata.txt",
            "RB1_pS780\tcst\tRB1\ti\tS780\n\
             RB1_pS807\tcst\tRB1\ti\tS807\n\
             CCND1\tcst\tCCND1\t\tT\n\
             MYC\tcst\tMYC\t\tT\n",
        );
        write(
            dir,
            "site-effects.txt",
            "RB1\tS780\t-1\nRB1\tS807\t-1\n",
        );
        write(
            dir,
            "regulators.txt",
            "CDK4\tRB1\tS780\nCDK4\tRB1\tS807\nMYC\tCCND1\n",
        );
        // Two doses: at 0.1 the RB1 probes disagree in sign, at 1 they agree
        write(
            dir,
            "data-merged.txt",
            "sample\trep\tRB1_pS780\tRB1_pS807\tCCND1\tMYC\n\
             JQ1_A2058_r1_0.1\t1\t0.8\t-0.8\t0.5\t0.05\n\
             JQ1_A2058_r1_1\t1\t0.9\t0.7\t0.6\t0.05\n",
        );
    }

    #[test]
    fn test_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());

        let summary = run_analysis(dir.path(), dir.path(), &Config::default()).unwrap();

        assert_eq!(summary.cell_lines, 1);
        assert_eq!(summary.conditions, 2);

        // Dose 0.1: the two RB1 edges conflict and cancel, CCND1 survives.
        // Dose 1: both RB1 probes agree, each contributing a CDK4 edge,
        // plus CCND1. MYC never passes the threshold.
        assert_eq!(summary.relations, 1 + 3);

        let sif = std::fs::read_to_string(dir.path().join("A2058.sif")).unwrap();
        let mut lines: Vec<&str> = sif.lines().collect();
        lines.sort();
        assert_eq!(
            lines,
            vec!["CDK4\tphosphorylates\tRB1", "MYC\tupregulates-expression\tCCND1"]
        );

        let series = std::fs::read_to_string(dir.path().join("A2058.formatseries")).unwrap();
        let doses: Vec<&str> = series
            .lines()
            .filter(|l| l.starts_with("group-name"))
            .map(|l| l.split('\t').nth(1).unwrap())
            .collect();
        assert_eq!(doses, vec!["0.1", "1"]);
    }

    #[test]
    fn test_malformed_matrix_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        write(
            dir.path(),
            "data-merged.txt",
            "sample\trep\tCCND1\nJQ1_A2058_r1_0.1\t1\tnot-a-number\n",
        );

        assert!(run_analysis(dir.path(), dir.path(), &Config::default()).is_err());
    }

    #[test]
    fn test_missing_optional_tables_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path());
        std::fs::remove_file(dir.path().join("site-effects.txt")).unwrap();
        std::fs::remove_file(dir.path().join("regulators.txt")).unwrap();

        let summary = run_analysis(dir.path(), dir.path(), &Config::default()).unwrap();
        assert_eq!(summary.relations, 0);
    }
}
