//! Per-dose styling series output

use crate::color::{COOL, EDGE_NEGATIVE, EDGE_POSITIVE, WARM};
use crate::error::ExportError;
use signet_domain::{MeasurementRecord, Relation};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// One dose's contribution to a cell line's styling series
#[derive(Debug)]
pub struct DoseGroup<'a> {
    /// Dose label as written in the input
    pub dose: String,

    /// Final relations for the dose, after conflict resolution
    pub relations: &'a [Relation],

    /// The significant records that produced them
    pub records: &'a [MeasurementRecord],
}

/// Writer for a cell line's per-dose styling description
///
/// Emits one group per dose, ordered by ascending numeric dose value, with
/// neutral defaults followed by edge colors per relation and node styling
/// per contributing record. Node color encodes the change magnitude via
/// interpolation toward a polarity extreme, saturating at `color_max`.
#[derive(Debug, Clone)]
pub struct StyleSeries {
    color_max: f64,
}

impl StyleSeries {
    /// Create a series writer saturating colors at the given magnitude
    pub fn new(color_max: f64) -> Self {
        Self { color_max }
    }

    /// Write the styling series for one cell line
    pub fn write<W: Write>(
        &self,
        writer: &mut W,
        mut groups: Vec<DoseGroup<'_>>,
    ) -> Result<(), ExportError> {
        // Ascending numeric dose; unparseable doses sort last, by label
        groups.sort_by(|a, b| match (parse_dose(&a.dose), parse_dose(&b.dose)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.dose.cmp(&b.dose),
        });

        for group in &groups {
            self.write_group(writer, group)?;
        }

        Ok(())
    }

    /// Write the styling series to a file path
    pub fn write_path(
        &self,
        path: impl AsRef<Path>,
        groups: Vec<DoseGroup<'_>>,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        let doses = groups.len();

        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        self.write(&mut file, groups)?;

        info!(path = %path.display(), doses, "wrote styling series");
        Ok(())
    }

    fn write_group<W: Write>(&self, w: &mut W, group: &DoseGroup<'_>) -> Result<(), ExportError> {
        writeln!(w, "group-name\t{}", group.dose)?;

        // Neutral defaults; specific nodes and edges override below
        writeln!(w, "node\tall-nodes\tcolor\t255 255 255")?;
        writeln!(w, "node\tall-nodes\tbordercolor\t200 200 200")?;
        writeln!(w, "node\tall-nodes\tborderwidth\t1")?;
        writeln!(w, "node\tall-nodes\ttextcolor\t200 200 200")?;
        writeln!(w, "edge\tall-edges\tcolor\t200 200 200")?;

        for rel in group.relations {
            let color = if rel.edge_type.is_positive() {
                EDGE_POSITIVE
            } else {
                EDGE_NEGATIVE
            };
            writeln!(
                w,
                "edge\t{} {} {}\tcolor\t{}",
                rel.source,
                rel.edge_type.sif_tag(),
                rel.target,
                color
            )?;
        }

        for record in group.records {
            self.write_record_nodes(w, record)?;
        }

        // One tooltip per gene listing the antibodies measured on it
        let mut gene_probes: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for record in group.records {
            for gene in record.genes() {
                gene_probes.entry(gene).or_default().insert(record.id());
            }
        }
        for (gene, probes) in gene_probes {
            let merged = probes.into_iter().collect::<Vec<_>>().join("\\n");
            writeln!(w, "node\t{}\ttooltip\t{}", gene, merged)?;
        }

        Ok(())
    }

    /// Node styling for one record: measured genes get black text, a
    /// magnitude-faded color, and (for resolved phospho effects) a thick
    /// border
    fn write_record_nodes<W: Write>(
        &self,
        w: &mut W,
        record: &MeasurementRecord,
    ) -> Result<(), ExportError> {
        let value = record.change_value()?;

        for gene in record.genes() {
            writeln!(w, "node\t{}\ttextcolor\t0 0 0", gene)?;

            if record.is_phospho() {
                // Resolved effects color by activity sign; unresolved ones
                // fall back to the measured sign and keep the thin border
                let resolved = record.effect().is_resolved();
                let sign = if resolved {
                    record.activity_change_sign()?
                } else {
                    record.change_sign()?
                };

                let extreme = if sign > 0 { WARM } else { COOL };
                writeln!(
                    w,
                    "node\t{}\tbordercolor\t{}",
                    gene,
                    extreme.fade(value, self.color_max)
                )?;

                if resolved {
                    writeln!(w, "node\t{}\tborderwidth\t2", gene)?;
                }
            } else {
                let extreme = if record.change_sign()? > 0 { WARM } else { COOL };
                writeln!(
                    w,
                    "node\t{}\tcolor\t{}",
                    gene,
                    extreme.fade(value, self.color_max)
                )?;
            }
        }

        Ok(())
    }
}

fn parse_dose(dose: &str) -> Option<f64> {
    dose.parse().ok()
}
