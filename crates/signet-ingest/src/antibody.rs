//! Antibody reference table reader

use crate::error::IngestError;
use signet_domain::traits::SiteEffectSource;
use signet_domain::{AntibodyInfo, SiteEffect};
use signet_resolve::{AssertedPolarity, EffectResolver, PolarityMismatch};
use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

/// The canonical antibody descriptions for one analysis, keyed by id
///
/// Built once from the static reference table; every condition clones from
/// it. Site effects are resolved against the knowledge base at load time,
/// and assertion-vs-knowledge-base mismatches are kept for inspection.
///
/// Expected layout, tab-separated, one antibody per line:
/// `id<TAB>source<TAB>genes<TAB>polarity<TAB>sites` with genes joined by
/// `|`, polarity `a`/`i` (anything else means unasserted), and sites joined
/// by `_` or the literal `T` for total-protein antibodies.
#[derive(Debug)]
pub struct AntibodyTable {
    antibodies: BTreeMap<String, Arc<AntibodyInfo>>,
    mismatches: Vec<(String, PolarityMismatch)>,
}

impl AntibodyTable {
    /// Read a reference table, resolving each phospho antibody's polarity
    pub fn read<R, K>(reader: R, resolver: &EffectResolver<K>) -> Result<Self, IngestError>
    where
        R: BufRead,
        K: SiteEffectSource,
    {
        let mut antibodies = BTreeMap::new();
        let mut mismatches = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let cols: Vec<&str> = line.split('\t').collect();
            if cols.len() < 5 {
                return Err(IngestError::MalformedRow {
                    line: line_no,
                    reason: format!("expected 5 columns, found {}", cols.len()),
                });
            }

            let id = cols[0];
            let genes: BTreeSet<String> = cols[2]
                .split('|')
                .filter(|g| !g.is_empty())
                .map(String::from)
                .collect();
            if genes.is_empty() {
                return Err(IngestError::MalformedRow {
                    line: line_no,
                    reason: "no target genes".to_string(),
                });
            }

            let asserted = match cols[3] {
                "a" => Some(AssertedPolarity::Activating),
                "i" => Some(AssertedPolarity::Inhibiting),
                _ => None,
            };

            // "T" marks a total-protein antibody; anything else is a
            // _-joined site list
            let (sites, effect) = if cols[4] == "T" {
                (BTreeSet::new(), SiteEffect::Unknown)
            } else {
                let sites: BTreeSet<String> = cols[4]
                    .split('_')
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                if sites.is_empty() {
                    return Err(IngestError::MalformedRow {
                        line: line_no,
                        reason: "no sites on phospho antibody".to_string(),
                    });
                }

                let (effect, mismatch) = resolver.resolve(
                    id,
                    genes.iter().map(|g| g.as_str()),
                    sites.iter().map(|s| s.as_str()),
                    asserted,
                );
                if let Some(m) = mismatch {
                    mismatches.push((id.to_string(), m));
                }

                (sites, effect)
            };

            let info = AntibodyInfo::new(id, genes, sites, effect);
            antibodies.insert(id.to_string(), Arc::new(info));
        }

        Ok(Self {
            antibodies,
            mismatches,
        })
    }

    /// Read a reference table from a file path
    pub fn read_path<K: SiteEffectSource>(
        path: impl AsRef<Path>,
        resolver: &EffectResolver<K>,
    ) -> Result<Self, IngestError> {
        let file = std::fs::File::open(path)?;
        Self::read(std::io::BufReader::new(file), resolver)
    }

    /// Look up a canonical antibody by id
    pub fn get(&self, id: &str) -> Option<&Arc<AntibodyInfo>> {
        self.antibodies.get(id)
    }

    /// Number of antibodies in the table
    pub fn len(&self) -> usize {
        self.antibodies.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.antibodies.is_empty()
    }

    /// Iterate over all canonical antibodies
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<AntibodyInfo>)> {
        self.antibodies.iter().map(|(id, info)| (id.as_str(), info))
    }

    /// Polarity mismatches recorded while resolving, as (antibody id,
    /// diagnostic) pairs
    pub fn mismatches(&self) -> &[(String, PolarityMismatch)] {
        &self.mismatches
    }
}
