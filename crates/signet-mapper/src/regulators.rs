//! Table-backed upstream-regulator source

use crate::error::MapperError;
use signet_domain::traits::RegulatorSource;
use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;

/// In-memory map of upstream regulators
///
/// Entries are `(regulator, target, optional site)`. A site-restricted query
/// matches entries annotated with that site plus entries carrying no site
/// annotation; a plain-gene query matches only unannotated entries
/// (expression regulators).
///
/// Loadable from a tab-separated table with one
/// `regulator<TAB>target[<TAB>site]` entry per line. Lines starting with `#`
/// are comments.
#[derive(Debug, Clone, Default)]
pub struct TableRegulatorSource {
    // target gene → [(regulator, optional site)]
    entries: BTreeMap<String, Vec<(String, Option<String>)>>,
}

impl TableRegulatorSource {
    /// Create an empty regulator source
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a regulator of a target gene, optionally restricted to a site
    pub fn insert(
        &mut self,
        regulator: impl Into<String>,
        target: impl Into<String>,
        site: Option<&str>,
    ) {
        self.entries
            .entry(target.into())
            .or_default()
            .push((regulator.into(), site.map(String::from)));
    }

    /// Load a regulator table from a tab-separated source
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MapperError> {
        let mut source = Self::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let cols: Vec<&str> = line.split('\t').collect();
            if cols.len() < 2 || cols[0].is_empty() || cols[1].is_empty() {
                return Err(MapperError::MalformedLine {
                    line: line_no,
                    reason: "expected regulator<TAB>target[<TAB>site]".to_string(),
                });
            }

            let site = cols.get(2).filter(|s| !s.is_empty() && **s != "-");
            source.insert(cols[0], cols[1], site.copied());
        }

        Ok(source)
    }
}

impl RegulatorSource for TableRegulatorSource {
    fn regulators_of(&self, gene: &str, site: Option<&str>) -> BTreeSet<String> {
        let Some(entries) = self.entries.get(gene) else {
            return BTreeSet::new();
        };

        entries
            .iter()
            .filter(|(_, entry_site)| match (site, entry_site) {
                (Some(queried), Some(annotated)) => queried == annotated,
                (Some(_), None) => true,
                (None, None) => true,
                (None, Some(_)) => false,
            })
            .map(|(regulator, _)| regulator.clone())
            .collect()
    }
}
