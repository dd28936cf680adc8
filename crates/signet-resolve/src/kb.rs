//! Table-backed site-effect knowledge base

use crate::error::ResolveError;
use signet_domain::traits::SiteEffectSource;
use std::collections::BTreeMap;
use std::io::BufRead;

/// In-memory knowledge base of per-site regulatory effects
///
/// Keyed by the flat `(gene, site)` pair. Loadable from a tab-separated
/// table with one `gene<TAB>site<TAB>effect` entry per line, where effect is
/// `1`/`+1` for activating and `-1` for inhibiting. Lines starting with `#`
/// are comments.
#[derive(Debug, Clone, Default)]
pub struct TableEffectSource {
    effects: BTreeMap<(String, String), i32>,
}

impl TableEffectSource {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one site effect
    pub fn insert(&mut self, gene: impl Into<String>, site: impl Into<String>, effect: i32) {
        self.effects.insert((gene.into(), site.into()), effect);
    }

    /// Number of known site effects
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether the knowledge base is empty
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Load a knowledge base from a tab-separated table
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ResolveError> {
        let mut kb = Self::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let cols: Vec<&str> = line.split('\t').collect();
            if cols.len() < 3 {
                return Err(ResolveError::MalformedLine {
                    line: line_no,
                    reason: format!("expected 3 columns, found {}", cols.len()),
                });
            }

            let effect = match cols[2] {
                "1" | "+1" => 1,
                "-1" => -1,
                other => {
                    return Err(ResolveError::MalformedLine {
                        line: line_no,
                        reason: format!("effect must be +1 or -1, found '{}'", other),
                    })
                }
            };

            kb.insert(cols[0], cols[1], effect);
        }

        Ok(kb)
    }
}

impl SiteEffectSource for TableEffectSource {
    fn lookup(&self, gene: &str, site: &str) -> Option<i32> {
        self.effects.get(&(gene.to_string(), site.to_string())).copied()
    }
}
