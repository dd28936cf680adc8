//! Condition keys - flat composite identifiers for cell line × dose

use std::fmt;

/// Identifies one experimental condition: a cell line treated at a dose
///
/// Used as a flat map key in place of nested per-cell-line, per-dose maps.
/// The dose is kept as the raw string from the input so that it can label
/// output groups verbatim; [`ConditionKey::dose_value`] parses it when
/// numeric ordering is needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConditionKey {
    /// Cell line name
    pub cell_line: String,

    /// Treatment dose as written in the input
    pub dose: String,
}

impl ConditionKey {
    /// Create a new condition key
    pub fn new(cell_line: impl Into<String>, dose: impl Into<String>) -> Self {
        Self {
            cell_line: cell_line.into(),
            dose: dose.into(),
        }
    }

    /// The dose as a number, for ascending-dose ordering
    pub fn dose_value(&self) -> Option<f64> {
        self.dose.parse().ok()
    }
}

impl fmt::Display for ConditionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.cell_line, self.dose)
    }
}
