//! Change detection - reducing replicate values to one signed scalar

use crate::effect::SiteEffect;
use crate::record::MeasurementRecord;
use std::fmt;

/// Errors raised by change-value queries on a measurement record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeError {
    /// The record has no replicate values attached
    NoReplicates {
        /// Antibody id of the offending record
        antibody: String,
    },

    /// Activity sign requested for a complex or unknown site effect
    UnresolvedEffect {
        /// Antibody id of the offending record
        antibody: String,
        /// The effect that blocked the computation
        effect: SiteEffect,
    },
}

impl fmt::Display for ChangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeError::NoReplicates { antibody } => {
                write!(f, "no replicate values for antibody '{}'", antibody)
            }
            ChangeError::UnresolvedEffect { antibody, effect } => write!(
                f,
                "activity sign undefined for antibody '{}' with {} site effect",
                antibody,
                effect.as_str()
            ),
        }
    }
}

impl std::error::Error for ChangeError {}

/// Strategy for reducing a record's replicate values to one signed scalar
///
/// The strategy is injected into each per-condition record clone rather than
/// hard-coded, so alternative reductions (median, trimmed mean) plug in
/// without touching the record type.
pub trait ChangeDetector: Send + Sync {
    /// The signed change magnitude for the record's condition
    ///
    /// Fails with [`ChangeError::NoReplicates`] when the record carries no
    /// replicate values.
    fn change_value(&self, record: &MeasurementRecord) -> Result<f64, ChangeError>;
}

/// Default change detector: arithmetic mean of the replicate values
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanChange;

impl ChangeDetector for MeanChange {
    fn change_value(&self, record: &MeasurementRecord) -> Result<f64, ChangeError> {
        let values = record.values();
        if values.is_empty() {
            return Err(ChangeError::NoReplicates {
                antibody: record.id().to_string(),
            });
        }
        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sign of a change value as `-1`, `0`, or `+1`
///
/// `f64::signum` maps `0.0` to `1.0`, so the zero case is handled explicitly.
pub fn sign_of(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
