//! Significance filtering on change magnitude

use crate::error::MapperError;
use signet_domain::MeasurementRecord;
use tracing::debug;

/// Keep only records whose absolute change value reaches the threshold
///
/// This is the precondition the mapper's caller applies before mapping; the
/// threshold is configuration, never baked into the mapper. Fails if any
/// record is missing replicate values.
pub fn select_significant(
    records: Vec<MeasurementRecord>,
    threshold: f64,
) -> Result<Vec<MeasurementRecord>, MapperError> {
    let total = records.len();
    let mut selected = Vec::with_capacity(total);

    for record in records {
        if record.change_value()?.abs() >= threshold {
            selected.push(record);
        }
    }

    debug!(
        threshold,
        selected = selected.len(),
        total,
        "significance filter applied"
    );

    Ok(selected)
}
