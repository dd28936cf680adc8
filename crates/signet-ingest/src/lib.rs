//! Signet Ingest
//!
//! Readers for the two flat input files of an analysis run and the assembly
//! of per-condition record sets:
//!
//! - the **antibody reference table**: one line per antibody describing its
//!   targeted genes, phosphosites, and annotated polarity
//! - the **measurement matrix**: replicate values per antibody per
//!   condition, with the condition (cell line, dose) encoded in the row id
//!
//! Input is assumed pre-validated: unparseable numbers or short rows abort
//! the whole load. The one tolerated inconsistency is a measured antibody id
//! missing from the reference table, which is logged and skipped so the rest
//! of the condition survives.

#![warn(missing_docs)]

mod antibody;
mod dataset;
mod error;
mod matrix;

pub use antibody::AntibodyTable;
pub use dataset::Dataset;
pub use error::IngestError;
pub use matrix::MeasurementMatrix;
