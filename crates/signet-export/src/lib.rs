//! Signet Export
//!
//! Renders the pipeline's output for an external graph viewer:
//!
//! - one **edge-list (SIF) file** per cell line, the union of every dose's
//!   post-resolution relations, deduplicated
//! - one **styling series** per cell line describing node and edge colors,
//!   border widths, and tooltips per dose, with doses ordered by ascending
//!   numeric value
//!
//! The styling is a declarative description; nothing here draws. Colors are
//! a continuous interpolation from white toward a polarity-specific extreme,
//! saturating at a configured maximum magnitude.

#![warn(missing_docs)]

mod color;
mod error;
mod sif;
mod style;

pub use color::{Rgb, COOL, EDGE_NEGATIVE, EDGE_POSITIVE, WARM};
pub use error::ExportError;
pub use sif::{write_sif, write_sif_path};
pub use style::{DoseGroup, StyleSeries};
