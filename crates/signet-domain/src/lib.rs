//! Signet Domain Layer
//!
//! This crate contains the core data model for Signet. It has ZERO external
//! dependencies and defines the fundamental concepts, value objects, and
//! trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **AntibodyInfo**: the canonical, immutable description of one antibody
//!   probe (targeted genes, phosphosites, regulatory polarity)
//! - **MeasurementRecord**: a per-condition clone of an antibody carrying
//!   replicate values and a change-detection strategy
//! - **SiteEffect**: the regulatory polarity of a phosphosite on protein
//!   activity
//! - **Relation**: a directed, typed, signed edge between two genes
//! - **ConditionKey**: flat composite key identifying one cell line × dose
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and business rules only
//! - Infrastructure (file parsing, knowledge bases, export) lives in other
//!   crates behind the traits defined here

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod change;
pub mod condition;
pub mod effect;
pub mod record;
pub mod relation;
pub mod traits;

// Re-exports for convenience
pub use change::{ChangeDetector, ChangeError, MeanChange};
pub use condition::ConditionKey;
pub use effect::SiteEffect;
pub use record::{AntibodyInfo, MeasurementRecord};
pub use relation::{EdgeType, Relation};
