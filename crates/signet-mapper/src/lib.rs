//! Signet Network Mapper
//!
//! Turns a condition's significant measurement records into a set of
//! directed, typed, signed relations between genes, then removes the
//! relations that contradict each other.
//!
//! # Pipeline position
//!
//! ```text
//! MeasurementRecords → significance filter → map → remove_conflicting → Relations
//! ```
//!
//! The magnitude threshold is applied by the caller via
//! [`select_significant`]; the mapper itself never thresholds. Conflict
//! resolution drops *both* members of every contradicting pair: a missing
//! edge is preferred to a wrong-signed one.

#![warn(missing_docs)]

mod conflict;
mod error;
mod filter;
mod mapper;
mod regulators;

#[cfg(test)]
mod tests;

pub use conflict::remove_conflicting;
pub use error::MapperError;
pub use filter::select_significant;
pub use mapper::NetworkMapper;
pub use regulators::TableRegulatorSource;
