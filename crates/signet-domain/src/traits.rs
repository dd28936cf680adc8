//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the inference core and the
//! services it consults. Concrete implementations live in other crates.

use std::collections::BTreeSet;

/// Lookup service for known phosphosite regulatory effects
///
/// Implemented by the knowledge-base layer (signet-resolve)
pub trait SiteEffectSource {
    /// Known effect of phosphorylating `site` on `gene`'s activity:
    /// `+1` activating, `-1` inhibiting, `None` when nothing is known
    fn lookup(&self, gene: &str, site: &str) -> Option<i32>;
}

/// Lookup service for upstream regulators of a gene or site
///
/// Implemented by the network layer (signet-mapper). Used to instantiate
/// concrete (regulator → target) edges from a single-gene measurement.
pub trait RegulatorSource {
    /// Genes known to regulate `gene`, restricted to regulators acting on
    /// `site` when one is given
    fn regulators_of(&self, gene: &str, site: Option<&str>) -> BTreeSet<String>;
}
