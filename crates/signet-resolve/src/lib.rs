//! Signet Site-Effect Resolver
//!
//! Answers one question for every phospho antibody: does phosphorylation of
//! the targeted site(s) activate or inhibit the protein?
//!
//! Two data sources feed the answer: a curated knowledge base of per-site
//! regulatory effects, and the polarity asserted in the raw antibody
//! annotation. The knowledge base wins when the two disagree; the
//! disagreement is recorded as a diagnostic, never an error.
//!
//! # Architecture
//!
//! ```text
//! genes × sites → knowledge base → verdict ─┐
//!                                           ├─ reconcile → SiteEffect (+ diagnostic)
//! antibody annotation → asserted polarity ──┘
//! ```

#![warn(missing_docs)]

mod error;
mod kb;
mod reconcile;
mod resolver;

pub use error::ResolveError;
pub use kb::TableEffectSource;
pub use reconcile::{reconcile, AssertedPolarity, PolarityMismatch};
pub use resolver::EffectResolver;
