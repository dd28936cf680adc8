//! Measurement records - canonical antibody descriptions and their
//! per-condition clones

use crate::change::{sign_of, ChangeDetector, ChangeError};
use crate::effect::SiteEffect;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Canonical, immutable description of one antibody probe
///
/// Built once from the static antibody reference table and shared (behind an
/// `Arc`) by every condition that measured the antibody. Condition-specific
/// state (replicate values, change detector) lives on [`MeasurementRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntibodyInfo {
    /// Antibody identifier, unique within one condition
    pub id: String,

    /// Gene symbols targeted by this antibody (never empty)
    pub genes: BTreeSet<String>,

    /// Modification sites targeted, empty for total-protein antibodies
    pub sites: BTreeSet<String>,

    /// Regulatory polarity of the targeted site(s)
    ///
    /// Irrelevant for total-protein antibodies; resolved against the
    /// knowledge base at load time for phospho antibodies.
    pub effect: SiteEffect,
}

impl AntibodyInfo {
    /// Create a new canonical antibody description
    ///
    /// Panics if `genes` is empty; callers parsing external data must
    /// validate the gene list before constructing.
    pub fn new(
        id: impl Into<String>,
        genes: BTreeSet<String>,
        sites: BTreeSet<String>,
        effect: SiteEffect,
    ) -> Self {
        assert!(!genes.is_empty(), "antibody must target at least one gene");

        Self {
            id: id.into(),
            genes,
            sites,
            effect,
        }
    }

    /// Whether this antibody targets a phosphosite rather than total protein
    pub fn is_phospho(&self) -> bool {
        !self.sites.is_empty()
    }
}

/// One antibody's measurements for one condition (cell line × dose)
///
/// A clone of the canonical [`AntibodyInfo`] carrying the condition's
/// replicate values and the injected change-detection strategy. Both are
/// fixed at construction, so a record is immutable and safe to share across
/// concurrently processed conditions.
#[derive(Clone)]
pub struct MeasurementRecord {
    info: Arc<AntibodyInfo>,
    values: Vec<f64>,
    detector: Arc<dyn ChangeDetector>,
}

impl MeasurementRecord {
    /// Clone a canonical antibody into a condition with replicate values and
    /// a change detector
    pub fn new(info: Arc<AntibodyInfo>, values: Vec<f64>, detector: Arc<dyn ChangeDetector>) -> Self {
        Self {
            info,
            values,
            detector,
        }
    }

    /// The canonical antibody description
    pub fn info(&self) -> &AntibodyInfo {
        &self.info
    }

    /// Antibody identifier
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// Gene symbols targeted by the antibody
    pub fn genes(&self) -> &BTreeSet<String> {
        &self.info.genes
    }

    /// Modification sites targeted, empty for total-protein antibodies
    pub fn sites(&self) -> &BTreeSet<String> {
        &self.info.sites
    }

    /// Regulatory polarity of the targeted site(s)
    pub fn effect(&self) -> SiteEffect {
        self.info.effect
    }

    /// Whether this record measures a phosphosite
    pub fn is_phospho(&self) -> bool {
        self.info.is_phospho()
    }

    /// Replicate values for this condition
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Signed change magnitude per the injected detector
    pub fn change_value(&self) -> Result<f64, ChangeError> {
        self.detector.change_value(self)
    }

    /// Sign of the change value: `-1`, `0`, or `+1`
    pub fn change_sign(&self) -> Result<i32, ChangeError> {
        Ok(sign_of(self.change_value()?))
    }

    /// Sign of the *activity* change implied by the phosphorylation change
    ///
    /// The measured sign negated for inhibiting sites, unchanged for
    /// activating sites. Undefined for complex or unknown effects; callers
    /// must check [`SiteEffect::is_resolved`] before relying on this.
    pub fn activity_change_sign(&self) -> Result<i32, ChangeError> {
        let sign = self.change_sign()?;
        match self.effect().sign() {
            Some(polarity) => Ok(polarity * sign),
            None => Err(ChangeError::UnresolvedEffect {
                antibody: self.id().to_string(),
                effect: self.effect(),
            }),
        }
    }
}

impl std::fmt::Debug for MeasurementRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasurementRecord")
            .field("info", &self.info)
            .field("values", &self.values)
            .finish()
    }
}
