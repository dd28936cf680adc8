//! Verdict aggregation over a probe's gene × site grid

use crate::reconcile::{reconcile, AssertedPolarity, PolarityMismatch};
use signet_domain::traits::SiteEffectSource;
use signet_domain::SiteEffect;
use tracing::warn;

/// Resolves final site effects for antibody probes against a knowledge base
pub struct EffectResolver<K: SiteEffectSource> {
    kb: K,
}

impl<K: SiteEffectSource> EffectResolver<K> {
    /// Create a resolver over the given knowledge base
    pub fn new(kb: K) -> Self {
        Self { kb }
    }

    /// The underlying knowledge base
    pub fn knowledge_base(&self) -> &K {
        &self.kb
    }

    /// Aggregate the knowledge base over every (gene, site) pair of a probe
    ///
    /// Only activating sites present yields activating; only inhibiting
    /// yields inhibiting; both present yields complex; no data yields
    /// unknown.
    pub fn verdict<'a, G, S>(&self, genes: G, sites: S) -> SiteEffect
    where
        G: IntoIterator<Item = &'a str>,
        S: IntoIterator<Item = &'a str> + Clone,
    {
        let mut active = false;
        let mut inactive = false;

        for gene in genes {
            for site in sites.clone() {
                match self.kb.lookup(gene, site) {
                    Some(e) if e > 0 => active = true,
                    Some(e) if e < 0 => inactive = true,
                    _ => {}
                }
            }
        }

        match (active, inactive) {
            (true, false) => SiteEffect::Activating,
            (false, true) => SiteEffect::Inhibiting,
            (true, true) => SiteEffect::Complex,
            (false, false) => SiteEffect::Unknown,
        }
    }

    /// Resolve a probe's final polarity from the knowledge base and the
    /// user-asserted annotation
    ///
    /// Returns the effect to store on the canonical record plus the
    /// diagnostic when the assertion was overridden. The diagnostic is also
    /// logged; it is never an error.
    pub fn resolve<'a, G, S>(
        &self,
        probe_id: &str,
        genes: G,
        sites: S,
        asserted: Option<AssertedPolarity>,
    ) -> (SiteEffect, Option<PolarityMismatch>)
    where
        G: IntoIterator<Item = &'a str>,
        S: IntoIterator<Item = &'a str> + Clone,
    {
        let verdict = self.verdict(genes, sites);
        let (effect, mismatch) = reconcile(verdict, asserted);

        if let Some(m) = &mismatch {
            warn!(
                probe = probe_id,
                verdict = m.verdict.as_str(),
                asserted = ?m.asserted,
                "annotation polarity overridden by knowledge base"
            );
        }

        (effect, mismatch)
    }
}
