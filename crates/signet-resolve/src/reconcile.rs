//! Reconciliation of knowledge-base verdicts with user-asserted polarities

use signet_domain::SiteEffect;

/// Polarity asserted in the raw antibody annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertedPolarity {
    /// Annotated as activity-increasing
    Activating,

    /// Annotated as activity-decreasing
    Inhibiting,
}

impl AssertedPolarity {
    /// The asserted polarity as a site effect
    pub fn effect(&self) -> SiteEffect {
        match self {
            AssertedPolarity::Activating => SiteEffect::Activating,
            AssertedPolarity::Inhibiting => SiteEffect::Inhibiting,
        }
    }
}

/// Diagnostic recorded when the user assertion loses to the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolarityMismatch {
    /// The knowledge-base verdict that won
    pub verdict: SiteEffect,

    /// The polarity the annotation asserted
    pub asserted: AssertedPolarity,
}

/// Resolve one final polarity from the knowledge-base verdict and the
/// user-asserted polarity
///
/// The override policy, in one place:
/// - A well-defined verdict (activating/inhibiting) stands; a disagreeing
///   assertion yields a [`PolarityMismatch`] diagnostic.
/// - A complex verdict (sites disagree) stands as complex rather than
///   guessing; an assertion is overridden and diagnosed.
/// - An unknown verdict defers to the assertion when one exists.
pub fn reconcile(
    verdict: SiteEffect,
    asserted: Option<AssertedPolarity>,
) -> (SiteEffect, Option<PolarityMismatch>) {
    match (verdict, asserted) {
        (SiteEffect::Activating | SiteEffect::Inhibiting, Some(user)) => {
            if user.effect() == verdict {
                (verdict, None)
            } else {
                (verdict, Some(PolarityMismatch { verdict, asserted: user }))
            }
        }
        (SiteEffect::Complex, Some(user)) => (
            SiteEffect::Complex,
            Some(PolarityMismatch {
                verdict: SiteEffect::Complex,
                asserted: user,
            }),
        ),
        (SiteEffect::Unknown, Some(user)) => (user.effect(), None),
        (verdict, None) => (verdict, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agreement_passes_through() {
        let (effect, diag) = reconcile(SiteEffect::Activating, Some(AssertedPolarity::Activating));
        assert_eq!(effect, SiteEffect::Activating);
        assert!(diag.is_none());
    }

    #[test]
    fn test_knowledge_base_overrides_disagreeing_assertion() {
        let (effect, diag) = reconcile(SiteEffect::Inhibiting, Some(AssertedPolarity::Activating));
        assert_eq!(effect, SiteEffect::Inhibiting);

        let diag = diag.expect("override must be diagnosed");
        assert_eq!(diag.verdict, SiteEffect::Inhibiting);
        assert_eq!(diag.asserted, AssertedPolarity::Activating);
    }

    #[test]
    fn test_complex_verdict_is_recorded_not_guessed() {
        let (effect, diag) = reconcile(SiteEffect::Complex, Some(AssertedPolarity::Inhibiting));
        assert_eq!(effect, SiteEffect::Complex);
        assert!(diag.is_some());

        let (effect, diag) = reconcile(SiteEffect::Complex, None);
        assert_eq!(effect, SiteEffect::Complex);
        assert!(diag.is_none());
    }

    #[test]
    fn test_unknown_verdict_defers_to_assertion() {
        let (effect, diag) = reconcile(SiteEffect::Unknown, Some(AssertedPolarity::Inhibiting));
        assert_eq!(effect, SiteEffect::Inhibiting);
        assert!(diag.is_none());

        let (effect, _) = reconcile(SiteEffect::Unknown, None);
        assert_eq!(effect, SiteEffect::Unknown);
    }
}
