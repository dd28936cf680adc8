//! Site effect module - regulatory polarity of a phosphosite

/// Regulatory polarity of a phosphosite on the activity of its protein
///
/// Phosphorylation of a site can switch the protein on, switch it off, or
/// have no single known consequence:
/// - Activating: phosphorylation increases protein activity
/// - Inhibiting: phosphorylation decreases protein activity
/// - Complex: known sites on this probe disagree with each other
/// - Unknown: no information available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteEffect {
    /// Phosphorylation activates the protein
    Activating,

    /// Phosphorylation inhibits the protein
    Inhibiting,

    /// Multiple sites with disagreeing polarities
    Complex,

    /// No polarity information
    Unknown,
}

impl SiteEffect {
    /// Get the effect name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteEffect::Activating => "activating",
            SiteEffect::Inhibiting => "inhibiting",
            SiteEffect::Complex => "complex",
            SiteEffect::Unknown => "unknown",
        }
    }

    /// Parse an effect from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "activating" => Some(SiteEffect::Activating),
            "inhibiting" => Some(SiteEffect::Inhibiting),
            "complex" => Some(SiteEffect::Complex),
            "unknown" => Some(SiteEffect::Unknown),
            _ => None,
        }
    }

    /// Whether the polarity is well-defined (activating or inhibiting)
    ///
    /// Activity-based reasoning is only valid for resolved effects; callers
    /// must branch on this before asking for an activity change sign.
    pub fn is_resolved(&self) -> bool {
        matches!(self, SiteEffect::Activating | SiteEffect::Inhibiting)
    }

    /// The polarity as a sign: `+1` activating, `-1` inhibiting
    ///
    /// Returns `None` for complex or unknown effects.
    pub fn sign(&self) -> Option<i32> {
        match self {
            SiteEffect::Activating => Some(1),
            SiteEffect::Inhibiting => Some(-1),
            SiteEffect::Complex | SiteEffect::Unknown => None,
        }
    }
}

impl std::str::FromStr for SiteEffect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid site effect: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_effects() {
        assert!(SiteEffect::Activating.is_resolved());
        assert!(SiteEffect::Inhibiting.is_resolved());
        assert!(!SiteEffect::Complex.is_resolved());
        assert!(!SiteEffect::Unknown.is_resolved());
    }

    #[test]
    fn test_effect_signs() {
        assert_eq!(SiteEffect::Activating.sign(), Some(1));
        assert_eq!(SiteEffect::Inhibiting.sign(), Some(-1));
        assert_eq!(SiteEffect::Complex.sign(), None);
        assert_eq!(SiteEffect::Unknown.sign(), None);
    }

    #[test]
    fn test_round_trip() {
        for effect in [
            SiteEffect::Activating,
            SiteEffect::Inhibiting,
            SiteEffect::Complex,
            SiteEffect::Unknown,
        ] {
            assert_eq!(SiteEffect::parse(effect.as_str()), Some(effect));
        }
        assert_eq!(SiteEffect::parse("garbage"), None);
    }
}
