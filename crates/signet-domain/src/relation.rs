//! Relation module - directed, typed, signed edges between genes

use std::fmt;

/// Causal type tag of a relation
///
/// Phosphorylation types are derived from phosphosite antibodies, the
/// expression types from total-protein antibodies. Each type belongs to one
/// of two classes: activating (phosphorylates, upregulates) or inhibiting
/// (dephosphorylates, downregulates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeType {
    /// Source phosphorylates the target site
    Phosphorylates,

    /// Source dephosphorylates the target site
    Dephosphorylates,

    /// Source increases the target's expression
    UpregulatesExpression,

    /// Source decreases the target's expression
    DownregulatesExpression,
}

impl EdgeType {
    /// SIF interaction tag for this edge type
    pub fn sif_tag(&self) -> &'static str {
        match self {
            EdgeType::Phosphorylates => "phosphorylates",
            EdgeType::Dephosphorylates => "dephosphorylates",
            EdgeType::UpregulatesExpression => "upregulates-expression",
            EdgeType::DownregulatesExpression => "downregulates-expression",
        }
    }

    /// Whether this type belongs to the activating class
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            EdgeType::Phosphorylates | EdgeType::UpregulatesExpression
        )
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sif_tag())
    }
}

/// A directed, typed, signed edge between two genes
///
/// Derived from one measurement record within one condition. Relations carry
/// no numeric magnitude; magnitude is re-derived from the originating record
/// when styling needs it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Relation {
    /// Source gene symbol
    pub source: String,

    /// Target gene symbol
    pub target: String,

    /// Causal type of the edge
    pub edge_type: EdgeType,
}

impl Relation {
    /// Create a new relation
    pub fn new(source: impl Into<String>, target: impl Into<String>, edge_type: EdgeType) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edge_type,
        }
    }

    /// Render as a SIF edge line: `source<TAB>tag<TAB>target`
    pub fn sif_line(&self) -> String {
        format!("{}\t{}\t{}", self.source, self.edge_type.sif_tag(), self.target)
    }

    /// Whether two relations contradict each other
    ///
    /// A conflict is the same two nodes connected in the same direction with
    /// one activating-class and one inhibiting-class type.
    pub fn conflicts_with(&self, other: &Relation) -> bool {
        self.source == other.source
            && self.target == other.target
            && self.edge_type.is_positive() != other.edge_type.is_positive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sif_line() {
        let rel = Relation::new("SRC", "RB1", EdgeType::Phosphorylates);
        assert_eq!(rel.sif_line(), "SRC\tphosphorylates\tRB1");
    }

    #[test]
    fn test_edge_classes() {
        assert!(EdgeType::Phosphorylates.is_positive());
        assert!(EdgeType::UpregulatesExpression.is_positive());
        assert!(!EdgeType::Dephosphorylates.is_positive());
        assert!(!EdgeType::DownregulatesExpression.is_positive());
    }

    #[test]
    fn test_conflict_requires_same_direction_and_opposite_class() {
        let phos = Relation::new("A", "B", EdgeType::Phosphorylates);
        let dephos = Relation::new("A", "B", EdgeType::Dephosphorylates);
        let up = Relation::new("A", "B", EdgeType::UpregulatesExpression);
        let other_pair = Relation::new("A", "C", EdgeType::Dephosphorylates);

        assert!(phos.conflicts_with(&dephos));
        assert!(dephos.conflicts_with(&phos));

        // Same class never conflicts, even across types
        assert!(!phos.conflicts_with(&up));

        // Different node pairs never conflict
        assert!(!phos.conflicts_with(&other_pair));
    }
}
