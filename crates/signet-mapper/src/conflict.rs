//! Conflict resolution over a condition's relation set

use signet_domain::Relation;
use tracing::debug;

/// Remove every pair of relations that contradict each other
///
/// Two relations conflict when they connect the same two nodes in the same
/// direction with opposite edge-type classes. Both members of a conflicting
/// pair are dropped: the resolver cannot tell which measurement is right, so
/// no edge beats a wrong-signed edge. Relations on other node pairs, or with
/// same-class types, are never touched.
///
/// The pass is idempotent; running it on its own output removes nothing.
/// Condition sizes are small, so the pairwise scan is quadratic on purpose.
pub fn remove_conflicting(relations: &mut Vec<Relation>) {
    let mut conflicted = vec![false; relations.len()];

    for i in 0..relations.len() {
        for j in (i + 1)..relations.len() {
            if relations[i].conflicts_with(&relations[j]) {
                conflicted[i] = true;
                conflicted[j] = true;
            }
        }
    }

    if conflicted.iter().any(|&c| c) {
        let before = relations.len();
        let mut idx = 0;
        relations.retain(|_| {
            let keep = !conflicted[idx];
            idx += 1;
            keep
        });
        debug!(removed = before - relations.len(), "dropped conflicting relations");
    }
}
