// File: src/core/ranker.rs
use crate::core::types::{ContentRecord, ScoredCandidate, TokenSet};
use tracing::{debug, trace};

/// Number of distinct tokens present in both sets. A repeated shared word counts once.
pub fn overlap(target: &TokenSet, candidate: &TokenSet) -> usize {
    let (small, large) = if target.len() <= candidate.len() {
        (target, candidate)
    } else {
        (candidate, target)
    };
    small.iter().filter(|word| large.contains(*word)).count()
}

/// Ranks `candidates` by overlap with `target` and returns at most `k` of them.
///
/// The target itself and excluded records are dropped before scoring, so they never
/// take a slot. Ties keep their order from `candidates`. There is no minimum score:
/// with fewer than `k` eligible candidates all of them come back, zeros included.
pub fn rank<'a, F>(
    target_id: &str,
    target: &TokenSet,
    candidates: &'a [ContentRecord],
    mut tokenize_candidate: F,
    k: usize,
) -> Vec<ScoredCandidate<'a>>
where
    F: FnMut(&ContentRecord) -> TokenSet,
{
    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .filter(|record| record.id() != target_id && !record.is_excluded())
        .map(|record| {
            let score = overlap(target, &tokenize_candidate(record));
            trace!(id = record.id(), score, "scored candidate");
            ScoredCandidate { record, score }
        })
        .collect();
    let eligible = scored.len();

    // Stable sort: equal scores stay in corpus order.
    scored.sort_by_key(|c| std::cmp::Reverse(c.score));
    scored.truncate(k);

    debug!(
        target_id,
        candidates = candidates.len(),
        eligible,
        returned = scored.len(),
        "ranked related records"
    );
    scored
}
