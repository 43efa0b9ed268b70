use gsp_core::Pattern;
use tracing::debug;

use super::frequent_index::FrequentIndex;

/// Removes candidates with an infrequent (k-1)-subsequence. Classical
/// Apriori pruning is only sound without a finite `maxgap`; the caller
/// selects `contiguous_only` accordingly (see `prune` below).
pub fn prune(candidates: Vec<Pattern>, frequent_below: &FrequentIndex, contiguous_only: bool) -> Vec<Pattern> {
    let before = candidates.len();
    let survivors: Vec<Pattern> = candidates
        .into_iter()
        .filter(|c| all_required_subsequences_frequent(c, frequent_below, contiguous_only))
        .collect();
    debug!(
        before,
        after = survivors.len(),
        contiguous_only,
        "pruned candidates"
    );
    survivors
}

fn all_required_subsequences_frequent(
    candidate: &Pattern,
    frequent_below: &FrequentIndex,
    contiguous_only: bool,
) -> bool {
    let deletions = candidate.single_event_deletions(contiguous_only);
    let last_deletion_idx = deletions.len().saturating_sub(1);

    for (idx, (ei, pi, elements)) in deletions.into_iter().enumerate() {
        // The two deletions that are always frequent by construction: the
        // first event of the first element, and the last event of the last
        // element. They are not looked up.
        let is_leading = ei == 0 && pi == 0;
        let is_last_element = ei == candidate.elements().len() - 1;
        let is_trailing = is_last_element && pi == candidate.elements()[ei].len() - 1 && idx == last_deletion_idx;
        if is_leading || is_trailing {
            continue;
        }
        if elements.is_empty() {
            continue;
        }
        if !frequent_below.contains_elements(&elements) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsp_core::{Element, Event, IndexSet};

    fn pat(elems: Vec<Vec<u32>>) -> Pattern {
        let elements = elems
            .into_iter()
            .map(|vs| Element::from_events(vs.into_iter().map(Event::new).collect()))
            .collect();
        Pattern::new(elements, IndexSet::from_sorted(vec![]))
    }

    #[test]
    fn candidate_survives_when_all_non_trivial_subsequences_frequent() {
        let mut freq = FrequentIndex::new();
        // Deleting the middle event of [[1],[2],[3]] leaves [[1],[3]], the
        // only subsequence that isn't the always-frequent leading/trailing
        // deletion.
        freq.insert(pat(vec![vec![1], vec![3]]));
        let candidates = vec![pat(vec![vec![1], vec![2], vec![3]])];
        let survivors = prune(candidates, &freq, false);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn candidate_pruned_when_subsequence_missing() {
        let freq = FrequentIndex::new();
        let candidates = vec![pat(vec![vec![1], vec![2], vec![3]])];
        let survivors = prune(candidates, &freq, false);
        assert!(survivors.is_empty());
    }
}
