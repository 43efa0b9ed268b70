use gsp_core::{Dataset, Element, MiningConfig, Pattern};
use tracing::info;

use super::candidate::{generate_level_2, generate_level_k};
use super::frequent_index::FrequentIndex;
use super::prune::prune;
use super::support::count_support;

/// Runs the full GSP mining loop: 1-pattern initialization, then
/// generate/prune/count for each level until the frequent index is empty
/// or `max_k` is reached. Returns mined patterns in emission order.
pub fn mine(dataset: &Dataset, config: &MiningConfig) -> Vec<(Pattern, usize)> {
    let mut emitted = Vec::new();

    let mut frequent = init_level_1(dataset, config);
    emit_level(&frequent, dataset.len(), &mut emitted, 1, config.verbose);

    if frequent.is_empty() {
        return emitted;
    }
    if config.max_k == Some(1) {
        return emitted;
    }

    let mut k = 2;
    loop {
        if let Some(max_k) = config.max_k {
            if k > max_k {
                break;
            }
        }

        let candidates = if k == 2 {
            generate_level_2(&frequent, dataset.len(), config.minsup)
        } else {
            generate_level_k(&frequent, dataset.len(), config.minsup)
        };

        let candidates = if k >= 3 {
            prune(candidates, &frequent, config.maxgap.is_some())
        } else {
            candidates
        };

        let survivors = count_support(candidates, dataset, config);

        if survivors.is_empty() {
            if config.verbose {
                info!(level = k, "no frequent patterns at this level, stopping");
            }
            break;
        }

        let mut next = FrequentIndex::new();
        for p in survivors {
            next.insert(p);
        }
        emit_level(&next, dataset.len(), &mut emitted, k, config.verbose);
        frequent = next;
        k += 1;
    }

    emitted
}

fn init_level_1(dataset: &Dataset, config: &MiningConfig) -> FrequentIndex {
    let mut frequent = FrequentIndex::new();
    for event in dataset.distinct_events() {
        let indices = gsp_core::IndexSet::from_unsorted(dataset.indices_containing(event));
        if indices.support(dataset.len()) < config.minsup {
            continue;
        }
        let pattern = Pattern::new(vec![Element::single(event)], indices);
        frequent.insert(pattern);
    }
    frequent
}

fn emit_level(
    frequent: &FrequentIndex,
    dataset_len: usize,
    emitted: &mut Vec<(Pattern, usize)>,
    k: usize,
    verbose: bool,
) {
    let mut count = 0;
    for pattern in frequent.iter() {
        count += 1;
        emitted.push((pattern.clone(), pattern.indices().len()));
    }
    if verbose {
        info!(level = k, emitted = count, dataset_len, "level complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsp_core::Event;

    fn el(events: &[u32]) -> Element {
        Element::from_events(events.iter().map(|&n| Event::new(n)).collect())
    }

    fn seq(elements: Vec<Element>) -> Vec<Element> {
        elements
    }

    #[test]
    fn scenario_no_time_constraints() {
        // Dataset from the worked scenario: 1-patterns and a couple of
        // 2-patterns should meet minsup=0.5.
        let dataset = Dataset::new(vec![
            seq(vec![el(&[1, 2]), el(&[3])]),
            seq(vec![el(&[1]), el(&[3])]),
            seq(vec![el(&[1, 2])]),
            seq(vec![el(&[2]), el(&[3])]),
        ]);
        let config = MiningConfig::new(0.5, None, None, 0, None, false).unwrap();
        let result = mine(&dataset, &config);

        let find = |elems: &[Vec<u32>]| -> Option<usize> {
            let target: Vec<Element> = elems.iter().map(|v| el(v)).collect();
            result
                .iter()
                .find(|(p, _)| p.elements() == target.as_slice())
                .map(|(_, s)| *s)
        };

        assert_eq!(find(&[vec![1]]), Some(3));
        assert_eq!(find(&[vec![2]]), Some(3));
        assert_eq!(find(&[vec![3]]), Some(3));
        assert_eq!(find(&[vec![1, 2]]), Some(2));
        assert_eq!(find(&[vec![1], vec![3]]), Some(2));
        assert_eq!(find(&[vec![2], vec![3]]), Some(2));
    }

    #[test]
    fn scenario_maxgap_rejects_far_match() {
        let dataset = Dataset::new(vec![
            seq(vec![el(&[1]), el(&[2]), el(&[3])]),
            seq(vec![el(&[1]), el(&[9]), el(&[9]), el(&[2]), el(&[3])]),
        ]);
        let config = MiningConfig::new(1.0, None, Some(1), 0, None, false).unwrap();
        let result = mine(&dataset, &config);
        let target = vec![el(&[1]), el(&[2])];
        assert!(result
            .iter()
            .find(|(p, _)| p.elements() == target.as_slice())
            .is_none());
    }

    #[test]
    fn scenario_unbounded_gap_accepts_same_pattern() {
        let dataset = Dataset::new(vec![
            seq(vec![el(&[1]), el(&[2]), el(&[3])]),
            seq(vec![el(&[1]), el(&[9]), el(&[9]), el(&[2]), el(&[3])]),
        ]);
        let config = MiningConfig::new(1.0, None, None, 0, None, false).unwrap();
        let result = mine(&dataset, &config);
        let target = vec![el(&[1]), el(&[2])];
        let support = result
            .iter()
            .find(|(p, _)| p.elements() == target.as_slice())
            .map(|(_, s)| *s);
        assert_eq!(support, Some(2));
    }

    #[test]
    fn scenario_order_varies_yields_no_2_pattern() {
        let dataset = Dataset::new(vec![
            seq(vec![el(&[1]), el(&[2])]),
            seq(vec![el(&[2]), el(&[1])]),
        ]);
        let config = MiningConfig::new(1.0, None, None, 0, None, false).unwrap();
        let result = mine(&dataset, &config);
        assert!(result.iter().all(|(p, _)| p.k() == 1));
    }

    #[test]
    fn scenario_single_element_all_subsets() {
        let dataset = Dataset::new(vec![seq(vec![el(&[1, 2, 3])])]);
        let config = MiningConfig::new(1.0, None, None, 0, None, false).unwrap();
        let result = mine(&dataset, &config);
        // 3 singletons + 3 pairs + 1 triple = 7 patterns, all support 1.
        assert_eq!(result.len(), 7);
        assert!(result.iter().all(|(_, s)| *s == 1));
    }

    #[test]
    fn scenario_all_singleton_chain_reaches_level_3() {
        // Every element is a singleton, so every join along the chain has
        // starting_elem == 1 — the path that previously mis-dropped the
        // first element.
        let dataset = Dataset::new(vec![seq(vec![el(&[1]), el(&[2]), el(&[3])])]);
        let config = MiningConfig::new(1.0, None, None, 0, None, false).unwrap();
        let result = mine(&dataset, &config);
        let target = vec![el(&[1]), el(&[2]), el(&[3])];
        let support = result
            .iter()
            .find(|(p, _)| p.elements() == target.as_slice())
            .map(|(_, s)| *s);
        assert_eq!(support, Some(1));
    }

    #[test]
    fn max_k_one_only_emits_singletons() {
        let dataset = Dataset::new(vec![
            seq(vec![el(&[1]), el(&[2])]),
            seq(vec![el(&[1]), el(&[2])]),
        ]);
        let config = MiningConfig::new(1.0, Some(1), None, 0, None, false).unwrap();
        let result = mine(&dataset, &config);
        assert!(result.iter().all(|(p, _)| p.k() == 1));
    }
}
