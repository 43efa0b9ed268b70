use gsp_core::{Dataset, MiningConfig, Pattern};
use tracing::debug;

use super::containment::is_contained;

/// Narrows each candidate's possible-containment set against the dataset,
/// dropping indices that fail containment, and keeps candidates whose
/// narrowed support still meets `minsup`.
pub fn count_support(candidates: Vec<Pattern>, dataset: &Dataset, config: &MiningConfig) -> Vec<Pattern> {
    let mut survivors = Vec::new();
    for mut candidate in candidates {
        let elements = candidate.elements().to_vec();
        candidate
            .indices_mut()
            .retain(|idx| is_contained(config, &elements, dataset.sequence(idx)));
        if candidate.indices().support(dataset.len()) >= config.minsup {
            survivors.push(candidate);
        }
    }
    debug!(count = survivors.len(), "counted support, kept frequent candidates");
    survivors
}
