use std::collections::HashMap;

use gsp_core::{Event, Pattern};

/// Maps a pattern's first event to the frequent patterns sharing it — the
/// join's O(1) narrowing of candidate partners, and the structural lookup
/// the pruner uses to check a subsequence for frequency.
#[derive(Debug, Default)]
pub struct FrequentIndex {
    buckets: HashMap<Event, Vec<Pattern>>,
}

impl FrequentIndex {
    pub fn new() -> Self {
        FrequentIndex {
            buckets: HashMap::new(),
        }
    }

    pub fn insert(&mut self, pattern: Pattern) {
        debug_assert_eq!(pattern.elements()[0].first(), pattern.first_event());
        self.buckets
            .entry(pattern.first_event())
            .or_default()
            .push(pattern);
    }

    pub fn bucket(&self, event: Event) -> &[Pattern] {
        self.buckets.get(&event).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(|v| v.is_empty())
    }

    /// `true` iff `elements` exactly matches some pattern in the bucket
    /// keyed by its own first event — the pruner's subsequence-frequency
    /// check.
    pub fn contains_elements(&self, elements: &[gsp_core::Element]) -> bool {
        if elements.is_empty() {
            return true;
        }
        let key = elements[0].first();
        self.bucket(key).iter().any(|p| p.elements() == elements)
    }

    pub fn all_patterns(self) -> Vec<Pattern> {
        self.buckets.into_values().flatten().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.buckets.values().flatten()
    }
}
