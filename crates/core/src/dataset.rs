use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::event::Event;

/// A fixed, read-only, random-access collection of sequences. Built once at
/// ingest and never mutated by the mining engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Dataset {
    sequences: Vec<Vec<Element>>,
}

impl Dataset {
    pub fn new(sequences: Vec<Vec<Element>>) -> Self {
        Dataset { sequences }
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn sequence(&self, idx: usize) -> &[Element] {
        &self.sequences[idx]
    }

    pub fn sequences(&self) -> &[Vec<Element>] {
        &self.sequences
    }

    /// Every distinct event occurring anywhere in the dataset, ascending.
    pub fn distinct_events(&self) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .sequences
            .iter()
            .flat_map(|seq| seq.iter())
            .flat_map(|el| el.events().iter().copied())
            .collect();
        events.sort_unstable();
        events.dedup();
        events
    }

    /// Sorted indices of sequences that contain `event` in any element —
    /// the seed possible-containment set for the corresponding 1-pattern.
    pub fn indices_containing(&self, event: Event) -> Vec<usize> {
        self.sequences
            .iter()
            .enumerate()
            .filter(|(_, seq)| seq.iter().any(|el| el.events().contains(&event)))
            .map(|(idx, _)| idx)
            .collect()
    }
}
