use serde::{Deserialize, Serialize};

use crate::event::Event;

/// A set of events rendered in canonical form: strictly ascending, no
/// duplicates, never empty. This is the invariant both the join in the
/// candidate generator and the subset test in the containment tester
/// depend on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element(Vec<Event>);

impl Element {
    /// Builds a canonical element from an arbitrary bag of events:
    /// dedup and sort ascending. Panics are never used here; an empty
    /// input simply yields an empty element, which callers should avoid
    /// constructing (a `Pattern` never holds one).
    pub fn from_events(mut events: Vec<Event>) -> Self {
        events.sort_unstable();
        events.dedup();
        Element(events)
    }

    pub fn single(event: Event) -> Self {
        Element(vec![event])
    }

    pub fn events(&self) -> &[Event] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Event {
        self.0[0]
    }

    pub fn last(&self) -> Event {
        self.0[self.0.len() - 1]
    }

    /// `true` iff every event of `self` also occurs in `other` — the
    /// subset test the containment tester applies at each matched position.
    pub fn is_subset_of(&self, other: &Element) -> bool {
        let mut oi = 0;
        for &e in &self.0 {
            while oi < other.0.len() && other.0[oi] < e {
                oi += 1;
            }
            if oi >= other.0.len() || other.0[oi] != e {
                return false;
            }
            oi += 1;
        }
        true
    }

    /// Returns a copy of this element with `event` removed, or `None` if
    /// that would leave it empty (the caller must then drop the whole
    /// element instead of emptying it in place).
    pub fn without_event_at(&self, pos: usize) -> Option<Element> {
        if self.0.len() <= 1 {
            return None;
        }
        let mut events = self.0.clone();
        events.remove(pos);
        Some(Element(events))
    }

    /// Appends a new trailing event, keeping canonical ordering. Used when
    /// extending the last element of a pattern during a join.
    pub fn with_appended(&self, event: Event) -> Element {
        let mut events = self.0.clone();
        events.push(event);
        events.sort_unstable();
        events.dedup();
        Element(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(n: u32) -> Event {
        Event::new(n)
    }

    #[test]
    fn canonicalizes_duplicates_and_order() {
        let el = Element::from_events(vec![ev(3), ev(1), ev(1), ev(2)]);
        assert_eq!(el.events(), &[ev(1), ev(2), ev(3)]);
    }

    #[test]
    fn subset_check() {
        let small = Element::from_events(vec![ev(1), ev(3)]);
        let big = Element::from_events(vec![ev(1), ev(2), ev(3), ev(4)]);
        assert!(small.is_subset_of(&big));
        assert!(!big.is_subset_of(&small));
    }

    #[test]
    fn without_event_collapses_to_none_at_singleton() {
        let el = Element::single(ev(1));
        assert!(el.without_event_at(0).is_none());
    }
}
