use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::event::Event;
use crate::index_set::IndexSet;

/// A candidate or frequent sequential pattern: an ordered, non-empty list
/// of canonical elements, carrying its possible-containment set.
///
/// Two patterns are compared structurally via [`Pattern::elements`], never
/// by their index set — the index set is support bookkeeping, not identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pattern {
    elements: Vec<Element>,
    indices: IndexSet,
}

impl Pattern {
    pub fn new(elements: Vec<Element>, indices: IndexSet) -> Self {
        debug_assert!(!elements.is_empty());
        debug_assert!(elements.iter().all(|e| !e.is_empty()));
        Pattern { elements, indices }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn indices(&self) -> &IndexSet {
        &self.indices
    }

    pub fn indices_mut(&mut self) -> &mut IndexSet {
        &mut self.indices
    }

    pub fn into_parts(self) -> (Vec<Element>, IndexSet) {
        (self.elements, self.indices)
    }

    /// Total event count across all elements — the pattern's "k".
    pub fn k(&self) -> usize {
        self.elements.iter().map(Element::len).sum()
    }

    pub fn first_event(&self) -> Event {
        self.elements[0].first()
    }

    /// The event immediately following the first in reading order, and
    /// which element it lives in (0 = still the first element, 1 = the
    /// second element) — `starting_elem` in the spec's join step.
    pub fn second_event(&self) -> (Event, usize) {
        if self.elements[0].len() >= 2 {
            (self.elements[0].events()[1], 0)
        } else {
            (self.elements[1].first(), 1)
        }
    }

    /// `p'`: this pattern with its first event removed. When `starting_elem`
    /// is 0 (the first element has >= 2 events), only that element loses its
    /// leading event. When `starting_elem` is 1 (the first element is a
    /// singleton), the first event *is* the whole first element, so the
    /// first element vanishes entirely and the rest is returned unchanged —
    /// it is not itself stripped of an event. Used by the join-compatibility
    /// check (4.3a).
    pub fn dropping_first_after(&self, starting_elem: usize) -> Vec<Element> {
        if starting_elem == 0 {
            let mut out = Vec::with_capacity(self.elements.len());
            if let Some(shrunk) = self.elements[0].without_event_at(0) {
                out.push(shrunk);
            }
            out.extend(self.elements[1..].iter().cloned());
            out
        } else {
            self.elements[1..].to_vec()
        }
    }

    /// `q'`: this pattern with the trailing event of its last element
    /// removed (element drops out if that leaves it empty).
    pub fn dropping_last(&self) -> Vec<Element> {
        let last_idx = self.elements.len() - 1;
        let mut out = Vec::with_capacity(self.elements.len());
        for (i, el) in self.elements.iter().enumerate() {
            if i == last_idx {
                let pos = el.len() - 1;
                if let Some(shrunk) = el.without_event_at(pos) {
                    out.push(shrunk);
                }
            } else {
                out.push(el.clone());
            }
        }
        out
    }

    /// Builds the level-(k+1) candidate's element list by extending this
    /// pattern with `q`'s trailing event, per 4.3: a fresh element when
    /// `q`'s last element is a singleton, otherwise appended in place.
    pub fn extended_with(&self, last_event: Event, new_element: bool) -> Vec<Element> {
        let mut out = self.elements.clone();
        if new_element {
            out.push(Element::single(last_event));
        } else {
            let last = out.len() - 1;
            out[last] = out[last].with_appended(last_event);
        }
        out
    }

    /// Enumerates every single-event deletion of this pattern as
    /// `(element_index, event_index, resulting_elements)`, skipping
    /// deletions that would collapse an element when `contiguous_only`
    /// is set (the maxgap-weakened pruning variant only trusts
    /// element-preserving deletions).
    pub fn single_event_deletions(
        &self,
        contiguous_only: bool,
    ) -> Vec<(usize, usize, Vec<Element>)> {
        let mut out = Vec::new();
        for (ei, el) in self.elements.iter().enumerate() {
            for pi in 0..el.len() {
                if contiguous_only && el.len() <= 1 {
                    continue;
                }
                let mut elements = self.elements.clone();
                match el.without_event_at(pi) {
                    Some(shrunk) => elements[ei] = shrunk,
                    None => {
                        elements.remove(ei);
                    }
                }
                out.push((ei, pi, elements));
            }
        }
        out
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for Pattern {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index_set::IndexSet;

    fn ev(n: u32) -> Event {
        Event::new(n)
    }

    fn pat(elems: Vec<Vec<u32>>) -> Pattern {
        let elements = elems
            .into_iter()
            .map(|vs| Element::from_events(vs.into_iter().map(Event::new).collect()))
            .collect();
        Pattern::new(elements, IndexSet::from_sorted(vec![]))
    }

    #[test]
    fn second_event_within_first_element() {
        let p = pat(vec![vec![1, 2], vec![3]]);
        assert_eq!(p.second_event(), (ev(2), 0));
    }

    #[test]
    fn second_event_in_next_element() {
        let p = pat(vec![vec![1], vec![3]]);
        assert_eq!(p.second_event(), (ev(3), 1));
    }

    #[test]
    fn dropping_first_after_collapses_singleton_first_element() {
        let p = pat(vec![vec![1], vec![2], vec![3]]);
        let (_, starting_elem) = p.second_event();
        assert_eq!(starting_elem, 1);
        let dropped = p.dropping_first_after(starting_elem);
        assert_eq!(dropped, vec![
            Element::from_events(vec![ev(2)]),
            Element::from_events(vec![ev(3)]),
        ]);
    }

    #[test]
    fn dropping_first_after_shrinks_non_singleton_first_element() {
        let p = pat(vec![vec![1, 2], vec![3]]);
        let (_, starting_elem) = p.second_event();
        assert_eq!(starting_elem, 0);
        let dropped = p.dropping_first_after(starting_elem);
        assert_eq!(dropped, vec![
            Element::from_events(vec![ev(2)]),
            Element::from_events(vec![ev(3)]),
        ]);
    }

    #[test]
    fn join_compatible_when_first_element_is_singleton() {
        // p = [[1],[2]], q = [[2],[3]] — the classic GSP chain join where
        // p's first element is a singleton. p' must drop element [1]
        // wholesale, leaving [[2]], which equals q.dropping_last() = [[2]].
        let p = pat(vec![vec![1], vec![2]]);
        let q = pat(vec![vec![2], vec![3]]);
        let (_, starting_elem) = p.second_event();
        assert_eq!(p.dropping_first_after(starting_elem), q.dropping_last());
    }

    #[test]
    fn single_event_deletions_skip_singletons_when_contiguous_only() {
        let p = pat(vec![vec![1], vec![2, 3]]);
        let all = p.single_event_deletions(false);
        let contiguous = p.single_event_deletions(true);
        assert_eq!(all.len(), 3);
        assert_eq!(contiguous.len(), 2);
    }
}
