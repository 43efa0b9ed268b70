use serde::{Deserialize, Serialize};

/// The possible-containment set: an over-approximation of the dataset
/// indices a pattern might be contained in. Always a sorted, duplicate-free
/// vector of indices — cheap to intersect, cheap to narrow in place during
/// support counting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IndexSet(Vec<usize>);

impl IndexSet {
    pub fn from_sorted(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        IndexSet(indices)
    }

    pub fn from_unsorted(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        IndexSet(indices)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.0.binary_search(&idx).is_ok()
    }

    /// Sorted-vector merge intersection — the join's primary cost, and
    /// usually operating on small sets.
    pub fn intersect(&self, other: &IndexSet) -> IndexSet {
        let (mut ai, mut bi) = (0, 0);
        let mut out = Vec::new();
        while ai < self.0.len() && bi < other.0.len() {
            match self.0[ai].cmp(&other.0[bi]) {
                std::cmp::Ordering::Less => ai += 1,
                std::cmp::Ordering::Greater => bi += 1,
                std::cmp::Ordering::Equal => {
                    out.push(self.0[ai]);
                    ai += 1;
                    bi += 1;
                }
            }
        }
        IndexSet(out)
    }

    /// Fraction of `total` that this set covers — the support ratio.
    pub fn support(&self, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.0.len() as f64 / total as f64
        }
    }

    /// Retains only indices for which `keep` returns true, narrowing the
    /// set in place (support counting never widens it).
    pub fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) {
        self.0.retain(|&idx| keep(idx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_disjoint_sets_is_empty() {
        let a = IndexSet::from_sorted(vec![0, 2, 4]);
        let b = IndexSet::from_sorted(vec![1, 3, 5]);
        assert!(a.intersect(&b).is_empty());
    }

    #[test]
    fn intersection_keeps_shared_indices() {
        let a = IndexSet::from_sorted(vec![0, 1, 2, 3]);
        let b = IndexSet::from_sorted(vec![1, 3, 5]);
        assert_eq!(a.intersect(&b), IndexSet::from_sorted(vec![1, 3]));
    }

    #[test]
    fn support_ratio() {
        let a = IndexSet::from_sorted(vec![0, 1]);
        assert_eq!(a.support(4), 0.5);
    }
}
