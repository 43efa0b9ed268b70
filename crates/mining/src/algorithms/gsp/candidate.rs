use gsp_core::{Element, IndexSet, Pattern};
use tracing::debug;

use super::frequent_index::FrequentIndex;

/// Level-2 is a special case of the join: every unordered pair of frequent
/// 1-patterns (including self-pairs) yields up to three 2-candidates.
pub fn generate_level_2(frequent: &FrequentIndex, dataset_len: usize, minsup: f64) -> Vec<Pattern> {
    let ones: Vec<&Pattern> = frequent.iter().collect();
    let mut out = Vec::new();

    for (pi, p) in ones.iter().enumerate() {
        for q in &ones[pi..] {
            let e1 = p.first_event();
            let e2 = q.first_event();

            if e1 == e2 {
                // Self-join: the only valid 2-candidate is the same event at
                // two successive elements, `<{e},{e}>`. A single element
                // `{e,e}` is not a candidate — elements are sets, and
                // duplicate-event elements are never canonical.
                let indices = p.indices().clone();
                push_if_frequent(
                    &mut out,
                    vec![Element::single(e1), Element::single(e1)],
                    indices,
                    dataset_len,
                    minsup,
                );
                continue;
            }

            let joint = p.indices().intersect(q.indices());
            if joint.support(dataset_len) < minsup {
                continue;
            }

            push_if_frequent(
                &mut out,
                vec![Element::single(e1), Element::single(e2)],
                joint.clone(),
                dataset_len,
                minsup,
            );
            push_if_frequent(
                &mut out,
                vec![Element::single(e2), Element::single(e1)],
                joint.clone(),
                dataset_len,
                minsup,
            );
            let (lo, hi) = if e1 < e2 { (e1, e2) } else { (e2, e1) };
            push_if_frequent(
                &mut out,
                vec![Element::from_events(vec![lo, hi])],
                joint,
                dataset_len,
                minsup,
            );
        }
    }

    debug!(count = out.len(), "generated level-2 candidates");
    out
}

fn push_if_frequent(
    out: &mut Vec<Pattern>,
    elements: Vec<Element>,
    indices: IndexSet,
    dataset_len: usize,
    minsup: f64,
) {
    if indices.support(dataset_len) >= minsup {
        out.push(Pattern::new(elements, indices));
    }
}

/// Level k >= 3: for each frequent (k-1)-pattern, look up join partners by
/// its second event and extend where the join-compatibility check (4.3a)
/// holds.
pub fn generate_level_k(frequent: &FrequentIndex, dataset_len: usize, minsup: f64) -> Vec<Pattern> {
    let mut out = Vec::new();

    for p in frequent.iter() {
        let (e_second, starting_elem) = p.second_event();
        let p_dropped = p.dropping_first_after(starting_elem);

        for q in frequent.bucket(e_second) {
            if !is_join_compatible(&p_dropped, q) {
                continue;
            }

            let joint = p.indices().intersect(q.indices());
            if joint.support(dataset_len) < minsup {
                continue;
            }

            let last_el = q.elements().last().unwrap();
            let new_element = last_el.len() == 1;
            let elements = p.extended_with(last_el.last(), new_element);
            out.push(Pattern::new(elements, joint));
        }
    }

    debug!(count = out.len(), "generated level-k candidates");
    out
}

/// `p ⋈ q` is valid iff dropping `p`'s leading event (after its first
/// element) equals dropping `q`'s trailing event.
fn is_join_compatible(p_dropped: &[Element], q: &Pattern) -> bool {
    p_dropped == q.dropping_last()
}
