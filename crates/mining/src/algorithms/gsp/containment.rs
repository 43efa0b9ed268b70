use gsp_core::{Element, MiningConfig};

/// Resolved once per run: which containment test to apply. Chosen from the
/// `MiningConfig` at the start of `mine()` so the support counter never
/// dispatches per-candidate.
pub fn is_contained(config: &MiningConfig, pattern: &[Element], sequence: &[Element]) -> bool {
    if config.has_time_constraints() {
        is_contained_with_time_constraints(pattern, sequence, config)
    } else {
        is_contained_without_time_constraints(pattern, sequence)
    }
}

/// Forward-only cursor match: advance through `sequence`, consuming the next
/// pattern element whenever it is a subset of the current sequence element.
pub fn is_contained_without_time_constraints(pattern: &[Element], sequence: &[Element]) -> bool {
    let mut pi = 0;
    for s_el in sequence {
        if pi >= pattern.len() {
            break;
        }
        if pattern[pi].is_subset_of(s_el) {
            pi += 1;
        }
    }
    pi == pattern.len()
}

/// Time-constrained containment: for each candidate start position, run a
/// forward scan with a one-step backward retry on gap violation. On a
/// backward retry the scan resumes one past the previously matched position
/// with `gap` restored to what it was immediately before that match (not
/// reset to zero) — only one level of retry memory is kept, matching the
/// classical GSP formulation.
pub fn is_contained_with_time_constraints(
    pattern: &[Element],
    sequence: &[Element],
    config: &MiningConfig,
) -> bool {
    if pattern.is_empty() {
        return true;
    }
    let maxgap = config.maxgap.unwrap_or(u32::MAX);
    let mingap = config.mingap;
    let maxspan = config.maxspan.unwrap_or(u32::MAX);

    for start in 0..sequence.len() {
        if !pattern[0].is_subset_of(&sequence[start]) {
            continue;
        }
        if try_match_from(pattern, sequence, start, maxgap, mingap, maxspan) {
            return true;
        }
    }
    false
}

fn try_match_from(
    pattern: &[Element],
    sequence: &[Element],
    start: usize,
    maxgap: u32,
    mingap: u32,
    maxspan: u32,
) -> bool {
    let mut j = 1usize;
    let mut i = start + 1;
    let mut gap: u32 = 0;
    // One step of memory: the position and gap recorded at the previous
    // successful match, restored verbatim on a backward-phase retry.
    let mut last_found = start;
    let mut last_gap: u32 = 0;

    if j == pattern.len() {
        return true;
    }

    while i < sequence.len() && j < pattern.len() {
        if (i - start) as u32 > maxspan {
            return false;
        }
        gap += 1;

        if gap > maxgap {
            if j == 1 {
                return false;
            }
            j -= 1;
            i = last_found + 1;
            gap = last_gap;
            continue;
        }

        if pattern[j].is_subset_of(&sequence[i]) && gap > mingap {
            last_found = i;
            last_gap = gap;
            gap = 0;
            j += 1;
        }
        i += 1;
    }

    j == pattern.len()
}
