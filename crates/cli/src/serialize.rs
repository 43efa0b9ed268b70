use std::fmt::Write as _;

use gsp_core::Pattern;

use crate::ingest::Dictionary;

/// Renders mined `(pattern, support_count)` pairs to the output text format:
/// each element's events (space-separated) followed by `-1`, and a
/// trailing `#SUP: <count>` line. Event ids are reverse-mapped through
/// `dictionary` when available.
pub fn render(patterns: &[(Pattern, usize)], dictionary: Option<&Dictionary>) -> String {
    let mut out = String::new();
    for (pattern, support) in patterns {
        for element in pattern.elements() {
            for event in element.events() {
                match dictionary.and_then(|d| d.name(*event)) {
                    Some(name) => {
                        let _ = write!(out, "{} ", name);
                    }
                    None => {
                        let _ = write!(out, "{} ", event);
                    }
                }
            }
            out.push_str("-1 ");
        }
        let _ = writeln!(out, "#SUP: {}", support);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsp_core::{Element, Event, IndexSet};

    #[test]
    fn renders_without_dictionary() {
        let pattern = Pattern::new(
            vec![Element::single(Event::new(1)), Element::single(Event::new(2))],
            IndexSet::from_sorted(vec![0, 1]),
        );
        let rendered = render(&[(pattern, 2)], None);
        assert_eq!(rendered, "1 -1 2 -1 #SUP: 2\n");
    }
}
