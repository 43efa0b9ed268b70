use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gsp_core::{Element, Event};

/// Configuration for synthetic sequence database generation, mirroring the
/// reference generator's parameters.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub size: usize,
    pub nevents: u32,
    pub maxevents: u32,
    pub maxelems: u32,
    pub seed: Option<u64>,
}

/// Generates `size` random sequences. Each sequence has an element count
/// uniformly drawn from `[1, maxelems]`; each element a duplicate-free,
/// canonical set of `[1, maxevents]` events drawn from `1..=nevents`.
pub fn generate(config: &GeneratorConfig) -> Vec<Vec<Element>> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..config.size)
        .map(|_| generate_sequence(config, &mut rng))
        .collect()
}

fn generate_sequence(config: &GeneratorConfig, rng: &mut StdRng) -> Vec<Element> {
    let elem_count = rng.gen_range(1..=config.maxelems.max(1));
    (0..elem_count)
        .map(|_| generate_element(config, rng))
        .collect()
}

fn generate_element(config: &GeneratorConfig, rng: &mut StdRng) -> Element {
    let event_count = rng.gen_range(1..=config.maxevents.max(1)) as usize;
    let mut events = Vec::with_capacity(event_count);
    while events.len() < event_count {
        let candidate = Event::new(rng.gen_range(1..=config.nevents));
        if !events.contains(&candidate) {
            events.push(candidate);
        }
    }
    Element::from_events(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_sequence_count() {
        let config = GeneratorConfig {
            size: 10,
            nevents: 5,
            maxevents: 3,
            maxelems: 4,
            seed: Some(42),
        };
        let sequences = generate(&config);
        assert_eq!(sequences.len(), 10);
        for seq in &sequences {
            assert!(!seq.is_empty());
            assert!(seq.len() <= 4);
            for el in seq {
                assert!(!el.is_empty());
                assert!(el.len() <= 3);
                assert!(el.events().iter().all(|e| e.get() >= 1 && e.get() <= 5));
            }
        }
    }

    #[test]
    fn same_seed_is_reproducible() {
        let config = GeneratorConfig {
            size: 5,
            nevents: 8,
            maxevents: 2,
            maxelems: 3,
            seed: Some(7),
        };
        let a = generate(&config);
        let b = generate(&config);
        assert_eq!(a, b);
    }
}
