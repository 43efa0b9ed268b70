pub mod candidate;
pub mod containment;
pub mod engine;
pub mod frequent_index;
pub mod prune;
pub mod support;

pub use engine::mine;
pub use frequent_index::FrequentIndex;
