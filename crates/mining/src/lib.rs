pub mod algorithms;

pub use algorithms::gsp::mine;
pub use gsp_core::{Dataset, Element, Event, GspError, IndexSet, MiningConfig, Pattern};
