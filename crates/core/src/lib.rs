pub mod config;
pub mod dataset;
pub mod element;
pub mod error;
pub mod event;
pub mod index_set;
pub mod pattern;

pub use config::MiningConfig;
pub use dataset::Dataset;
pub use element::Element;
pub use error::GspError;
pub use event::Event;
pub use index_set::IndexSet;
pub use pattern::Pattern;
