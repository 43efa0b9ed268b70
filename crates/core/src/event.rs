use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque event identifier. Totally ordered by the underlying integer.
///
/// The ingest dictionary is responsible for mapping source tokens (strings
/// or bare integers) onto dense `Event` values; the mining engine never
/// looks behind the integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Event(pub u32);

impl Event {
    pub fn new(id: u32) -> Self {
        Event(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Event {
    fn from(id: u32) -> Self {
        Event(id)
    }
}
