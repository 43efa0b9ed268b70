use serde::{Deserialize, Serialize};

use crate::error::GspError;

/// Validated, immutable parameters for a single mining run.
///
/// `None` stands for "unbounded" on `max_k`, `maxgap`, and `maxspan`. The
/// only precondition the engine itself checks is `minsup`; everything else
/// is a free choice with a well-defined meaning at every value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningConfig {
    pub minsup: f64,
    pub max_k: Option<usize>,
    pub maxgap: Option<u32>,
    pub mingap: u32,
    pub maxspan: Option<u32>,
    pub verbose: bool,
}

impl MiningConfig {
    /// Constructs a config, validating `minsup ∈ (0,1]` — the one
    /// precondition that gates every later support comparison.
    pub fn new(
        minsup: f64,
        max_k: Option<usize>,
        maxgap: Option<u32>,
        mingap: u32,
        maxspan: Option<u32>,
        verbose: bool,
    ) -> Result<Self, GspError> {
        if !(0.0..=1.0).contains(&minsup) || minsup <= 0.0 {
            return Err(GspError::InvalidMinSupport(minsup));
        }
        Ok(MiningConfig {
            minsup,
            max_k,
            maxgap,
            mingap,
            maxspan,
            verbose,
        })
    }

    /// `true` when any time constraint beyond the defaults is configured —
    /// selects the time-constrained containment tester for the whole run.
    pub fn has_time_constraints(&self) -> bool {
        self.maxgap.is_some() || self.mingap > 0 || self.maxspan.is_some()
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        MiningConfig {
            minsup: 1.0,
            max_k: None,
            maxgap: None,
            mingap: 0,
            maxspan: None,
            verbose: false,
        }
    }
}
