use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Optional TOML-backed defaults for mining parameters, loaded when `--config`
/// points at a file. Returns built-in defaults if no path is given.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliDefaults {
    #[serde(default)]
    pub max_k: Option<usize>,
    #[serde(default)]
    pub maxgap: Option<u32>,
    #[serde(default)]
    pub mingap: Option<u32>,
    #[serde(default)]
    pub maxspan: Option<u32>,
    #[serde(default)]
    pub verbose: Option<bool>,
}

impl CliDefaults {
    /// Loads defaults from `path` if given; returns the all-`None` default
    /// otherwise. A missing or unparsable file at an explicitly given path
    /// is an error — unlike the mining file inputs, a defaults file is not
    /// something the user expects us to silently skip.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        debug!(path, "loading CLI defaults");
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path))?;
        let defaults: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path))?;
        Ok(defaults)
    }
}
