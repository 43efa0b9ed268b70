use thiserror::Error;

/// Errors surfaced at the boundary between the mining engine and its callers.
///
/// The engine itself is total once a [`crate::config::MiningConfig`] has been
/// constructed; everything here is a precondition or I/O failure the CLI
/// front-end reacts to before or after a run.
#[derive(Error, Debug)]
pub enum GspError {
    #[error("minsup must be between 0 and 1, got {0}")]
    InvalidMinSupport(f64),

    #[error("input file not found: {0}")]
    InputFileMissing(String),

    #[error("output file already exists: {0}")]
    OutputFileExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
