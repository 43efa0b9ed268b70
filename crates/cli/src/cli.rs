use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Generalized Sequential Pattern miner.
#[derive(Parser, Debug)]
#[command(name = "gsp", about = "Generalized Sequential Pattern miner")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML defaults file (default: none, built-in defaults apply)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mine frequent sequential patterns from a sequence database
    Gsp(GspArgs),
    /// Generate a synthetic sequence database
    #[command(name = "dataset-gen")]
    DatasetGen(DatasetGenArgs),
}

#[derive(Args, Debug)]
pub struct GspArgs {
    /// Input sequence database file
    pub infile: PathBuf,

    /// Output file for mined patterns
    pub outfile: PathBuf,

    /// Minimum support, between 0 and 1
    pub minsup: f64,

    /// Maximum pattern length (events); unbounded if omitted
    #[arg(long = "max-k")]
    pub max_k: Option<usize>,

    /// Time constraints: MAXGAP MINGAP MAXSPAN
    #[arg(short = 't', long = "time", num_args = 3, value_names = ["MAXGAP", "MINGAP", "MAXSPAN"])]
    pub time_constraints: Option<Vec<i64>>,

    /// Enable debug-level tracing
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct DatasetGenArgs {
    /// Output file for the generated database
    pub outfile: PathBuf,

    /// Number of sequences to generate
    pub size: usize,

    /// Number of unique events
    pub nevents: u32,

    /// Maximum number of events in an element
    pub maxevents: u32,

    /// Average number of elements per sequence
    pub avgelems: u32,

    /// File listing item names, one per line, substituted for bare integers
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Enable debug-level tracing
    #[arg(short, long)]
    pub verbose: bool,
}

impl GspArgs {
    pub fn maxgap(&self) -> Option<u32> {
        self.time_constraints
            .as_ref()
            .and_then(|v| clamp_unbounded(v[0]))
    }

    pub fn mingap(&self) -> u32 {
        self.time_constraints
            .as_ref()
            .and_then(|v| clamp_unbounded(v[1]))
            .unwrap_or(0)
    }

    pub fn maxspan(&self) -> Option<u32> {
        self.time_constraints
            .as_ref()
            .and_then(|v| clamp_unbounded(v[2]))
    }
}

/// A negative value on the command line denotes "unbounded", matching the
/// reference tool's convention for maxgap/mingap/maxspan sentinels.
fn clamp_unbounded(v: i64) -> Option<u32> {
    if v < 0 {
        None
    } else {
        Some(v as u32)
    }
}
