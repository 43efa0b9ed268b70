mod cli;
mod config;
mod generator;
mod ingest;
mod serialize;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::{Command, DatasetGenArgs, GspArgs};
use config::CliDefaults;
use gsp_core::MiningConfig;

fn main() -> Result<()> {
    let args = cli::CliArgs::parse();

    let verbose = match &args.command {
        Command::Gsp(a) => a.verbose,
        Command::DatasetGen(a) => a.verbose,
    };
    init_tracing(verbose);

    let defaults = CliDefaults::load(args.config.as_deref())
        .context("failed to load CLI defaults")?;

    match args.command {
        Command::Gsp(gsp_args) => run_gsp(gsp_args, &defaults),
        Command::DatasetGen(gen_args) => run_dataset_gen(gen_args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn run_gsp(args: GspArgs, defaults: &CliDefaults) -> Result<()> {
    if !confirm_overwrite(&args.outfile)? {
        info!("aborted: output file not overwritten");
        return Ok(());
    }

    let (dataset, dictionary) = ingest::load_dataset(&args.infile)
        .with_context(|| format!("failed to load input file {}", args.infile.display()))?;

    let config = MiningConfig::new(
        args.minsup,
        args.max_k.or(defaults.max_k),
        args.maxgap().or(defaults.maxgap),
        if args.time_constraints.is_some() {
            args.mingap()
        } else {
            defaults.mingap.unwrap_or(0)
        },
        args.maxspan().or(defaults.maxspan),
        args.verbose || defaults.verbose.unwrap_or(false),
    )
    .context("invalid mining configuration")?;

    info!(
        infile = %args.infile.display(),
        minsup = config.minsup,
        "starting GSP mining run"
    );

    let result = gsp_mining::mine(&dataset, &config);
    info!(patterns_found = result.len(), "mining complete");

    let rendered = serialize::render(&result, Some(&dictionary));
    std::fs::write(&args.outfile, rendered)
        .with_context(|| format!("failed to write output file {}", args.outfile.display()))?;

    Ok(())
}

fn run_dataset_gen(args: DatasetGenArgs) -> Result<()> {
    if !confirm_overwrite(&args.outfile)? {
        info!("aborted: output file not overwritten");
        return Ok(());
    }

    let items = match &args.items {
        Some(path) => Some(load_item_names(path, args.nevents)?),
        None => None,
    };

    let config = generator::GeneratorConfig {
        size: args.size,
        nevents: args.nevents,
        maxevents: args.maxevents,
        maxelems: args.avgelems,
        seed: args.seed,
    };
    let sequences = generator::generate(&config);

    let mut out = String::new();
    for seq in &sequences {
        for element in seq {
            for event in element.events() {
                match &items {
                    Some(names) => out.push_str(&names[(event.get() - 1) as usize]),
                    None => out.push_str(&event.get().to_string()),
                }
                out.push(' ');
            }
            out.push_str("-1 ");
        }
        out.push_str("-2\n");
    }

    std::fs::write(&args.outfile, out)
        .with_context(|| format!("failed to write output file {}", args.outfile.display()))?;
    info!(sequences = sequences.len(), "generated synthetic database");
    Ok(())
}

/// Reads and sorts the item-name file, failing if it lists fewer names than
/// the requested number of unique events.
fn load_item_names(path: &std::path::Path, nevents: u32) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("items file not found: {}", path.display()))?;
    let mut items: Vec<String> = content.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect();
    if (items.len() as u32) < nevents {
        anyhow::bail!(
            "items file {} has fewer entries ({}) than requested unique events ({})",
            path.display(),
            items.len(),
            nevents
        );
    }
    items.sort();
    Ok(items)
}

/// Interactive overwrite confirmation, matching the reference tool's
/// `[Y/N]` prompt when the destination file already exists.
fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    loop {
        print!("File {} already exists, want to proceed? [Y/N] ", path.display());
        io::stdout().flush().ok();
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        match answer.trim() {
            "Y" | "y" => return Ok(true),
            "N" | "n" => return Ok(false),
            _ => continue,
        }
    }
}
