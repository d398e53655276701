//! subjgen - Main entry point
//!
//! Command-line front end for the playlist/config generator: parses
//! arguments, scans the stimulus directory, and runs one generation pass.
//! Scanning is non-recursive and picks up `.mp4` files only; filenames are
//! sorted so a fixed seed reproduces identical output on any filesystem.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use subjgen::config::{load_training_set, GeneratorConfig, RatingMethod};
use subjgen::emit::DirectorySink;
use subjgen::generate::generate;
use subjgen::ids::IdMode;

/// Command-line arguments for subjgen
#[derive(Parser, Debug)]
#[command(name = "subjgen")]
#[command(about = "Generate subject playlist/config files for SubjectivePlayer")]
#[command(version)]
struct Args {
    /// Path to the video stimuli (PVS)
    #[arg(short, long, env = "SUBJGEN_INPUT")]
    input: PathBuf,

    /// Path to the output directory
    #[arg(short, long, env = "SUBJGEN_OUTPUT")]
    output: PathBuf,

    /// Number of subjects to generate
    #[arg(short = 'n', long, default_value_t = 30)]
    subjects: usize,

    /// Rating method recorded in each subject config
    #[arg(short, long, value_enum, default_value = "acr")]
    method: RatingMethod,

    /// Split each subject's playlist into this many session files
    /// (selects the mobile plain-text output)
    #[arg(short, long)]
    sessions: Option<usize>,

    /// Use prime numbers for ID generation
    #[arg(short, long)]
    prime: bool,

    /// Lower bound of the prime ID range
    #[arg(long, default_value_t = 2)]
    prime_min: u64,

    /// Upper bound of the prime ID range
    #[arg(long, default_value_t = 10_000)]
    prime_max: u64,

    /// Fixed random seed for reproducible runs
    #[arg(long, env = "SUBJGEN_SEED")]
    seed: Option<u64>,

    /// TOML file defining the training set (a `training = [...]` array)
    #[arg(short = 't', long, env = "SUBJGEN_TRAINING_SET")]
    training_set: Option<PathBuf>,
}

/// Log filter: `RUST_LOG` when set, otherwise info-level output for this crate
fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("subjgen=info"))
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();

    let args = Args::parse();

    info!("Starting subjgen v{}", env!("CARGO_PKG_VERSION"));

    if args.prime && args.prime_min > args.prime_max {
        bail!(
            "invalid prime ID range [{}, {}]",
            args.prime_min,
            args.prime_max
        );
    }

    let training = match &args.training_set {
        Some(path) => load_training_set(path)
            .with_context(|| format!("failed to load training set from {}", path.display()))?,
        None => Vec::new(),
    };

    let discovered = scan_stimuli(&args.input)
        .with_context(|| format!("failed to scan stimuli in {}", args.input.display()))?;
    info!("found {} stimuli in {}", discovered.len(), args.input.display());

    let id_mode = if args.prime {
        IdMode::Prime {
            min: args.prime_min,
            max: args.prime_max,
        }
    } else {
        IdMode::Sequential
    };

    let cfg = GeneratorConfig {
        subjects: args.subjects,
        method: args.method,
        sessions: args.sessions,
        id_mode,
        seed: args.seed,
        training,
    };

    let mut sink = DirectorySink::new(&args.output)
        .with_context(|| format!("failed to create output directory {}", args.output.display()))?;

    generate(&cfg, &discovered, &mut sink).context("generation failed")?;

    info!("generated artifacts for {} subjects", args.subjects);
    Ok(())
}

/// Scan a directory (non-recursively) for `.mp4` stimulus files.
///
/// Only the filename is kept. Results are sorted; readdir order is not
/// stable across filesystems and would break seeded reproducibility.
fn scan_stimuli(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let is_mp4 = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("mp4"))
            .unwrap_or(false);
        if !is_mp4 {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_honors_rust_log() {
        // Single test for both cases: parallel tests would race on the env var
        std::env::remove_var("RUST_LOG");
        assert_eq!(env_filter().to_string(), "subjgen=info");

        std::env::set_var("RUST_LOG", "warn");
        assert_eq!(env_filter().to_string(), "warn");
        std::env::remove_var("RUST_LOG");
    }
}
