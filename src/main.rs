//! soft404 main entry point
//!
//! Command-line interface for the dead-page detector: classify one URL and
//! report the verdict through stdout and the exit status.

use anyhow::Context;
use clap::Parser;
use soft404::config::{load_config, validate, DetectorConfig};
use soft404::detector::Detector;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// soft404: a dead-page detector
///
/// Classifies a URL as dead (a hard or soft 404) or alive by comparing it
/// against a synthesized sibling URL that is guaranteed not to exist.
/// Prints `dead: <url>` or `alive: <url>` and exits with status 1 for a
/// dead page, 0 for a live one, or 2 on a usage error.
#[derive(Parser, Debug)]
#[command(name = "soft404")]
#[command(version)]
#[command(about = "Classify a URL as a dead page (soft or hard 404)", long_about = None)]
struct Cli {
    /// URL to classify
    #[arg(value_name = "URL")]
    url: String,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Override the maximum number of redirect hops
    #[arg(long, value_name = "N")]
    max_redirects: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    tracing::debug!(?config, "resolved configuration");

    let detector = Detector::new(config).context("failed to build HTTP client")?;

    let dead = match detector.is_dead(&cli.url).await {
        Ok(dead) => dead,
        // A malformed URL is a usage error, reported on the usage exit code
        Err(
            e @ (soft404::Soft404Error::InvalidUrl { .. }
            | soft404::Soft404Error::MissingHost { .. }),
        ) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("cannot classify {}", cli.url));
        }
    };

    if dead {
        println!("dead: {}", cli.url);
        std::process::exit(1);
    } else {
        println!("alive: {}", cli.url);
        Ok(())
    }
}

/// Resolves the detector configuration from file and flag overrides
fn build_config(cli: &Cli) -> anyhow::Result<DetectorConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DetectorConfig::default(),
    };

    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    if let Some(max_redirects) = cli.max_redirects {
        config.max_redirects = max_redirects;
    }

    // Flag overrides bypass the file parser, so validate again
    validate(&config)?;

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("soft404=info,warn"),
            1 => EnvFilter::new("soft404=debug,info"),
            2 => EnvFilter::new("soft404=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}
