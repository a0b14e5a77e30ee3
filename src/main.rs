//! Web-Walker main entry point
//!
//! This is the command-line interface for the Web-Walker link walker.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use web_walker::config::{load_config_with_hash, Config};
use web_walker::crawler::{Coordinator, CountingFetcher, StaticFetcher};
use web_walker::output::print_statistics;

/// Web-Walker: a concurrent, depth-bounded link walker
///
/// Walks a canned site map from a seed URL, fetching every reachable URL at
/// most once and printing each page as it is found. Without a config file the
/// built-in sample site map is walked from https://golang.org/ to depth 4.
#[derive(Parser, Debug)]
#[command(name = "web-walker")]
#[command(version = "1.0.0")]
#[command(about = "A concurrent, depth-bounded link walker", long_about = None)]
struct Cli {
    /// Path to a TOML site map (defaults to the built-in sample)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// URL to start from (overrides the config)
    #[arg(long)]
    seed: Option<String>,

    /// Maximum walk depth (overrides the config)
    #[arg(long)]
    max_depth: Option<u32>,

    /// Simulated latency per fetch in milliseconds (overrides the config)
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Print walk statistics when done
    #[arg(long)]
    stats: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_walk_config(cli.config.as_deref())
        .context("failed to load walk configuration")?;
    apply_overrides(&mut config, &cli);
    web_walker::config::validate(&config).context("invalid walk configuration")?;

    let fetcher = StaticFetcher::from_pages(&config.pages)
        .with_latency(Duration::from_millis(config.crawler.fetch_latency_ms));
    tracing::info!("Site map has {} page(s)", fetcher.len());

    let fetcher = Arc::new(CountingFetcher::new(fetcher));
    let stats = Coordinator::new(fetcher.clone())
        .run(&config.crawler.seed, config.crawler.max_depth)
        .await;

    tracing::info!("Fetcher was called {} time(s)", fetcher.total());

    if cli.stats {
        println!();
        print_statistics(&stats);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the walk output.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("web_walker=info,warn"),
            1 => EnvFilter::new("web_walker=debug,info"),
            2 => EnvFilter::new("web_walker=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if one was given, else the built-in sample
fn load_walk_config(path: Option<&Path>) -> web_walker::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        None => {
            tracing::debug!("No configuration given, using the built-in sample");
            Ok(Config::sample())
        }
    }
}

/// Applies command-line overrides on top of the loaded config
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(seed) = &cli.seed {
        config.crawler.seed = seed.clone();
    }
    if let Some(max_depth) = cli.max_depth {
        config.crawler.max_depth = max_depth;
    }
    if let Some(latency_ms) = cli.latency_ms {
        config.crawler.fetch_latency_ms = latency_ms;
    }
}
