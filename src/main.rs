//! Wiki-Glean main entry point
//!
//! This is the command-line interface for the Wiki-Glean article harvester.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wiki_glean::config::load_config_with_hash;
use wiki_glean::input::load_keywords;
use wiki_glean::pipeline;

/// Wiki-Glean: a keyword-to-article harvester
///
/// Wiki-Glean resolves keyword queries against a Wikipedia language edition,
/// fetches each matched article's plain text and section outline, and
/// appends the results to an NDJSON dataset.
#[derive(Parser, Debug)]
#[command(name = "wiki-glean")]
#[command(version = "1.0.0")]
#[command(about = "A keyword-to-article harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Remove an existing run marker first, forcing first-run behavior
    #[arg(long)]
    fresh: bool,

    /// Validate config and show what would be fetched without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_run(config, cli.fresh).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wiki_glean=info,warn"),
            1 => EnvFilter::new("wiki_glean=debug,info"),
            2 => EnvFilter::new("wiki_glean=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be fetched
fn handle_dry_run(config: &wiki_glean::config::Config) -> anyhow::Result<()> {
    println!("=== Wiki-Glean Dry Run ===\n");

    println!("Wikipedia:");
    println!("  Language edition: {}", config.wikipedia.language);
    println!("  Request timeout: {}s", config.wikipedia.request_timeout);
    println!(
        "  Delay between records: {}ms",
        config.wikipedia.delay_between_requests
    );
    println!("  Max retries: {}", config.wikipedia.max_retries);
    println!(
        "  Retry base delay: {}ms",
        config.wikipedia.retry_base_delay
    );
    if let Some(base_url) = &config.wikipedia.base_url {
        println!("  API base override: {}", base_url);
    }

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);

    println!("\nInput:");
    println!("  Keywords: {}", config.input.keywords_path);
    println!("  Column: {}", config.input.keyword_column);

    println!("\nOutput:");
    println!(
        "  Dataset: {}/{}",
        config.output.dataset_dir,
        pipeline::DATASET_FILENAME
    );
    println!("  Run marker: {}", config.output.marker_path);
    println!(
        "  Auto-fetch on first run: {}",
        config.output.auto_fetch_on_first_run
    );

    let keywords = load_keywords(
        std::path::Path::new(&config.input.keywords_path),
        &config.input.keyword_column,
    )?;
    let non_blank = keywords.iter().filter(|k| !k.trim().is_empty()).count();

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would fetch {} articles ({} rows, {} blank)",
        non_blank,
        keywords.len(),
        keywords.len() - non_blank
    );

    Ok(())
}

/// Handles the main fetch operation
async fn handle_run(config: wiki_glean::config::Config, fresh: bool) -> anyhow::Result<()> {
    if fresh {
        tracing::info!("Starting fresh run (ignoring any previous marker)");
    }

    match pipeline::run(config, fresh).await {
        Ok(summary) => {
            tracing::info!(
                "Run finished: {} records written, {} degraded, {} skipped",
                summary.records_written,
                summary.degraded,
                summary.skipped
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            Err(e.into())
        }
    }
}
