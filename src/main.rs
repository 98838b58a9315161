// src/main.rs
// =============================================================================
// Entry point of the setting-scraper CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, to stderr)
// 3. Dispatch to the subcommand handler
// 4. Write the document and print a summary
// 5. Exit with 0 on success, 2 on any error
//
// The document is written only after the whole run succeeded, so a failed
// run never leaves a partial file behind.
// =============================================================================

mod cli;
mod config;
mod error;
mod extract;
mod github;
mod model;
mod output;
mod scrape;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, ScrapeArgs};
use config::ScrapeConfig;
use github::GithubClient;
use output::{OutputTarget, Summary};
use scrape::ScrapeOptions;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Scrape(args) => handle_scrape(&args).await,
        Commands::Parse { files, output } => handle_parse(&files, &output),
    }
}

// Handles the 'scrape' subcommand
async fn handle_scrape(args: &ScrapeArgs) -> Result<()> {
    let config = ScrapeConfig::from_args(args).context("Invalid configuration")?;
    info!(
        repo = %config.repo,
        path = %config.base_path,
        git_ref = ?config.git_ref,
        "Scraping module settings"
    );

    let client = GithubClient::new(&config)?;
    let options = ScrapeOptions::from(&config);
    let categories = scrape::scrape_repository(&client, &options).await?;

    output::write_document(&categories, &config.output)?;
    output::print_summary(&Summary::of_categories(&categories), &config.output);

    Ok(())
}

// Handles the 'parse' subcommand
fn handle_parse(files: &[PathBuf], output: &str) -> Result<()> {
    let target = OutputTarget::parse(output);
    let modules = scrape::parse_files(files)?;

    output::write_document(&modules, &target)?;
    output::print_summary(&Summary::of_modules(&modules), &target);

    Ok(())
}

// RUST_LOG wins when set; otherwise --log-level, -v, -q, SCRAPER_LOG_LEVEL
fn init_logging(cli: &Cli) {
    let level = if let Some(level_str) = &cli.log_level {
        parse_level(level_str)
    } else if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(format!(
            "setting_scraper={},reqwest=warn,hyper=warn",
            level
        )),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}
