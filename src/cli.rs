// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Two subcommands:
// - scrape: walk a GitHub repository and extract settings from every module
// - parse:  run the same extraction over local files
//
// Every operational parameter of `scrape` can also come from an
// environment variable (the `env = ...` attributes), which is what CI jobs
// usually want.
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_REPO: &str = "MeteorDevelopment/meteor-client";
pub const DEFAULT_BASE_PATH: &str = "src/main/java/meteordevelopment/meteorclient/systems/modules";
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = concat!("setting-scraper/", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(
    name = "setting-scraper",
    version,
    about = "Extract module setting metadata from source files hosted on GitHub",
    long_about = "setting-scraper walks a directory of module sources in a GitHub repository, \
                  extracts every declared setting (name, type, default, bounds, enum options) \
                  and writes the result as a single JSON document."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error); overrides -v / -q
    #[arg(long, global = true, env = "SCRAPER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scrape every module of a remote repository
    ///
    /// Example: setting-scraper scrape --repo owner/name --path src/modules -o modules.json
    Scrape(ScrapeArgs),

    /// Extract settings from local source files
    ///
    /// Example: setting-scraper parse src/modules/combat/*.java
    Parse {
        /// Source files to parse; each one becomes a module named after the file stem
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Where to write the JSON document ('-' for stdout)
        #[arg(short, long, default_value = "-")]
        output: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ScrapeArgs {
    /// Repository as OWNER/NAME or a github.com URL
    #[arg(long, env = "SCRAPER_REPO", default_value = DEFAULT_REPO)]
    pub repo: String,

    /// Directory inside the repository whose subdirectories are the categories
    #[arg(long, env = "SCRAPER_PATH", default_value = DEFAULT_BASE_PATH)]
    pub path: String,

    /// Branch, tag or commit to read (default branch when omitted)
    #[arg(long = "ref", env = "SCRAPER_REF")]
    pub git_ref: Option<String>,

    /// Root of the GitHub REST API
    #[arg(long, env = "SCRAPER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Extension of module source files
    #[arg(long, default_value = "java")]
    pub extension: String,

    /// Where to write the JSON document ('-' for stdout)
    #[arg(short, long, env = "SCRAPER_OUTPUT", default_value = "modules.json")]
    pub output: String,

    /// Pause after each module and each category, in milliseconds
    #[arg(long, env = "SCRAPER_PAUSE_MS", default_value_t = 200)]
    pub pause_ms: u64,

    /// Value of the User-Agent header sent with every request
    #[arg(long, env = "SCRAPER_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// GitHub token, sent as a bearer credential
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}
