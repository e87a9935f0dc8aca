//! # Galaxy Browser CLI (`galaxy`)
//!
//! The `galaxy` binary loads the star dataset named in the config file and
//! offers search, per-star detail, statistics, export, and an HTTP API.
//!
//! ## Usage
//!
//! ```bash
//! galaxy --config ./config/galaxy.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `galaxy info` | Dataset summary |
//! | `galaxy search [query]` | Filter stars and print cards |
//! | `galaxy get <index>` | Full record of one star, including its comment |
//! | `galaxy stats` | Play-time histogram and daily completions |
//! | `galaxy export` | Stars and statistics as one JSON document |
//! | `galaxy serve` | Start the HTTP API |
//! | `galaxy completions <shell>` | Print shell completions |
//!
//! ## Examples
//!
//! ```bash
//! # Named stars mentioning "deathworld"
//! galaxy search deathworld --hide-empty
//!
//! # Everything finished yesterday, as JSON
//! galaxy search yesterday --json
//!
//! # Reproducible elapsed-time text
//! galaxy --now 2024-12-01T12:00:00Z search "2 weeks"
//! ```

use chrono::{DateTime, Utc};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use galaxy_browser::catalog::Catalog;
use galaxy_browser::config;
use galaxy_browser::format::parse_timestamp;
use galaxy_browser::logging::{init_logging, Verbosity};
use galaxy_browser::search::SearchOptions;
use galaxy_browser::{export, get, info, search, server, stats};

/// Galaxy Browser CLI: search, filter and chart completed Factorio galaxy
/// stars.
///
/// All commands except `completions` read a TOML configuration file given
/// by `--config`.
#[derive(Parser)]
#[command(
    name = "galaxy",
    about = "Galaxy Browser — search, filter and chart completed Factorio galaxy stars",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/galaxy.toml")]
    config: PathBuf,

    /// Reference time for "3 days ago" text (RFC 3339). Defaults to now.
    #[arg(long, global = true, value_parser = parse_now)]
    now: Option<DateTime<Utc>>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Show a summary of the loaded dataset.
    Info,

    /// Search stars and print them as cards.
    ///
    /// Matches the query as a case-insensitive substring of each star's
    /// name, user, seed, comment, play time and elapsed-time text.
    Search {
        /// Text to look for. Empty lists every star.
        #[arg(default_value = "")]
        query: String,

        /// Leave out stars without a name.
        #[arg(long, overrides_with = "show_empty")]
        hide_empty: bool,

        /// Include stars without a name (overrides `browse.hide_empty`).
        #[arg(long, overrides_with = "hide_empty")]
        show_empty: bool,

        /// Maximum number of cards to print.
        #[arg(long)]
        limit: Option<usize>,

        /// Print matching stars as JSON instead of cards.
        #[arg(long)]
        json: bool,
    },

    /// Show the full record of one star by dataset index.
    Get {
        /// Dataset index, as printed in brackets by `search`.
        index: usize,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the play-time histogram and daily completion counts.
    Stats {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Write every star and both aggregations as one JSON document.
    Export {
        /// Output file. Defaults to stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Start the read-only HTTP API on `[server].bind`.
    Serve,

    /// Print shell completions to stdout.
    Completions {
        shell: clap_complete::Shell,
    },
}

fn parse_now(s: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    // Commands that don't require config
    if let Commands::Completions { shell } = &cli.command {
        clap_complete::generate(*shell, &mut Cli::command(), "galaxy", &mut std::io::stdout());
        return Ok(());
    }

    let cfg = config::load_config(&cli.config)?;
    let now = cli.now.unwrap_or_else(Utc::now);
    let catalog = Catalog::open(&cfg, now)?;

    match cli.command {
        Commands::Info => {
            info::run_info(&catalog, &cfg.dataset.path)?;
        }
        Commands::Search {
            query,
            hide_empty,
            show_empty,
            limit,
            json,
        } => {
            let hide_empty = match (hide_empty, show_empty) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let opts = SearchOptions {
                query,
                hide_empty,
                limit,
                json,
            };
            search::run_search(&catalog, &cfg.browse, &opts)?;
        }
        Commands::Get { index, json } => {
            get::run_get(&catalog, index, json)?;
        }
        Commands::Stats { json } => {
            stats::run_stats(&catalog, json)?;
        }
        Commands::Export { output } => {
            export::run_export(&catalog, output.as_deref())?;
        }
        Commands::Serve => {
            server::run_server(&cfg, catalog).await?;
        }
        Commands::Completions { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
