//! [`Args`] definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use discovery::domain::SortKey;

/// Headless property discovery over a catalog of listings.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Path to the catalog file, overriding the configured one.
    #[arg(long)]
    pub catalog: Option<String>,

    /// [`Mode`] to run in.
    #[command(subcommand)]
    pub mode: Mode,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Mode of running.
#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Prints the visible result of the configured filter.
    Browse {
        /// Sort key overriding the configured one.
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Maximum number of listings to print.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Replays a gesture script against the card stack.
    Swipe {
        /// Path to the JSON gesture script.
        script: PathBuf,
    },
}
