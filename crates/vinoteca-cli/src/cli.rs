//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use vinoteca::DrillLevel;
use vinoteca_cli::config::{ServerConfig, DEFAULT_HOST, DEFAULT_MAX_PRICE, DEFAULT_PORT};

/// Vinoteca: browse, filter and explore a wine dataset
#[derive(Parser)]
#[command(name = "vinoteca")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the wine dataset (JSON)
    #[arg(
        short,
        long,
        global = true,
        env = "VINOTECA_DATASET",
        default_value = "wine-data-set.json"
    )]
    pub dataset: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(ServeArgs),

    /// List wines matching score, price, country and variety filters
    Filter {
        /// Minimum score (inclusive)
        #[arg(long, default_value = "0")]
        min_points: u32,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<f64>,

        /// Exact country (case-insensitive)
        #[arg(long)]
        country: Option<String>,

        /// Exact grape variety (case-insensitive)
        #[arg(long)]
        variety: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the next drill-down level for the given choices
    Lookup {
        /// Chosen country
        #[arg(long)]
        country: Option<String>,

        /// Chosen region (lists its varieties)
        #[arg(long, requires = "country", conflicts_with = "province")]
        region: Option<String>,

        /// Chosen province (lists its varieties)
        #[arg(long, requires = "country")]
        province: Option<String>,

        /// Area listed for a country when no area is chosen
        #[arg(long, default_value = "province")]
        by: DrillLevel,
    },

    /// Pick a random country, area and variety
    Random {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,

        /// Second drill-down level
        #[arg(long, default_value = "province")]
        by: DrillLevel,
    },

    /// Answer three questions and get a wine recommendation
    Recommend,

    /// Show a summary of the dataset
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "VINOTECA_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port for web server
    #[arg(short, long, env = "VINOTECA_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Serve /static from this directory instead of the built-in assets
    #[arg(long, env = "VINOTECA_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Price cap used when a request gives none
    #[arg(long, default_value_t = DEFAULT_MAX_PRICE)]
    pub default_max_price: f64,

    /// Open the site in a browser
    #[arg(long)]
    pub open: bool,
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            static_dir: args.static_dir,
            default_max_price: args.default_max_price,
            open_browser: args.open,
        }
    }
}
