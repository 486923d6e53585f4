//! Vinoteca CLI - browse and explore a wine dataset.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dataset = cli.dataset.as_path();
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run(dataset, args.into()),

        Commands::Filter {
            min_points,
            max_price,
            country,
            variety,
            json,
        } => commands::filter::run(dataset, min_points, max_price, country, variety, json),

        Commands::Lookup {
            country,
            region,
            province,
            by,
        } => commands::lookup::run(dataset, country, region, province, by),

        Commands::Random { seed, by } => commands::random::run(dataset, seed, by),

        Commands::Recommend => commands::recommend::run(dataset),

        Commands::Stats { json } => commands::stats::run(dataset, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, honouring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
