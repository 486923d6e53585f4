//! Serve command - run the web server.

use std::path::Path;

use colored::Colorize;
use tracing::warn;
use vinoteca::Dataset;
use vinoteca_cli::{run_server, AppState, ServerConfig};

pub fn run(dataset_path: &Path, config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // A load failure ends here, before anything listens
    let dataset = Dataset::load(dataset_path)?;
    let wines = dataset.len();

    let state = AppState::new(dataset, config)?;
    let url = state.config.url();

    println!();
    println!(
        "{} {}",
        "Starting Vinoteca at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  Dataset: {} ({} wines)", dataset_path.display(), wines);
    if let Some(dir) = &state.config.static_dir {
        println!("  Static:  {}", dir.display());
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    if state.config.open_browser {
        if let Err(e) = open::that(&url) {
            warn!(error = %e, "Could not open browser");
        }
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(state))
}
