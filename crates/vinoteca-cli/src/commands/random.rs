//! Random command - one random drill-down.

use std::path::Path;

use colored::Colorize;
use vinoteca::{Dataset, DrillLevel, Explorer};

pub fn run(
    dataset_path: &Path,
    seed: Option<u64>,
    by: DrillLevel,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::load(dataset_path)?;

    let mut explorer = match seed {
        Some(seed) => Explorer::with_seed(&dataset, by, seed),
        None => Explorer::new(&dataset, by),
    };
    let selection = explorer.random_selection();

    if selection.country.is_empty() {
        println!("{}", "The dataset has no countries to pick from.".yellow());
        return Ok(());
    }

    let wines = dataset.filter_by_selection(&selection, by);
    let area_label = match by {
        DrillLevel::Region => "Region",
        DrillLevel::Province => "Province",
    };

    println!("{}", "Random selection".cyan().bold());
    println!("  Country:  {}", selection.country.white());
    println!("  {:<9} {}", format!("{}:", area_label), or_none(&selection.area));
    println!("  Variety:  {}", or_none(&selection.variety));
    println!();
    println!("{} wines match", wines.len().to_string().white().bold());
    for wine in wines.iter().take(10) {
        println!("  {} {}", format!("{:>3}", wine.points).green(), wine.title);
    }

    Ok(())
}

fn or_none(value: &str) -> String {
    if value.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        value.white().to_string()
    }
}
