//! Stats command - show a dataset summary.

use std::path::Path;

use colored::Colorize;
use vinoteca::{country_flag, Dataset};

pub fn run(dataset_path: &Path, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::load(dataset_path)?;
    let summary = dataset.summary();

    if json_output {
        let stats = serde_json::json!({
            "source": dataset.metadata(),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    if let Some(metadata) = dataset.metadata() {
        println!(
            "{} {}",
            "Dataset summary for".cyan().bold(),
            metadata.file.white()
        );
        println!(
            "  {} bytes, parsed as {}, {}",
            metadata.size_bytes, metadata.shape, metadata.hash
        );
        println!();
    }

    println!("{}", "Wines:".yellow().bold());
    println!("  Total:      {}", summary.total_wines.to_string().white().bold());
    println!("  Priced:     {}", summary.priced_wines);
    println!("  Avg points: {:.1}", summary.average_points);
    println!();

    println!("{}", "Distinct values:".yellow().bold());
    println!("  Countries:  {}", summary.countries);
    println!("  Varieties:  {}", summary.varieties);
    println!("  Wineries:   {}", summary.wineries);
    println!();

    if !summary.wines_by_country.is_empty() {
        println!("{}", "By country:".yellow().bold());
        let mut by_country = summary.wines_by_country.clone();
        by_country.sort_by(|a, b| b.1.cmp(&a.1));
        for (country, count) in by_country.iter().take(10) {
            let flag = country_flag(country).unwrap_or("  ");
            println!("  {} {:<20} {}", flag, country, count);
        }
        println!();
    }

    if !summary.unflagged_countries.is_empty() {
        println!(
            "{} no flag for {}",
            "Note:".yellow(),
            summary.unflagged_countries.join(", ")
        );
    }

    Ok(())
}
