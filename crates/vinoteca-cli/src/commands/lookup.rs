//! Lookup command - print the next drill-down level.

use std::path::Path;

use colored::Colorize;
use vinoteca::{country_flag, Dataset, DrillLevel};

pub fn run(
    dataset_path: &Path,
    country: Option<String>,
    region: Option<String>,
    province: Option<String>,
    by: DrillLevel,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::load(dataset_path)?;

    let (heading, values) = match (country, region, province) {
        (None, _, _) => ("Countries".to_string(), dataset.unique_countries()),
        (Some(country), Some(region), _) => (
            format!("Varieties of {}, {}", country, region),
            dataset.unique_varieties_for_region(&country, &region),
        ),
        (Some(country), None, Some(province)) => (
            format!("Varieties of {}, {}", country, province),
            dataset.unique_varieties_for_province(&country, &province),
        ),
        (Some(country), None, None) => {
            let heading = match by {
                DrillLevel::Region => format!("Regions of {}", country),
                DrillLevel::Province => format!("Provinces of {}", country),
            };
            (heading, dataset.unique_areas(&country, by))
        }
    };

    println!("{}", heading.cyan().bold());
    if values.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for value in &values {
        match country_flag(value) {
            Some(flag) => println!("  {} {}", flag, value),
            None => println!("  {}", value),
        }
    }

    Ok(())
}
