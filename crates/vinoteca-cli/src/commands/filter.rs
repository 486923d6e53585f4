//! Filter command - list wines matching marketplace filters.

use std::path::Path;

use colored::Colorize;
use vinoteca::{Dataset, FilterCriteria};

pub fn run(
    dataset_path: &Path,
    min_points: u32,
    max_price: Option<f64>,
    country: Option<String>,
    variety: Option<String>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = Dataset::load(dataset_path)?;

    let mut criteria = FilterCriteria::new()
        .with_min_points(min_points)
        .with_country(country.unwrap_or_default())
        .with_variety(variety.unwrap_or_default());
    if let Some(max) = max_price {
        criteria = criteria.with_max_price(max);
    }

    let wines = dataset.filter(&criteria);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&wines)?);
        return Ok(());
    }

    for wine in &wines {
        let price = if wine.has_price() {
            format!("${:.2}", wine.price)
        } else {
            "no price".to_string()
        };
        println!(
            "{} {} {}",
            format!("{:>3}", wine.points).green().bold(),
            wine.title.white(),
            format!("({})", price).dimmed()
        );
        println!(
            "    {} {} | {}",
            wine.country_flag,
            wine.country,
            wine.variety.cyan()
        );
    }
    println!();
    println!("{} wines found", wines.len().to_string().white().bold());

    Ok(())
}
