//! The in-memory wine dataset.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::{DatasetMetadata, Loader, LoaderConfig};
use crate::record::{country_flag, Wine};

/// Every wine loaded at startup, immutable afterwards.
///
/// Lookup and filter operations live in [`crate::query`] as inherent
/// methods on this type.
#[derive(Debug, Clone)]
pub struct Dataset {
    wines: Vec<Wine>,
    metadata: Option<DatasetMetadata>,
}

/// Aggregate numbers describing a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_wines: usize,
    pub countries: usize,
    pub varieties: usize,
    pub wineries: usize,
    /// Wines that carry a price.
    pub priced_wines: usize,
    /// Mean score over all wines (0.0 for an empty dataset).
    pub average_points: f64,
    /// Wine count per country, in first-seen order.
    pub wines_by_country: Vec<(String, usize)>,
    /// Countries present in the data but missing from the flag table.
    pub unflagged_countries: Vec<String>,
}

impl Dataset {
    /// Load a dataset file with the default loader.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_config(path, LoaderConfig::default())
    }

    /// Load a dataset file with a custom loader configuration.
    pub fn load_with_config(path: impl AsRef<Path>, config: LoaderConfig) -> Result<Self> {
        let (wines, metadata) = Loader::with_config(config).load_file(path)?;
        Ok(Self {
            wines,
            metadata: Some(metadata),
        })
    }

    /// Build a dataset from records already in memory.
    ///
    /// Flags are derived here the same way the loader derives them.
    pub fn from_wines(mut wines: Vec<Wine>) -> Self {
        for wine in &mut wines {
            wine.refresh_flag();
        }
        Self {
            wines,
            metadata: None,
        }
    }

    pub fn wines(&self) -> &[Wine] {
        &self.wines
    }

    pub fn len(&self) -> usize {
        self.wines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wines.is_empty()
    }

    /// Source metadata, present when the dataset came from a file.
    pub fn metadata(&self) -> Option<&DatasetMetadata> {
        self.metadata.as_ref()
    }

    /// Compute summary numbers for the dataset.
    pub fn summary(&self) -> DatasetSummary {
        let countries = self.unique_countries();

        let mut by_country: HashMap<String, usize> = HashMap::new();
        for wine in self.wines.iter().filter(|w| !w.country.is_empty()) {
            *by_country.entry(wine.country.to_lowercase()).or_default() += 1;
        }
        let wines_by_country = countries
            .iter()
            .map(|c| (c.clone(), by_country.get(&c.to_lowercase()).copied().unwrap_or(0)))
            .collect();

        let unflagged_countries = countries
            .iter()
            .filter(|c| country_flag(c).is_none())
            .cloned()
            .collect();

        let mut wineries: Vec<&str> = self
            .wines
            .iter()
            .map(|w| w.winery.as_str())
            .filter(|w| !w.is_empty())
            .collect();
        wineries.sort_unstable();
        wineries.dedup();

        let average_points = if self.wines.is_empty() {
            0.0
        } else {
            self.wines.iter().map(|w| f64::from(w.points)).sum::<f64>() / self.wines.len() as f64
        };

        DatasetSummary {
            total_wines: self.wines.len(),
            countries: countries.len(),
            varieties: self.unique_varieties().len(),
            wineries: wineries.len(),
            priced_wines: self.wines.iter().filter(|w| w.has_price()).count(),
            average_points,
            wines_by_country,
            unflagged_countries,
        }
    }
}
