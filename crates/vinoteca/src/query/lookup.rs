//! Unique value lookups for the country → region/province → variety drill-down.
//!
//! Candidate records are selected case-insensitively, and distinct values are
//! collected case-insensitively too: the first spelling seen wins. Output
//! keeps first-seen dataset order.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::record::Wine;

use super::eq_ignore_case;

/// Field used as the second drill-down dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillLevel {
    /// The `region_1` field.
    Region,
    /// The `province` field.
    #[default]
    Province,
}

impl DrillLevel {
    /// The area value of a wine at this level.
    pub fn area_of(self, wine: &Wine) -> &str {
        match self {
            DrillLevel::Region => &wine.region,
            DrillLevel::Province => &wine.province,
        }
    }
}

impl FromStr for DrillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "region" | "region_1" => Ok(DrillLevel::Region),
            "province" => Ok(DrillLevel::Province),
            _ => Err(format!("Unknown drill-down level: {}. Use region or province.", s)),
        }
    }
}

impl fmt::Display for DrillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrillLevel::Region => write!(f, "region"),
            DrillLevel::Province => write!(f, "province"),
        }
    }
}

/// Collect distinct non-empty values in first-seen order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: IndexMap<String, &str> = IndexMap::new();
    for value in values.filter(|v| !v.is_empty()) {
        seen.entry(value.to_lowercase()).or_insert(value);
    }
    seen.into_values().map(str::to_string).collect()
}

impl Dataset {
    /// Distinct non-empty countries.
    pub fn unique_countries(&self) -> Vec<String> {
        distinct(self.wines().iter().map(|w| w.country.as_str()))
    }

    /// Distinct non-empty varieties across the whole dataset.
    pub fn unique_varieties(&self) -> Vec<String> {
        distinct(self.wines().iter().map(|w| w.variety.as_str()))
    }

    /// Distinct areas (regions or provinces) among wines from `country`.
    ///
    /// An empty `country` means nothing is chosen yet and yields no areas.
    pub fn unique_areas(&self, country: &str, level: DrillLevel) -> Vec<String> {
        if country.is_empty() {
            return Vec::new();
        }
        distinct(
            self.wines()
                .iter()
                .filter(|w| eq_ignore_case(&w.country, country))
                .map(|w| level.area_of(w)),
        )
    }

    /// Distinct varieties among wines from `country` and `area`.
    pub fn unique_varieties_for_area(
        &self,
        country: &str,
        level: DrillLevel,
        area: &str,
    ) -> Vec<String> {
        if country.is_empty() || area.is_empty() {
            return Vec::new();
        }
        distinct(
            self.wines()
                .iter()
                .filter(|w| eq_ignore_case(&w.country, country))
                .filter(|w| eq_ignore_case(level.area_of(w), area))
                .map(|w| w.variety.as_str()),
        )
    }

    pub fn unique_regions_for_country(&self, country: &str) -> Vec<String> {
        self.unique_areas(country, DrillLevel::Region)
    }

    pub fn unique_provinces_for_country(&self, country: &str) -> Vec<String> {
        self.unique_areas(country, DrillLevel::Province)
    }

    pub fn unique_varieties_for_region(&self, country: &str, region: &str) -> Vec<String> {
        self.unique_varieties_for_area(country, DrillLevel::Region, region)
    }

    pub fn unique_varieties_for_province(&self, country: &str, province: &str) -> Vec<String> {
        self.unique_varieties_for_area(country, DrillLevel::Province, province)
    }
}
