//! Threshold and exact-match filtering.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::record::Wine;

use super::eq_ignore_case;
use super::lookup::DrillLevel;
use super::selection::Selection;

/// Marketplace filter: score and price thresholds plus optional exact matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Minimum score (inclusive).
    pub min_points: u32,
    /// Maximum price (inclusive).
    pub max_price: f64,
    /// Exact country, compared case-insensitively.
    pub country: Option<String>,
    /// Exact variety, compared case-insensitively.
    pub variety: Option<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_points: 0,
            max_price: f64::INFINITY,
            country: None,
            variety: None,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_points(mut self, min_points: u32) -> Self {
        self.min_points = min_points;
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = max_price;
        self
    }

    /// Require a country. An empty string leaves the country unconstrained.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into()).filter(|c| !c.is_empty());
        self
    }

    /// Require a variety. An empty string leaves the variety unconstrained.
    pub fn with_variety(mut self, variety: impl Into<String>) -> Self {
        self.variety = Some(variety.into()).filter(|v| !v.is_empty());
        self
    }

    /// Check whether a wine satisfies every criterion.
    pub fn matches(&self, wine: &Wine) -> bool {
        wine.points >= self.min_points
            && wine.price <= self.max_price
            && matches_optional(self.country.as_deref(), &wine.country)
            && matches_optional(self.variety.as_deref(), &wine.variety)
    }
}

/// An absent or empty criterion matches everything.
fn matches_optional(criterion: Option<&str>, value: &str) -> bool {
    match criterion {
        Some(expected) if !expected.is_empty() => eq_ignore_case(value, expected),
        _ => true,
    }
}

impl Dataset {
    /// Wines satisfying the criteria, in dataset order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&Wine> {
        self.wines().iter().filter(|w| criteria.matches(w)).collect()
    }

    /// Wines matching a drill-down selection, in dataset order.
    ///
    /// The country is required; an empty country selects nothing. Area and
    /// variety constrain the result only when non-empty.
    pub fn filter_by_selection(&self, selection: &Selection, level: DrillLevel) -> Vec<&Wine> {
        if selection.country.is_empty() {
            return Vec::new();
        }

        self.wines()
            .iter()
            .filter(|w| eq_ignore_case(&w.country, &selection.country))
            .filter(|w| matches_optional(Some(selection.area.as_str()), level.area_of(w)))
            .filter(|w| matches_optional(Some(selection.variety.as_str()), &w.variety))
            .collect()
    }
}
