//! Query string parameters.
//!
//! Every field is kept as raw text so a malformed value falls back to its
//! default instead of rejecting the request.

use std::str::FromStr;

use serde::Deserialize;
use vinoteca::{FilterCriteria, RandomAction, Selection};

/// Marketplace and `/api/wines` filter parameters.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    #[serde(rename = "minPoints")]
    pub min_points: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub country: Option<String>,
    pub variety: Option<String>,
}

impl FilterParams {
    pub fn criteria(&self, default_max_price: f64) -> FilterCriteria {
        FilterCriteria::new()
            .with_min_points(parse_or(self.min_points.as_deref(), 0))
            .with_max_price(parse_or(self.max_price.as_deref(), default_max_price))
            .with_country(self.country.clone().unwrap_or_default())
            .with_variety(self.variety.clone().unwrap_or_default())
    }
}

/// Drill-down parameters shared by the selection pages and API.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionParams {
    pub country: Option<String>,
    pub region: Option<String>,
    pub province: Option<String>,
    pub variety: Option<String>,
    pub action: Option<String>,
}

impl SelectionParams {
    /// Selection whose area is the `region` parameter.
    pub fn by_region(&self) -> Selection {
        Selection::new(text(&self.country), text(&self.region), text(&self.variety))
    }

    /// Selection whose area is the `province` parameter.
    pub fn by_province(&self) -> Selection {
        Selection::new(text(&self.country), text(&self.province), text(&self.variety))
    }

    /// The requested random action; unknown actions are ignored.
    pub fn action(&self) -> Option<RandomAction> {
        self.action.as_deref().and_then(|a| a.parse().ok())
    }
}

fn text(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Parse a value, using `default` when it is missing, empty or malformed.
pub fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
