//! Random drill-down exploration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

use super::lookup::DrillLevel;
use super::selection::Selection;

/// Which level of the selection to re-randomize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomAction {
    /// Pick a new country and clear the lower levels.
    #[serde(rename = "randomCountry")]
    RandomCountry,
    /// Pick a new area, choosing a country first if none is set.
    #[serde(rename = "randomProvince", alias = "randomRegion")]
    RandomArea,
    /// Pick a new variety, filling in any missing higher level first.
    #[serde(rename = "randomVariety")]
    RandomVariety,
}

impl FromStr for RandomAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "randomCountry" => Ok(RandomAction::RandomCountry),
            "randomProvince" | "randomRegion" => Ok(RandomAction::RandomArea),
            "randomVariety" => Ok(RandomAction::RandomVariety),
            _ => Err(format!("Unknown action: {}", s)),
        }
    }
}

impl fmt::Display for RandomAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomAction::RandomCountry => write!(f, "randomCountry"),
            RandomAction::RandomArea => write!(f, "randomProvince"),
            RandomAction::RandomVariety => write!(f, "randomVariety"),
        }
    }
}

/// Picks uniformly random drill-down values from a dataset.
#[derive(Debug)]
pub struct Explorer<'a> {
    dataset: &'a Dataset,
    level: DrillLevel,
    rng: fastrand::Rng,
}

impl<'a> Explorer<'a> {
    /// Create an explorer seeded from the system.
    pub fn new(dataset: &'a Dataset, level: DrillLevel) -> Self {
        Self::with_rng(dataset, level, fastrand::Rng::new())
    }

    /// Create an explorer with a deterministic seed.
    pub fn with_seed(dataset: &'a Dataset, level: DrillLevel, seed: u64) -> Self {
        Self::with_rng(dataset, level, fastrand::Rng::with_seed(seed))
    }

    pub fn with_rng(dataset: &'a Dataset, level: DrillLevel, rng: fastrand::Rng) -> Self {
        Self {
            dataset,
            level,
            rng,
        }
    }

    /// A random country, or an empty string if the dataset has none.
    pub fn random_country(&mut self) -> String {
        let countries = self.dataset.unique_countries();
        self.pick(countries)
    }

    /// A random area of `country`, or an empty string if it has none.
    pub fn random_area(&mut self, country: &str) -> String {
        let areas = self.dataset.unique_areas(country, self.level);
        self.pick(areas)
    }

    /// A random variety of `country` and `area`, or an empty string.
    pub fn random_variety(&mut self, country: &str, area: &str) -> String {
        let varieties = self.dataset.unique_varieties_for_area(country, self.level, area);
        self.pick(varieties)
    }

    /// Pick a full random selection, top to bottom.
    pub fn random_selection(&mut self) -> Selection {
        let country = self.random_country();
        let area = self.random_area(&country);
        let variety = self.random_variety(&country, &area);
        Selection::new(country, area, variety)
    }

    /// Apply an action to the current selection and return the new one.
    pub fn apply(&mut self, action: RandomAction, current: &Selection) -> Selection {
        let mut next = current.clone();
        match action {
            RandomAction::RandomCountry => {
                next.country = self.random_country();
                next.area.clear();
                next.variety.clear();
            }
            RandomAction::RandomArea => {
                if next.country.is_empty() {
                    next.country = self.random_country();
                }
                next.area = self.random_area(&next.country);
                next.variety.clear();
            }
            RandomAction::RandomVariety => {
                if next.country.is_empty() {
                    next.country = self.random_country();
                }
                if next.area.is_empty() {
                    next.area = self.random_area(&next.country);
                }
                next.variety = self.random_variety(&next.country, &next.area);
            }
        }
        next
    }

    fn pick(&mut self, mut candidates: Vec<String>) -> String {
        if candidates.is_empty() {
            return String::new();
        }
        let index = self.rng.usize(..candidates.len());
        candidates.swap_remove(index)
    }
}
