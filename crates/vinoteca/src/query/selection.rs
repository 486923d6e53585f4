//! In-progress drill-down choice.

use serde::{Deserialize, Serialize};

/// A user's drill-down choice: country, then area, then variety.
///
/// Empty strings mean "not chosen yet". A selection is a plain value owned
/// by whoever is handling the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub country: String,
    /// Region or province, depending on the drill-down level.
    pub area: String,
    pub variety: String,
}

impl Selection {
    pub fn new(
        country: impl Into<String>,
        area: impl Into<String>,
        variety: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            area: area.into(),
            variety: variety.into(),
        }
    }

    /// Whether all three levels have been chosen.
    pub fn is_complete(&self) -> bool {
        !self.country.is_empty() && !self.area.is_empty() && !self.variety.is_empty()
    }
}
