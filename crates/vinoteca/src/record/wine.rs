//! The wine record.

use serde::{Deserialize, Deserializer, Serialize};

use super::flags::country_flag;

/// One tasted wine entry.
///
/// Every field is optional in the source: a missing key or an explicit
/// `null` leaves the zero value of the field's type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wine {
    /// Quality score on a 0-100 scale.
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub taster_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub taster_twitter_handle: String,

    /// Bottle price; zero when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub designation: String,

    /// Grape variety.
    #[serde(default, deserialize_with = "null_as_default")]
    pub variety: String,

    #[serde(rename = "region_1", default, deserialize_with = "null_as_default")]
    pub region: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub province: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub winery: String,

    /// Wine color (red, white, rosé), used by the questionnaire.
    #[serde(
        rename = "type",
        alias = "color",
        default,
        deserialize_with = "null_as_default"
    )]
    pub color: String,

    /// Taste profile (dry, sweet, fruity), used by the questionnaire.
    #[serde(default, deserialize_with = "null_as_default")]
    pub taste: String,

    /// Intended occasion, used by the questionnaire.
    #[serde(default, deserialize_with = "null_as_default")]
    pub occasion: String,

    /// Flag emoji derived from `country`. Never read from the source.
    #[serde(default, skip_deserializing)]
    pub country_flag: String,
}

impl Wine {
    /// Recompute the derived flag from the current country.
    pub fn refresh_flag(&mut self) {
        self.country_flag = country_flag(&self.country).unwrap_or_default().to_string();
    }

    /// Whether the source carried a price for this wine.
    pub fn has_price(&self) -> bool {
        self.price > 0.0
    }
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default() {
        let wine: Wine = serde_json::from_str("{}").unwrap();
        assert_eq!(wine, Wine::default());
        assert_eq!(wine.points, 0);
        assert_eq!(wine.price, 0.0);
        assert!(wine.country.is_empty());
    }

    #[test]
    fn test_null_values_default() {
        let wine: Wine = serde_json::from_str(
            r#"{"price": null, "taster_name": null, "region_1": null, "points": 88}"#,
        )
        .unwrap();
        assert_eq!(wine.points, 88);
        assert_eq!(wine.price, 0.0);
        assert!(wine.taster_name.is_empty());
        assert!(wine.region.is_empty());
    }

    #[test]
    fn test_source_keys() {
        let wine: Wine = serde_json::from_str(
            r#"{
                "points": 87,
                "title": "Nicosia 2013 Vulkà Bianco (Etna)",
                "taster_twitter_handle": "@kerinokeefe",
                "region_1": "Etna",
                "province": "Sicily & Sardinia",
                "country": "Italy",
                "variety": "White Blend",
                "type": "white",
                "unknown_key": [1, 2, 3]
            }"#,
        )
        .unwrap();
        assert_eq!(wine.region, "Etna");
        assert_eq!(wine.province, "Sicily & Sardinia");
        assert_eq!(wine.taster_twitter_handle, "@kerinokeefe");
        assert_eq!(wine.color, "white");
    }

    #[test]
    fn test_color_alias() {
        let wine: Wine = serde_json::from_str(r#"{"color": "red"}"#).unwrap();
        assert_eq!(wine.color, "red");
    }

    #[test]
    fn test_flag_is_not_read_from_source() {
        let wine: Wine =
            serde_json::from_str(r#"{"country": "Atlantis", "country_flag": "🏳"}"#).unwrap();
        assert!(wine.country_flag.is_empty());
    }

    #[test]
    fn test_refresh_flag() {
        let mut wine = Wine {
            country: "Chile".to_string(),
            ..Default::default()
        };
        wine.refresh_flag();
        assert_eq!(wine.country_flag, "🇨🇱");

        wine.country = "Narnia".to_string();
        wine.refresh_flag();
        assert!(wine.country_flag.is_empty());
    }
}
