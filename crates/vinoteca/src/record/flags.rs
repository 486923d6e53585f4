//! Country name to flag emoji table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Country names as they appear in the dataset, mapped to their flag.
static COUNTRY_FLAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("US", "🇺🇸"),
        ("France", "🇫🇷"),
        ("Italy", "🇮🇹"),
        ("Spain", "🇪🇸"),
        ("Portugal", "🇵🇹"),
        ("Argentina", "🇦🇷"),
        ("Chile", "🇨🇱"),
        ("Australia", "🇦🇺"),
        ("New Zealand", "🇳🇿"),
        ("South Africa", "🇿🇦"),
        ("Germany", "🇩🇪"),
        ("Austria", "🇦🇹"),
        ("Greece", "🇬🇷"),
        ("Canada", "🇨🇦"),
        ("Brazil", "🇧🇷"),
        ("Bulgaria", "🇧🇬"),
        ("Hungary", "🇭🇺"),
        ("Slovenia", "🇸🇮"),
        ("Romania", "🇷🇴"),
        ("Croatia", "🇭🇷"),
        ("Georgia", "🇬🇪"),
        ("Mexico", "🇲🇽"),
        ("Turkey", "🇹🇷"),
        ("Israel", "🇮🇱"),
        ("Ukraine", "🇺🇦"),
        ("Uruguay", "🇺🇾"),
        ("Lebanon", "🇱🇧"),
        ("Moldova", "🇲🇩"),
        ("Czech Republic", "🇨🇿"),
        ("Serbia", "🇷🇸"),
        ("India", "🇮🇳"),
        ("China", "🇨🇳"),
        ("England", "🏴"),
    ])
});

/// Look up the flag for a country.
///
/// Matching is exact and case-sensitive; unknown countries have no flag.
pub fn country_flag(country: &str) -> Option<&'static str> {
    COUNTRY_FLAGS.get(country).copied()
}
