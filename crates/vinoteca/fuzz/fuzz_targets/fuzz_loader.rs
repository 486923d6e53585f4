//! Fuzz target for the dataset loader.
//!
//! The loader must never panic, whatever bytes it is handed, and any
//! dataset it accepts must survive the drill-down lookups.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vinoteca::{Dataset, DrillLevel, Loader};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let text = String::from_utf8_lossy(data);
    if let Ok((wines, _shape)) = Loader::new().load_str(&text) {
        let dataset = Dataset::from_wines(wines);
        for country in dataset.unique_countries() {
            for area in dataset.unique_areas(&country, DrillLevel::Province) {
                let _ = dataset.unique_varieties_for_area(&country, DrillLevel::Province, &area);
            }
        }
        let _ = dataset.summary();
    }
});
