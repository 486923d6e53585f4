//! Drill-down lookups, filtering and random exploration over a dataset.

mod filter;
mod lookup;
mod random;
mod selection;

pub use filter::FilterCriteria;
pub use lookup::DrillLevel;
pub use random::{Explorer, RandomAction};
pub use selection::Selection;

/// Case-insensitive comparison using Unicode lowercase mapping.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
