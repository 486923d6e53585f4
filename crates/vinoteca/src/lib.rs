//! Vinoteca: an in-memory wine dataset with drill-down lookups and filtering.
//!
//! A dataset is loaded once from a JSON file and is read-only afterwards.
//! Every query is a linear scan over the loaded records.
//!
//! # Drill-down
//!
//! Choices narrow from country to region (or province) to grape variety;
//! each level's options depend on the levels above it.
//!
//! # Example
//!
//! ```no_run
//! use vinoteca::{Dataset, FilterCriteria};
//!
//! let dataset = Dataset::load("wine-data-set.json").unwrap();
//!
//! println!("Countries: {:?}", dataset.unique_countries());
//!
//! let criteria = FilterCriteria::new().with_min_points(90).with_country("France");
//! println!("Matches: {}", dataset.filter(&criteria).len());
//! ```

pub mod error;
pub mod input;
pub mod query;
pub mod record;
pub mod recommend;

mod dataset;

pub use crate::dataset::{Dataset, DatasetSummary};
pub use error::{Result, VinotecaError};
pub use input::{DatasetMetadata, Loader, LoaderConfig, SourceShape};
pub use query::{eq_ignore_case, DrillLevel, Explorer, FilterCriteria, RandomAction, Selection};
pub use record::{country_flag, Wine};
pub use recommend::Preferences;
