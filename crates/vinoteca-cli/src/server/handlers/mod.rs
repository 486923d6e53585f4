//! Request handlers.

mod api;
mod health;
mod pages;
pub mod params;

pub use api::*;
pub use health::*;
pub use pages::*;
