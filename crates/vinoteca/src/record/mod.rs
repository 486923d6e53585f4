//! Wine record model.

mod flags;
mod wine;

pub use flags::country_flag;
pub use wine::Wine;
