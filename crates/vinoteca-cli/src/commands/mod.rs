//! CLI command implementations.

pub mod filter;
pub mod lookup;
pub mod random;
pub mod recommend;
pub mod serve;
pub mod stats;
