//! HTTP server.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;

pub use app::{create_router, run_server};
pub use state::AppState;
