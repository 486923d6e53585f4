//! Vinoteca web server: HTML pages, a JSON API and embedded assets over an
//! in-memory wine dataset.

pub mod config;
pub mod server;
pub mod web;

pub use config::ServerConfig;
pub use server::{create_router, run_server, AppState};
