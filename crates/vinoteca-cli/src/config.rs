//! Server configuration.

use std::path::PathBuf;

/// Price cap applied when a request does not carry a usable `maxPrice`.
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Settings for the HTTP server, resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve `/static` from this directory instead of the embedded assets.
    pub static_dir: Option<PathBuf>,
    pub default_max_price: f64,
    /// Open the index page in a browser once the server starts.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: None,
            default_max_price: DEFAULT_MAX_PRICE,
            open_browser: false,
        }
    }
}

impl ServerConfig {
    /// Bind address in `host:port` form.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr())
    }
}
