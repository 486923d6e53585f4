//! Application state for the web server.

use std::sync::Arc;

use handlebars::{Handlebars, TemplateError};
use vinoteca::Dataset;

use crate::config::ServerConfig;
use crate::web::template_registry;

/// Shared application state. Nothing in it changes after startup.
#[derive(Clone)]
pub struct AppState {
    /// The loaded wine dataset.
    pub dataset: Arc<Dataset>,
    /// Page templates.
    pub views: Arc<Handlebars<'static>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create application state, compiling the embedded templates.
    pub fn new(dataset: Dataset, config: ServerConfig) -> Result<Self, TemplateError> {
        Ok(Self {
            dataset: Arc::new(dataset),
            views: Arc::new(template_registry()?),
            config: Arc::new(config),
        })
    }
}
