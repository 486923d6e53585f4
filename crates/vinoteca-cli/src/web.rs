//! Embedded page templates and static files for the web UI.

use axum::{
    body::Body,
    extract::Path,
    http::header,
    response::Response,
};
use handlebars::{Handlebars, TemplateError};
use rust_embed::RustEmbed;

use crate::server::error::ApiError;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/"]
struct Templates;

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/static/"]
pub struct StaticAssets;

/// Build a registry holding every embedded template, keyed by file stem.
///
/// Templates may include each other as partials (`{{> header}}`).
pub fn template_registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut registry = Handlebars::new();

    for file in Templates::iter() {
        let Some(name) = file.strip_suffix(".hbs") else {
            continue;
        };
        if let Some(content) = Templates::get(&file) {
            let source = String::from_utf8_lossy(&content.data);
            registry.register_template_string(name, source)?;
        }
    }

    Ok(registry)
}

/// Serve an embedded static file.
pub async fn static_handler(Path(path): Path<String>) -> Result<Response, ApiError> {
    let content = StaticAssets::get(&path)
        .ok_or_else(|| ApiError::NotFound(format!("Static file not found: {}", path)))?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Response::builder()
        .header(header::CONTENT_TYPE, mime.as_ref())
        .body(Body::from(content.data.into_owned()))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_every_page() {
        let registry = template_registry().unwrap();
        for name in [
            "index",
            "marketplace",
            "wine-selection",
            "random-wine-selection",
            "header",
            "footer",
        ] {
            assert!(registry.has_template(name), "missing template {}", name);
        }
    }

    #[test]
    fn test_stylesheet_is_embedded() {
        assert!(StaticAssets::get("style.css").is_some());
    }
}
