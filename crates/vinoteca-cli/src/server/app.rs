//! Axum application setup.

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/wines", get(handlers::list_wines))
        .route("/selection", get(handlers::selected_wines))
        // Drill-down lookups
        .route("/countries", get(handlers::list_countries))
        .route("/countries/:country/regions", get(handlers::list_regions))
        .route("/countries/:country/provinces", get(handlers::list_provinces))
        .route(
            "/countries/:country/regions/:region/varieties",
            get(handlers::list_region_varieties),
        )
        .route(
            "/countries/:country/provinces/:province/varieties",
            get(handlers::list_province_varieties),
        );

    // Assets on disk take precedence over the embedded copies
    let static_routes: Router<AppState> = match &state.config.static_dir {
        Some(dir) => Router::new().nest_service("/static", ServeDir::new(dir)),
        None => Router::new().route("/static/*path", get(static_handler)),
    };

    Router::new()
        .route("/", get(handlers::index))
        .route("/marketplace", get(handlers::marketplace))
        .route("/wine-selection", get(handlers::wine_selection))
        .route("/random-wine-selection", get(handlers::random_wine_selection))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .merge(static_routes)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server and run until Ctrl+C.
pub async fn run_server(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let addr = state.config.addr();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
