//! Integration tests for the Vinoteca HTTP routes.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::io::Write;
use tower::util::ServiceExt; // for `oneshot` method
use vinoteca::{Dataset, Wine};
use vinoteca_cli::{create_router, AppState, ServerConfig};

fn wine(title: &str, country: &str, province: &str, region: &str, variety: &str, points: u32, price: f64) -> Wine {
    Wine {
        title: title.to_string(),
        country: country.to_string(),
        province: province.to_string(),
        region: region.to_string(),
        variety: variety.to_string(),
        points,
        price,
        ..Default::default()
    }
}

/// Test helper: the two-record example plus a second French wine.
fn sample_dataset() -> Dataset {
    Dataset::from_wines(vec![
        wine("Clos des Mouches", "France", "Burgundy", "Beaune", "Pinot Noir", 90, 20.0),
        wine("Valle Central", "Chile", "Central Valley", "", "Merlot", 80, 15.0),
        wine("Pauillac", "France", "Bordeaux", "Pauillac", "Cabernet Sauvignon", 95, 2000.0),
    ])
}

fn setup_app_with(config: ServerConfig) -> Router {
    let state = AppState::new(sample_dataset(), config).expect("Templates should compile");
    create_router(state)
}

fn setup_app() -> Router {
    setup_app_with(ServerConfig::default())
}

fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn extract_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn get_json(app: Router, uri: &str) -> Value {
    let response = app.oneshot(test_request(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
    extract_json(response.into_body()).await
}

async fn get_html(app: Router, uri: &str) -> String {
    let response = app.oneshot(test_request(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
    extract_text(response.into_body()).await
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let body = get_json(setup_app(), "/health").await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "vinoteca");
    assert!(body["version"].is_string());
    assert_eq!(body["wines"], 3);
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_index_page() {
    let html = get_html(setup_app(), "/").await;
    assert!(html.contains("/marketplace"));
    assert!(html.contains("/random-wine-selection"));
    assert!(html.contains("3 wines from 2 countries"));
}

#[tokio::test]
async fn test_marketplace_default_price_cap() {
    let html = get_html(setup_app(), "/marketplace").await;
    assert!(html.contains("2 wines found"));
    assert!(html.contains("Clos des Mouches"));
    assert!(!html.contains("<h3>Pauillac</h3>"));
}

#[tokio::test]
async fn test_marketplace_min_points() {
    let html = get_html(setup_app(), "/marketplace?minPoints=85").await;
    assert!(html.contains("1 wines found"));
    assert!(html.contains("Clos des Mouches"));
    assert!(!html.contains("Valle Central"));
}

#[tokio::test]
async fn test_marketplace_malformed_params_use_defaults() {
    let html = get_html(setup_app(), "/marketplace?minPoints=abc&maxPrice=xyz").await;
    assert!(html.contains("2 wines found"));
}

#[tokio::test]
async fn test_marketplace_configured_price_cap() {
    let config = ServerConfig {
        default_max_price: 5000.0,
        ..Default::default()
    };
    let html = get_html(setup_app_with(config), "/marketplace").await;
    assert!(html.contains("3 wines found"));
}

#[tokio::test]
async fn test_marketplace_dropdowns() {
    let html = get_html(setup_app(), "/marketplace?country=France").await;
    assert!(html.contains("🇫🇷 France"));
    assert!(html.contains("<option value=\"France\" selected>"));
    assert!(html.contains("Merlot"));
}

#[tokio::test]
async fn test_wine_selection_drill_down() {
    let html = get_html(setup_app(), "/wine-selection").await;
    assert!(html.contains("Choose a country"));
    assert!(!html.contains("Choose a region"));

    let html = get_html(setup_app(), "/wine-selection?country=France").await;
    assert!(html.contains("Choose a region"));
    assert!(html.contains("Beaune"));
    assert!(!html.contains("Choose a variety"));

    let html = get_html(
        setup_app(),
        "/wine-selection?country=France&region=Beaune&variety=Pinot%20Noir",
    )
    .await;
    assert!(html.contains("<h3>Clos des Mouches</h3>"));
    assert!(!html.contains("<h3>Pauillac</h3>"));
}

#[tokio::test]
async fn test_wine_selection_drops_stale_lower_levels() {
    // Region and variety left over from France after switching to Chile
    let html = get_html(
        setup_app(),
        "/wine-selection?country=Chile&region=Beaune&variety=Pinot%20Noir",
    )
    .await;
    assert!(html.contains("<option value=\"Chile\" selected>"));
    assert!(!html.contains("Beaune"));
    assert!(!html.contains("Choose a variety"));
    assert!(!html.contains("wines from"));

    // A variety that does not grow in the chosen region is dropped too
    let html = get_html(
        setup_app(),
        "/wine-selection?country=France&region=Beaune&variety=Merlot",
    )
    .await;
    assert!(html.contains("<option value=\"Beaune\" selected>"));
    assert!(html.contains("Choose a variety"));
    assert!(!html.contains("wines from"));
}

#[tokio::test]
async fn test_random_selection_without_action() {
    let html = get_html(setup_app(), "/random-wine-selection").await;
    assert!(html.contains("randomCountry"));
    assert!(html.contains("None yet"));
}

#[tokio::test]
async fn test_random_selection_carries_state_in_query() {
    let html = get_html(
        setup_app(),
        "/random-wine-selection?action=randomVariety&country=France&province=Bordeaux",
    )
    .await;
    // Only one variety exists for Bordeaux, so the pick is forced
    assert!(html.contains("name=\"variety\" value=\"Cabernet Sauvignon\""));
    assert!(html.contains("<h3>Pauillac</h3>"));
}

#[tokio::test]
async fn test_random_country_clears_lower_levels() {
    let html = get_html(
        setup_app(),
        "/random-wine-selection?action=randomCountry&country=France&province=Bordeaux&variety=Merlot",
    )
    .await;
    assert!(html.contains("name=\"province\" value=\"\""));
    assert!(html.contains("name=\"variety\" value=\"\""));
}

// =============================================================================
// JSON API
// =============================================================================

#[tokio::test]
async fn test_api_countries() {
    let body = get_json(setup_app(), "/api/countries").await;
    assert_eq!(body, serde_json::json!(["France", "Chile"]));
}

#[tokio::test]
async fn test_api_areas_and_varieties() {
    let body = get_json(setup_app(), "/api/countries/France/regions").await;
    assert_eq!(body, serde_json::json!(["Beaune", "Pauillac"]));

    let body = get_json(setup_app(), "/api/countries/chile/provinces").await;
    assert_eq!(body, serde_json::json!(["Central Valley"]));

    let body = get_json(setup_app(), "/api/countries/Chile/regions").await;
    assert_eq!(body, serde_json::json!([]));

    let body = get_json(setup_app(), "/api/countries/France/regions/Beaune/varieties").await;
    assert_eq!(body, serde_json::json!(["Pinot Noir"]));

    let body = get_json(
        setup_app(),
        "/api/countries/Chile/provinces/Central%20Valley/varieties",
    )
    .await;
    assert_eq!(body, serde_json::json!(["Merlot"]));
}

#[tokio::test]
async fn test_api_wines_filter() {
    let body = get_json(setup_app(), "/api/wines?minPoints=85").await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["wines"][0]["title"], "Clos des Mouches");
    assert_eq!(body["wines"][0]["country_flag"], "🇫🇷");
}

#[tokio::test]
async fn test_api_selection() {
    let body = get_json(setup_app(), "/api/selection?country=France").await;
    assert_eq!(body["total"], 2);

    let body = get_json(setup_app(), "/api/selection?country=France&province=Burgundy").await;
    assert_eq!(body["total"], 1);

    let body = get_json(setup_app(), "/api/selection").await;
    assert_eq!(body["total"], 0);
}

// =============================================================================
// Static files and fallbacks
// =============================================================================

#[tokio::test]
async fn test_embedded_stylesheet() {
    let response = setup_app()
        .oneshot(test_request("/static/style.css"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
}

#[tokio::test]
async fn test_missing_static_file() {
    let response = setup_app()
        .oneshot(test_request("/static/missing.png"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_static_dir_override() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = std::fs::File::create(dir.path().join("custom.js")).unwrap();
    file.write_all(b"console.log('hi');").unwrap();

    let config = ServerConfig {
        static_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let response = setup_app_with(config)
        .oneshot(test_request("/static/custom.js"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_text(response.into_body()).await, "console.log('hi');");
}

#[tokio::test]
async fn test_unknown_route() {
    let response = setup_app()
        .oneshot(test_request("/cellar"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "not_found");
}
