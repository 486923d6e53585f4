//! JSON API handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use vinoteca::{DrillLevel, Wine};

use super::params::{FilterParams, SelectionParams};
use crate::server::state::AppState;

/// Response for endpoints returning wines.
#[derive(Serialize)]
pub struct WinesResponse {
    pub total: usize,
    pub wines: Vec<Wine>,
}

impl WinesResponse {
    fn from_refs(wines: Vec<&Wine>) -> Self {
        Self {
            total: wines.len(),
            wines: wines.into_iter().cloned().collect(),
        }
    }
}

/// GET /api/wines
pub async fn list_wines(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Json<WinesResponse> {
    let criteria = params.criteria(state.config.default_max_price);
    Json(WinesResponse::from_refs(state.dataset.filter(&criteria)))
}

/// GET /api/selection
pub async fn selected_wines(
    State(state): State<AppState>,
    Query(params): Query<SelectionParams>,
) -> Json<WinesResponse> {
    let selection = params.by_province();
    Json(WinesResponse::from_refs(
        state
            .dataset
            .filter_by_selection(&selection, DrillLevel::Province),
    ))
}

/// GET /api/countries
pub async fn list_countries(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.dataset.unique_countries())
}

/// GET /api/countries/:country/regions
pub async fn list_regions(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Json<Vec<String>> {
    Json(state.dataset.unique_regions_for_country(&country))
}

/// GET /api/countries/:country/provinces
pub async fn list_provinces(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Json<Vec<String>> {
    Json(state.dataset.unique_provinces_for_country(&country))
}

/// GET /api/countries/:country/regions/:region/varieties
pub async fn list_region_varieties(
    State(state): State<AppState>,
    Path((country, region)): Path<(String, String)>,
) -> Json<Vec<String>> {
    Json(state.dataset.unique_varieties_for_region(&country, &region))
}

/// GET /api/countries/:country/provinces/:province/varieties
pub async fn list_province_varieties(
    State(state): State<AppState>,
    Path((country, province)): Path<(String, String)>,
) -> Json<Vec<String>> {
    Json(state.dataset.unique_varieties_for_province(&country, &province))
}
