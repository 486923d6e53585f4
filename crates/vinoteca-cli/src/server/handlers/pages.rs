//! HTML page handlers.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Serialize;
use tracing::debug;
use vinoteca::{country_flag, eq_ignore_case, DrillLevel, Explorer, Selection, Wine};

use super::params::{FilterParams, SelectionParams};
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// A wine as shown on a page.
#[derive(Serialize)]
pub struct WineView {
    pub title: String,
    pub description: String,
    pub points: u32,
    /// Formatted price, absent when the wine has none.
    pub price: Option<String>,
    pub variety: String,
    pub region: String,
    pub province: String,
    pub country: String,
    pub flag: String,
    pub winery: String,
    pub designation: String,
    pub taster_name: String,
}

impl From<&Wine> for WineView {
    fn from(wine: &Wine) -> Self {
        Self {
            title: wine.title.clone(),
            description: wine.description.clone(),
            points: wine.points,
            price: wine.has_price().then(|| format!("${:.2}", wine.price)),
            variety: wine.variety.clone(),
            region: wine.region.clone(),
            province: wine.province.clone(),
            country: wine.country.clone(),
            flag: wine.country_flag.clone(),
            winery: wine.winery.clone(),
            designation: wine.designation.clone(),
            taster_name: wine.taster_name.clone(),
        }
    }
}

/// One `<option>` of a dropdown.
#[derive(Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

fn options(values: Vec<String>, current: &str) -> Vec<OptionView> {
    values
        .into_iter()
        .map(|value| OptionView {
            selected: eq_ignore_case(&value, current),
            label: value.clone(),
            value,
        })
        .collect()
}

/// Country options, labelled with their flag when one is known.
fn country_options(values: Vec<String>, current: &str) -> Vec<OptionView> {
    let mut opts = options(values, current);
    for opt in &mut opts {
        if let Some(flag) = country_flag(&opt.value) {
            opt.label = format!("{} {}", flag, opt.value);
        }
    }
    opts
}

fn contains(values: &[String], value: &str) -> bool {
    values.iter().any(|v| eq_ignore_case(v, value))
}

fn wine_views(wines: Vec<&Wine>) -> Vec<WineView> {
    wines.into_iter().map(WineView::from).collect()
}

fn render<T: Serialize>(state: &AppState, name: &str, data: &T) -> Result<Html<String>, ApiError> {
    Ok(Html(state.views.render(name, data)?))
}

#[derive(Serialize)]
struct IndexView {
    title: &'static str,
    total_wines: usize,
    total_countries: usize,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let view = IndexView {
        title: "Vinoteca",
        total_wines: state.dataset.len(),
        total_countries: state.dataset.unique_countries().len(),
    };
    render(&state, "index", &view)
}

#[derive(Serialize)]
struct MarketplaceView {
    title: &'static str,
    wines: Vec<WineView>,
    total_wines: usize,
    countries: Vec<OptionView>,
    varieties: Vec<OptionView>,
    min_points: u32,
    max_price: f64,
}

/// GET /marketplace
pub async fn marketplace(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Html<String>, ApiError> {
    let criteria = params.criteria(state.config.default_max_price);
    let wines = state.dataset.filter(&criteria);
    debug!(?criteria, matches = wines.len(), "Marketplace filter");

    let view = MarketplaceView {
        title: "Marketplace",
        total_wines: wines.len(),
        wines: wine_views(wines),
        countries: country_options(
            state.dataset.unique_countries(),
            criteria.country.as_deref().unwrap_or_default(),
        ),
        varieties: options(
            state.dataset.unique_varieties(),
            criteria.variety.as_deref().unwrap_or_default(),
        ),
        min_points: criteria.min_points,
        max_price: criteria.max_price,
    };
    render(&state, "marketplace", &view)
}

#[derive(Serialize)]
struct SelectionView {
    title: &'static str,
    selection: Selection,
    flag: &'static str,
    countries: Vec<OptionView>,
    areas: Vec<OptionView>,
    varieties: Vec<OptionView>,
    wines: Vec<WineView>,
    total_wines: usize,
}

/// GET /wine-selection
///
/// Region drill-down. Each level's options appear once the level above it
/// is chosen; wines are listed when all three are.
pub async fn wine_selection(
    State(state): State<AppState>,
    Query(params): Query<SelectionParams>,
) -> Result<Html<String>, ApiError> {
    let mut selection = params.by_region();
    let dataset = &state.dataset;
    let level = DrillLevel::Region;

    // A lower choice left over from a different parent is dropped
    let areas = if selection.country.is_empty() {
        Vec::new()
    } else {
        dataset.unique_areas(&selection.country, level)
    };
    if !contains(&areas, &selection.area) {
        selection.area.clear();
    }
    let varieties = if selection.area.is_empty() {
        Vec::new()
    } else {
        dataset.unique_varieties_for_area(&selection.country, level, &selection.area)
    };
    if !contains(&varieties, &selection.variety) {
        selection.variety.clear();
    }
    let wines = if selection.is_complete() {
        wine_views(dataset.filter_by_selection(&selection, level))
    } else {
        Vec::new()
    };

    let view = SelectionView {
        title: "Wine selection",
        flag: country_flag(&selection.country).unwrap_or_default(),
        countries: country_options(dataset.unique_countries(), &selection.country),
        areas: options(areas, &selection.area),
        varieties: options(varieties, &selection.variety),
        total_wines: wines.len(),
        wines,
        selection,
    };
    render(&state, "wine-selection", &view)
}

/// GET /random-wine-selection
///
/// Province drill-down driven by random actions. The current selection
/// travels in the query string, so concurrent users never share it.
pub async fn random_wine_selection(
    State(state): State<AppState>,
    Query(params): Query<SelectionParams>,
) -> Result<Html<String>, ApiError> {
    let level = DrillLevel::Province;
    let current = params.by_province();

    let selection = match params.action() {
        Some(action) => {
            let next = Explorer::new(&state.dataset, level).apply(action, &current);
            debug!(%action, country = %next.country, area = %next.area, variety = %next.variety, "Random selection");
            next
        }
        None => current,
    };

    let wines = wine_views(state.dataset.filter_by_selection(&selection, level));

    let view = SelectionView {
        title: "Random wine selection",
        flag: country_flag(&selection.country).unwrap_or_default(),
        countries: Vec::new(),
        areas: Vec::new(),
        varieties: Vec::new(),
        total_wines: wines.len(),
        wines,
        selection,
    };
    render(&state, "random-wine-selection", &view)
}
