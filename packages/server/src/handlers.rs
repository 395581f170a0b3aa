//! HTTP handler functions for the tick surveillance map API.

use actix_web::{HttpResponse, web};
use tick_map_server_models::{
    ApiDiseaseFilter, ApiError, ApiHealth, ApiMeta, ApiPathogen, BarplotQueryParams, EventRequest,
    MapQueryParams, TimelineQueryParams,
};
use tick_map_surveillance_models::{DiseaseFilter, Pathogen, YEAR_MAX, YEAR_MIN, year_in_range};
use tick_map_view_models::Selection;
use tick_map_views::{choropleth_map, county_timeline, dispatch, pathogen_barplot};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/meta`
///
/// Returns the domains every dashboard control is built from: counties,
/// the year range, the pathogen taxonomy, and the default selection.
pub async fn meta(state: web::Data<AppState>) -> HttpResponse {
    let pathogens: Vec<ApiPathogen> = Pathogen::all()
        .iter()
        .map(|pathogen| ApiPathogen {
            id: *pathogen,
            label: pathogen.label().to_string(),
            color: pathogen.color().to_string(),
        })
        .collect();

    let disease_filters: Vec<ApiDiseaseFilter> = DiseaseFilter::all()
        .iter()
        .map(|filter| ApiDiseaseFilter {
            id: *filter,
            label: filter.label().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(ApiMeta {
        counties: state.table.counties().to_vec(),
        year_min: YEAR_MIN,
        year_max: YEAR_MAX,
        pathogens,
        disease_filters,
        default_selection: state.default_selection.clone(),
    })
}

/// `GET /api/views/map`
///
/// Choropleth of the collection estimate for one year, with the selected
/// county outlined.
pub async fn map_view(
    state: web::Data<AppState>,
    params: web::Query<MapQueryParams>,
) -> HttpResponse {
    let year = params
        .year
        .filter(|&y| year_in_range(y))
        .unwrap_or(state.default_selection.year);
    let county = resolve_county(&state, params.county.as_deref());

    HttpResponse::Ok().json(choropleth_map(
        &state.table,
        &state.boundaries,
        year,
        Some(county),
    ))
}

/// `GET /api/views/timeline`
///
/// Collection estimate per year for one county.
pub async fn timeline_view(
    state: web::Data<AppState>,
    params: web::Query<TimelineQueryParams>,
) -> HttpResponse {
    let county = resolve_county(&state, params.county.as_deref());

    HttpResponse::Ok().json(county_timeline(&state.table, county))
}

/// `GET /api/views/barplot`
///
/// Percent-positive bars for one county, stacked across all four pathogens
/// or narrowed to a single one.
pub async fn barplot_view(
    state: web::Data<AppState>,
    params: web::Query<BarplotQueryParams>,
) -> HttpResponse {
    let county = resolve_county(&state, params.county.as_deref());

    let filter = match params.disease.as_deref() {
        None => state.default_selection.disease,
        Some(name) => match name.parse::<DiseaseFilter>() {
            Ok(filter) => filter,
            Err(_) => {
                return HttpResponse::BadRequest().json(ApiError {
                    error: format!("Unknown disease filter '{name}'"),
                });
            }
        },
    };

    HttpResponse::Ok().json(pathogen_barplot(&state.table, county, filter))
}

/// `POST /api/events`
///
/// Applies one interaction to the client's selection and returns the
/// updated selection plus the figures that changed.
pub async fn events(state: web::Data<AppState>, body: web::Json<EventRequest>) -> HttpResponse {
    let request = body.into_inner();
    let selection = sanitize_selection(&state, request.selection);
    let patch = dispatch(&state.table, &state.boundaries, &selection, &request.event);

    HttpResponse::Ok().json(patch)
}

/// Resolves a county query parameter against the county domain, falling
/// back to the default selection.
fn resolve_county<'a>(state: &'a AppState, county: Option<&'a str>) -> &'a str {
    county
        .filter(|c| state.table.contains_county(c))
        .unwrap_or(&state.default_selection.county)
}

/// Replaces out-of-domain fields of a client-held selection with the
/// defaults, so stale or tampered clients still get a valid patch.
fn sanitize_selection(state: &AppState, mut selection: Selection) -> Selection {
    if !year_in_range(selection.year) {
        log::debug!("Replacing out-of-range selection year {}", selection.year);
        selection.year = state.default_selection.year;
    }
    if !state.table.contains_county(&selection.county) {
        log::debug!("Replacing unknown selection county '{}'", selection.county);
        selection.county.clone_from(&state.default_selection.county);
    }

    selection
}
