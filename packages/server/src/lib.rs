#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the tick surveillance dashboard.
//!
//! Loads the surveillance CSV and the county boundary `GeoJSON` once at
//! startup, prepares the dense county-by-year table, and serves chart
//! figures plus the cross-filter event protocol as JSON. The frontend is a
//! static page rendered with plotly.js, served from `web/`.

mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use std::path::Path;
use tick_map_dataset::{DenseTable, load_records, prepare};
use tick_map_geography::BoundarySet;
use tick_map_view_models::Selection;

/// Fallback county used when `DEFAULT_COUNTY` is unset.
const DEFAULT_COUNTY: &str = "Suffolk";

/// Shared application state, immutable after startup.
pub struct AppState {
    /// Dense surveillance table every chart projects from.
    pub table: DenseTable,
    /// County boundaries backing the map.
    pub boundaries: BoundarySet,
    /// Selection a fresh session starts from.
    pub default_selection: Selection,
}

/// Starts the tick surveillance map server.
///
/// Reads both input files, prepares the dense table, and starts the
/// Actix-Web HTTP server. This is a regular async function — the caller is
/// responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the county boundary `GeoJSON` or the surveillance CSV cannot
/// be loaded and prepared.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let geojson_path = std::env::var("COUNTIES_GEOJSON")
        .unwrap_or_else(|_| "data/new-york-counties.geojson".to_string());
    let csv_path = std::env::var("SURVEILLANCE_CSV")
        .unwrap_or_else(|_| "data/deer_tick_surveillance.csv".to_string());

    log::info!("Loading county boundaries...");
    let boundaries =
        BoundarySet::load(Path::new(&geojson_path)).expect("Failed to load county boundaries");

    log::info!("Loading surveillance records...");
    let records =
        load_records(Path::new(&csv_path)).expect("Failed to load surveillance records");

    log::info!("Preparing dense table...");
    let table = prepare(&records, &boundaries);

    let default_selection = Selection::initial(&default_county(&table));
    let state = web::Data::new(AppState {
        table,
        boundaries,
        default_selection,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/meta", web::get().to(handlers::meta))
                    .route("/views/map", web::get().to(handlers::map_view))
                    .route("/views/timeline", web::get().to(handlers::timeline_view))
                    .route("/views/barplot", web::get().to(handlers::barplot_view))
                    .route("/events", web::post().to(handlers::events)),
            )
            // Serve the plotly.js frontend
            .service(Files::new("/", "web").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

/// Resolves the default county from `DEFAULT_COUNTY`, falling back to the
/// first county in the domain when the configured one is unknown.
fn default_county(table: &DenseTable) -> String {
    let configured = std::env::var("DEFAULT_COUNTY").unwrap_or_else(|_| DEFAULT_COUNTY.to_string());
    if table.contains_county(&configured) {
        return configured;
    }
    let fallback = table
        .counties()
        .first()
        .cloned()
        .expect("Boundary file produced no counties");
    log::warn!("Default county '{configured}' is not in the county domain, using '{fallback}'");
    fallback
}
