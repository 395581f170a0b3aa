#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! County boundary file loading.
//!
//! Reads the county boundary `GeoJSON` at startup, normalizes county names,
//! and derives the canonical county domain the surveillance table is joined
//! against. The normalized feature collection is re-emitted into the map
//! figure, so geometries are kept in their JSON form.

pub mod boundaries;

pub use boundaries::{BoundarySet, normalize_county_name};

use thiserror::Error;

/// Errors that can occur while loading county boundaries.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Boundary file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `GeoJSON` parsing or geometry conversion failed.
    #[error("GeoJSON error: {0}")]
    Geojson(#[from] geojson::Error),

    /// JSON re-serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The boundary collection is structurally unusable for the map.
    #[error("Invalid boundary data: {message}")]
    Invalid {
        /// Description of what went wrong.
        message: String,
    },
}
