#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the tick surveillance map server.
//!
//! These types are serialized to JSON for the REST API. Figure payloads and
//! the cross-filter protocol types come from the view models; this crate
//! adds the envelopes around them.

use serde::{Deserialize, Serialize};
use tick_map_surveillance_models::{DiseaseFilter, Pathogen};
use tick_map_view_models::{Selection, UiEvent};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Dashboard bootstrap metadata: the domains every control is built from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeta {
    /// Canonical county names, sorted.
    pub counties: Vec<String>,
    /// First covered year.
    pub year_min: u16,
    /// Last covered year.
    pub year_max: u16,
    /// Tested pathogens in canonical order.
    pub pathogens: Vec<ApiPathogen>,
    /// Disease radio options in display order.
    pub disease_filters: Vec<ApiDiseaseFilter>,
    /// Selection a fresh session starts from.
    pub default_selection: Selection,
}

/// One pathogen entry in the metadata response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPathogen {
    /// Wire identifier.
    pub id: Pathogen,
    /// Display label.
    pub label: String,
    /// Fixed series color.
    pub color: String,
}

/// One disease radio option in the metadata response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDiseaseFilter {
    /// Wire identifier.
    pub id: DiseaseFilter,
    /// Display label.
    pub label: String,
}

/// Query parameters for the map view endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapQueryParams {
    /// Year to color by; defaults to the latest covered year.
    pub year: Option<u16>,
    /// County whose outline to overlay; defaults to the configured county.
    pub county: Option<String>,
}

/// Query parameters for the timeline view endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineQueryParams {
    /// County to chart; defaults to the configured county.
    pub county: Option<String>,
}

/// Query parameters for the barplot view endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarplotQueryParams {
    /// County to chart; defaults to the configured county.
    pub county: Option<String>,
    /// Disease filter wire name; defaults to the stacked overview.
    pub disease: Option<String>,
}

/// Body of the event dispatch endpoint: the client's current selection plus
/// the interaction to apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    /// Selection the client currently holds.
    pub selection: Selection,
    /// Interaction to apply to it.
    pub event: UiEvent,
}

/// JSON body returned with error status codes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable description.
    pub error: String,
}
