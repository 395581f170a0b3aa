#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! View-layer value types.
//!
//! [`figure`] holds the chart specification types, serialized to the
//! `{ "data": [...], "layout": {...} }` wire shape plotly.js consumes.
//! This module holds the cross-filter protocol around them: the selection
//! triple, the UI events that change it, and the patch of recomputed
//! figures returned for each event.

pub mod figure;

pub use figure::{
    Axis, BarTrace, ChoroplethTrace, ColorAxis, ColorBar, Figure, Font, GeoLayout, Layout, Legend,
    Margin, MarkerLine, Projection, Text, Trace, TraceMarker,
};

use serde::{Deserialize, Serialize};
use tick_map_surveillance_models::{DiseaseFilter, YEAR_MAX};

/// The three selection variables driving every chart.
///
/// Selection is owned by the client and echoed through each request; the
/// server never stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// Selected year, within the covered range.
    pub year: u16,
    /// Selected county, from the canonical domain.
    pub county: String,
    /// Selected disease filter for the barplot panel.
    pub disease: DiseaseFilter,
}

impl Selection {
    /// The selection a fresh session starts from: the latest covered year,
    /// the configured fallback county, and the stacked overview.
    #[must_use]
    pub fn initial(county: &str) -> Self {
        Self {
            year: YEAR_MAX,
            county: county.to_owned(),
            disease: DiseaseFilter::default(),
        }
    }
}

/// One user interaction with the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UiEvent {
    /// The year slider moved.
    YearChanged {
        /// Newly selected year.
        year: u16,
    },
    /// A county polygon on the map was clicked.
    MapClicked {
        /// Clicked county name.
        county: String,
    },
    /// A bar on the timeline was clicked.
    TimelineClicked {
        /// Year of the clicked bar.
        year: u16,
    },
    /// A disease radio button was selected.
    DiseaseFilterChanged {
        /// Newly selected filter.
        disease: DiseaseFilter,
    },
}

/// Result of dispatching one [`UiEvent`]: the updated selection plus the
/// charts affected by it. Figures left `None` were not recomputed and the
/// client keeps its current ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPatch {
    /// Selection after applying the event.
    pub selection: Selection,
    /// Recomputed map figure, if affected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<Figure>,
    /// Recomputed timeline figure, if affected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Figure>,
    /// Recomputed barplot figure, if affected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barplot: Option<Figure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_selection_starts_at_latest_year() {
        let selection = Selection::initial("Suffolk");
        assert_eq!(selection.year, YEAR_MAX);
        assert_eq!(selection.county, "Suffolk");
        assert_eq!(selection.disease, DiseaseFilter::All);
    }

    #[test]
    fn events_tag_by_screaming_snake_type() {
        let event = UiEvent::YearChanged { year: 2020 };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "type": "YEAR_CHANGED", "year": 2020 })
        );

        let parsed: UiEvent = serde_json::from_value(serde_json::json!({
            "type": "MAP_CLICKED",
            "county": "Albany",
        }))
        .unwrap();
        assert_eq!(
            parsed,
            UiEvent::MapClicked {
                county: "Albany".to_owned(),
            }
        );
    }

    #[test]
    fn disease_filter_event_uses_wire_names() {
        let parsed: UiEvent = serde_json::from_value(serde_json::json!({
            "type": "DISEASE_FILTER_CHANGED",
            "disease": "B_MIYAMOTOI",
        }))
        .unwrap();
        assert_eq!(
            parsed,
            UiEvent::DiseaseFilterChanged {
                disease: DiseaseFilter::BMiyamotoi,
            }
        );
    }

    #[test]
    fn patch_skips_absent_figures() {
        let patch = ViewPatch {
            selection: Selection::initial("Albany"),
            map: None,
            timeline: None,
            barplot: None,
        };
        let value = serde_json::to_value(&patch).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("selection"));
        assert!(!object.contains_key("map"));
        assert!(!object.contains_key("timeline"));
        assert!(!object.contains_key("barplot"));
    }
}
