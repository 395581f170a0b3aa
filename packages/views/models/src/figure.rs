//! Chart specification types.
//!
//! These serialize to the plotly figure wire shape consumed by plotly.js:
//! a `data` array of type-tagged traces plus a `layout` object. Field names
//! follow the plotly schema (`paper_bgcolor`, `featureidkey`), so none of
//! these structs use camelCase renaming. Optional fields are omitted from
//! the wire entirely when unset.

use serde::{Deserialize, Serialize};

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Figure {
    /// Traces drawn into the plot, in z-order.
    pub data: Vec<Trace>,
    /// Plot-wide presentation settings.
    pub layout: Layout,
}

/// One trace, tagged by its plotly `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// A geographic choropleth layer.
    Choropleth(ChoroplethTrace),
    /// A bar series.
    Bar(BarTrace),
}

/// A choropleth layer: one colored polygon per location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChoroplethTrace {
    /// Embedded `GeoJSON` feature collection supplying the polygons.
    pub geojson: serde_json::Value,
    /// Feature property matched against `locations`.
    pub featureidkey: String,
    /// Location keys, one per polygon to color.
    pub locations: Vec<String>,
    /// Color values, parallel to `locations`.
    pub z: Vec<f64>,
    /// Shared color axis reference (`"coloraxis"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<String>,
    /// Extra per-location values referenced from `hovertemplate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    /// Set to `"skip"` on overlay traces that should not hover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    /// Polygon fill/outline styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<TraceMarker>,
    /// Whether this trace shows its own color scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A bar series over the year axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarTrace {
    /// Bar positions (years).
    pub x: Vec<u16>,
    /// Bar heights, parallel to `x`.
    pub y: Vec<f64>,
    /// Legend label for the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Bar fill styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<TraceMarker>,
    /// Extra per-bar values referenced from `hovertemplate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

/// Marker styling shared by trace kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraceMarker {
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Outline styling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<MarkerLine>,
}

/// Marker outline styling.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkerLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Plot-wide presentation settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    /// Page-side background, outside the plotting area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    /// Plotting-area background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Geographic base map settings; only present on the map figure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoLayout>,
    /// Shared continuous color axis; only present on the map figure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coloraxis: Option<ColorAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    /// `"stack"` on the all-pathogen barplot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

/// A `{ "text": ... }` wrapper, the shape plotly expects for titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u16,
    pub r: u16,
    pub t: u16,
    pub b: u16,
}

impl Margin {
    #[must_use]
    pub const fn new(l: u16, r: u16, t: u16, b: u16) -> Self {
        Self { l, r, t, b }
    }
}

/// Layout-wide font settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Geographic base map settings for the choropleth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoLayout {
    /// `"locations"` fits the view to the drawn polygons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitbounds: Option<String>,
    /// Whether the base map layers are drawn at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcountries: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlakes: Option<bool>,
    /// Base map resolution (110 or 50).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
}

/// Map projection selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Projection name, e.g. `"equirectangular"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Shared continuous color axis for choropleth traces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorAxis {
    /// Color stops as `[fraction, color]` pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<Vec<(f64, String)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

/// Color scale legend settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorBar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
}

/// Cartesian axis settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
    /// Tick spacing; 1 labels every year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<f64>,
    /// Fixed axis range, e.g. `[0, 100]` for percentages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

/// Legend settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
}
