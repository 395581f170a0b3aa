//! The three chart builders.
//!
//! Each builder is a pure function of the dense table (plus boundaries for
//! the map) and returns a complete figure specification. Styling constants
//! match the dashboard page: a pale green page background, the muted green
//! bar color, and the `OrRd` scale for the map.

use tick_map_dataset::DenseTable;
use tick_map_geography::BoundarySet;
use tick_map_surveillance_models::{DiseaseFilter, Pathogen};
use tick_map_view_models::{
    Axis, BarTrace, ChoroplethTrace, ColorAxis, ColorBar, Figure, Font, GeoLayout, Layout, Legend,
    Margin, MarkerLine, Projection, Text, Trace, TraceMarker,
};

/// Page background, also used behind the bar charts.
const PAGE_BACKGROUND: &str = "#F1F6F1";
/// Background of the map's geographic frame.
const MAP_BACKGROUND: &str = "#F1F1F1";
/// Fill for single-series bars.
const BAR_COLOR: &str = "#7CDF7C";
const FONT_COLOR: &str = "black";
/// Outline drawn around the selected county.
const SELECTED_LINE_COLOR: &str = "#1F6357";
const SELECTED_LINE_WIDTH: f64 = 2.5;

const FEATURE_ID_KEY: &str = "properties.name";
const COLOR_AXIS: &str = "coloraxis";

/// ColorBrewer `OrRd` stops for the continuous map scale.
const ORRD_STOPS: [(f64, &str); 9] = [
    (0.0, "#fff7ec"),
    (0.125, "#fee8c8"),
    (0.25, "#fdd49e"),
    (0.375, "#fdbb84"),
    (0.5, "#fc8d59"),
    (0.625, "#ef6548"),
    (0.75, "#d7301f"),
    (0.875, "#b30000"),
    (1.0, "#7f0000"),
];

const MAP_HOVER: &str = "County=%{location}<br>Max Likelihood Estimate=%{z}\
<br>Total Sites Visited=%{customdata[0]}<br>Total Ticks Collected=%{customdata[1]}\
<extra></extra>";
const TIMELINE_HOVER: &str = "Year=%{x}<br>MLE=%{y}<extra></extra>";

/// Builds the choropleth map for one year, coloring every county by its
/// collection estimate. When `selected_county` names a county in the table,
/// its boundary is overlaid as a distinct outline trace.
#[must_use]
pub fn choropleth_map(
    table: &DenseTable,
    boundaries: &BoundarySet,
    year: u16,
    selected_county: Option<&str>,
) -> Figure {
    let mut locations = Vec::with_capacity(table.counties().len());
    let mut z = Vec::with_capacity(table.counties().len());
    let mut customdata = Vec::with_capacity(table.counties().len());
    for row in table.rows_for_year(year) {
        locations.push(row.county.clone());
        z.push(row.estimate);
        customdata.push(vec![row.sites_visited, row.ticks_collected]);
    }

    let mut data = vec![Trace::Choropleth(ChoroplethTrace {
        geojson: boundaries.to_feature_collection(),
        featureidkey: FEATURE_ID_KEY.to_owned(),
        locations,
        z,
        coloraxis: Some(COLOR_AXIS.to_owned()),
        customdata: Some(customdata),
        hovertemplate: Some(MAP_HOVER.to_owned()),
        ..ChoroplethTrace::default()
    })];
    if let Some(outline) =
        selected_county.and_then(|c| selection_outline(table, boundaries, year, c))
    {
        data.push(outline);
    }

    Figure {
        data,
        layout: Layout {
            margin: Some(Margin::new(0, 0, 15, 0)),
            paper_bgcolor: Some(PAGE_BACKGROUND.to_owned()),
            font: Some(Font {
                color: Some(FONT_COLOR.to_owned()),
            }),
            geo: Some(GeoLayout {
                fitbounds: Some("locations".to_owned()),
                visible: Some(false),
                bgcolor: Some(MAP_BACKGROUND.to_owned()),
                landcolor: Some(PAGE_BACKGROUND.to_owned()),
                showcountries: Some(true),
                showlakes: Some(false),
                resolution: Some(110),
                projection: Some(Projection {
                    kind: "equirectangular".to_owned(),
                }),
            }),
            coloraxis: Some(ColorAxis {
                colorscale: Some(orrd_colorscale()),
                colorbar: Some(ColorBar {
                    title: Some(Text::new("Max Likelihood Estimate")),
                }),
            }),
            ..Layout::default()
        },
    }
}

/// Builds the per-county timeline: one bar per covered year showing the
/// collection estimate.
#[must_use]
pub fn county_timeline(table: &DenseTable, county: &str) -> Figure {
    let rows = table.rows_for_county(county);
    let x: Vec<u16> = rows.iter().map(|row| row.year).collect();
    let y: Vec<f64> = rows.iter().map(|row| row.estimate).collect();

    let mut layout = bar_chart_layout(county);
    layout.yaxis = Some(Axis {
        title: Some(Text::new("MLE")),
        ..Axis::default()
    });

    Figure {
        data: vec![Trace::Bar(BarTrace {
            x,
            y,
            marker: Some(TraceMarker {
                color: Some(BAR_COLOR.to_owned()),
                line: None,
            }),
            hovertemplate: Some(TIMELINE_HOVER.to_owned()),
            ..BarTrace::default()
        })],
        layout,
    }
}

/// Builds the pathogen barplot for one county.
///
/// The stacked overview draws one series per pathogen in canonical order
/// with its fixed color; a single-pathogen filter draws one series with the
/// percentage axis clamped to `[0, 100]`.
#[must_use]
pub fn pathogen_barplot(table: &DenseTable, county: &str, filter: DiseaseFilter) -> Figure {
    let rows = table.rows_for_county(county);
    let x: Vec<u16> = rows.iter().map(|row| row.year).collect();

    match filter.pathogen() {
        None => {
            let data = Pathogen::all()
                .iter()
                .map(|&pathogen| {
                    Trace::Bar(BarTrace {
                        x: x.clone(),
                        y: rows.iter().map(|row| row.percent(pathogen)).collect(),
                        name: Some(pathogen.label().to_owned()),
                        marker: Some(TraceMarker {
                            color: Some(pathogen.color().to_owned()),
                            line: None,
                        }),
                        ..BarTrace::default()
                    })
                })
                .collect();

            let mut layout = bar_chart_layout(county);
            layout.yaxis = Some(Axis {
                title: Some(Text::new("Percent (%)")),
                ..Axis::default()
            });
            layout.barmode = Some("stack".to_owned());
            layout.legend = Some(Legend {
                title: Some(Text::new("Disease")),
            });

            Figure { data, layout }
        }
        Some(pathogen) => {
            let header = pathogen.column_header();
            let mut layout = bar_chart_layout(county);
            layout.yaxis = Some(Axis {
                title: Some(Text::new(header)),
                range: Some([0.0, 100.0]),
                ..Axis::default()
            });

            Figure {
                data: vec![Trace::Bar(BarTrace {
                    x,
                    y: rows.iter().map(|row| row.percent(pathogen)).collect(),
                    marker: Some(TraceMarker {
                        color: Some(BAR_COLOR.to_owned()),
                        line: None,
                    }),
                    customdata: Some(rows.iter().map(|row| vec![row.ticks_tested]).collect()),
                    hovertemplate: Some(format!(
                        "Year=%{{x}}<br>{header}=%{{y}}<br>Total Ticks Tested=%{{customdata[0]}}<extra></extra>"
                    )),
                    ..BarTrace::default()
                })],
                layout,
            }
        }
    }
}

/// Layout shared by both bar panels: county title, page colors, year axis.
fn bar_chart_layout(county: &str) -> Layout {
    Layout {
        title: Some(Text::new(format!("County: {county}"))),
        margin: Some(Margin::new(20, 20, 55, 0)),
        paper_bgcolor: Some(PAGE_BACKGROUND.to_owned()),
        plot_bgcolor: Some(PAGE_BACKGROUND.to_owned()),
        font: Some(Font {
            color: Some(FONT_COLOR.to_owned()),
        }),
        xaxis: Some(Axis {
            title: Some(Text::new("Year")),
            dtick: Some(1.0),
            range: None,
        }),
        ..Layout::default()
    }
}

fn orrd_colorscale() -> Vec<(f64, String)> {
    ORRD_STOPS
        .iter()
        .map(|&(stop, color)| (stop, color.to_owned()))
        .collect()
}

/// The selected county's boundary as a thin outline trace. `None` when the
/// county has no row for the year or no boundary feature.
fn selection_outline(
    table: &DenseTable,
    boundaries: &BoundarySet,
    year: u16,
    county: &str,
) -> Option<Trace> {
    let row = table.get(county, year)?;
    let features: Vec<serde_json::Value> = boundaries
        .features()
        .iter()
        .filter(|feature| feature.name == county)
        .map(|feature| {
            serde_json::json!({
                "type": "Feature",
                "properties": { "name": feature.name },
                "geometry": feature.geometry,
            })
        })
        .collect();
    if features.is_empty() {
        return None;
    }

    Some(Trace::Choropleth(ChoroplethTrace {
        geojson: serde_json::json!({ "type": "FeatureCollection", "features": features }),
        featureidkey: FEATURE_ID_KEY.to_owned(),
        locations: vec![county.to_owned()],
        z: vec![row.estimate],
        coloraxis: Some(COLOR_AXIS.to_owned()),
        hoverinfo: Some("skip".to_owned()),
        marker: Some(TraceMarker {
            color: None,
            line: Some(MarkerLine {
                color: Some(SELECTED_LINE_COLOR.to_owned()),
                width: Some(SELECTED_LINE_WIDTH),
            }),
        }),
        ..ChoroplethTrace::default()
    }))
}
