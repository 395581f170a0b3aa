//! Event dispatch.
//!
//! One entry point applies a UI event to a selection and recomputes exactly
//! the charts that event affects: year changes redraw the map, map clicks
//! redraw everything, filter changes redraw the barplot. The table is never
//! mutated; the caller gets back a new selection plus the rebuilt figures.

use tick_map_dataset::DenseTable;
use tick_map_geography::BoundarySet;
use tick_map_surveillance_models::year_in_range;
use tick_map_view_models::{Selection, UiEvent, ViewPatch};

use crate::figures::{choropleth_map, county_timeline, pathogen_barplot};

/// Applies one UI event to a selection and rebuilds the affected charts.
///
/// Events referencing a county outside the canonical domain or a year
/// outside the covered range leave the selection unchanged; the affected
/// charts are still rebuilt from the retained selection, so the client
/// always receives a consistent patch.
#[must_use]
pub fn dispatch(
    table: &DenseTable,
    boundaries: &BoundarySet,
    selection: &Selection,
    event: &UiEvent,
) -> ViewPatch {
    let mut selection = selection.clone();
    match event {
        UiEvent::YearChanged { year } | UiEvent::TimelineClicked { year } => {
            if year_in_range(*year) {
                selection.year = *year;
            } else {
                log::debug!("Ignoring out-of-range year {year}");
            }
            let map = choropleth_map(table, boundaries, selection.year, Some(&selection.county));
            ViewPatch {
                selection,
                map: Some(map),
                timeline: None,
                barplot: None,
            }
        }
        UiEvent::MapClicked { county } => {
            if table.contains_county(county) {
                selection.county.clone_from(county);
            } else {
                log::debug!("Ignoring click on unknown county '{county}'");
            }
            let map = choropleth_map(table, boundaries, selection.year, Some(&selection.county));
            let timeline = county_timeline(table, &selection.county);
            let barplot = pathogen_barplot(table, &selection.county, selection.disease);
            ViewPatch {
                selection,
                map: Some(map),
                timeline: Some(timeline),
                barplot: Some(barplot),
            }
        }
        UiEvent::DiseaseFilterChanged { disease } => {
            selection.disease = *disease;
            let barplot = pathogen_barplot(table, &selection.county, selection.disease);
            ViewPatch {
                selection,
                map: None,
                timeline: None,
                barplot: Some(barplot),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tick_map_dataset::prepare;
    use tick_map_surveillance_models::{DiseaseFilter, Pathogen, SurveillanceRecord, YEAR_MAX};
    use tick_map_view_models::Trace;

    fn boundaries() -> BoundarySet {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Suffolk County" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[
                            [-73.4, 40.6], [-71.9, 40.6], [-71.9, 41.2], [-73.4, 40.6]
                        ]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "Albany County" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[
                            [-74.3, 42.4], [-73.7, 42.4], [-73.7, 42.8], [-74.3, 42.4]
                        ]]
                    }
                }
            ]
        }"#;
        BoundarySet::from_geojson_str(raw).unwrap()
    }

    fn record(county: &str, year: u16, collected: f64, sites: f64) -> SurveillanceRecord {
        SurveillanceRecord {
            county: county.to_owned(),
            year,
            ticks_collected: collected,
            sites_visited: sites,
            ticks_tested: 40.0,
            pathogen_percent: [55.0, 10.0, 2.5, 1.2],
        }
    }

    fn table() -> DenseTable {
        prepare(
            &[
                record("Albany", 2022, 50.0, 100.0),
                record("Suffolk", 2022, 10.0, 40.0),
                record("Suffolk", 2020, 30.0, 60.0),
            ],
            &boundaries(),
        )
    }

    #[test]
    fn map_click_then_year_change_keeps_the_county() {
        let table = table();
        let boundaries = boundaries();
        let initial = Selection::initial("Albany");

        let clicked = dispatch(
            &table,
            &boundaries,
            &initial,
            &UiEvent::MapClicked {
                county: "Suffolk".to_owned(),
            },
        );
        assert_eq!(clicked.selection.county, "Suffolk");
        assert!(clicked.map.is_some());
        assert!(clicked.timeline.is_some());
        let barplot = clicked.barplot.as_ref().unwrap();
        assert_eq!(
            barplot.layout.title.as_ref().unwrap().text,
            "County: Suffolk"
        );

        let shifted = dispatch(
            &table,
            &boundaries,
            &clicked.selection,
            &UiEvent::YearChanged { year: 2020 },
        );
        assert_eq!(shifted.selection.year, 2020);
        assert_eq!(shifted.selection.county, "Suffolk");
        assert!(shifted.barplot.is_none());
        assert!(shifted.timeline.is_none());

        let map = shifted.map.as_ref().unwrap();
        assert_eq!(map.data.len(), 2);
        let Trace::Choropleth(main) = &map.data[0] else {
            panic!("expected a choropleth trace");
        };
        assert_eq!(main.z, [0.0, 0.5]);
        let Trace::Choropleth(outline) = &map.data[1] else {
            panic!("expected a choropleth outline trace");
        };
        assert_eq!(outline.locations, ["Suffolk"]);
    }

    #[test]
    fn timeline_click_moves_the_year() {
        let table = table();
        let boundaries = boundaries();
        let patch = dispatch(
            &table,
            &boundaries,
            &Selection::initial("Suffolk"),
            &UiEvent::TimelineClicked { year: 2010 },
        );
        assert_eq!(patch.selection.year, 2010);
        assert!(patch.map.is_some());
        assert!(patch.timeline.is_none());
        assert!(patch.barplot.is_none());
    }

    #[test]
    fn disease_change_rebuilds_only_the_barplot() {
        let table = table();
        let boundaries = boundaries();
        let patch = dispatch(
            &table,
            &boundaries,
            &Selection::initial("Suffolk"),
            &UiEvent::DiseaseFilterChanged {
                disease: DiseaseFilter::BMicroti,
            },
        );
        assert_eq!(patch.selection.disease, DiseaseFilter::BMicroti);
        assert!(patch.map.is_none());
        assert!(patch.timeline.is_none());
        assert_eq!(patch.barplot.as_ref().unwrap().data.len(), 1);
    }

    #[test]
    fn all_filter_dispatch_stacks_four_series() {
        let table = table();
        let boundaries = boundaries();
        let selection = Selection {
            disease: DiseaseFilter::BBurgdorferi,
            ..Selection::initial("Suffolk")
        };
        let patch = dispatch(
            &table,
            &boundaries,
            &selection,
            &UiEvent::DiseaseFilterChanged {
                disease: DiseaseFilter::All,
            },
        );
        let barplot = patch.barplot.as_ref().unwrap();
        assert_eq!(barplot.data.len(), Pathogen::all().len());
        assert_eq!(barplot.layout.barmode.as_deref(), Some("stack"));
    }

    #[test]
    fn unknown_county_click_retains_the_selection() {
        let table = table();
        let boundaries = boundaries();
        let initial = Selection::initial("Albany");
        let patch = dispatch(
            &table,
            &boundaries,
            &initial,
            &UiEvent::MapClicked {
                county: "Narnia".to_owned(),
            },
        );
        assert_eq!(patch.selection, initial);
        let timeline = patch.timeline.as_ref().unwrap();
        assert_eq!(
            timeline.layout.title.as_ref().unwrap().text,
            "County: Albany"
        );
    }

    #[test]
    fn out_of_range_year_is_ignored() {
        let table = table();
        let boundaries = boundaries();
        let patch = dispatch(
            &table,
            &boundaries,
            &Selection::initial("Suffolk"),
            &UiEvent::YearChanged { year: 2030 },
        );
        assert_eq!(patch.selection.year, YEAR_MAX);
        assert!(patch.map.is_some());
    }
}
