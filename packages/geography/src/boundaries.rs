//! Boundary collection parsing and the canonical county domain.
//!
//! The boundary file is a `GeoJSON` `FeatureCollection` where every feature
//! carries a `properties.name` (often suffixed with `" County"`) and a
//! `Polygon` or `MultiPolygon` geometry. Anything else is a fatal load
//! error: the choropleth cannot render counties it cannot outline.

use geo::BoundingRect;
use geojson::GeoJson;
use tick_map_geography_models::{BoundingBox, CountyBoundary};

use crate::GeoError;

/// Strips the fixed `" County"` suffix from a boundary feature name.
///
/// Names without the suffix are returned unchanged.
#[must_use]
pub fn normalize_county_name(raw: &str) -> &str {
    raw.strip_suffix(" County").unwrap_or(raw)
}

/// The loaded county boundaries plus everything derived from them: the
/// canonical (distinct, sorted) county domain and the overall map extent.
#[derive(Debug, Clone)]
pub struct BoundarySet {
    /// All boundary features, sorted by normalized name. A county split
    /// across several features keeps one entry per feature.
    features: Vec<CountyBoundary>,
    /// Distinct normalized county names, sorted lexicographically.
    names: Vec<String>,
    /// Smallest box containing every feature.
    bounds: BoundingBox,
}

impl BoundarySet {
    /// Loads and normalizes a boundary file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if the file cannot be read or fails
    /// [`Self::from_geojson_str`].
    pub fn load(path: &std::path::Path) -> Result<Self, GeoError> {
        let raw = std::fs::read_to_string(path)?;
        let set = Self::from_geojson_str(&raw)?;
        log::info!(
            "Loaded {} county boundaries ({} counties) from {}",
            set.features.len(),
            set.names.len(),
            path.display()
        );
        Ok(set)
    }

    /// Parses a `GeoJSON` string into a normalized boundary set.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if the string is not a `FeatureCollection`, if
    /// any feature lacks a `properties.name` or an areal geometry, or if
    /// the collection is empty.
    pub fn from_geojson_str(raw: &str) -> Result<Self, GeoError> {
        let geojson: GeoJson = raw.parse()?;
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(GeoError::Invalid {
                message: "expected a GeoJSON FeatureCollection".to_string(),
            });
        };

        let mut features: Vec<CountyBoundary> = Vec::with_capacity(collection.features.len());
        let mut bounds: Option<BoundingBox> = None;

        for (i, feature) in collection.features.into_iter().enumerate() {
            let Some(name) = feature.property("name").and_then(serde_json::Value::as_str) else {
                return Err(GeoError::Invalid {
                    message: format!("feature {i} has no properties.name"),
                });
            };
            let name = normalize_county_name(name).to_string();

            let Some(geometry) = feature.geometry else {
                return Err(GeoError::Invalid {
                    message: format!("feature {i} ({name}) has no geometry"),
                });
            };

            let geo_geometry =
                geo::Geometry::<f64>::try_from(geometry.clone()).map_err(|e| GeoError::Invalid {
                    message: format!("feature {i} ({name}): {e}"),
                })?;
            let rect = match &geo_geometry {
                geo::Geometry::Polygon(polygon) => polygon.bounding_rect(),
                geo::Geometry::MultiPolygon(multi_polygon) => multi_polygon.bounding_rect(),
                _ => {
                    return Err(GeoError::Invalid {
                        message: format!(
                            "feature {i} ({name}): expected a Polygon or MultiPolygon geometry"
                        ),
                    });
                }
            };
            let rect = rect.ok_or_else(|| GeoError::Invalid {
                message: format!("feature {i} ({name}) has an empty geometry"),
            })?;
            let feature_box =
                BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y);
            bounds = Some(bounds.map_or(feature_box, |b| b.union(&feature_box)));

            features.push(CountyBoundary {
                name,
                geometry: serde_json::to_value(&geometry)?,
            });
        }

        let Some(bounds) = bounds else {
            return Err(GeoError::Invalid {
                message: "boundary file contains no features".to_string(),
            });
        };

        features.sort_by(|a, b| a.name.cmp(&b.name));

        let mut names: Vec<String> = features.iter().map(|f| f.name.clone()).collect();
        names.dedup();

        Ok(Self {
            features,
            names,
            bounds,
        })
    }

    /// All boundary features, sorted by normalized name.
    #[must_use]
    pub fn features(&self) -> &[CountyBoundary] {
        &self.features
    }

    /// The canonical county domain: distinct normalized names, sorted.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` if `name` is in the canonical county domain.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    /// First boundary feature for the given normalized name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CountyBoundary> {
        self.features.iter().find(|f| f.name == name)
    }

    /// Overall geographic extent of the collection.
    #[must_use]
    pub const fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Number of counties in the canonical domain.
    #[must_use]
    pub fn county_count(&self) -> usize {
        self.names.len()
    }

    /// Re-serializes the normalized features as a `GeoJSON`
    /// `FeatureCollection` value, ready to embed in a choropleth trace.
    #[must_use]
    pub fn to_feature_collection(&self) -> serde_json::Value {
        let features: Vec<serde_json::Value> = self
            .features
            .iter()
            .map(|county| {
                serde_json::json!({
                    "type": "Feature",
                    "properties": { "name": county.name },
                    "geometry": county.geometry,
                })
            })
            .collect();
        serde_json::json!({ "type": "FeatureCollection", "features": features })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> &'static str {
        r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Suffolk County" },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[
                            [-73.4, 40.6], [-71.9, 40.6], [-71.9, 41.2],
                            [-73.4, 41.2], [-73.4, 40.6]
                        ]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "Albany County" },
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [[[
                            [-74.3, 42.4], [-73.7, 42.4], [-73.7, 42.8],
                            [-74.3, 42.8], [-74.3, 42.4]
                        ]]]
                    }
                }
            ]
        }"#
    }

    #[test]
    fn strips_county_suffix() {
        assert_eq!(normalize_county_name("Albany County"), "Albany");
        assert_eq!(normalize_county_name("Albany"), "Albany");
        assert_eq!(normalize_county_name("New York County"), "New York");
    }

    #[test]
    fn builds_sorted_canonical_domain() {
        let set = BoundarySet::from_geojson_str(fixture()).unwrap();
        assert_eq!(set.names(), ["Albany", "Suffolk"]);
        assert_eq!(set.county_count(), 2);
        assert!(set.contains("Suffolk"));
        assert!(!set.contains("Suffolk County"));
        assert!(!set.contains("Bronx"));
    }

    #[test]
    fn computes_overall_bounds() {
        let set = BoundarySet::from_geojson_str(fixture()).unwrap();
        let bounds = set.bounds();
        assert!((bounds.west - -74.3).abs() < f64::EPSILON);
        assert!((bounds.south - 40.6).abs() < f64::EPSILON);
        assert!((bounds.east - -71.9).abs() < f64::EPSILON);
        assert!((bounds.north - 42.8).abs() < f64::EPSILON);
    }

    #[test]
    fn feature_collection_uses_normalized_names() {
        let set = BoundarySet::from_geojson_str(fixture()).unwrap();
        let collection = set.to_feature_collection();
        let names: Vec<&str> = collection["features"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["properties"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Albany", "Suffolk"]);
        assert_eq!(
            collection["features"][1]["geometry"]["type"]
                .as_str()
                .unwrap(),
            "Polygon"
        );
    }

    #[test]
    fn rejects_feature_without_name() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]] }
            }]
        }"#;
        let err = BoundarySet::from_geojson_str(raw).unwrap_err();
        assert!(err.to_string().contains("properties.name"), "{err}");
    }

    #[test]
    fn rejects_non_areal_geometry() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "name": "Albany" },
                "geometry": { "type": "Point", "coordinates": [-73.8, 42.6] }
            }]
        }"#;
        let err = BoundarySet::from_geojson_str(raw).unwrap_err();
        assert!(err.to_string().contains("Polygon"), "{err}");
    }

    #[test]
    fn rejects_empty_collection() {
        let raw = r#"{ "type": "FeatureCollection", "features": [] }"#;
        assert!(BoundarySet::from_geojson_str(raw).is_err());
    }

    #[test]
    fn rejects_bare_geometry_document() {
        let raw = r#"{ "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]] }"#;
        let err = BoundarySet::from_geojson_str(raw).unwrap_err();
        assert!(err.to_string().contains("FeatureCollection"), "{err}");
    }

    #[test]
    fn duplicate_feature_names_collapse_in_domain() {
        let raw = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "name": "Essex County" },
                    "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]] }
                },
                {
                    "type": "Feature",
                    "properties": { "name": "Essex" },
                    "geometry": { "type": "Polygon", "coordinates": [[[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 2.0]]] }
                }
            ]
        }"#;
        let set = BoundarySet::from_geojson_str(raw).unwrap();
        assert_eq!(set.names(), ["Essex"]);
        assert_eq!(set.features().len(), 2);
    }
}
