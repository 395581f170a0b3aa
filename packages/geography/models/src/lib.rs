#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! County boundary types.
//!
//! These types represent the geographic side of the dashboard: one polygon
//! (or multi-polygon) per county, already normalized to the canonical county
//! names the surveillance table joins on.

use serde::{Deserialize, Serialize};

/// A single county boundary with its normalized name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyBoundary {
    /// Normalized county name (" County" suffix stripped).
    pub name: String,
    /// GeoJSON geometry object (`Polygon` or `MultiPolygon`), kept as a
    /// JSON value because it is re-emitted verbatim into the map figure.
    pub geometry: serde_json::Value,
}

/// Geographic bounding box in lon/lat degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from the given coordinates.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            west: self.west.min(other.west),
            south: self.south.min(other.south),
            east: self.east.max(other.east),
            north: self.north.max(other.north),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_expands_to_cover_both() {
        let a = BoundingBox::new(-79.8, 40.5, -75.0, 43.0);
        let b = BoundingBox::new(-74.3, 40.4, -71.8, 45.0);
        let u = a.union(&b);
        assert_eq!(u, BoundingBox::new(-79.8, 40.4, -71.8, 45.0));
    }
}
