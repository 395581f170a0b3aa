#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chart derivation.
//!
//! Everything here is a pure projection of the dense table, the boundary
//! set, and a selection. [`figures`] builds the three chart specifications;
//! [`controller`] applies one UI event to a selection and recomputes exactly
//! the charts that event affects.

pub mod controller;
pub mod figures;

pub use controller::dispatch;
pub use figures::{choropleth_map, county_timeline, pathogen_barplot};
