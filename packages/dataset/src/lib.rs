#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Surveillance data preparation.
//!
//! Loads the flat per-county-per-year surveillance export and joins it onto
//! the canonical county domain, producing the dense table every chart is a
//! projection of: exactly one row per (county, year) pair in the covered
//! range, zero-filled where no surveillance happened, with the collection
//! estimate precomputed per row.

pub mod ingest;
pub mod table;

pub use ingest::{load_records, records_from_reader};
pub use table::{DenseTable, prepare};

use thiserror::Error;

/// Errors that can occur while loading surveillance records.
#[derive(Debug, Error)]
pub enum DataError {
    /// Surveillance file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks a required column.
    #[error("Missing required column '{column}'")]
    Schema {
        /// Header the surveillance export must carry.
        column: &'static str,
    },

    /// A cell could not be parsed as its expected type.
    #[error("Row {row}: invalid {column} value '{value}'")]
    Cell {
        /// 1-based data row number, excluding the header.
        row: usize,
        /// Column the bad value came from.
        column: &'static str,
        /// Raw cell contents.
        value: String,
    },
}
