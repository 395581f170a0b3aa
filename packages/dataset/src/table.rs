//! The dense county-by-year join.
//!
//! `prepare` turns the raw surveillance rows into a table with exactly one
//! row per (county, year) pair over the covered range. Counties come from
//! the boundary file, years from the fixed range, and any pair without a
//! raw record is zero-filled.

use std::collections::BTreeMap;

use tick_map_geography::BoundarySet;
use tick_map_surveillance_models::{
    DenseRecord, PATHOGEN_COUNT, SurveillanceRecord, YEAR_COUNT, YEAR_MIN, year_in_range, years,
};

/// The dense (county × year) table every chart is a projection of.
///
/// Rows are ordered by (county, year): the full year range for the first
/// county, then the next county, and so on. Built once at startup and never
/// mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseTable {
    rows: Vec<DenseRecord>,
    counties: Vec<String>,
}

impl DenseTable {
    /// All rows, ordered by (county, year).
    #[must_use]
    pub fn rows(&self) -> &[DenseRecord] {
        &self.rows
    }

    /// The canonical county domain, sorted lexicographically.
    #[must_use]
    pub fn counties(&self) -> &[String] {
        &self.counties
    }

    /// Returns `true` if `county` is in the canonical domain.
    #[must_use]
    pub fn contains_county(&self, county: &str) -> bool {
        self.counties
            .binary_search_by(|c| c.as_str().cmp(county))
            .is_ok()
    }

    /// All rows for one year, in county order.
    pub fn rows_for_year(&self, year: u16) -> impl Iterator<Item = &DenseRecord> {
        self.rows.iter().filter(move |row| row.year == year)
    }

    /// The year rows for one county, in ascending year order. Empty for a
    /// county outside the canonical domain.
    #[must_use]
    pub fn rows_for_county(&self, county: &str) -> &[DenseRecord] {
        self.counties
            .binary_search_by(|c| c.as_str().cmp(county))
            .map_or(&[], |index| {
                let start = index * YEAR_COUNT;
                &self.rows[start..start + YEAR_COUNT]
            })
    }

    /// Looks up the single row for a (county, year) pair.
    #[must_use]
    pub fn get(&self, county: &str, year: u16) -> Option<&DenseRecord> {
        if !year_in_range(year) {
            return None;
        }
        let index = self
            .counties
            .binary_search_by(|c| c.as_str().cmp(county))
            .ok()?;
        self.rows
            .get(index * YEAR_COUNT + usize::from(year - YEAR_MIN))
    }

    /// Total row count, always |counties| × the year count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the dense table from raw records and the canonical county domain.
///
/// Raw records are left-joined onto the (county, year) cross product. Rows
/// for counties without a boundary, or for years outside the covered range,
/// are ignored; duplicate (county, year) rows resolve to the last one seen.
#[must_use]
pub fn prepare(records: &[SurveillanceRecord], boundaries: &BoundarySet) -> DenseTable {
    let mut matched: BTreeMap<&str, BTreeMap<u16, &SurveillanceRecord>> = BTreeMap::new();
    let mut ignored = 0_usize;
    for record in records {
        if !boundaries.contains(&record.county) || !year_in_range(record.year) {
            ignored += 1;
            continue;
        }
        matched
            .entry(record.county.as_str())
            .or_default()
            .insert(record.year, record);
    }
    if ignored > 0 {
        log::warn!("Ignored {ignored} surveillance records outside the county/year domain");
    }

    let mut rows = Vec::with_capacity(boundaries.county_count() * YEAR_COUNT);
    for county in boundaries.names() {
        let by_year = matched.get(county.as_str());
        for year in years() {
            let record = by_year.and_then(|m| m.get(&year).copied());
            rows.push(record.map_or_else(|| zero_row(county, year), dense_row));
        }
    }

    log::info!(
        "Prepared dense table: {} counties x {} years = {} rows",
        boundaries.county_count(),
        YEAR_COUNT,
        rows.len()
    );

    DenseTable {
        rows,
        counties: boundaries.names().to_vec(),
    }
}

/// Ticks collected per site visited, rounded to 3 decimals. Zero sites
/// yields a zero estimate: a county without surveillance renders as zero
/// risk, since the map has no separate no-data channel.
#[must_use]
pub fn estimate(ticks_collected: f64, sites_visited: f64) -> f64 {
    if sites_visited > 0.0 {
        round3(ticks_collected / sites_visited)
    } else {
        0.0
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn dense_row(record: &SurveillanceRecord) -> DenseRecord {
    DenseRecord {
        county: record.county.clone(),
        year: record.year,
        ticks_collected: record.ticks_collected,
        sites_visited: record.sites_visited,
        ticks_tested: record.ticks_tested,
        pathogen_percent: record.pathogen_percent,
        estimate: estimate(record.ticks_collected, record.sites_visited),
    }
}

fn zero_row(county: &str, year: u16) -> DenseRecord {
    DenseRecord {
        county: county.to_owned(),
        year,
        ticks_collected: 0.0,
        sites_visited: 0.0,
        ticks_tested: 0.0,
        pathogen_percent: [0.0; PATHOGEN_COUNT],
        estimate: 0.0,
    }
}
