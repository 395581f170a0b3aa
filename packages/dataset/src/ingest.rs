//! Surveillance CSV parsing.
//!
//! The export is a plain CSV with one row per county and collection year.
//! Columns are located by header name, so extra columns (population density,
//! centroids) are ignored. Empty numeric cells read as 0, matching the
//! zero-fill policy of the dense join.

use std::io::Read;
use std::path::Path;

use tick_map_surveillance_models::{PATHOGEN_COUNT, Pathogen, SurveillanceRecord};

use crate::DataError;

/// Header of the county name column.
pub const COUNTY_COLUMN: &str = "County";
/// Header of the collection year column.
pub const YEAR_COLUMN: &str = "Year";
/// Header of the total-nymphs-collected column.
pub const COLLECTED_COLUMN: &str = "Total Ticks Collected";
/// Header of the total-sites-visited column.
pub const SITES_COLUMN: &str = "Total Sites Visited";
/// Header of the total-nymphs-tested column.
pub const TESTED_COLUMN: &str = "Total Tested";

/// Loads surveillance records from a CSV file on disk.
///
/// # Errors
///
/// Returns [`DataError`] if the file cannot be read or fails
/// [`records_from_reader`].
pub fn load_records(path: &Path) -> Result<Vec<SurveillanceRecord>, DataError> {
    let file = std::fs::File::open(path)?;
    let records = records_from_reader(file)?;
    log::info!(
        "Loaded {} surveillance records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parses surveillance records from any CSV reader.
///
/// # Errors
///
/// Returns [`DataError::Schema`] if a required column is missing from the
/// header row, and [`DataError::Cell`] for unparseable year or measurement
/// cells.
pub fn records_from_reader(reader: impl Read) -> Result<Vec<SurveillanceRecord>, DataError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();
    let column = |name: &'static str| -> Result<usize, DataError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataError::Schema { column: name })
    };

    let county_col = column(COUNTY_COLUMN)?;
    let year_col = column(YEAR_COLUMN)?;
    let collected_col = column(COLLECTED_COLUMN)?;
    let sites_col = column(SITES_COLUMN)?;
    let tested_col = column(TESTED_COLUMN)?;
    let mut percent_cols = [0; PATHOGEN_COUNT];
    for pathogen in Pathogen::all() {
        percent_cols[pathogen.index()] = column(pathogen.column_header())?;
    }

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row = i + 1;

        let county = cell(&record, county_col).to_owned();
        let year = parse_year(&record, year_col, row)?;
        let ticks_collected = parse_measurement(&record, collected_col, COLLECTED_COLUMN, row)?;
        let sites_visited = parse_measurement(&record, sites_col, SITES_COLUMN, row)?;
        let ticks_tested = parse_measurement(&record, tested_col, TESTED_COLUMN, row)?;
        let mut pathogen_percent = [0.0; PATHOGEN_COUNT];
        for pathogen in Pathogen::all() {
            pathogen_percent[pathogen.index()] = parse_measurement(
                &record,
                percent_cols[pathogen.index()],
                pathogen.column_header(),
                row,
            )?;
        }

        records.push(SurveillanceRecord {
            county,
            year,
            ticks_collected,
            sites_visited,
            ticks_tested,
            pathogen_percent,
        });
    }

    Ok(records)
}

fn cell<'a>(record: &'a csv::StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("").trim()
}

fn parse_year(record: &csv::StringRecord, index: usize, row: usize) -> Result<u16, DataError> {
    let raw = cell(record, index);
    raw.parse().map_err(|_| DataError::Cell {
        row,
        column: YEAR_COLUMN,
        value: raw.to_owned(),
    })
}

/// Parses a numeric cell. Empty cells read as 0; anything else must be a
/// finite number.
fn parse_measurement(
    record: &csv::StringRecord,
    index: usize,
    column: &'static str,
    row: usize,
) -> Result<f64, DataError> {
    let raw = cell(record, index);
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| DataError::Cell {
            row,
            column,
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "County,Year,Total Sites Visited,Total Ticks Collected,\
Tick Population Density,Total Tested,B. burgdorferi (%),A. phagocytophilum (%),\
B. microti (%),B. miyamotoi (%)";

    #[test]
    fn parses_rows_by_header_name() {
        let csv = format!("{HEADER}\nAlbany,2015,100,50,0.5,40,55.0,10.0,2.5,1.2\n");
        let records = records_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.county, "Albany");
        assert_eq!(record.year, 2015);
        assert!((record.ticks_collected - 50.0).abs() < f64::EPSILON);
        assert!((record.sites_visited - 100.0).abs() < f64::EPSILON);
        assert!((record.ticks_tested - 40.0).abs() < f64::EPSILON);
        assert!((record.percent(Pathogen::BBurgdorferi) - 55.0).abs() < f64::EPSILON);
        assert!((record.percent(Pathogen::BMiyamotoi) - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_column_error_names_the_column() {
        let csv = "County,Year,Total Ticks Collected,Total Tested,\
B. burgdorferi (%),A. phagocytophilum (%),B. microti (%),B. miyamotoi (%)\n";
        let err = records_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DataError::Schema { column } => assert_eq!(column, SITES_COLUMN),
            other => panic!("expected schema error, got {other}"),
        }
    }

    #[test]
    fn missing_pathogen_column_is_a_schema_error() {
        let csv = "County,Year,Total Sites Visited,Total Ticks Collected,Total Tested,\
B. burgdorferi (%),A. phagocytophilum (%),B. microti (%)\n";
        let err = records_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DataError::Schema { column } => {
                assert_eq!(column, Pathogen::BMiyamotoi.column_header());
            }
            other => panic!("expected schema error, got {other}"),
        }
    }

    #[test]
    fn empty_measurement_cells_read_as_zero() {
        let csv = format!("{HEADER}\nBronx,2010,,,,,,,,\n");
        let records = records_from_reader(csv.as_bytes()).unwrap();
        let record = &records[0];
        assert!(record.sites_visited.abs() < f64::EPSILON);
        assert!(record.ticks_collected.abs() < f64::EPSILON);
        assert!(record.pathogen_percent.iter().all(|p| p.abs() < f64::EPSILON));
    }

    #[test]
    fn bad_measurement_cell_reports_row_and_column() {
        let csv = format!(
            "{HEADER}\nAlbany,2015,100,50,0.5,40,55.0,10.0,2.5,1.2\n\
Bronx,2016,ten,3,0.1,2,1.0,0.0,0.0,0.0\n"
        );
        let err = records_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DataError::Cell { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, SITES_COLUMN);
                assert_eq!(value, "ten");
            }
            other => panic!("expected cell error, got {other}"),
        }
    }

    #[test]
    fn non_finite_measurement_is_rejected() {
        let csv = format!("{HEADER}\nAlbany,2015,NaN,50,0.5,40,55.0,10.0,2.5,1.2\n");
        assert!(records_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn bad_year_cell_is_rejected() {
        let csv = format!("{HEADER}\nAlbany,20x5,100,50,0.5,40,55.0,10.0,2.5,1.2\n");
        let err = records_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DataError::Cell { column, .. } => assert_eq!(column, YEAR_COLUMN),
            other => panic!("expected cell error, got {other}"),
        }
    }
}
