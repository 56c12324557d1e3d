//! CSV loading of benchmark tables.
//!
//! Tables are read completely into memory. A missing file, an unparsable row
//! or an out-of-range value aborts the load; there is no partial result.

use super::schema::{MeasurementRecord, MeasurementTable};
use crate::utils::error::LoadError;
use log::{debug, info};
use std::io::Read;
use std::path::Path;

/// Read a benchmark table from a CSV file
///
/// **Public** - main entry point for table loading
///
/// # Arguments
/// * `path` - Path to the CSV file (header row required)
///
/// # Returns
/// All rows of the table, in file order
///
/// # Errors
/// * `LoadError::Open` - file missing or unreadable
/// * `LoadError::Malformed` - a row does not match the column schema
/// * `LoadError::InvalidValue` - a numeric field is negative or not finite
pub fn read_table(path: impl AsRef<Path>) -> Result<MeasurementTable, LoadError> {
    let path = path.as_ref();

    info!("Reading table: {}", path.display());

    let reader = csv_builder()
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    collect_records(reader, path.display().to_string())
}

/// Parse a benchmark table from any reader
///
/// **Public** - useful for tests and in-memory data
pub fn parse_table<R: Read>(input: R, source: &str) -> Result<MeasurementTable, LoadError> {
    collect_records(csv_builder().from_reader(input), source.to_string())
}

/// Shared reader settings
///
/// **Private** - headers are required, cell whitespace is ignored
fn csv_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

fn collect_records<R: Read>(
    mut reader: csv::Reader<R>,
    source: String,
) -> Result<MeasurementTable, LoadError> {
    let mut records = Vec::new();

    for (index, row) in reader.deserialize::<MeasurementRecord>().enumerate() {
        let record = row?;
        validate_record(&record, index + 1)?;
        records.push(record);
    }

    debug!("Loaded {} rows from {}", records.len(), source);

    Ok(MeasurementTable::new(source, records))
}

/// Check numeric fields of one row
///
/// **Private** - `row` is the 1-based data row (header excluded)
fn validate_record(record: &MeasurementRecord, row: usize) -> Result<(), LoadError> {
    for (column, value) in record.numeric_fields() {
        if !value.is_finite() || value < 0.0 {
            return Err(LoadError::InvalidValue { row, column, value });
        }
    }

    Ok(())
}
