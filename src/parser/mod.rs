//! Benchmark table loading and row schema.
//!
//! This module handles:
//! - Defining the measurement row schema
//! - Reading CSV tables into memory
//! - Validating numeric fields

pub mod schema;
pub mod table;

// Re-export main types
pub use schema::{MeasurementRecord, MeasurementTable};
pub use table::{parse_table, read_table};
