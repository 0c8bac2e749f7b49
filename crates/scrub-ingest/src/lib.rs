pub mod csv_table;
pub mod polars_utils;

pub use csv_table::{CsvTable, read_csv_table};
pub use polars_utils::{any_to_string, format_numeric};
