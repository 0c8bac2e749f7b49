//! Canonical column names for customer record tables.

/// Header name for the customer name column.
pub const NAME: &str = "name";

/// Header name for the email column. Email is the filter and dedup key.
pub const EMAIL: &str = "email";

/// Case-insensitive match of a source header against a canonical column name.
///
/// Source headers arrive with arbitrary casing and padding; stored output
/// headers are always the canonical lowercase names.
pub fn header_matches(header: &str, column: &str) -> bool {
    header.trim().eq_ignore_ascii_case(column)
}
