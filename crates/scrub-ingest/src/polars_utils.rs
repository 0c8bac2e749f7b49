//! Polars `AnyValue` utility functions.

use polars::prelude::AnyValue;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, strips trailing zeros from floats.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_becomes_empty() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn strings_pass_through() {
        assert_eq!(any_to_string(AnyValue::String("jane@example.com")), "jane@example.com");
        assert_eq!(any_to_string(AnyValue::String("  ")), "  ");
    }

    #[test]
    fn floats_drop_trailing_zeros() {
        assert_eq!(format_numeric(42.0), "42");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(3.0)), "3");
    }
}
