//! The record normalizer.
//!
//! [`clean_frame`] is the single transformation this system exists for:
//! canonicalize `name` and `email`, drop rows without a usable email, and
//! keep the first row for each canonical email in input order.

use std::collections::BTreeSet;

use anyhow::Result;
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use tracing::debug;

use scrub_ingest::any_to_string;
use scrub_model::columns;

use crate::text::canonicalize;

/// Clean a customer record frame.
///
/// Returns a new frame; the input is never mutated. Steps, in order:
///
/// 1. canonicalize every non-null `name` (trim + lowercase), nulls pass
///    through;
/// 2. canonicalize every non-null `email` the same way;
/// 3. drop rows whose email is null or empty after canonicalization;
/// 4. keep only the first row for each canonical email, in input order.
///
/// Passthrough columns are carried unchanged. A frame without a `name` or
/// `email` column is a precondition violation and surfaces as the
/// underlying column-not-found error. A zero-row frame cleans to a
/// zero-row frame of the same schema.
pub fn clean_frame(df: &DataFrame) -> Result<DataFrame> {
    let names = canonical_column(df, columns::NAME)?;
    let emails = canonical_column(df, columns::EMAIL)?;

    let mut canonical = df.clone();
    canonical.with_column(Series::new(columns::NAME.into(), names))?;
    canonical.with_column(Series::new(columns::EMAIL.into(), emails.clone()))?;

    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(emails.len());
    for email in &emails {
        let keep_row = match email.as_deref() {
            Some(value) if !value.is_empty() => seen.insert(value.to_string()),
            _ => false,
        };
        keep.push(keep_row);
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let cleaned = canonical.filter(&mask)?;
    debug!(
        input_rows = df.height(),
        output_rows = cleaned.height(),
        "frame cleaned"
    );
    Ok(cleaned)
}

/// Canonical values of a string column, with nulls passed through.
fn canonical_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        values.push(match value {
            AnyValue::Null => None,
            other => Some(canonicalize(&any_to_string(other))),
        });
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use polars::prelude::{Column, IntoColumn};

    use super::*;

    fn test_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| {
                Series::new(
                    name.into(),
                    values
                        .into_iter()
                        .map(|value| value.map(String::from))
                        .collect::<Vec<Option<String>>>(),
                )
                .into_column()
            })
            .collect();
        DataFrame::new(cols).unwrap()
    }

    fn column_values(df: &DataFrame, name: &str) -> Vec<Option<String>> {
        let series = df.column(name).unwrap();
        (0..df.height())
            .map(|idx| match series.get(idx).unwrap() {
                AnyValue::Null => None,
                other => Some(any_to_string(other)),
            })
            .collect()
    }

    #[test]
    fn canonicalizes_names_and_emails() {
        let df = test_df(vec![
            ("name", vec![Some(" John Doe "), Some("Jane")]),
            ("email", vec![Some(" JOHN@EXAMPLE.COM "), Some("jane@example.com")]),
        ]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(cleaned.height(), 2);
        assert_eq!(
            column_values(&cleaned, "name"),
            vec![Some("john doe".to_string()), Some("jane".to_string())]
        );
        assert_eq!(
            column_values(&cleaned, "email"),
            vec![
                Some("john@example.com".to_string()),
                Some("jane@example.com".to_string())
            ]
        );
    }

    #[test]
    fn drops_null_emails() {
        let df = test_df(vec![
            ("name", vec![Some("A"), Some("B")]),
            ("email", vec![None, Some("b@x.com")]),
        ]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(cleaned.height(), 1);
        assert_eq!(
            column_values(&cleaned, "email"),
            vec![Some("b@x.com".to_string())]
        );
        assert_eq!(column_values(&cleaned, "name"), vec![Some("b".to_string())]);
    }

    #[test]
    fn dedup_is_case_insensitive_and_first_wins() {
        let df = test_df(vec![
            ("name", vec![Some("A"), Some("B")]),
            ("email", vec![Some("x@y.com"), Some("X@Y.COM")]),
        ]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(cleaned.height(), 1);
        assert_eq!(column_values(&cleaned, "name"), vec![Some("a".to_string())]);
        assert_eq!(
            column_values(&cleaned, "email"),
            vec![Some("x@y.com".to_string())]
        );
    }

    #[test]
    fn dedup_catches_whitespace_variants() {
        let df = test_df(vec![
            ("name", vec![Some("John Doe"), Some("Jane"), Some("John Duplicate")]),
            (
                "email",
                vec![
                    Some("john@example.com"),
                    Some("jane@example.com"),
                    Some("  JOHN@EXAMPLE.COM  "),
                ],
            ),
        ]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(cleaned.height(), 2);
    }

    #[test]
    fn empty_string_email_is_dropped() {
        let df = test_df(vec![("name", vec![Some("A")]), ("email", vec![Some("")])]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(cleaned.height(), 0);
    }

    #[test]
    fn whitespace_only_email_is_dropped() {
        let df = test_df(vec![("name", vec![Some("A")]), ("email", vec![Some("   ")])]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(cleaned.height(), 0);
    }

    #[test]
    fn empty_frame_cleans_to_empty_frame() {
        let df = test_df(vec![("name", vec![]), ("email", vec![])]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(cleaned.height(), 0);
        assert_eq!(cleaned.width(), 2);
    }

    #[test]
    fn all_null_emails_clean_to_empty_frame() {
        let df = test_df(vec![
            ("name", vec![Some("A"), Some("B")]),
            ("email", vec![None, None]),
        ]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(cleaned.height(), 0);
    }

    #[test]
    fn null_names_pass_through() {
        let df = test_df(vec![
            ("name", vec![None, Some(" B ")]),
            ("email", vec![Some("a@x.com"), Some("b@x.com")]),
        ]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(
            column_values(&cleaned, "name"),
            vec![None, Some("b".to_string())]
        );
    }

    #[test]
    fn passthrough_columns_survive_with_the_first_duplicate() {
        let df = test_df(vec![
            ("name", vec![Some("A"), Some("B"), Some("C")]),
            (
                "email",
                vec![Some("x@y.com"), None, Some("X@Y.COM")],
            ),
            ("city", vec![Some(" Seattle "), Some("Olympia"), Some("Tacoma")]),
        ]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(cleaned.height(), 1);
        // Passthrough values are preserved unchanged, no trim or lowercase.
        assert_eq!(
            column_values(&cleaned, "city"),
            vec![Some(" Seattle ".to_string())]
        );
    }

    #[test]
    fn input_frame_is_not_mutated() {
        let df = test_df(vec![
            ("name", vec![Some("  JOHN DOE  ")]),
            ("email", vec![Some("  JOHN@EXAMPLE.COM  ")]),
        ]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(
            column_values(&df, "name"),
            vec![Some("  JOHN DOE  ".to_string())]
        );
        assert_eq!(
            column_values(&df, "email"),
            vec![Some("  JOHN@EXAMPLE.COM  ".to_string())]
        );
        assert_eq!(
            column_values(&cleaned, "name"),
            vec![Some("john doe".to_string())]
        );
        assert_eq!(
            column_values(&cleaned, "email"),
            vec![Some("john@example.com".to_string())]
        );
    }

    #[test]
    fn missing_email_column_is_an_error() {
        let df = test_df(vec![("name", vec![Some("A")])]);

        assert!(clean_frame(&df).is_err());
    }

    #[test]
    fn preserves_relative_order_of_survivors() {
        let df = test_df(vec![
            ("name", vec![Some("A"), Some("B"), Some("C"), Some("D")]),
            (
                "email",
                vec![Some("d@x.com"), None, Some("a@x.com"), Some("D@X.COM")],
            ),
        ]);

        let cleaned = clean_frame(&df).unwrap();

        assert_eq!(
            column_values(&cleaned, "email"),
            vec![Some("d@x.com".to_string()), Some("a@x.com".to_string())]
        );
    }
}
