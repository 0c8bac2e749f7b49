//! Record cleaning core.
//!
//! This crate turns raw CSV tables into [`RecordFrame`]s, cleans them with
//! [`clean_frame`], and measures what cleaning removed with
//! [`measure_cleaning`]. Cleaning canonicalizes `name` and `email`, drops
//! rows without a usable email, and keeps the first row per canonical
//! email in input order.

pub mod clean;
pub mod frame;
pub mod frame_builder;
pub mod stats;
pub mod text;

pub use clean::clean_frame;
pub use frame::RecordFrame;
pub use frame_builder::build_record_frame;
pub use stats::measure_cleaning;
pub use text::canonicalize;
