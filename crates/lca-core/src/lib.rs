//! LCA Core Library
//!
//! Domain models and operations for the Legal Contract Analyzer backend.

pub mod analysis;
pub mod contract;
pub mod error;

pub use error::{LcaError, LcaResult};

/// Current UTC time as an RFC 3339 string with microsecond precision.
///
/// Fixed-width so that lexical order in SQLite matches chronological order.
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
