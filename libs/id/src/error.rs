//! Error type for the strict identifier parsing surface.

use thiserror::Error;

/// Errors produced by the strict (`FromStr`/serde) parsing surface.
///
/// The lenient [`TraceId::parse`](crate::TraceId::parse) constructor never
/// returns an error; it reports failure through
/// [`is_valid`](crate::TraceId::is_valid) instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input did not decode into three dot-separated 64-bit integers.
    #[error("malformed trace id: expected 'part1.part2.part3', got '{input}'")]
    Malformed { input: String },
}
