//! # tracekit-id
//!
//! Trace/segment identifier for the tracekit agent core.
//!
//! ## Design Principles
//!
//! - Identifiers are minted by an external generator as three 64-bit parts;
//!   this crate stores, encodes, compares, and transports them without
//!   interpreting their numeric content
//! - The canonical string form is `part1.part2.part3` and round-trips
//!   (construct, encode, parse)
//! - Lenient parsing never fails loudly: malformed input yields an identifier
//!   that reports `is_valid() == false` and is discarded by the caller
//! - Equality and hashing look only at the three parts, so identifiers work
//!   as map keys regardless of encoding-cache state
//!
//! ## Identifier Layout
//!
//! - `part1` — application instance id, assigned by an external registry
//! - `part2` — thread/worker id at creation time
//! - `part3` — `timestamp * 10000 + sequence`, where the sequence in
//!   `[0, 9999]` disambiguates identifiers minted within the same
//!   millisecond on the same thread
//!
//! Example: `12.35.15127007074950000`

mod error;
mod trace_id;

pub use error::IdError;
pub use trace_id::TraceId;

/// Re-export of the wire message type produced by [`TraceId::transform`].
pub use tracekit_proto::common::v1::UniqueId;
