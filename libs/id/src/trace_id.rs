//! The trace/segment identifier value object.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::OnceLock;

use tracekit_proto::common::v1::UniqueId;

use crate::IdError;

/// Globally unique trace/segment identifier.
///
/// Holds the three 64-bit parts assigned by the external id generator:
/// application instance, thread, and a timestamp-sequence composite. The
/// canonical string form is `part1.part2.part3`.
///
/// Immutable after construction apart from the one-time lazy computation of
/// the cached encoding, so values can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct TraceId {
    part1: i64,
    part2: i64,
    part3: i64,
    /// Canonical encoding, computed once on first [`encode`](Self::encode).
    encoding: OnceLock<String>,
    valid: bool,
}

impl TraceId {
    /// Creates an identifier from three generator-supplied parts.
    ///
    /// The parts are stored verbatim; range checks are the generator's
    /// responsibility. Identifiers built this way are always valid.
    #[must_use]
    pub const fn new(part1: i64, part2: i64, part3: i64) -> Self {
        Self {
            part1,
            part2,
            part3,
            encoding: OnceLock::new(),
            valid: true,
        }
    }

    /// Parses an identifier from its canonical `part1.part2.part3` form.
    ///
    /// Never returns an error: if any token is missing or does not decode as
    /// a 64-bit integer, the returned identifier reports
    /// [`is_valid`](Self::is_valid) `== false` and must not be trusted for
    /// correlation. Parts decoded before the failing token keep their parsed
    /// values; later parts stay zero.
    ///
    /// The input is split into at most three tokens, so a fourth
    /// dot-separated segment folds into the third token (and then fails its
    /// integer parse).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut parts = [0i64; 3];
        let mut valid = true;
        let mut tokens = s.splitn(3, '.');
        for slot in &mut parts {
            match tokens.next().map(str::parse) {
                Some(Ok(value)) => *slot = value,
                // Missing token or integer parse failure: stop here, keeping
                // whatever was already assigned.
                Some(Err(_)) | None => {
                    valid = false;
                    break;
                }
            }
        }
        Self {
            part1: parts[0],
            part2: parts[1],
            part3: parts[2],
            encoding: OnceLock::new(),
            valid,
        }
    }

    /// Application instance part.
    #[must_use]
    pub const fn part1(&self) -> i64 {
        self.part1
    }

    /// Thread/worker part.
    #[must_use]
    pub const fn part2(&self) -> i64 {
        self.part2
    }

    /// Timestamp-sequence composite part.
    #[must_use]
    pub const fn part3(&self) -> i64 {
        self.part3
    }

    /// Returns the canonical encoding, computing it on the first call and
    /// returning the cached value thereafter.
    ///
    /// Safe under concurrent first-time calls: the cache is published
    /// atomically and every caller observes the same value. `Display` is the
    /// formatting primitive and always formats fresh; this is the memoizing
    /// wrapper over it.
    pub fn encode(&self) -> &str {
        self.encoding.get_or_init(|| self.to_string())
    }

    /// True unless this identifier was built from a string that failed to
    /// decode. Identifiers built from parts are always valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Converts to the wire message, parts in memory order
    /// `[part1, part2, part3]`.
    ///
    /// This is the sole conversion to the wire format; there is no reverse
    /// conversion here.
    #[must_use]
    pub fn transform(&self) -> UniqueId {
        UniqueId {
            id_parts: vec![self.part1, self.part2, self.part3],
        }
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.part1, self.part2, self.part3)
    }
}

// Equality and hashing look only at the three parts; the encoding cache and
// validity flag never participate.
impl PartialEq for TraceId {
    fn eq(&self, other: &Self) -> bool {
        self.part1 == other.part1 && self.part2 == other.part2 && self.part3 == other.part3
    }
}

impl Eq for TraceId {}

impl Hash for TraceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.part1.hash(state);
        self.part2.hash(state);
        self.part3.hash(state);
    }
}

impl FromStr for TraceId {
    type Err = IdError;

    /// Strict form of [`TraceId::parse`]: rejects input the lenient
    /// constructor would mark invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Self::parse(s);
        if id.valid {
            Ok(id)
        } else {
            Err(IdError::Malformed {
                input: s.to_string(),
            })
        }
    }
}

impl serde::Serialize for TraceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.encode())
    }
}

impl<'de> serde::Deserialize<'de> for TraceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
