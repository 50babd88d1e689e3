//! Identifier types for book entities.
//!
//! Positions are keyed by an opaque, insertion-independent identifier
//! issued by a [`PositionIdSource`]. Using a newtype keeps identifiers
//! from being confused with quantities or indices, and an explicit
//! injected source keeps `add` deterministic and testable.

use std::fmt;

/// Unique identifier for a position.
///
/// # Examples
///
/// ```
/// use desk_risk::book::PositionId;
///
/// let id = PositionId::new(1);
/// assert_eq!(id.value(), 1);
/// assert_eq!(format!("{}", id), "1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionId(u64);

impl PositionId {
    /// Creates a position ID from a raw value.
    #[inline]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[inline]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PositionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Monotonic issuer of unique [`PositionId`]s.
///
/// Owned by whoever books trades (the book itself or a caller) and
/// passed in rather than shared globally.
///
/// # Examples
///
/// ```
/// use desk_risk::book::PositionIdSource;
///
/// let mut ids = PositionIdSource::new();
/// let first = ids.next_id();
/// let second = ids.next_id();
/// assert_ne!(first, second);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PositionIdSource {
    next: u64,
}

impl PositionIdSource {
    /// Creates a source starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source starting at a given raw value.
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Issues the next identifier.
    pub fn next_id(&mut self) -> PositionId {
        let id = PositionId::new(self.next);
        self.next += 1;
        id
    }
}
