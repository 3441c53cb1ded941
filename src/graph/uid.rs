use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a vertex.
///
/// Wraps a signed 64-bit integer; ordering and equality follow that integer.
/// Identifiers are unique within one graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Uid(i64);

impl Uid {
    /// Creates an identifier from its raw value.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Uid {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<Uid> for i64 {
    fn from(uid: Uid) -> Self {
        uid.0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
