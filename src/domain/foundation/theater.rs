//! Theater identifier value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual identifier for a theater, e.g. "Theater 1" or "IMAX 3".
///
/// Any text is accepted; theater names are external vocabulary, not
/// something this domain validates. Two screenings are in the same theater
/// exactly when their `TheaterId`s are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TheaterId(String);

impl TheaterId {
    /// Creates a theater identifier from any text.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TheaterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TheaterId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TheaterId {
    fn from(name: String) -> Self {
        Self(name)
    }
}
