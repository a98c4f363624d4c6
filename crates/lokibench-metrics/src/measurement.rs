//! Measurement records produced by the query builders.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Opaque label attached to a measurement for grouping and graphing.
///
/// Fixed component labels are `const` values in [`crate::constants`];
/// arbitrary labels can be created at runtime with [`Annotation::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotation(Cow<'static, str>);

impl Annotation {
    /// Create a label usable in `const` contexts.
    pub const fn from_static(label: &'static str) -> Self {
        Self(Cow::Borrowed(label))
    }

    /// Create a label from any string.
    pub fn new(label: impl Into<String>) -> Self {
        Self(Cow::Owned(label.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Annotation {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Annotation {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// A labeled query plus its declared unit and annotation.
///
/// Fields are public for reading; builders are the intended way to
/// construct one and nothing in this crate mutates a measurement afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub name: String,
    pub query: String,
    pub unit: String,
    pub annotation: Annotation,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({}): {}",
            self.name, self.unit, self.annotation, self.query
        )
    }
}
