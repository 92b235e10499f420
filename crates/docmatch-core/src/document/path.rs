use derive_more::{Deref, Display};
use thiserror::Error as ThisError;

///
/// PathError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PathError {
    #[error("field path must not be empty")]
    Empty,

    #[error("field path '{path}' has an empty segment at position {index}")]
    EmptySegment { path: String, index: usize },
}

///
/// FieldPath
///
/// Dotted path to a (possibly nested) field, e.g. `"address.city"` or
/// `"tags.0"`. Always non-empty with non-empty segments.
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Result<Self, PathError> {
        let path = path.into();
        if path.is_empty() {
            return Err(PathError::Empty);
        }

        if let Some(index) = path.split('.').position(str::is_empty) {
            return Err(PathError::EmptySegment { path, index });
        }

        Ok(Self(path))
    }

    /// Dot-separated components, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Non-allocating stand-in used while a tree is being dismantled.
    // Never observable: it only lives inside nodes that are about to drop.
    pub(crate) const fn detached() -> Self {
        Self(String::new())
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = PathError;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        Self::new(path)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = PathError;

    fn try_from(path: String) -> Result<Self, Self::Error> {
        Self::new(path)
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
