//! Module: document
//! Responsibility: ordered document model and dotted-path field lookup.
//! Does not own: value typing (see `value`) or predicate semantics.
//! Boundary: the evaluator reads documents only through `DocumentAccess`.

mod path;

#[cfg(test)]
mod tests;

use crate::value::Value;
use derive_more::IntoIterator;
use serde::{Serialize, Serializer, ser::SerializeMap};

// re-exports
pub use path::{FieldPath, PathError};

///
/// FieldPresence
///
/// Result of resolving a field path against a document. Distinguishes a
/// missing field from a present field whose value is `Null`.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldPresence<'a> {
    /// Field exists (including explicit `Null` / `Undefined`).
    Present(&'a Value),

    /// Field is not present, or an intermediate segment does not descend.
    Missing,
}

impl<'a> FieldPresence<'a> {
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    #[must_use]
    pub const fn value(self) -> Option<&'a Value> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing => None,
        }
    }
}

impl<'a> From<Option<&'a Value>> for FieldPresence<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Missing,
        }
    }
}

///
/// DocumentAccess
///
/// Read-only field lookup over a document-like value.
/// This decouples matching from the concrete document representation.
///

pub trait DocumentAccess {
    fn field(&self, path: &FieldPath) -> FieldPresence<'_>;
}

impl DocumentAccess for Document {
    fn field(&self, path: &FieldPath) -> FieldPresence<'_> {
        self.find(path).into()
    }
}

///
/// Document
///
/// Ordered mapping of field names to values. Insertion order is preserved
/// and keys are unique.
///

#[derive(Clone, Debug, Default, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct Document {
    entries: Vec<(String, Value)>,
}

impl Document {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set `key` to `value`, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Direct child lookup; `key` is not split on dots.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Resolve a dotted path, descending into nested documents by key and
    /// into arrays by decimal position.
    #[must_use]
    pub fn find(&self, path: &FieldPath) -> Option<&Value> {
        let mut segments = path.segments();
        let mut current = self.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Document(doc) => doc.get(segment)?,
                Value::Array(items) => items.get(array_index(segment)?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

// Canonical decimal position only: "0", "12"; never "01" or "+1".
fn array_index(segment: &str) -> Option<usize> {
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    segment.parse().ok()
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Self::new();
        for (key, value) in iter {
            doc.insert(key, value);
        }

        doc
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

/// Build a [`Document`] from `key => value` pairs.
///
/// ```ignore
/// let doc = doc! { "name" => "ada", "age" => 36, "address" => doc! { "city" => "London" } };
/// ```
#[macro_export]
macro_rules! doc {
    () => {
        $crate::document::Document::new()
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut document = $crate::document::Document::new();
        $( document.insert($key, $value); )+
        document
    }};
}
