mod numeric;
mod tag;

#[cfg(test)]
mod tests;

use crate::document::Document;
use serde::{Serialize, Serializer, ser::SerializeMap};
use thiserror::Error as ThisError;

// re-exports
pub use tag::ValueTag;

///
/// ValueError
///
/// Typed reader was applied to a value of a different type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum ValueError {
    #[error("expected {expected} value, found {found}")]
    TypeMismatch { expected: ValueTag, found: ValueTag },
}

///
/// Value
///
/// Typed, owned content of one document field.
///
/// Null        → explicit null.
/// Undefined   → deprecated placeholder; compares equal to a null operand.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Double(f64),
    Utf8(String),
    Document(Document),
    /// Ordered list of values; element positions double as their keys.
    Array(Vec<Self>),
    Binary(Vec<u8>),
    Undefined,
    ObjectId([u8; 12]),
    Bool(bool),
    /// Milliseconds since the Unix epoch.
    DateTime(i64),
    Null,
    Int32(i32),
    Int64(i64),
}

impl Value {
    /// Type tag of this value.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::value_tag(self)
    }

    /// Container levels below this value: 0 for a scalar, 1 for a flat
    /// array or document, and so on.
    #[must_use]
    pub fn nesting_depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0_usize)];

        while let Some((value, depth)) = pending.pop() {
            match value {
                Self::Array(items) => {
                    deepest = deepest.max(depth + 1);
                    pending.extend(items.iter().map(|v| (v, depth + 1)));
                }
                Self::Document(doc) => {
                    deepest = deepest.max(depth + 1);
                    pending.extend(doc.iter().map(|(_, v)| (v, depth + 1)));
                }
                _ => deepest = deepest.max(depth),
            }
        }

        deepest
    }

    const fn mismatch(&self, expected: ValueTag) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            found: self.tag(),
        }
    }

    ///
    /// TYPED READERS
    ///

    pub const fn as_f64(&self) -> Result<f64, ValueError> {
        match self {
            Self::Double(v) => Ok(*v),
            _ => Err(self.mismatch(ValueTag::Double)),
        }
    }

    pub const fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Self::Bool(v) => Ok(*v),
            _ => Err(self.mismatch(ValueTag::Bool)),
        }
    }

    pub const fn as_i32(&self) -> Result<i32, ValueError> {
        match self {
            Self::Int32(v) => Ok(*v),
            _ => Err(self.mismatch(ValueTag::Int32)),
        }
    }

    pub const fn as_i64(&self) -> Result<i64, ValueError> {
        match self {
            Self::Int64(v) => Ok(*v),
            _ => Err(self.mismatch(ValueTag::Int64)),
        }
    }

    /// UTF-8 content; `len()` of the result is the byte length.
    pub fn as_utf8(&self) -> Result<&str, ValueError> {
        match self {
            Self::Utf8(v) => Ok(v.as_str()),
            _ => Err(self.mismatch(ValueTag::Utf8)),
        }
    }

    pub const fn as_document(&self) -> Result<&Document, ValueError> {
        match self {
            Self::Document(v) => Ok(v),
            _ => Err(self.mismatch(ValueTag::Document)),
        }
    }

    pub fn as_array(&self) -> Result<&[Self], ValueError> {
        match self {
            Self::Array(v) => Ok(v.as_slice()),
            _ => Err(self.mismatch(ValueTag::Array)),
        }
    }
}

///
/// CONVERSIONS
///

macro_rules! impl_from_for_value {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value! {
    f64 => Double,
    f32 => Double,
    bool => Bool,
    i32 => Int32,
    i16 => Int32,
    i8 => Int32,
    i64 => Int64,
    String => Utf8,
    &str => Utf8,
    Document => Document,
    Vec<Value> => Array,
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

///
/// SERIALIZE
///
/// Extended-JSON style rendering for diagnostics; types without a native
/// JSON form are wrapped in a single-key `$`-object.
///

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Double(v) => serializer.serialize_f64(*v),
            Self::Utf8(v) => serializer.serialize_str(v),
            Self::Document(v) => v.serialize(serializer),
            Self::Array(v) => v.serialize(serializer),
            Self::Binary(v) => single_key(serializer, "$binary", &hex(v)),
            Self::Undefined => single_key(serializer, "$undefined", &true),
            Self::ObjectId(v) => single_key(serializer, "$oid", &hex(v)),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::DateTime(v) => single_key(serializer, "$date", v),
            Self::Null => serializer.serialize_unit(),
            Self::Int32(v) => serializer.serialize_i32(*v),
            Self::Int64(v) => serializer.serialize_i64(*v),
        }
    }
}

fn single_key<S: Serializer, T: Serialize + ?Sized>(
    serializer: S,
    key: &str,
    value: &T,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(key, value)?;
    map.end()
}

fn hex(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}
