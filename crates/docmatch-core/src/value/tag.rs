use crate::value::Value;

///
/// ValueTag
///
/// Stable value-type tag used by `$type` checks and serialized matchers.
///
/// IMPORTANT:
/// Tag values are the wire type codes of the document format and must
/// never be renumbered.
///
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueTag {
    Double = 1,
    Utf8 = 2,
    Document = 3,
    Array = 4,
    Binary = 5,
    Undefined = 6,
    ObjectId = 7,
    Bool = 8,
    DateTime = 9,
    Null = 10,
    Int32 = 16,
    Int64 = 18,
}

impl ValueTag {
    /// Every tag, in code order.
    pub const ALL: [Self; 12] = [
        Self::Double,
        Self::Utf8,
        Self::Document,
        Self::Array,
        Self::Binary,
        Self::Undefined,
        Self::ObjectId,
        Self::Bool,
        Self::DateTime,
        Self::Null,
        Self::Int32,
        Self::Int64,
    ];

    /// Wire type code for this variant.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Resolve a wire type code back to its tag.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Double),
            2 => Some(Self::Utf8),
            3 => Some(Self::Document),
            4 => Some(Self::Array),
            5 => Some(Self::Binary),
            6 => Some(Self::Undefined),
            7 => Some(Self::ObjectId),
            8 => Some(Self::Bool),
            9 => Some(Self::DateTime),
            10 => Some(Self::Null),
            16 => Some(Self::Int32),
            18 => Some(Self::Int64),
            _ => None,
        }
    }

    /// Stable human-readable type label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Double => "Double",
            Self::Utf8 => "Utf8",
            Self::Document => "Document",
            Self::Array => "Array",
            Self::Binary => "Binary",
            Self::Undefined => "Undefined",
            Self::ObjectId => "ObjectId",
            Self::Bool => "Bool",
            Self::DateTime => "DateTime",
            Self::Null => "Null",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
        }
    }
}

impl std::fmt::Display for ValueTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[must_use]
pub(super) const fn value_tag(value: &Value) -> ValueTag {
    match value {
        Value::Double(_) => ValueTag::Double,
        Value::Utf8(_) => ValueTag::Utf8,
        Value::Document(_) => ValueTag::Document,
        Value::Array(_) => ValueTag::Array,
        Value::Binary(_) => ValueTag::Binary,
        Value::Undefined => ValueTag::Undefined,
        Value::ObjectId(_) => ValueTag::ObjectId,
        Value::Bool(_) => ValueTag::Bool,
        Value::DateTime(_) => ValueTag::DateTime,
        Value::Null => ValueTag::Null,
        Value::Int32(_) => ValueTag::Int32,
        Value::Int64(_) => ValueTag::Int64,
    }
}
