//! Numeric promotion for mixed-type comparisons.
//!
//! Both sides of a comparison are widened to the widest representation of
//! the pair before comparing: Double > Int64 > Int32 > Bool (as 0/1).

use crate::value::Value;
use num_traits::AsPrimitive;
use std::cmp::Ordering;

///
/// NumericRepr
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum NumericRepr {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
}

impl NumericRepr {
    #[must_use]
    pub(crate) const fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(Self::Bool(*v)),
            Value::Int32(v) => Some(Self::Int32(*v)),
            Value::Int64(v) => Some(Self::Int64(*v)),
            Value::Double(v) => Some(Self::Double(*v)),
            _ => None,
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int32(_) => 1,
            Self::Int64(_) => 2,
            Self::Double(_) => 3,
        }
    }

    fn to_i32(self) -> i32 {
        match self {
            Self::Bool(v) => i32::from(v),
            Self::Int32(v) => v,
            // Never reached: an Int32 pair contains no wider side.
            Self::Int64(_) | Self::Double(_) => 0,
        }
    }

    fn to_i64(self) -> i64 {
        match self {
            Self::Bool(v) => i64::from(v),
            Self::Int32(v) => i64::from(v),
            Self::Int64(v) => v,
            Self::Double(_) => 0,
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Self::Bool(v) => f64::from(u8::from(v)),
            Self::Int32(v) => f64::from(v),
            Self::Int64(v) => v.as_(),
            Self::Double(v) => v,
        }
    }

    /// Compare two numeric values after widening to the wider side.
    ///
    /// Returns `None` only for unordered doubles (NaN).
    #[must_use]
    pub(crate) fn cmp_widened(self, other: Self) -> Option<Ordering> {
        match self.rank().max(other.rank()) {
            3 => self.to_f64().partial_cmp(&other.to_f64()),
            2 => Some(self.to_i64().cmp(&other.to_i64())),
            1 => Some(self.to_i32().cmp(&other.to_i32())),
            _ => match (self, other) {
                (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(&b)),
                _ => None,
            },
        }
    }
}

impl Value {
    /// Numeric comparison under widening promotion.
    ///
    /// Returns `None` when either side is not numeric or the pair is
    /// unordered.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Option<Ordering> {
        let left = NumericRepr::from_value(self)?;
        let right = NumericRepr::from_value(other)?;

        left.cmp_widened(right)
    }
}
