//! Module: matcher::semantics
//! Responsibility: the operand × field coercion matrix for comparisons.
//! Does not own: field lookup, absence policy, or diagnostics.
//! Boundary: the evaluator delegates every value comparison here.
//!
//! All comparisons read as "document field <op> operand". Every function
//! takes the field value first and the operand second.

use crate::value::{Value, ValueTag};
use std::cmp::Ordering;

///
/// CoercionId
///
/// How a supported (operand, field) type pairing is compared.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CoercionId {
    /// Both sides widened to the wider numeric representation.
    NumericWiden,
    /// Exact byte length, then exact byte content.
    Bytewise,
    /// Null operand against a null-like field.
    NullLike,
}

///
/// CoercionRule
///
/// One row of the coercion matrix.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CoercionRule {
    pub(crate) operand: &'static [ValueTag],
    pub(crate) field: &'static [ValueTag],
    pub(crate) id: CoercionId,
    pub(crate) ordered: bool,
}

const NUMERIC_OPERANDS: &[ValueTag] = &[ValueTag::Double, ValueTag::Int32, ValueTag::Int64];
const NUMERIC_FIELDS: &[ValueTag] = &[
    ValueTag::Double,
    ValueTag::Bool,
    ValueTag::Int32,
    ValueTag::Int64,
];

pub(crate) const COERCION_TABLE: &[CoercionRule] = &[
    CoercionRule {
        operand: NUMERIC_OPERANDS,
        field: NUMERIC_FIELDS,
        id: CoercionId::NumericWiden,
        ordered: true,
    },
    CoercionRule {
        operand: &[ValueTag::Utf8],
        field: &[ValueTag::Utf8],
        id: CoercionId::Bytewise,
        ordered: false,
    },
    CoercionRule {
        operand: &[ValueTag::Null],
        field: &[ValueTag::Null, ValueTag::Undefined],
        id: CoercionId::NullLike,
        ordered: false,
    },
];

/// Matrix row covering an (operand, field) pairing, if any.
#[must_use]
pub(crate) fn coercion_for(operand: ValueTag, field: ValueTag) -> Option<&'static CoercionRule> {
    COERCION_TABLE
        .iter()
        .find(|rule| rule.operand.contains(&operand) && rule.field.contains(&field))
}

/// Whether `Gt`/`Gte`/`Lt`/`Lte` are defined for the pairing.
#[must_use]
pub(crate) fn supports_ordering(operand: ValueTag, field: ValueTag) -> bool {
    coercion_for(operand, field).is_some_and(|rule| rule.ordered)
}

/// Equality under the coercion matrix. Unmapped pairings are not equal.
#[must_use]
pub(crate) fn compare_eq(field: &Value, operand: &Value) -> bool {
    let Some(rule) = coercion_for(operand.tag(), field.tag()) else {
        return false;
    };

    match rule.id {
        CoercionId::NumericWiden => field.cmp_numeric(operand).is_some_and(Ordering::is_eq),
        CoercionId::Bytewise => match (field, operand) {
            (Value::Utf8(left), Value::Utf8(right)) => {
                left.len() == right.len() && left.as_bytes() == right.as_bytes()
            }
            _ => false,
        },
        CoercionId::NullLike => true,
    }
}

/// Ordering of the field relative to the operand.
///
/// Returns `None` for pairings without an ordering rule and for unordered
/// doubles; callers check `supports_ordering` first to tell them apart.
#[must_use]
pub(crate) fn compare_order(field: &Value, operand: &Value) -> Option<Ordering> {
    if !supports_ordering(operand.tag(), field.tag()) {
        return None;
    }

    field.cmp_numeric(operand)
}
