//! Node constructors.
//!
//! Callers hand over already-validated pieces: a `FieldPath` is non-empty
//! by construction and opcodes are closed enums. Child nodes are moved into
//! their parent, so a transferred child cannot be reused or released
//! independently.

use crate::{
    document::FieldPath,
    matcher::{
        CompareMatcher, CompareOp, ExistsMatcher, LogicalMatcher, LogicalOp, MatcherNode,
        NotMatcher, TypeMatcher,
    },
    value::{Value, ValueTag},
};

impl MatcherNode {
    /// `{path: {$exists: expected}}`
    #[must_use]
    pub const fn exists(path: FieldPath, expected: bool) -> Self {
        Self::Exists(ExistsMatcher { path, expected })
    }

    /// `{path: {$type: expected}}`
    #[must_use]
    pub const fn type_of(path: FieldPath, expected: ValueTag) -> Self {
        Self::Type(TypeMatcher { path, expected })
    }

    /// Comparison against a snapshot of `operand`.
    ///
    /// The operand is deep-copied, so the node never borrows from the
    /// query document it was read from.
    #[must_use]
    pub fn compare(op: CompareOp, path: FieldPath, operand: &Value) -> Self {
        Self::compare_owned(op, path, operand.clone())
    }

    /// Comparison that takes ownership of an already-detached operand.
    #[must_use]
    pub const fn compare_owned(op: CompareOp, path: FieldPath, operand: Value) -> Self {
        Self::Compare(CompareMatcher { op, path, operand })
    }

    /// `{path: {$not: child}}`
    #[must_use]
    pub fn not(path: FieldPath, child: Self) -> Self {
        Self::Not(NotMatcher {
            path,
            child: Box::new(child),
        })
    }

    /// Binary combinator; pass `None` for a single-leg combinator.
    #[must_use]
    pub fn logical(op: LogicalOp, left: Self, right: Option<Self>) -> Self {
        Self::Logical(LogicalMatcher {
            op,
            left: Box::new(left),
            right: right.map(Box::new),
        })
    }

    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::logical(LogicalOp::And, left, Some(right))
    }

    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::logical(LogicalOp::Or, left, Some(right))
    }

    #[must_use]
    pub fn nor(left: Self, right: Self) -> Self {
        Self::logical(LogicalOp::Nor, left, Some(right))
    }
}
