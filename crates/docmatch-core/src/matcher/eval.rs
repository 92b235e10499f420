//! Module: matcher::eval
//! Responsibility: evaluate a matcher tree against one document.
//! Does not own: value coercion rules or diagnostics counters.
//! Boundary: reads fields through `DocumentAccess`; reports notices via `obs`.
//!
//! Evaluation is total. Unsupported data shapes never fail; they yield the
//! documented fallback result and, when enabled, one diagnostic event.

use crate::{
    document::{DocumentAccess, FieldPresence},
    matcher::{
        CompareMatcher, CompareOp, LogicalMatcher, LogicalOp, MatcherNode,
        semantics::{compare_eq, compare_order, supports_ordering},
    },
    obs::{DiagnosticEvent, sink},
    value::Value,
};
use docmatch_config::{InSemantics, MatcherConfig};
use std::cmp::Ordering;

impl MatcherNode {
    /// Evaluate against `doc` with the default configuration.
    #[must_use]
    pub fn matches<D: DocumentAccess + ?Sized>(&self, doc: &D) -> bool {
        self.matches_with(doc, &MatcherConfig::default())
    }

    /// Evaluate against `doc` with an explicit configuration.
    ///
    /// Recursion follows tree depth. `to_document` and the derived `Clone`
    /// and `PartialEq` also recurse, through the tree and into nested operand
    /// values. Trees read from untrusted input should be wrapped in a
    /// `Matcher`, which bounds both at construction.
    #[must_use]
    pub fn matches_with<D: DocumentAccess + ?Sized>(
        &self,
        doc: &D,
        config: &MatcherConfig,
    ) -> bool {
        eval(self, doc, config)
    }
}

pub(crate) fn eval<D: DocumentAccess + ?Sized>(
    node: &MatcherNode,
    doc: &D,
    config: &MatcherConfig,
) -> bool {
    match node {
        MatcherNode::Exists(m) => doc.field(&m.path).is_present() == m.expected,
        MatcherNode::Type(m) => doc
            .field(&m.path)
            .value()
            .is_some_and(|value| value.tag() == m.expected),
        MatcherNode::Compare(m) => eval_compare(m, doc, config),
        MatcherNode::Not(m) => !eval(&m.child, doc, config),
        MatcherNode::Logical(m) => eval_logical(m, doc, config),
    }
}

// Right leg is evaluated only when the left leg does not decide the result.
fn eval_logical<D: DocumentAccess + ?Sized>(
    m: &LogicalMatcher,
    doc: &D,
    config: &MatcherConfig,
) -> bool {
    let any = || {
        eval(&m.left, doc, config)
            || m.right
                .as_deref()
                .is_some_and(|right| eval(right, doc, config))
    };

    match m.op {
        LogicalOp::And => {
            eval(&m.left, doc, config)
                && m.right
                    .as_deref()
                    .is_none_or(|right| eval(right, doc, config))
        }
        LogicalOp::Or => any(),
        LogicalOp::Nor => !any(),
    }
}

fn eval_compare<D: DocumentAccess + ?Sized>(
    m: &CompareMatcher,
    doc: &D,
    config: &MatcherConfig,
) -> bool {
    let FieldPresence::Present(field) = doc.field(&m.path) else {
        // An absent field equals nothing, so only the negated forms hold.
        return m.op.is_negated();
    };

    match m.op {
        CompareOp::Eq => compare_eq(field, &m.operand),
        CompareOp::Ne => !compare_eq(field, &m.operand),
        CompareOp::Gt | CompareOp::Gte | CompareOp::Lt | CompareOp::Lte => {
            eval_ordering(m.op, field, &m.operand, config)
        }
        CompareOp::In => eval_membership(m.op, field, &m.operand, config),
        CompareOp::Nin => !eval_membership(m.op, field, &m.operand, config),
    }
}

fn eval_ordering(op: CompareOp, field: &Value, operand: &Value, config: &MatcherConfig) -> bool {
    if !supports_ordering(operand.tag(), field.tag()) {
        notify(
            config,
            DiagnosticEvent::UnsupportedComparison {
                op,
                operand: operand.tag(),
                field: field.tag(),
            },
        );
        return false;
    }

    // NaN on either side orders as nothing.
    compare_order(field, operand).is_some_and(|ord| match op {
        CompareOp::Gt => ord == Ordering::Greater,
        CompareOp::Gte => ord != Ordering::Less,
        CompareOp::Lt => ord == Ordering::Less,
        CompareOp::Lte => ord != Ordering::Greater,
        _ => false,
    })
}

// Positive membership; `Nin` negates the result at the call site.
fn eval_membership(op: CompareOp, field: &Value, operand: &Value, config: &MatcherConfig) -> bool {
    match config.in_semantics {
        InSemantics::LegacyStub => {
            notify(config, DiagnosticEvent::LegacyMembershipStub { op });
            false
        }
        InSemantics::Membership => {
            let Value::Array(candidates) = operand else {
                notify(
                    config,
                    DiagnosticEvent::NonArrayMembershipOperand {
                        op,
                        operand: operand.tag(),
                    },
                );
                return false;
            };

            candidates
                .iter()
                .any(|candidate| compare_eq(field, candidate))
        }
    }
}

fn notify(config: &MatcherConfig, event: DiagnosticEvent) {
    if config.diagnostics {
        sink::record(event);
    }
}
