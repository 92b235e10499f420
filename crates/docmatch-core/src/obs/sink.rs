//! Diagnostics sink boundary.
//!
//! Matcher evaluation MUST NOT touch diagnostics state directly.
//! All notices flow through DiagnosticEvent and DiagnosticsSink.
//!
//! This module is the only bridge between evaluation logic and the
//! thread-local diagnostics counters.
use crate::{
    matcher::CompareOp,
    obs::report::{self, DiagnosticsReport},
    value::ValueTag,
};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn DiagnosticsSink>> = const { RefCell::new(None) };
}

///
/// DiagnosticEvent
///
/// Non-fatal notice raised while evaluating a matcher. Evaluation always
/// continues with the documented fallback result.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DiagnosticEvent {
    /// Ordering comparison between types with no ordering rule.
    UnsupportedComparison {
        op: CompareOp,
        operand: ValueTag,
        field: ValueTag,
    },

    /// `$in` / `$nin` operand was not an array.
    NonArrayMembershipOperand { op: CompareOp, operand: ValueTag },

    /// `$in` / `$nin` evaluated under the constant legacy policy.
    LegacyMembershipStub { op: CompareOp },
}

///
/// DiagnosticsSink
///

pub trait DiagnosticsSink {
    fn record(&self, event: DiagnosticEvent);
}

/// GlobalDiagnosticsSink
/// Default sink: counts events per thread and emits one `tracing` warning
/// per event. Used when no scoped override is installed.

pub(crate) struct GlobalDiagnosticsSink;

impl DiagnosticsSink for GlobalDiagnosticsSink {
    fn record(&self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::UnsupportedComparison { op, operand, field } => {
                tracing::warn!(
                    target: "docmatch::diagnostics",
                    op = op.operator_name(),
                    operand = operand.label(),
                    field = field.label(),
                    "unsupported comparison: field({field}) {op} operand({operand})",
                );
                report::with_state_mut(|r| {
                    r.unsupported_comparisons = r.unsupported_comparisons.saturating_add(1);
                });
            }

            DiagnosticEvent::NonArrayMembershipOperand { op, operand } => {
                tracing::warn!(
                    target: "docmatch::diagnostics",
                    op = op.operator_name(),
                    operand = operand.label(),
                    "membership operand is not an array",
                );
                report::with_state_mut(|r| {
                    r.non_array_membership_operands =
                        r.non_array_membership_operands.saturating_add(1);
                });
            }

            DiagnosticEvent::LegacyMembershipStub { op } => {
                tracing::warn!(
                    target: "docmatch::diagnostics",
                    op = op.operator_name(),
                    "membership evaluated with legacy constant result",
                );
                report::with_state_mut(|r| {
                    r.legacy_membership_stubs = r.legacy_membership_stubs.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_DIAGNOSTICS_SINK: GlobalDiagnosticsSink = GlobalDiagnosticsSink;

pub(crate) fn record(event: DiagnosticEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a valid `&dyn DiagnosticsSink` in
        //   `with_diagnostics_sink`, which restores the previous slot on every
        //   exit (normal return and unwind) through `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        // - Only a shared reference is materialized, matching the borrow that
        //   installed the override.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_DIAGNOSTICS_SINK.record(event);
    }
}

/// Snapshot the diagnostics counters of the current thread.
#[must_use]
pub fn diagnostics_report() -> DiagnosticsReport {
    report::snapshot()
}

/// Reset the diagnostics counters of the current thread.
pub fn diagnostics_reset() {
    report::reset();
}

/// Run a closure with a temporary diagnostics sink for the current thread.
pub fn with_diagnostics_sink<T>(sink: &dyn DiagnosticsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn DiagnosticsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - The erased pointer is installed only for this dynamic scope and the
    //   guard restores the previous slot on all exits, including panic.
    // - `record` dereferences it synchronously and never persists it.
    // - Shared access only; no mutable alias is introduced.
    let sink_ptr =
        unsafe { std::mem::transmute::<&dyn DiagnosticsSink, *const dyn DiagnosticsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}
