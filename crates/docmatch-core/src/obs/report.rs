use serde::Serialize;
use std::cell::RefCell;

///
/// DiagnosticsReport
/// Ephemeral per-thread counters of non-fatal matcher notices.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DiagnosticsReport {
    pub unsupported_comparisons: u64,
    pub non_array_membership_operands: u64,
    pub legacy_membership_stubs: u64,
}

impl DiagnosticsReport {
    /// Sum of all recorded notices.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.unsupported_comparisons
            .saturating_add(self.non_array_membership_operands)
            .saturating_add(self.legacy_membership_stubs)
    }
}

thread_local! {
    static REPORT_STATE: RefCell<DiagnosticsReport> = RefCell::new(DiagnosticsReport::default());
}

/// Borrow counters mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut DiagnosticsReport) -> R) -> R {
    REPORT_STATE.with(|r| f(&mut r.borrow_mut()))
}

pub(crate) fn snapshot() -> DiagnosticsReport {
    REPORT_STATE.with(|r| *r.borrow())
}

pub(crate) fn reset() {
    with_state_mut(|r| *r = DiagnosticsReport::default());
}

///
/// TESTS
///
