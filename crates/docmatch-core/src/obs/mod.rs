//! Observability: non-fatal matcher diagnostics and sink abstractions.
//!
//! Evaluation never fails on unsupported data shapes; it records a
//! `DiagnosticEvent` here and falls back to its documented result.

pub(crate) mod report;
pub(crate) mod sink;


// re-exports
pub use report::DiagnosticsReport;
pub use sink::{
    DiagnosticEvent, DiagnosticsSink, diagnostics_report, diagnostics_reset,
    with_diagnostics_sink,
};
