//! ## Crate layout
//! - `config`: TOML-backed matcher configuration.
//! - `core`: document values, field paths, matcher trees and diagnostics.
//! - `error`: public error type with a stable kind/origin taxonomy.
//!
//! The `prelude` module carries the vocabulary needed to build and evaluate
//! matchers.

pub use docmatch_config as config;
pub use docmatch_core as core;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use docmatch_core::doc;
pub use error::Error;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::{InSemantics, MatcherConfig},
        core::{
            document::{Document, DocumentAccess, FieldPath, FieldPresence},
            matcher::{CompareOp, LogicalOp, Matcher, MatcherNode},
            value::{Value, ValueTag},
        },
        doc,
    };
}
