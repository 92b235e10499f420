//! Core runtime for docmatch: document values, field paths, matcher trees,
//! their evaluation and serialization, and non-fatal diagnostics.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod document;
pub mod error;
pub mod matcher;
pub mod obs;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        document::{Document, DocumentAccess, FieldPath},
        matcher::{CompareOp, LogicalOp, Matcher, MatcherNode},
        value::{Value, ValueTag},
    };
}
