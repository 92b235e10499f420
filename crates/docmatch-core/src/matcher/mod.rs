//! Module: matcher
//! Responsibility: predicate trees over documents and their evaluation.
//! Does not own: document storage, query parsing, or diagnostics state.
//! Boundary: `Matcher` is the checked entry point; raw `MatcherNode` trees
//! are building blocks.

mod build;
mod eval;
mod node;
mod semantics;
mod serialize;
mod teardown;

#[cfg(test)]
mod tests;

use crate::{
    document::{Document, DocumentAccess},
    error::MatcherError,
};
use docmatch_config::MatcherConfig;
use serde::{Serialize, Serializer};

// re-exports
pub use node::{
    CompareMatcher, CompareOp, ExistsMatcher, LogicalMatcher, LogicalOp, MatcherNode, NotMatcher,
    TypeMatcher,
};

///
/// Matcher
///
/// A matcher tree paired with the configuration it evaluates under.
///
/// Construction rejects trees deeper than `config.max_depth`, which bounds
/// the recursion of evaluation and serialization.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Matcher {
    root: MatcherNode,
    config: MatcherConfig,
    depth: usize,
}

impl Matcher {
    pub fn new(root: MatcherNode, config: MatcherConfig) -> Result<Self, MatcherError> {
        config.validate()?;

        let depth = root.depth();
        if depth > config.max_depth {
            return Err(MatcherError::DepthExceeded {
                depth,
                max_depth: config.max_depth,
            });
        }

        Ok(Self {
            root,
            config,
            depth,
        })
    }

    pub fn with_defaults(root: MatcherNode) -> Result<Self, MatcherError> {
        Self::new(root, MatcherConfig::default())
    }

    #[must_use]
    pub fn matches<D: DocumentAccess + ?Sized>(&self, doc: &D) -> bool {
        eval::eval(&self.root, doc, &self.config)
    }

    #[must_use]
    pub fn to_document(&self) -> Document {
        self.root.to_document()
    }

    #[must_use]
    pub const fn root(&self) -> &MatcherNode {
        &self.root
    }

    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Give up the depth guarantee and take the tree back.
    #[must_use]
    pub fn into_root(self) -> MatcherNode {
        self.root
    }
}

impl Serialize for Matcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
