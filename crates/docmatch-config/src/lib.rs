//! Matcher configuration loaded from TOML.
//!
//! The file format is a single `[matcher]` table:
//!
//! ```toml
//! [matcher]
//! max_depth = 64
//! in_semantics = "membership"
//! diagnostics = true
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Default maximum nesting depth accepted for a matcher tree.
pub const DEFAULT_MAX_DEPTH: usize = 64;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("matcher.max_depth must be at least 1")]
    ZeroMaxDepth,
}

///
/// InSemantics
///
/// Evaluation policy for `$in` / `$nin` comparisons.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InSemantics {
    /// Operand array membership using equality coercion per element.
    #[default]
    Membership,

    /// Constant result: `$in` never matches and `$nin` always matches.
    LegacyStub,
}

///
/// MatcherConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// Deepest tree accepted by a checked matcher root.
    pub max_depth: usize,

    pub in_semantics: InSemantics,

    /// Whether non-fatal notices are forwarded to the diagnostics sink.
    pub diagnostics: bool,
}

impl MatcherConfig {
    /// Parse a configuration document and validate it.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(input)?;
        file.matcher.validate()?;

        Ok(file.matcher)
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&input)
    }

    /// Check value-level constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroMaxDepth);
        }

        Ok(())
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_in_semantics(mut self, in_semantics: InSemantics) -> Self {
        self.in_semantics = in_semantics;
        self
    }

    #[must_use]
    pub const fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            in_semantics: InSemantics::default(),
            diagnostics: true,
        }
    }
}

// Top-level file shape; only the `[matcher]` table is recognised.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    matcher: MatcherConfig,
}

///
/// TESTS
///
