use docmatch_config::ConfigError;
use thiserror::Error as ThisError;

///
/// MatcherError
///
/// Failure raised while assembling a checked matcher.
/// Evaluation itself never fails; see `obs` for non-fatal notices.
///

#[derive(Debug, ThisError)]
pub enum MatcherError {
    #[error("matcher depth {depth} exceeds the configured limit of {max_depth}")]
    DepthExceeded { depth: usize, max_depth: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
