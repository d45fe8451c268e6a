//! Error type shared by the knapsack model and the annealing engine.

use thiserror::Error;

/// Errors raised while building a problem instance or an engine.
///
/// All variants are fatal: they are reported at construction time and
/// the search never starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnealError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl AnnealError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AnnealError::InvalidConfiguration(reason.into())
    }
}
