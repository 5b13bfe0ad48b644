use thiserror::Error;

use super::{bracket::BracketError, config::ConfigError};

/// Errors that can occur during bisection solving.
///
/// `E` is the error type of the scalar function being solved.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no successful evaluations")]
    NoSuccessfulEvaluation,

    #[error("residual is NaN at x = {x}")]
    NanResidual { x: f64 },

    #[error("function evaluation failed")]
    Function(#[source] E),
}
