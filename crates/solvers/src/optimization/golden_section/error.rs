use thiserror::Error;

use super::BracketError;

/// Errors that can occur during golden section search.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("function evaluation failed")]
    Function(#[source] E),
}
