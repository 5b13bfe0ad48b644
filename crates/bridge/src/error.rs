use std::convert::Infallible;

use strand_core::host::HostError;
use strand_solvers::{equation::bisection, optimization::golden_section};
use thiserror::Error;

/// Errors reported by the bridge.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Output buffers for the requested number of points could not be allocated.
    #[error("cannot allocate buffers for {npoints} points")]
    Allocation { npoints: usize },
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Malformed caller input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("function object is null")]
    NullObject,

    #[error("function object is not callable")]
    NotCallable,

    #[error("invalid interval: xmin ({xmin}) must be less than xmax ({xmax})")]
    Interval { xmin: f64, xmax: f64 },

    #[error("tolerance must be finite and greater than machine epsilon, got {0}")]
    Tolerance(f64),

    #[error("invalid root bracket: {0}")]
    RootBracket(#[from] bisection::BracketError),

    #[error("invalid extremum bracket: {0}")]
    ExtremumBracket(#[from] golden_section::BracketError),

    #[error("sample is empty")]
    EmptySample,

    #[error("sample value at index {index} is not finite")]
    NonFiniteSample { index: usize },
}

/// The callable failed, or the host could not be called.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// An error was already raised in the host; the callable was not invoked.
    #[error("unhandled host error at the time of call: {0}")]
    Pending(HostError),

    /// The callable raised an error.
    #[error("callable raised {0}")]
    Raised(HostError),

    /// The callable returned without producing a result.
    #[error("callable returned no result")]
    NoResult,
}

/// The callable's result could not be converted to a double.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("callable result of type '{type_name}' can not be converted to a double")]
pub struct ConversionError {
    pub type_name: &'static str,
}
