use super::{Action, Error, Sign};

/// Control flow outcome for a single evaluation.
#[derive(Debug)]
pub(crate) enum Decision<E> {
    Continue(Sign),
    StopEarly,
    Error(Error<E>),
}

impl<E> Decision<E> {
    /// Combines the observer action with the residual outcome at `x`.
    ///
    /// An observer action always takes precedence over the evaluation.
    pub(crate) fn new(action: Option<Action>, x: f64, residual: Result<f64, E>) -> Self {
        match action {
            Some(Action::AssumeResidualSign(sign)) => Decision::Continue(sign),
            Some(Action::StopEarly) => Decision::StopEarly,
            None => match residual {
                Ok(value) if value.is_nan() => Decision::Error(Error::NanResidual { x }),
                Ok(value) => Decision::Continue(Sign::of(value)),
                Err(error) => Decision::Error(Error::Function(error)),
            },
        }
    }
}
