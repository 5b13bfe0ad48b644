use std::convert::Infallible;

/// A scalar function that maps one `f64` to another.
///
/// This is the capability every iterative algorithm in the workspace consumes:
/// solvers and samplers call [`ScalarFn::eval`] repeatedly and abort on the
/// first error.
///
/// Plain closures of type `Fn(f64) -> f64` implement this trait with an
/// [`Infallible`] error.
pub trait ScalarFn {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function cannot produce a value at `x`.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;
}

/// Blanket implementation for infallible closures.
impl<F> ScalarFn for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
