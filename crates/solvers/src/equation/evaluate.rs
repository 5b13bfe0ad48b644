use strand_core::ScalarFn;

/// The result of evaluating a scalar equation at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub x: f64,
    pub value: f64,
    pub residual: f64,
}

/// Evaluates `f` at `x` and computes the residual against `target`.
///
/// # Errors
///
/// Returns the function's error if the evaluation fails.
pub fn evaluate<F: ScalarFn>(f: &F, target: f64, x: f64) -> Result<Evaluation, F::Error> {
    let value = f.eval(x)?;
    Ok(Evaluation {
        x,
        value,
        residual: value - target,
    })
}
