//! Solvers for scalar equations `f(x) = target`.
//!
//! The residual of an evaluation is `f(x) - target`. Solvers in this module
//! drive that residual toward zero.
//!
//! # Solvers
//!
//! - [`bisection`] — guaranteed convergence on a bracketed interval

mod evaluate;

pub use evaluate::{Evaluation, evaluate};

pub mod bisection;
