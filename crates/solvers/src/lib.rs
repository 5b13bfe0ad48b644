//! Bracketed searches over scalar functions.
//!
//! - [`equation`] — find `x` with `f(x) = target` inside a bracket
//! - [`optimization`] — find the minimum or maximum of `f` inside a bracket
//!
//! Every solver accepts any [`ScalarFn`] and an [`Observer`] that sees each
//! evaluation and may steer the search.
//!
//! [`ScalarFn`]: strand_core::ScalarFn
//! [`Observer`]: strand_core::Observer

pub mod equation;
pub mod optimization;
