//! Solvers for optimization problems: minimizing or maximizing `f(x)`.
//!
//! Whether a search minimizes or maximizes is an explicit [`Goal`] passed to
//! the solver. The function itself is never wrapped; the goal only changes
//! how objectives are compared.
//!
//! # Solvers
//!
//! - [`golden_section`] — derivative-free search over a bracketed interval for
//!   unimodal functions

mod goal;

pub use goal::Goal;

pub mod golden_section;
