//! Core contracts for the Strand workspace.
//!
//! This crate defines the abstractions that the solvers, random sources, and
//! host bridge build on:
//!
//! - [`ScalarFn`] — a native scalar function `f64 -> f64` that may fail
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`UniformRng`] — a stateful source of doubles in `[0, 1)`
//! - [`EmpiricalCdf`] — the read-only view of an empirical distribution
//! - [`host`] — the object model of a scripting host whose callables are
//!   evaluated by native algorithms

pub mod host;

mod empirical;
mod observer;
mod rng;
mod scalar;

pub use empirical::EmpiricalCdf;
pub use observer::Observer;
pub use rng::UniformRng;
pub use scalar::ScalarFn;
