//! Reusable observers for the Strand solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bisection and golden section solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//! - [`TraceObserver`] — logs every solver event through `tracing`
//!
//! [`Observer`]: strand_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod trace;

pub use trace::TraceObserver;
