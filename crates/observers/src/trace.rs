use std::fmt::Display;

use strand_core::Observer;
use strand_solvers::{equation::bisection, optimization::golden_section};
use tracing::{debug, trace};

/// An observer that logs every solver event and never steers.
///
/// Successful evaluations are logged at `trace` level and function failures
/// at `debug` level. The observer counts the events it has seen, which is
/// handy for checking how many evaluations a solve consumed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver {
    events: usize,
}

impl TraceObserver {
    /// Creates an observer with a zero event count.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E: Display> Observer<bisection::Event<'_, E>, bisection::Action> for TraceObserver {
    fn observe(&mut self, event: &bisection::Event<'_, E>) -> Option<bisection::Action> {
        self.events += 1;
        let site = match event {
            bisection::Event::Left { .. } => "left",
            bisection::Event::Right { .. } => "right",
            bisection::Event::Midpoint { .. } => "midpoint",
        };
        match event.result() {
            Ok(eval) => trace!(site, x = eval.x, residual = eval.residual, "bisection"),
            Err(error) => debug!(site, x = event.x(), %error, "bisection evaluation failed"),
        }
        None
    }
}

impl<E: Display> Observer<golden_section::Event<'_, E>, golden_section::Action> for TraceObserver {
    fn observe(
        &mut self,
        event: &golden_section::Event<'_, E>,
    ) -> Option<golden_section::Action> {
        self.events += 1;
        match event {
            golden_section::Event::Evaluated { point, other } => trace!(
                x = point.x,
                objective = point.objective,
                other_x = other.x,
                "golden section"
            ),
            golden_section::Event::FunctionFailed { x, error, .. } => {
                debug!(x, %error, "golden section evaluation failed");
            }
        }
        None
    }
}
