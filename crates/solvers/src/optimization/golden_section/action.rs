/// Actions an observer can take during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best point found so far.
    StopEarly,

    /// Treat this point as worse than the other interior point.
    ///
    /// The bracket shrinks away from this point and a successful evaluation
    /// is not considered for the best point.
    ///
    /// This recovers from function errors in regions known to be suboptimal,
    /// and can steer the search away from a region even when evaluation
    /// succeeded.
    AssumeWorse,
}
