/// Whether a search looks for the smallest or the largest objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    Minimize,
    Maximize,
}

impl Goal {
    /// Maps an objective onto a score where smaller is always better.
    ///
    /// Minimization uses the objective as is and maximization negates it.
    #[must_use]
    pub fn transform(self, objective: f64) -> f64 {
        match self {
            Goal::Minimize => objective,
            Goal::Maximize => -objective,
        }
    }

    /// Returns true if objective `a` is strictly better than `b`.
    ///
    /// A NaN objective is never better than anything.
    #[must_use]
    pub fn is_better(self, a: f64, b: f64) -> bool {
        self.transform(a) < self.transform(b)
    }

    /// Returns the worst possible objective under this goal.
    #[must_use]
    pub fn worst(self) -> f64 {
        self.transform(f64::INFINITY)
    }
}
