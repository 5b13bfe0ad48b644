use crate::optimization::Goal;

use super::bracket::GoldenBracket;
use super::{Config, Point, Solution, Status};

/// Direction to shrink the bracket and where to evaluate next.
#[derive(Debug, Clone, Copy)]
pub(super) enum ShrinkDirection {
    /// Shrink left bound; payload is x for new `inner_right`.
    ShrinkLeft(f64),

    /// Shrink right bound; payload is x for new `inner_left`.
    ShrinkRight(f64),
}

/// Interior points of the current bracket and the best point seen so far.
///
/// `left` and `right` may carry the goal's worst objective when an observer
/// assumed them worse; `best` only ever holds real evaluations.
pub(super) struct State {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
    best: Point,
    goal: Goal,
}

impl State {
    pub(super) fn new(
        bracket: GoldenBracket,
        left: Point,
        right: Point,
        best: Point,
        goal: Goal,
    ) -> Self {
        Self {
            bracket,
            left,
            right,
            best,
            goal,
        }
    }

    pub(super) fn left(&self) -> Point {
        self.left
    }

    pub(super) fn right(&self) -> Point {
        self.right
    }

    /// Which direction to shrink and where to evaluate next.
    pub(super) fn next_action(&self) -> ShrinkDirection {
        let left_score = self.goal.transform(self.left.objective);
        let right_score = self.goal.transform(self.right.objective);

        if left_score <= right_score {
            ShrinkDirection::ShrinkRight(self.bracket.new_inner_left())
        } else {
            ShrinkDirection::ShrinkLeft(self.bracket.new_inner_right())
        }
    }

    /// Applies the shrink and places the new interior point.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, point: Point) {
        match direction {
            ShrinkDirection::ShrinkRight(_) => {
                self.bracket.shrink_right();
                self.right = self.left;
                self.left = point;
            }
            ShrinkDirection::ShrinkLeft(_) => {
                self.bracket.shrink_left();
                self.left = self.right;
                self.right = point;
            }
        }
    }

    /// Replaces the best point if `point` is strictly better.
    ///
    /// Only call with real evaluations.
    pub(super) fn maybe_update_best(&mut self, point: Point) {
        if self.goal.is_better(point.objective, self.best.objective) {
            self.best = point;
        }
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let gap = (self.bracket.inner_right - self.bracket.inner_left).abs();
        let mid = 0.5 * (self.bracket.inner_left + self.bracket.inner_right);
        gap <= config.x_abs_tol() + config.x_rel_tol() * mid.abs()
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution {
        Solution {
            status,
            x: self.best.x,
            objective: self.best.objective,
            iters,
        }
    }
}
