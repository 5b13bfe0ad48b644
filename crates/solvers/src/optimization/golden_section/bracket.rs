use thiserror::Error;

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
const INV_PHI: f64 = PHI - 1.0;

/// Errors that can occur when validating a bracketing triple.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("bracket points must be finite")]
    NonFinite,

    #[error("middle point must lie strictly between the end points")]
    NotOrdered,
}

/// A validated bracketing triple `left < middle < right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triple {
    pub left: f64,
    pub middle: f64,
    pub right: f64,
}

impl Triple {
    /// Validates a triple, reversing it if given in descending order.
    ///
    /// # Errors
    ///
    /// Returns an error if any point is non-finite or if the middle point
    /// does not lie strictly between the end points.
    pub fn new(points: [f64; 3]) -> Result<Self, BracketError> {
        if points.iter().any(|x| !x.is_finite()) {
            return Err(BracketError::NonFinite);
        }

        let [a, middle, b] = points;
        let (left, right) = if a <= b { (a, b) } else { (b, a) };

        if left < middle && middle < right {
            Ok(Self {
                left,
                middle,
                right,
            })
        } else {
            Err(BracketError::NotOrdered)
        }
    }
}

/// Golden section search bracket.
///
/// Maintains the outer interval [left, right] and two interior points
/// positioned according to the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left point at `left + (1 - φ⁻¹) * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `left + φ⁻¹ * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket over the outer points of a triple.
    pub(super) fn new(triple: &Triple) -> Self {
        let Triple { left, right, .. } = *triple;
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + (1.0 - INV_PHI) * width,
            inner_right: left + INV_PHI * width,
        }
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Shrinks the bounds to `[left, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + (1.0 - INV_PHI) * self.width();
    }

    /// Shrinks the bounds to `[inner_left, right]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }

    /// Returns x for the new `inner_left` after shrinking right.
    pub(super) fn new_inner_left(&self) -> f64 {
        self.left + (1.0 - INV_PHI) * (self.inner_right - self.left)
    }

    /// Returns x for the new `inner_right` after shrinking left.
    pub(super) fn new_inner_right(&self) -> f64 {
        self.inner_left + INV_PHI * (self.right - self.inner_left)
    }
}
