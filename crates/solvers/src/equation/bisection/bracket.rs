use thiserror::Error;

/// Why a root interval was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    #[error("interval endpoints must be finite")]
    NonFinite,

    #[error("interval endpoints must differ")]
    ZeroWidth,
}

/// The sign of a residual.
///
/// Zero counts as positive, so an exact root at a midpoint replaces the
/// positive end of the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// A finite, non-degenerate interval with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    pub(super) lo: f64,
    pub(super) hi: f64,
}

impl Bounds {
    /// Orders the endpoints of `[a, b]`, which may be given either way round.
    pub(super) fn new([a, b]: [f64; 2]) -> Result<Self, BracketError> {
        if !(a.is_finite() && b.is_finite()) {
            return Err(BracketError::NonFinite);
        }
        match a.partial_cmp(&b) {
            Some(std::cmp::Ordering::Less) => Ok(Self { lo: a, hi: b }),
            Some(std::cmp::Ordering::Greater) => Ok(Self { lo: b, hi: a }),
            _ => Err(BracketError::ZeroWidth),
        }
    }
}

/// An interval whose ends have residuals of opposite sign.
///
/// Only the sign at `lo` is stored; `hi` always has the other sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lo: f64,
    hi: f64,
    lo_sign: Sign,
}

impl Bracket {
    /// Returns `None` when the residual signs at both ends agree.
    pub(super) fn new(bounds: Bounds, lo_sign: Sign, hi_sign: Sign) -> Option<Self> {
        (lo_sign != hi_sign).then_some(Self {
            lo: bounds.lo,
            hi: bounds.hi,
            lo_sign,
        })
    }

    /// Lower end of the bracket.
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper end of the bracket.
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// True once `width <= abs_tol + rel_tol * |midpoint|`.
    #[must_use]
    pub fn is_x_converged(&self, abs_tol: f64, rel_tol: f64) -> bool {
        self.width() <= abs_tol + rel_tol * self.midpoint().abs()
    }

    /// Moves the end that shares `sign` to `x`, keeping the sign change inside.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if sign == self.lo_sign {
            self.lo = x;
        } else {
            self.hi = x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_accept_either_order() {
        assert_eq!(Bounds::new([3.0, 1.0]), Ok(Bounds { lo: 1.0, hi: 3.0 }));
        assert_eq!(Bounds::new([1.0, 3.0]), Ok(Bounds { lo: 1.0, hi: 3.0 }));
    }

    #[test]
    fn bounds_reject_degenerate_intervals() {
        assert_eq!(Bounds::new([f64::NAN, 1.0]), Err(BracketError::NonFinite));
        assert_eq!(Bounds::new([0.0, f64::NEG_INFINITY]), Err(BracketError::NonFinite));
        assert_eq!(Bounds::new([2.0, 2.0]), Err(BracketError::ZeroWidth));
    }

    #[test]
    fn matching_signs_give_no_bracket() {
        let bounds = Bounds::new([0.0, 1.0]).unwrap();
        assert_eq!(Bracket::new(bounds, Sign::Negative, Sign::Negative), None);
        assert_eq!(Bracket::new(bounds, Sign::Positive, Sign::Positive), None);
    }

    #[test]
    fn shrink_keeps_the_sign_change_inside() {
        // Decreasing residual: positive at 0, negative at 2.
        let bounds = Bounds::new([0.0, 2.0]).unwrap();
        let mut bracket = Bracket::new(bounds, Sign::Positive, Sign::Negative).unwrap();

        bracket.shrink(1.0, Sign::Negative);
        assert_eq!((bracket.lo(), bracket.hi()), (0.0, 1.0));

        bracket.shrink(0.5, Sign::Positive);
        assert_eq!((bracket.lo(), bracket.hi()), (0.5, 1.0));
        assert_eq!(bracket.midpoint(), 0.75);
    }

    #[test]
    fn x_convergence_scales_with_midpoint() {
        let bounds = Bounds::new([100.0, 100.001]).unwrap();
        let bracket = Bracket::new(bounds, Sign::Negative, Sign::Positive).unwrap();

        assert!(!bracket.is_x_converged(1e-6, 0.0));
        assert!(bracket.is_x_converged(0.0, 1e-5));
    }

    #[test]
    fn zero_residual_is_positive() {
        assert_eq!(Sign::of(0.0), Sign::Positive);
        assert_eq!(Sign::of(-1e-300), Sign::Negative);
        assert_eq!(Sign::of(f64::INFINITY), Sign::Positive);
    }
}
