/// A stateful source of uniformly distributed doubles.
///
/// Every call to [`UniformRng::next`] advances the generator and returns a
/// value in the half-open interval `[0, 1)`. This is the capability Monte
/// Carlo style callers consume, independent of the underlying engine.
///
/// Implementations are not required to be thread-safe. An instance must only
/// be advanced by one caller at a time.
pub trait UniformRng {
    /// Returns the next value in `[0, 1)`.
    fn next(&mut self) -> f64;

    /// Fills `buf` with consecutive values from [`UniformRng::next`].
    fn fill(&mut self, buf: &mut [f64]) {
        for slot in buf {
            *slot = self.next();
        }
    }
}

impl<R: UniformRng + ?Sized> UniformRng for &mut R {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

impl<R: UniformRng + ?Sized> UniformRng for Box<R> {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}
