//! Right-to-left function composition.
//!
//! [`compose`] handles the fixed two-function case generically;
//! [`Pipeline`] is the variadic form, holding boxed fallible steps and
//! applying them from the last one pushed back to the first, the way a
//! right fold over a step list would.

use crate::error::TourError;

/// Composes two functions right to left: `compose(f, g)(x)` is `f(g(x))`.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

type Step<T> = Box<dyn Fn(T) -> Result<T, TourError>>;

/// A right-to-left pipeline of fallible steps over one value type.
///
/// Steps run starting from the most recently pushed one. An empty pipeline
/// is the identity. The first failing step aborts the run and its error is
/// returned unchanged.
pub struct Pipeline<T> {
    steps: Vec<Step<T>>,
}

impl<T> Pipeline<T> {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Adds a step. Steps added earlier run later (right-to-left order).
    pub fn step(mut self, step: impl Fn(T) -> Result<T, TourError> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Number of steps in the pipeline.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs the pipeline over an initial value.
    ///
    /// # Errors
    ///
    /// Propagates the first step error encountered.
    pub fn run(&self, initial: T) -> Result<T, TourError> {
        self.steps
            .iter()
            .rev()
            .try_fold(initial, |acc, step| step(acc))
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
