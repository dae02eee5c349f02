//! The [`Objective`] trait defines what gets optimized.
//!
//! For simple functions, pass a closure directly to
//! [`Twiddle::optimize`](crate::Twiddle::optimize):
//!
//! ```
//! use twiddle::prelude::*;
//!
//! let result = Twiddle::minimize()
//!     .optimize(|x: &[f64]| x[0] * x[0] + x[1] * x[1], &[4.0, -7.0])
//!     .unwrap();
//! assert!(result.value < 1e-3);
//! ```
//!
//! Closures may capture mutable state, which is handy for counting
//! evaluations or recording a trace:
//!
//! ```
//! use twiddle::prelude::*;
//!
//! let mut evaluations = 0_usize;
//! let result = Twiddle::minimize()
//!     .optimize(
//!         |x: &[f64]| {
//!             evaluations += 1;
//!             x[0] * x[0]
//!         },
//!         &[10.0],
//!     )
//!     .unwrap();
//! assert!(result.value < 1e-3);
//! assert!(evaluations > 0);
//! ```
//!
//! Implement [`Objective`] on a struct when the evaluation carries state
//! of its own, such as a simulator handle or cached measurements:
//!
//! ```
//! use twiddle::prelude::*;
//!
//! struct ShiftedSphere {
//!     center: Vec<f64>,
//! }
//!
//! impl Objective for ShiftedSphere {
//!     fn evaluate(&mut self, params: &[f64]) -> f64 {
//!         params
//!             .iter()
//!             .zip(&self.center)
//!             .map(|(p, c)| (p - c) * (p - c))
//!             .sum()
//!     }
//! }
//!
//! let objective = ShiftedSphere {
//!     center: vec![2.0, -1.0],
//! };
//! let result = Twiddle::minimize().optimize(objective, &[0.0, 0.0]).unwrap();
//! assert!((result.params[0] - 2.0).abs() < 1e-3);
//! assert!((result.params[1] + 1.0).abs() < 1e-3);
//! ```

/// A scalar-valued function of a real parameter vector.
///
/// The optimizer treats the objective as an opaque capability with a
/// single operation. Evaluations are sequential and may be expensive;
/// the search performs at most two per parameter per outer iteration
/// (the backward probe is skipped when the forward probe succeeds).
///
/// Evaluation takes `&mut self` so objectives can carry mutable state
/// such as counters or caches. A blanket implementation covers plain
/// `FnMut(&[f64]) -> f64` closures.
pub trait Objective {
    /// Evaluate the objective at the given parameter vector.
    ///
    /// Called with vectors of the same length as the initial guess.
    fn evaluate(&mut self, params: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: FnMut(&[f64]) -> f64,
{
    fn evaluate(&mut self, params: &[f64]) -> f64 {
        self(params)
    }
}
