//! Structured instrumentation of the search loop.
//!
//! The optimizer core stays silent by default. To watch a run — plot
//! convergence, debug step-size behavior, record an audit trail — pass an
//! [`Observer`] to
//! [`Twiddle::optimize_observed`](crate::Twiddle::optimize_observed).
//! Events borrow the live parameter and step vectors, so observing a run
//! allocates nothing.
//!
//! Plain closures work:
//!
//! ```
//! use twiddle::prelude::*;
//!
//! let mut best_per_pass = Vec::new();
//! let result = Twiddle::minimize()
//!     .optimize_observed(
//!         |x: &[f64]| x[0] * x[0],
//!         &[-20.0],
//!         &mut |event: &Event<'_>| {
//!             if let Event::PassStarted { best, .. } = event {
//!                 best_per_pass.push(*best);
//!             }
//!         },
//!     )
//!     .unwrap();
//!
//! assert_eq!(best_per_pass.len() as u64, result.iterations);
//! ```

/// Which direction a parameter was perturbed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// The step was added to the parameter.
    Forward,
    /// The step was subtracted from the parameter.
    Backward,
}

/// An instrumentation event emitted while the search runs.
///
/// Borrowed fields point into the optimizer's working state and are only
/// valid for the duration of the callback.
#[derive(Debug)]
pub enum Event<'a> {
    /// A new pass over the parameters is starting.
    PassStarted {
        /// The 1-based outer iteration number.
        iteration: u64,
        /// The current parameter vector.
        params: &'a [f64],
        /// The current per-parameter step sizes.
        steps: &'a [f64],
        /// The best objective value so far.
        best: f64,
    },
    /// A probe strictly improved the best value and was accepted; the
    /// parameter's step size has been grown.
    Improved {
        /// The index of the updated parameter.
        index: usize,
        /// Which probe direction succeeded.
        probe: Probe,
        /// The new best objective value.
        value: f64,
        /// The parameter's step size after growing.
        step: f64,
    },
    /// Both probes failed; the parameter was restored to its original
    /// value and its step size has been shrunk.
    Reverted {
        /// The index of the restored parameter.
        index: usize,
        /// The parameter's step size after shrinking.
        step: f64,
    },
    /// The best value crossed the configured hard stop and the search is
    /// terminating early.
    HardStop {
        /// The best objective value at the stop.
        best: f64,
        /// The configured hard stop bound.
        bound: f64,
    },
    /// The search has terminated and a result is about to be returned.
    Finished {
        /// The final best objective value.
        best: f64,
        /// The total number of outer iterations performed.
        iterations: u64,
    },
}

/// Receives [`Event`]s from a running search.
///
/// Implemented for any `FnMut(&Event<'_>)` closure. Observers are a
/// side channel only: they cannot influence the search, and the core
/// algorithm behaves identically with or without one attached.
pub trait Observer {
    /// Called once per emitted event, in loop order.
    fn on_event(&mut self, event: &Event<'_>);
}

/// An observer that ignores every event.
///
/// Used internally by [`Twiddle::optimize`](crate::Twiddle::optimize);
/// also handy as a placeholder in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NopObserver;

impl Observer for NopObserver {
    fn on_event(&mut self, _event: &Event<'_>) {}
}

impl<F> Observer for F
where
    F: FnMut(&Event<'_>),
{
    fn on_event(&mut self, event: &Event<'_>) {
        self(event);
    }
}
