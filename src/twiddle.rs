//! The twiddle search loop and its configuration.
//!
//! Twiddle is a coordinate-wise hill climber: it probes each parameter in
//! index order, first forward by that parameter's step size, then backward
//! from the original value, keeps strictly improving moves, and adapts the
//! step size — grown by `(1 + step_factor)` on success, shrunk by
//! `(1 - step_factor)` on a double failure. The search stops when the
//! summed step sizes drop below the tolerance, or immediately when the
//! best value crosses the hard stop.
//!
//! # Configuration
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `direction` | `Minimize` | Whether better means smaller or larger |
//! | `tolerance` | `1e-3` | Stop once `Σ\|stepᵢ\|` falls below this |
//! | `step_factor` | `0.1` | Step growth/shrink rate, in (0, 1) |
//! | `initial_steps` | all `1.0` | Per-parameter starting step sizes |
//! | `hard_stop` | `-1e32` / `1e32` | One-sided early-exit bound on the best value |
//!
//! # Examples
//!
//! ```
//! use twiddle::prelude::*;
//!
//! let optimizer = Twiddle::builder()
//!     .minimize()
//!     .tolerance(1e-4)
//!     .step_factor(0.2)
//!     .initial_steps(vec![50.0, 50.0])
//!     .build()
//!     .unwrap();
//!
//! let result = optimizer
//!     .optimize(|x: &[f64]| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2), &[0.0, 0.0])
//!     .unwrap();
//!
//! assert!((result.params[0] - 1.0).abs() < 1e-3);
//! assert!((result.params[1] + 2.0).abs() < 1e-3);
//! ```

use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::observer::{Event, NopObserver, Observer, Probe};
use crate::types::Direction;

/// The outcome of a completed search.
///
/// Produced once at loop termination and immutable afterwards. The best
/// value is always the objective evaluated exactly at `params`: the
/// optimizer commits a snapshot of the parameter vector on every accepted
/// move and reverts failed probes in place, so the two never drift apart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// The best parameter vector found.
    pub params: Vec<f64>,
    /// The objective value at `params`.
    pub value: f64,
    /// The number of outer iterations (full passes over the parameters)
    /// performed, including the iteration that triggered a hard stop.
    pub iterations: u64,
}

/// A configured twiddle optimizer.
///
/// Construct via [`Twiddle::minimize`], [`Twiddle::maximize`],
/// [`Twiddle::new`], or [`Twiddle::builder`] for non-default options,
/// then call [`optimize`](Twiddle::optimize). The optimizer holds no
/// per-run state: every call is independent and reentrant, and a single
/// instance can be reused across runs.
///
/// # Examples
///
/// ```
/// use twiddle::prelude::*;
///
/// let result = Twiddle::minimize()
///     .optimize(|x: &[f64]| x[0] * x[0], &[-300.0])
///     .unwrap();
///
/// assert!(result.params[0].abs() < 1e-3);
/// assert!(result.value < 1e-3);
/// ```
#[derive(Clone, Debug)]
pub struct Twiddle {
    direction: Direction,
    tolerance: f64,
    step_factor: f64,
    initial_steps: Option<Vec<f64>>,
    hard_stop: f64,
}

impl Twiddle {
    /// Create an optimizer with default options for the given direction.
    ///
    /// Defaults: tolerance `1e-3`, step factor `0.1`, initial steps all
    /// `1.0`, hard stop at the direction-matched `±1e32`.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            tolerance: 1e-3,
            step_factor: 0.1,
            initial_steps: None,
            hard_stop: direction.default_bound(),
        }
    }

    /// Create a minimizing optimizer with default options.
    ///
    /// Shorthand for `Twiddle::new(Direction::Minimize)`.
    #[must_use]
    pub fn minimize() -> Self {
        Self::new(Direction::Minimize)
    }

    /// Create a maximizing optimizer with default options.
    ///
    /// Shorthand for `Twiddle::new(Direction::Maximize)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use twiddle::prelude::*;
    ///
    /// let result = Twiddle::maximize()
    ///     .optimize(|x: &[f64]| -(x[0] * x[0]), &[-300.0])
    ///     .unwrap();
    ///
    /// assert!(result.params[0].abs() < 1e-3);
    /// ```
    #[must_use]
    pub fn maximize() -> Self {
        Self::new(Direction::Maximize)
    }

    /// Return a [`TwiddleBuilder`] for constructing an optimizer with a
    /// fluent API.
    ///
    /// # Examples
    ///
    /// ```
    /// use twiddle::prelude::*;
    ///
    /// let optimizer = Twiddle::builder()
    ///     .maximize()
    ///     .tolerance(1e-2)
    ///     .hard_stop(100.0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(optimizer.direction(), Direction::Maximize);
    /// ```
    #[must_use]
    pub fn builder() -> TwiddleBuilder {
        TwiddleBuilder::new()
    }

    /// The optimization direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The convergence tolerance on the summed step sizes.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The step adaptation factor.
    #[must_use]
    pub fn step_factor(&self) -> f64 {
        self.step_factor
    }

    /// The hard stop bound on the best value.
    #[must_use]
    pub fn hard_stop(&self) -> f64 {
        self.hard_stop
    }

    /// Run the search from the given initial parameter vector.
    ///
    /// Evaluates the objective once at `x0`, then repeatedly passes over
    /// the parameters in index order, probing forward and backward and
    /// adapting step sizes, until the summed step sizes fall below the
    /// tolerance or the best value crosses the hard stop. The search is
    /// deterministic: identical inputs produce identical results.
    ///
    /// # Errors
    ///
    /// Returns an error before the first objective evaluation if `x0` is
    /// empty, if configured initial steps do not match `x0` in length, or
    /// if the summed initial step sizes are already below the tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// use twiddle::prelude::*;
    ///
    /// let result = Twiddle::minimize()
    ///     .optimize(|x: &[f64]| x[0] * x[0] + x[1] * x[1] + x[2] * x[2], &[-300.0, 500.0, -3500.0])
    ///     .unwrap();
    ///
    /// for p in &result.params {
    ///     assert!(p.abs() < 1e-3);
    /// }
    /// ```
    pub fn optimize(&self, objective: impl Objective, x0: &[f64]) -> Result<RunResult> {
        let mut observer = NopObserver;
        self.optimize_observed(objective, x0, &mut observer)
    }

    /// Run the search with an [`Observer`] receiving structured events.
    ///
    /// Identical to [`optimize`](Twiddle::optimize) except that the loop
    /// reports pass starts, accepted and reverted probes, hard stops, and
    /// completion to `observer`. Observers cannot influence the search.
    ///
    /// # Errors
    ///
    /// Same as [`optimize`](Twiddle::optimize).
    pub fn optimize_observed(
        &self,
        mut objective: impl Objective,
        x0: &[f64],
        observer: &mut dyn Observer,
    ) -> Result<RunResult> {
        let steps = self.validated_steps(x0)?;
        Ok(self.run(&mut objective, x0, steps, observer))
    }

    /// Check the run preconditions and produce the starting step vector.
    fn validated_steps(&self, x0: &[f64]) -> Result<Vec<f64>> {
        if x0.is_empty() {
            return Err(Error::EmptyParameters);
        }
        let steps = match &self.initial_steps {
            Some(steps) => {
                if steps.len() != x0.len() {
                    return Err(Error::StepDimensionMismatch {
                        expected: x0.len(),
                        got: steps.len(),
                    });
                }
                steps.clone()
            }
            None => vec![1.0; x0.len()],
        };
        let sum: f64 = steps.iter().map(|s| s.abs()).sum();
        if sum < self.tolerance {
            return Err(Error::StepSumBelowTolerance {
                sum,
                tol: self.tolerance,
            });
        }
        Ok(steps)
    }

    /// The core perturb/test/accept/shrink loop.
    ///
    /// `current` is the mutable working vector probes are applied to;
    /// `accepted` is the committed snapshot the caller receives. They
    /// agree except while a probe is in flight: an accepted probe copies
    /// `current` into `accepted`, a double failure restores the probed
    /// parameter exactly.
    fn run(
        &self,
        objective: &mut dyn Objective,
        x0: &[f64],
        mut steps: Vec<f64>,
        observer: &mut dyn Observer,
    ) -> RunResult {
        let grow = 1.0 + self.step_factor;
        let shrink = 1.0 - self.step_factor;

        let mut current = x0.to_vec();
        let mut accepted = current.clone();
        let mut best = objective.evaluate(&current);
        trace_debug!(best, "initial evaluation");

        let mut iterations: u64 = 0;
        while steps.iter().map(|s| s.abs()).sum::<f64>() >= self.tolerance {
            iterations += 1;
            if self.direction.crossed(best, self.hard_stop) {
                trace_warn!(best, bound = self.hard_stop, "hard stop: best value crossed the bound");
                observer.on_event(&Event::HardStop {
                    best,
                    bound: self.hard_stop,
                });
                break;
            }
            observer.on_event(&Event::PassStarted {
                iteration: iterations,
                params: &current,
                steps: &steps,
                best,
            });
            trace_debug!(iteration = iterations, best, "starting pass");

            for i in 0..current.len() {
                let original = current[i];

                current[i] = original + steps[i];
                let value = objective.evaluate(&current);
                if self.direction.improves(value, best) {
                    best = value;
                    accepted.copy_from_slice(&current);
                    steps[i] *= grow;
                    observer.on_event(&Event::Improved {
                        index: i,
                        probe: Probe::Forward,
                        value,
                        step: steps[i],
                    });
                    trace_debug!(index = i, value, step = steps[i], "forward probe accepted");
                    continue;
                }

                current[i] = original - steps[i];
                let value = objective.evaluate(&current);
                if self.direction.improves(value, best) {
                    best = value;
                    accepted.copy_from_slice(&current);
                    steps[i] *= grow;
                    observer.on_event(&Event::Improved {
                        index: i,
                        probe: Probe::Backward,
                        value,
                        step: steps[i],
                    });
                    trace_debug!(index = i, value, step = steps[i], "backward probe accepted");
                } else {
                    current[i] = original;
                    steps[i] *= shrink;
                    observer.on_event(&Event::Reverted {
                        index: i,
                        step: steps[i],
                    });
                    trace_debug!(index = i, step = steps[i], "both probes rejected");
                }
            }
        }

        observer.on_event(&Event::Finished { best, iterations });
        trace_debug!(best, iterations, "search finished");
        RunResult {
            params: accepted,
            value: best,
            iterations,
        }
    }
}

impl Default for Twiddle {
    fn default() -> Self {
        Self::minimize()
    }
}

/// A builder for constructing [`Twiddle`] instances with a fluent API.
///
/// Created via [`Twiddle::builder()`]. Collects direction, tolerance,
/// step factor, initial steps, and hard stop before validating the
/// configuration in [`build`](TwiddleBuilder::build).
///
/// # Defaults
///
/// - Direction: [`Minimize`](Direction::Minimize)
/// - Tolerance: `1e-3`
/// - Step factor: `0.1`
/// - Initial steps: `1.0` per parameter
/// - Hard stop: `-1e32` when minimizing, `1e32` when maximizing
///
/// # Examples
///
/// ```
/// use twiddle::prelude::*;
///
/// let optimizer = Twiddle::builder()
///     .minimize()
///     .tolerance(1e-4)
///     .initial_steps(vec![10.0, 0.5])
///     .build()
///     .unwrap();
///
/// let result = optimizer
///     .optimize(|x: &[f64]| (x[0] - 5.0).powi(2) + x[1] * x[1], &[0.0, 0.0])
///     .unwrap();
/// assert!((result.params[0] - 5.0).abs() < 1e-3);
/// ```
#[derive(Clone, Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TwiddleBuilder {
    direction: Direction,
    tolerance: f64,
    step_factor: f64,
    initial_steps: Option<Vec<f64>>,
    hard_stop: Option<f64>,
}

impl TwiddleBuilder {
    /// Create a new builder with default settings.
    fn new() -> Self {
        Self {
            direction: Direction::Minimize,
            tolerance: 1e-3,
            step_factor: 0.1,
            initial_steps: None,
            hard_stop: None,
        }
    }

    /// Set the optimization direction to minimize (the default).
    #[must_use]
    pub fn minimize(mut self) -> Self {
        self.direction = Direction::Minimize;
        self
    }

    /// Set the optimization direction to maximize.
    #[must_use]
    pub fn maximize(mut self) -> Self {
        self.direction = Direction::Maximize;
        self
    }

    /// Set the optimization direction explicitly.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the convergence tolerance.
    ///
    /// The search stops once the sum of the absolute step sizes falls
    /// below this value. Must be strictly positive.
    ///
    /// Default: `1e-3`.
    #[must_use]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the step adaptation factor.
    ///
    /// Step sizes are multiplied by `(1 + factor)` after an accepted
    /// probe and by `(1 - factor)` after a double failure. Must be
    /// strictly inside `(0.0, 1.0)`; larger values adapt faster but
    /// overshoot more.
    ///
    /// Default: `0.1`.
    #[must_use]
    pub fn step_factor(mut self, factor: f64) -> Self {
        self.step_factor = factor;
        self
    }

    /// Set the per-parameter initial step sizes.
    ///
    /// Each step must be strictly positive; only the magnitude is used,
    /// since both probe directions are tried. The vector length must
    /// match the initial parameter vector passed to
    /// [`optimize`](Twiddle::optimize). Scale these to the expected
    /// distance from the optimum for faster convergence.
    ///
    /// Default: `1.0` for every parameter.
    #[must_use]
    pub fn initial_steps(mut self, steps: Vec<f64>) -> Self {
        self.initial_steps = Some(steps);
        self
    }

    /// Set the hard stop bound on the best value.
    ///
    /// The search terminates early once the best value reaches this
    /// bound: at or below it when minimizing, at or above it when
    /// maximizing. Early termination is a valid outcome, not an error —
    /// the returned [`RunResult`] is well-formed. There is no bound in
    /// the opposite direction.
    ///
    /// Default: `-1e32` when minimizing, `1e32` when maximizing.
    #[must_use]
    pub fn hard_stop(mut self, bound: f64) -> Self {
        self.hard_stop = Some(bound);
        self
    }

    /// Validate the configuration and build the [`Twiddle`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if the tolerance is not
    /// strictly positive, [`Error::InvalidStepFactor`] if the step factor
    /// is outside `(0.0, 1.0)`, or [`Error::NonPositiveStep`] if any
    /// configured initial step is not strictly positive.
    pub fn build(self) -> Result<Twiddle> {
        if self.tolerance <= 0.0 || self.tolerance.is_nan() {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        let factor_in_range = self.step_factor > 0.0 && self.step_factor < 1.0;
        if !factor_in_range {
            return Err(Error::InvalidStepFactor(self.step_factor));
        }
        if let Some(steps) = &self.initial_steps {
            for (index, &value) in steps.iter().enumerate() {
                if value <= 0.0 || value.is_nan() {
                    return Err(Error::NonPositiveStep { index, value });
                }
            }
        }
        Ok(Twiddle {
            direction: self.direction,
            tolerance: self.tolerance,
            step_factor: self.step_factor,
            initial_steps: self.initial_steps,
            hard_stop: self.hard_stop.unwrap_or_else(|| self.direction.default_bound()),
        })
    }
}

impl Default for TwiddleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
