#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Coordinate-wise "twiddle" optimization for derivative-free parameter
//! tuning. Twiddle perturbs one parameter at a time, keeps strictly
//! improving moves, and adapts per-parameter step sizes up on success and
//! down on failure until the summed step budget drops below a tolerance.
//! It suits small tuning problems (controller gains, heuristic weights)
//! where gradients are unavailable and evaluations are expensive.
//!
//! # Getting Started
//!
//! Minimize a function in five lines:
//!
//! ```
//! use twiddle::prelude::*;
//!
//! let result = Twiddle::minimize()
//!     .optimize(|x: &[f64]| (x[0] - 3.0).powi(2), &[0.0])
//!     .unwrap();
//!
//! assert!((result.params[0] - 3.0).abs() < 1e-3);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Twiddle`] | The configured optimizer: tolerance, step factor, initial steps, hard stop. |
//! | [`Direction`] | Whether to minimize or maximize the objective value. |
//! | [`Objective`](objective::Objective) | The function being optimized — any `FnMut(&[f64]) -> f64` works. |
//! | [`RunResult`] | Final parameter vector, best value, and outer iteration count. |
//! | [`Observer`](observer::Observer) | Optional structured instrumentation of the search loop. |
//!
//! # Algorithm
//!
//! Each outer iteration makes one pass over the parameters in index order.
//! For parameter *i* with step *dpᵢ*:
//!
//! 1. Probe `xᵢ + dpᵢ`. If strictly better, accept and grow *dpᵢ* by
//!    `(1 + step_factor)`.
//! 2. Otherwise probe `xᵢ - dpᵢ` from the original value. If strictly
//!    better, accept and grow *dpᵢ*.
//! 3. Otherwise restore `xᵢ` exactly and shrink *dpᵢ* by
//!    `(1 - step_factor)`.
//!
//! The loop stops when `Σ|dpᵢ|` falls below the tolerance, or immediately
//! when the best value crosses the configured hard stop. Equal values
//! count as failures, so step sizes cannot oscillate on flat regions and
//! termination is guaranteed for any valid configuration.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`Direction`] and [`RunResult`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at key points of the search | off |

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::warn!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

mod error;
pub mod objective;
pub mod observer;
mod twiddle;
mod types;

pub use error::{Error, Result};
pub use objective::Objective;
pub use observer::{Event, NopObserver, Observer, Probe};
pub use twiddle::{RunResult, Twiddle, TwiddleBuilder};
pub use types::Direction;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use twiddle::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::objective::Objective;
    pub use crate::observer::{Event, NopObserver, Observer, Probe};
    pub use crate::twiddle::{RunResult, Twiddle, TwiddleBuilder};
    pub use crate::types::Direction;
}
