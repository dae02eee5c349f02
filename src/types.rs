//! Core types for the twiddle optimizer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of optimization.
///
/// Besides selecting the comparison used to accept trial moves, the
/// direction fixes which side the hard stop sits on: a minimizing search
/// stops once the best value reaches a floor, a maximizing search once it
/// reaches a ceiling. There is no bound in the opposite direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Minimize the objective value.
    Minimize,
    /// Maximize the objective value.
    Maximize,
}

impl Direction {
    /// Returns `true` if `candidate` is strictly better than `best`.
    ///
    /// Equal values are never an improvement; ties count as failed trials
    /// so step sizes shrink on flat regions instead of oscillating.
    #[must_use]
    pub fn improves(self, candidate: f64, best: f64) -> bool {
        match self {
            Direction::Minimize => candidate < best,
            Direction::Maximize => candidate > best,
        }
    }

    /// Returns `true` if `best` has reached or crossed the hard stop.
    ///
    /// The test is one-sided and direction-matched: `<=` against a floor
    /// when minimizing, `>=` against a ceiling when maximizing.
    #[must_use]
    pub fn crossed(self, best: f64, bound: f64) -> bool {
        match self {
            Direction::Minimize => best <= bound,
            Direction::Maximize => best >= bound,
        }
    }

    /// The default hard stop for this direction, far enough out that it
    /// only triggers on runaway objectives.
    #[must_use]
    pub(crate) fn default_bound(self) -> f64 {
        match self {
            Direction::Minimize => -1e32,
            Direction::Maximize => 1e32,
        }
    }
}
