#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the convergence tolerance is not strictly positive.
    #[error("invalid tolerance: {0} must be positive")]
    InvalidTolerance(f64),

    /// Returned when the step adaptation factor is not in the open
    /// interval (0.0, 1.0).
    #[error("invalid step factor: {0} must be in (0.0, 1.0)")]
    InvalidStepFactor(f64),

    /// Returned when an initial step size is not strictly positive.
    #[error("invalid initial step at index {index}: {value} must be positive")]
    NonPositiveStep {
        /// The index of the offending step.
        index: usize,
        /// The offending step value.
        value: f64,
    },

    /// Returned when the initial parameter vector is empty.
    #[error("empty parameter vector: at least one parameter is required")]
    EmptyParameters,

    /// Returned when the initial step vector length does not match the
    /// parameter vector length.
    #[error("step dimension mismatch: expected {expected} steps but got {got}")]
    StepDimensionMismatch {
        /// The number of parameters.
        expected: usize,
        /// The number of initial steps provided.
        got: usize,
    },

    /// Returned when the summed initial step sizes are already below the
    /// tolerance, so the search loop would never execute.
    #[error("initial step sum {sum} is below tolerance {tol}: the search would never run")]
    StepSumBelowTolerance {
        /// The sum of the absolute initial step sizes.
        sum: f64,
        /// The configured tolerance.
        tol: f64,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
