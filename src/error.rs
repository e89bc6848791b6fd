//! Error taxonomy of the solver
//!
//! All validation happens before the time loop starts; inside the loop the
//! only failure path is the post-step finiteness check.
use thiserror::Error;

/// Errors raised by mesh construction, parameter validation and the
/// time stepper.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed grid parameters, rejected at construction
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Out-of-range run parameter, rejected before the time loop
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// A field contained a non-finite value after a step
    #[error("non-finite value in solver state after step {step}")]
    NumericDivergence {
        /// Time step index at which the non-finite value was detected
        step: usize,
    },
}

/// Result type of this crate
pub type Result<T> = std::result::Result<T, Error>;
