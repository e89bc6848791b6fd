//! Channel flow solver
pub mod boundary_conditions;
pub mod channel;
pub mod functions;
pub mod momentum;
pub use channel::{Channel2D, SolverState};
