//! # `pipeflow`: Finite-difference solver for transient channel flow
//!
//! Solves the time-dependent, incompressible Navier-Stokes equations on a
//! 2-D rectangular channel (a pipe cross-section) with a staggered-grid
//! pressure-projection method of SIMPLE type. Each time step computes a
//! tentative velocity from the momentum equation, relaxes a pressure
//! correction out of the discrete Poisson equation and re-projects the
//! velocity onto a divergence-free field.
//!
//! Two boundary-condition variants are available over the same core:
//! - **Open channel**: no-slip walls, fixed inflow, mass-rate-balanced
//!   outflow, see `Channel2D::new_open_channel`
//! - **Periodic channel**: no-slip walls, periodic axial direction,
//!   see `Channel2D::new_periodic`
//!
//! # Example
//! Develop an open channel flow from a uniform unit inflow
//! ```
//! use pipeflow::navier_stokes::Channel2D;
//! use pipeflow::params::Parameters;
//! use pipeflow::{integrate, Integrate};
//!
//! let params = Parameters {
//!     n_points_y: 5,
//!     aspect_ratio: 2,
//!     n_steps: 20,
//!     n_poisson: 10,
//!     ..Parameters::default()
//! };
//! let mut navier = Channel2D::new_open_channel(&params).unwrap();
//! integrate(&mut navier, params.max_time(), None);
//! assert!(navier.get_time() > 0.0);
//! let (velx, vely) = navier.vertex_centered_velocity();
//! assert_eq!(velx.shape(), vely.shape());
//! ```
//!
//! The solver owns all field arrays exclusively; one call to
//! [`Integrate::update`] advances the state by a single time step.
#![warn(missing_docs)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
pub mod error;
pub mod mesh;
pub mod navier_stokes;
pub mod params;
pub mod solver;

const MAX_TIMESTEP: usize = 10_000_000;

/// Integrate trait, step forward in time, and report results
pub trait Integrate {
    /// Update solution
    fn update(&mut self);
    /// Receive current time
    fn get_time(&self) -> f64;
    /// Get timestep
    fn get_dt(&self) -> f64;
    /// Callback function (can be used for i/o)
    fn callback(&mut self);
    /// Additional break criteria
    fn exit(&mut self) -> bool;
}

/// Integrate pde, that implements the Integrate trait.
///
/// Specify `save_intervall` to force writing an output.
///
/// Stop Criteria:
/// 1. Timestep limit
/// 2. Time limit
/// 3. `exit()` break criteria (e.g. non-finite fields)
pub fn integrate<T: Integrate>(pde: &mut T, max_time: f64, save_intervall: Option<f64>) {
    let mut timestep: usize = 0;
    let eps_dt = pde.get_dt() * 1e-4;
    loop {
        // Update
        pde.update();
        timestep += 1;

        // Save
        if let Some(dt_save) = &save_intervall {
            if (pde.get_time() % dt_save) < pde.get_dt() / 2.
                || (pde.get_time() % dt_save) > dt_save - pde.get_dt() / 2.
            {
                pde.callback();
            }
        }

        // Break
        if pde.get_time() + eps_dt >= max_time {
            break;
        }
        if timestep >= MAX_TIMESTEP {
            println!("timestep limit reached: {:?}", timestep);
            break;
        }
        if pde.exit() {
            println!("break criteria triggered");
            break;
        }
    }
}
