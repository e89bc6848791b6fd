//! Periodic channel flow with a random initial disturbance
//!
//! cargo run --release --example periodic_channel
use pipeflow::navier_stokes::Channel2D;
use pipeflow::params::Parameters;
use pipeflow::{integrate, Integrate};

fn main() -> Result<(), pipeflow::error::Error> {
    // Parameters
    let params = Parameters {
        n_points_y: 15,
        aspect_ratio: 10,
        nu: 0.01,
        dt: 0.001,
        n_steps: 2000,
        snapshot_every: 50,
        n_poisson: 50,
        inflow_velocity: 1.0,
    };
    let mut navier = Channel2D::new_periodic(&params)?;
    navier.random_disturbance(1e-2);
    navier.callback();
    integrate(&mut navier, params.max_time(), Some(params.snapshot_interval()));
    Ok(())
}
