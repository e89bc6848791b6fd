//! Open channel flow with entrance effects
//!
//! cargo run --release --example open_channel
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
        n_steps: 5000,
        snapshot_every: 50,
        n_poisson: 50,
        inflow_velocity: 1.0,
    };
    let mut navier = Channel2D::new_open_channel(&params)?;
    navier.callback();
    integrate(&mut navier, params.max_time(), Some(params.snapshot_interval()));

    // Velocity parabolas at three axial stations
    let (velx, _) = navier.vertex_centered_velocity();
    for &station in [5, 40, 80].iter() {
        println!("profile at x = {:5.3}:", navier.mesh.x[station]);
        for (i, y) in navier.mesh.y.iter().enumerate() {
            println!("  y = {:5.3}    vx = {:8.5}", y, velx[[i, station]]);
        }
    }
    Ok(())
}
