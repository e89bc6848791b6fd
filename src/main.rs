//! Run the reference open-channel case:
//!
//! cargo run --release
//!
//! Prints a diagnostics line per snapshot interval and the developed
//! outlet velocity profile at the end of the run.
fn main() {
    use pipeflow::navier_stokes::Channel2D;
    use pipeflow::params::Parameters;
    use pipeflow::{integrate, Integrate};

    // Parameters
    let params = Parameters::default();
    let mut navier = Channel2D::new_open_channel(&params).expect("default parameters are valid");
    // Write first diagnostics line
    navier.callback();
    integrate(&mut navier, params.max_time(), Some(params.snapshot_interval()));

    // Developed profile at the outlet
    let (velx, _) = navier.vertex_centered_velocity();
    let outlet = navier.mesh.n_points_x - 1;
    println!("outlet velocity profile:");
    for (i, y) in navier.mesh.y.iter().enumerate() {
        println!("y = {:5.3}    vx = {:8.5}", y, velx[[i, outlet]]);
    }
}
