//! # Transient channel flow
//! Pressure-projection solver for the 2-dimensional Navier-Stokes
//! momentum equations in a rectangular channel.
//!
//! # Example
//! Develop a channel flow from uniform unit inflow
//! ```ignore
//! use pipeflow::navier_stokes::Channel2D;
//! use pipeflow::params::Parameters;
//! use pipeflow::{integrate, Integrate};
//!
//! fn main() {
//!     let params = Parameters::default();
//!     let mut navier = Channel2D::new_open_channel(&params).unwrap();
//!     navier.callback();
//!     integrate(&mut navier, params.max_time(), Some(params.snapshot_interval()));
//! }
//! ```
use super::boundary_conditions::{BcPolicy, BoundaryConditions, OpenChannel, PeriodicChannel};
use super::functions::{bulk_velocity, norm_l2, vertex_centered_x, vertex_centered_y, vorticity};
use super::momentum::{
    corrected_velocity_x, corrected_velocity_y, divergence, tentative_velocity_x,
    tentative_velocity_y, DENSITY,
};
use crate::error::{Error, Result};
use crate::mesh::StaggeredMesh;
use crate::params::Parameters;
use crate::solver::Jacobi;
use crate::Integrate;
use ndarray::Array2;
use std::collections::HashMap;
use std::f64::consts::PI;

/// Velocity and pressure fields of one time level.
///
/// The stepper holds the current state and produces a fresh one each
/// step; no array is mutated after a later stage has read it.
#[derive(Clone, Debug)]
pub struct SolverState {
    /// Staggered x-velocity, ghost rows at the walls
    pub velx: Array2<f64>,
    /// Staggered y-velocity, ghost columns at inlet/outlet
    pub vely: Array2<f64>,
    /// Pressure, one ghost layer per side
    pub pres: Array2<f64>,
}

impl SolverState {
    fn is_finite(&self) -> bool {
        self.velx.iter().all(|v| v.is_finite())
            && self.vely.iter().all(|v| v.is_finite())
            && self.pres.iter().all(|v| v.is_finite())
    }
}

/// Solve the 2-dimensional Navier-Stokes equations in a channel with a
/// SIMPLE-type projection scheme.
///
/// Struct must be mutable, to perform the update step, which advances
/// the solution by 1 timestep:
/// predictor, pressure-correction relaxation, velocity projection,
/// boundary re-application, state advance.
///
/// # Examples
///
/// ```
/// use pipeflow::navier_stokes::Channel2D;
/// use pipeflow::params::Parameters;
/// use pipeflow::{integrate, Integrate};
/// let params = Parameters {
///     n_points_y: 5,
///     aspect_ratio: 2,
///     n_steps: 10,
///     n_poisson: 5,
///     ..Parameters::default()
/// };
/// let mut navier = Channel2D::new_open_channel(&params).unwrap();
/// integrate(&mut navier, params.max_time(), None);
/// ```
pub struct Channel2D {
    /// Geometry of the staggered grid
    pub mesh: StaggeredMesh,
    /// Current velocity and pressure fields
    pub state: SolverState,
    /// Boundary condition policy
    pub bc: BcPolicy,
    /// Relaxation solver of the pressure-correction equation
    solver: Jacobi,
    /// Viscosity
    pub nu: f64,
    /// Time step size
    pub dt: f64,
    /// Time
    pub time: f64,
    /// Completed time steps
    timestep: usize,
    /// Step index at which a non-finite value was detected
    diverged: Option<usize>,
    /// diagnostics like |div|, bulk velocity, ...
    pub diagnostics: HashMap<String, Vec<f64>>,
}

impl Channel2D {
    /// Open channel: fixed inflow at the inlet, mass-rate-balanced
    /// outflow at the outlet.
    ///
    /// # Arguments
    ///
    /// * `params` - Run parameters, validated before construction
    ///
    /// # Errors
    /// Invalid geometry or out-of-range parameters.
    pub fn new_open_channel(params: &Parameters) -> Result<Self> {
        let bc = BcPolicy::OpenChannel(OpenChannel {
            inflow_velocity: params.inflow_velocity,
        });
        Self::new(bc, params)
    }

    /// Periodic channel: the axial direction wraps around; the initial
    /// bulk velocity equals the configured inflow speed.
    ///
    /// # Errors
    /// Invalid geometry or out-of-range parameters.
    pub fn new_periodic(params: &Parameters) -> Result<Self> {
        let bc = BcPolicy::PeriodicChannel(PeriodicChannel);
        Self::new(bc, params)
    }

    fn new(bc: BcPolicy, params: &Parameters) -> Result<Self> {
        params.validate()?;
        let mesh = StaggeredMesh::new(params.n_points_y, params.aspect_ratio)?;
        let mut velx = Array2::from_elem(mesh.shape_velx(), params.inflow_velocity);
        let mut vely = Array2::zeros(mesh.shape_vely());
        let pres = Array2::zeros(mesh.shape_pres());
        bc.apply_velx(&mut velx);
        bc.apply_vely(&mut vely);

        let mut diagnostics = HashMap::new();
        diagnostics.insert("time".to_string(), Vec::<f64>::new());
        diagnostics.insert("div".to_string(), Vec::<f64>::new());
        diagnostics.insert("bulk".to_string(), Vec::<f64>::new());

        Ok(Channel2D {
            mesh,
            state: SolverState { velx, vely, pres },
            bc,
            solver: Jacobi::new(params.n_poisson),
            nu: params.nu,
            dt: params.dt,
            time: 0.0,
            timestep: 0,
            diverged: None,
            diagnostics,
        })
    }

    /// Advance the solution by one time step.
    ///
    /// # Errors
    /// `NumericDivergence` if any field contains a non-finite value
    /// after the step.
    pub fn step(&mut self) -> Result<()> {
        let h = self.mesh.cell_spacing;

        // Predictor: tentative velocity from the momentum equation
        let mut velx_tent = tentative_velocity_x(
            self.state.velx.view(),
            self.state.vely.view(),
            self.state.pres.view(),
            h,
            self.nu,
            self.dt,
        );
        let mut vely_tent = tentative_velocity_y(
            self.state.velx.view(),
            self.state.vely.view(),
            self.state.pres.view(),
            h,
            self.nu,
            self.dt,
        );
        self.bc.apply_velx(&mut velx_tent);
        self.bc.apply_vely(&mut vely_tent);

        // Pressure-correction poisson equation
        let div = divergence(velx_tent.view(), vely_tent.view(), h);
        let rhs = div.mapv(|d| d * DENSITY / self.dt);
        let mut corr = Array2::zeros(self.state.pres.raw_dim());
        let bc = &self.bc;
        self.solver.solve(&rhs, &mut corr, h, |c| bc.apply_pres_corr(c));

        // Corrector: re-project the velocity, accumulate the pressure
        let pres = &self.state.pres + &corr;
        let mut velx = corrected_velocity_x(velx_tent.view(), corr.view(), h, self.dt);
        let mut vely = corrected_velocity_y(vely_tent.view(), corr.view(), h, self.dt);
        self.bc.apply_velx(&mut velx);
        self.bc.apply_vely(&mut vely);

        // Advance
        self.state = SolverState { velx, vely, pres };
        self.time += self.dt;
        self.timestep += 1;

        if !self.state.is_finite() {
            self.diverged = Some(self.timestep);
            return Err(Error::NumericDivergence {
                step: self.timestep,
            });
        }
        Ok(())
    }

    /// Velocity components interpolated onto the mesh vertices, a
    /// read-only snapshot for visualization consumers
    pub fn vertex_centered_velocity(&self) -> (Array2<f64>, Array2<f64>) {
        (
            vertex_centered_x(self.state.velx.view()),
            vertex_centered_y(self.state.vely.view()),
        )
    }

    /// Vorticity at the interior mesh vertices
    pub fn vertex_vorticity(&self) -> Array2<f64> {
        let (velx_vc, vely_vc) = self.vertex_centered_velocity();
        vorticity(velx_vc.view(), vely_vc.view(), self.mesh.cell_spacing)
    }

    /// l2 norm of the discrete divergence of the current velocity
    pub fn divergence_norm(&self) -> f64 {
        norm_l2(&divergence(
            self.state.velx.view(),
            self.state.vely.view(),
            self.mesh.cell_spacing,
        ))
    }

    /// Initialize velocity with sinusoidal modes
    ///
    /// vx = amp \* sin(pi m x)cos(pi n y)
    pub fn set_velocity(&mut self, amp: f64, m: f64, n: f64) {
        let (nrows, ncols) = self.state.velx.dim();
        for ((i, j), v) in self.state.velx.indexed_iter_mut() {
            let x = j as f64 / (ncols - 1) as f64;
            let y = i as f64 / (nrows - 1) as f64;
            *v = amp * (PI * m * x).sin() * (PI * n * y).cos();
        }
        let (nrows, ncols) = self.state.vely.dim();
        for ((i, j), v) in self.state.vely.indexed_iter_mut() {
            let x = j as f64 / (ncols - 1) as f64;
            let y = i as f64 / (nrows - 1) as f64;
            *v = -amp * (PI * m * x).cos() * (PI * n * y).sin();
        }
        self.bc.apply_velx(&mut self.state.velx);
        self.bc.apply_vely(&mut self.state.vely);
    }

    /// Add random disturbances to the velocity field
    ///
    /// # Panics
    /// Panics if `amp` is not positive.
    pub fn random_disturbance(&mut self, amp: f64) {
        use ndarray_rand::rand_distr::Uniform;
        use ndarray_rand::RandomExt;
        let noise = Array2::random(self.state.velx.raw_dim(), Uniform::new(-amp, amp));
        self.state.velx += &noise;
        let noise = Array2::random(self.state.vely.raw_dim(), Uniform::new(-amp, amp));
        self.state.vely += &noise;
        self.bc.apply_velx(&mut self.state.velx);
        self.bc.apply_vely(&mut self.state.vely);
    }

    /// Reset time
    pub fn reset_time(&mut self) {
        self.time = 0.;
        self.timestep = 0;
    }
}

impl Integrate for Channel2D {
    /// Update 1 timestep
    fn update(&mut self) {
        if let Err(e) = self.step() {
            eprintln!("{}", e);
        }
    }

    fn get_time(&self) -> f64 {
        self.time
    }

    fn get_dt(&self) -> f64 {
        self.dt
    }

    fn callback(&mut self) {
        let div = self.divergence_norm();
        let bulk = bulk_velocity(self.state.velx.view());
        println!(
            "time = {:8.4}      |div| = {:4.2e}     bulk = {:5.3e}",
            self.time, div, bulk
        );
        if let Some(d) = self.diagnostics.get_mut("time") {
            d.push(self.time);
        }
        if let Some(d) = self.diagnostics.get_mut("div") {
            d.push(div);
        }
        if let Some(d) = self.diagnostics.get_mut("bulk") {
            d.push(bulk);
        }
    }

    fn exit(&mut self) -> bool {
        self.diverged.is_some()
    }
}
