//! Run parameters of a channel flow simulation
use crate::error::{Error, Result};

/// Scalar configuration of a simulation run, validated before the
/// time loop starts.
///
/// The defaults reproduce the reference open-channel case: a pipe of
/// aspect ratio 10 at 15 cross-section points, unit inflow, 5000 steps.
#[derive(Clone, Debug)]
pub struct Parameters {
    /// Number of points across the channel (>= 2)
    pub n_points_y: usize,
    /// Length-to-height ratio of the channel (>= 1)
    pub aspect_ratio: usize,
    /// Kinematic viscosity (> 0)
    pub nu: f64,
    /// Time step length (> 0)
    pub dt: f64,
    /// Total number of time steps
    pub n_steps: usize,
    /// Snapshot interval in steps (>= 1)
    pub snapshot_every: usize,
    /// Number of pressure poisson relaxation sweeps (>= 1)
    pub n_poisson: usize,
    /// Inflow speed at the inlet column
    pub inflow_velocity: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            n_points_y: 15,
            aspect_ratio: 10,
            nu: 0.01,
            dt: 0.001,
            n_steps: 5000,
            snapshot_every: 50,
            n_poisson: 50,
            inflow_velocity: 1.0,
        }
    }
}

impl Parameters {
    /// Check all scalar bounds.
    ///
    /// # Errors
    /// `InvalidGeometry` for malformed grid parameters,
    /// `InvalidParameter` for the remaining bounds.
    pub fn validate(&self) -> Result<()> {
        if self.n_points_y < 2 {
            return Err(Error::InvalidGeometry(format!(
                "need at least 2 points across the channel, got {}",
                self.n_points_y
            )));
        }
        if self.aspect_ratio < 1 {
            return Err(Error::InvalidGeometry(format!(
                "aspect ratio must be at least 1, got {}",
                self.aspect_ratio
            )));
        }
        if !(self.nu > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "kinematic viscosity must be positive, got {}",
                self.nu
            )));
        }
        if !(self.dt > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "time step length must be positive, got {}",
                self.dt
            )));
        }
        if self.snapshot_every < 1 {
            return Err(Error::InvalidParameter(
                "snapshot interval must be at least 1 step".to_string(),
            ));
        }
        if self.n_poisson < 1 {
            return Err(Error::InvalidParameter(
                "poisson sweep count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Physical end time of the run
    pub fn max_time(&self) -> f64 {
        self.n_steps as f64 * self.dt
    }

    /// Physical interval between snapshots
    pub fn snapshot_interval(&self) -> f64 {
        self.snapshot_every as f64 * self.dt
    }
}
