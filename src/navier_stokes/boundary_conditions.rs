//! Collection of boundary conditions
//!
//! Boundary values are encoded in the ghost layers of the staggered
//! arrays, so every stage that produces a new field re-applies its policy
//! before the field is read again. All rules are total: they always
//! succeed on well-formed arrays and are idempotent.
use enum_dispatch::enum_dispatch;
use ndarray::{s, Array2};

/// Boundary treatment of the velocity components and of the transient
/// pressure-correction field.
///
/// Wall rules are shared between the variants: the x-velocity ghost rows
/// are the negated mirror of the first interior row (no-slip), the
/// y-velocity wall rows are fixed to zero and the correction field has a
/// zero gradient across the walls.
#[enum_dispatch]
pub trait BoundaryConditions {
    /// Apply the policy to a staggered x-velocity array
    fn apply_velx(&self, velx: &mut Array2<f64>);
    /// Apply the policy to a staggered y-velocity array
    fn apply_vely(&self, vely: &mut Array2<f64>);
    /// Apply the homogeneous rules to a pressure-correction array
    fn apply_pres_corr(&self, corr: &mut Array2<f64>);
}

/// Boundary condition policy of a channel solver
#[enum_dispatch(BoundaryConditions)]
#[derive(Clone, Debug)]
pub enum BcPolicy {
    /// Fixed inflow, mass-balanced outflow
    OpenChannel,
    /// Periodic axial direction
    PeriodicChannel,
}

/// Open channel: fixed inflow at the inlet column, outflow copied from the
/// last interior column and rescaled so that the total outflow mass rate
/// matches the total inflow mass rate.
#[derive(Clone, Debug)]
pub struct OpenChannel {
    /// Inflow speed applied to the inlet column
    pub inflow_velocity: f64,
}

impl BoundaryConditions for OpenChannel {
    fn apply_velx(&self, velx: &mut Array2<f64>) {
        // Inlet column is fixed
        velx.slice_mut(s![1..-1, 0]).fill(self.inflow_velocity);
        // Outflow column copies the last interior column, rescaled to
        // balance the inflow mass rate. A zero outflow sum leaves the
        // copy unscaled; the ratio is undefined there and the zero field
        // must remain a fixed point of the policy.
        let outlet = velx.slice(s![1..-1, -2]).to_owned();
        let inflow_mass_rate: f64 = velx.slice(s![1..-1, 0]).sum();
        let outflow_mass_rate: f64 = outlet.sum();
        if outflow_mass_rate != 0.0 {
            let mrr = inflow_mass_rate / outflow_mass_rate;
            velx.slice_mut(s![1..-1, -1]).assign(&outlet.mapv(|v| v * mrr));
        } else {
            velx.slice_mut(s![1..-1, -1]).assign(&outlet);
        }
        // No-slip walls via ghost reflection
        let mirror = velx.slice(s![1, ..]).mapv(|v| -v);
        velx.slice_mut(s![0, ..]).assign(&mirror);
        let mirror = velx.slice(s![-2, ..]).mapv(|v| -v);
        velx.slice_mut(s![-1, ..]).assign(&mirror);
    }

    fn apply_vely(&self, vely: &mut Array2<f64>) {
        // Outlet ghost column copies the last interior column; the inlet
        // ghost column is its antisymmetric mirror. Outlet first, so the
        // mirror reads the updated value and the policy is idempotent.
        let outlet = vely.slice(s![1..-1, -2]).to_owned();
        vely.slice_mut(s![1..-1, -1]).assign(&outlet);
        vely.slice_mut(s![1..-1, 0]).assign(&outlet.mapv(|v| -v));
        // Walls are impermeable
        vely.slice_mut(s![0, ..]).fill(0.0);
        vely.slice_mut(s![-1, ..]).fill(0.0);
    }

    fn apply_pres_corr(&self, corr: &mut Array2<f64>) {
        // Even mirror at the inlet, odd mirror at the outlet
        let inlet = corr.slice(s![1..-1, 1]).to_owned();
        corr.slice_mut(s![1..-1, 0]).assign(&inlet);
        let outlet = corr.slice(s![1..-1, -2]).mapv(|p| -p);
        corr.slice_mut(s![1..-1, -1]).assign(&outlet);
        // Zero gradient across the walls
        let wall = corr.slice(s![1, ..]).to_owned();
        corr.slice_mut(s![0, ..]).assign(&wall);
        let wall = corr.slice(s![-2, ..]).to_owned();
        corr.slice_mut(s![-1, ..]).assign(&wall);
    }
}

/// Periodic channel: the axial ghost columns of all fields wrap around,
/// walls are treated as in the open channel.
#[derive(Clone, Debug)]
pub struct PeriodicChannel;

impl PeriodicChannel {
    fn wrap_columns(field: &mut Array2<f64>) {
        let head = field.slice(s![1..-1, -2]).to_owned();
        field.slice_mut(s![1..-1, 0]).assign(&head);
        let tail = field.slice(s![1..-1, 1]).to_owned();
        field.slice_mut(s![1..-1, -1]).assign(&tail);
    }
}

impl BoundaryConditions for PeriodicChannel {
    fn apply_velx(&self, velx: &mut Array2<f64>) {
        Self::wrap_columns(velx);
        let mirror = velx.slice(s![1, ..]).mapv(|v| -v);
        velx.slice_mut(s![0, ..]).assign(&mirror);
        let mirror = velx.slice(s![-2, ..]).mapv(|v| -v);
        velx.slice_mut(s![-1, ..]).assign(&mirror);
    }

    fn apply_vely(&self, vely: &mut Array2<f64>) {
        Self::wrap_columns(vely);
        vely.slice_mut(s![0, ..]).fill(0.0);
        vely.slice_mut(s![-1, ..]).fill(0.0);
    }

    fn apply_pres_corr(&self, corr: &mut Array2<f64>) {
        Self::wrap_columns(corr);
        let wall = corr.slice(s![1, ..]).to_owned();
        corr.slice_mut(s![0, ..]).assign(&wall);
        let wall = corr.slice(s![-2, ..]).to_owned();
        corr.slice_mut(s![-1, ..]).assign(&wall);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn open_channel() -> BcPolicy {
        BcPolicy::OpenChannel(OpenChannel {
            inflow_velocity: 1.0,
        })
    }

    /// Deterministic non-trivial test field
    fn test_field(shape: (usize, usize)) -> Array2<f64> {
        let mut field = Array2::zeros(shape);
        for ((i, j), v) in field.indexed_iter_mut() {
            *v = 1.0 + (0.7 * i as f64).sin() * (0.3 * j as f64).cos() * 0.5;
        }
        field
    }

    #[test]
    fn test_wall_no_slip_mirror() {
        let bc = open_channel();
        let mut velx = test_field((6, 9));
        bc.apply_velx(&mut velx);
        for j in 0..9 {
            assert_eq!(velx[[0, j]], -velx[[1, j]]);
            assert_eq!(velx[[5, j]], -velx[[4, j]]);
        }
    }

    #[test]
    fn test_mass_conservation_exact() {
        let bc = open_channel();
        let mut velx = test_field((6, 9));
        bc.apply_velx(&mut velx);
        let inflow: f64 = velx.slice(s![1..-1, 0]).sum();
        let outflow: f64 = velx.slice(s![1..-1, -1]).sum();
        assert!((inflow - outflow).abs() < 1e-12);
    }

    #[test]
    fn test_zero_field_is_a_fixed_point() {
        let bc = BcPolicy::OpenChannel(OpenChannel {
            inflow_velocity: 0.0,
        });
        let mut velx = Array2::zeros((6, 9));
        bc.apply_velx(&mut velx);
        assert!(velx.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_vely_antisymmetric_inlet() {
        let bc = open_channel();
        let mut vely = test_field((5, 10));
        bc.apply_vely(&mut vely);
        for i in 1..4 {
            assert_eq!(vely[[i, 0]], -vely[[i, 9]]);
            assert_eq!(vely[[i, 9]], vely[[i, 8]]);
        }
        for j in 0..10 {
            assert_eq!(vely[[0, j]], 0.0);
            assert_eq!(vely[[4, j]], 0.0);
        }
    }

    #[test]
    fn test_pres_corr_homogeneous_rules() {
        let bc = open_channel();
        let mut corr = test_field((6, 10));
        bc.apply_pres_corr(&mut corr);
        for i in 1..5 {
            assert_eq!(corr[[i, 0]], corr[[i, 1]]);
            assert_eq!(corr[[i, 9]], -corr[[i, 8]]);
        }
        for j in 0..10 {
            assert_eq!(corr[[0, j]], corr[[1, j]]);
            assert_eq!(corr[[5, j]], corr[[4, j]]);
        }
    }

    #[test]
    fn test_application_is_idempotent() {
        for bc in [open_channel(), BcPolicy::PeriodicChannel(PeriodicChannel)].iter() {
            let mut once = test_field((6, 9));
            bc.apply_velx(&mut once);
            let mut twice = once.clone();
            bc.apply_velx(&mut twice);
            assert_eq!(once, twice);

            let mut once = test_field((5, 10));
            bc.apply_vely(&mut once);
            let mut twice = once.clone();
            bc.apply_vely(&mut twice);
            assert_eq!(once, twice);

            let mut once = test_field((6, 10));
            bc.apply_pres_corr(&mut once);
            let mut twice = once.clone();
            bc.apply_pres_corr(&mut twice);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_periodic_wrap() {
        let bc = BcPolicy::PeriodicChannel(PeriodicChannel);
        let mut velx = test_field((6, 9));
        bc.apply_velx(&mut velx);
        for i in 1..5 {
            assert_eq!(velx[[i, 0]], velx[[i, 7]]);
            assert_eq!(velx[[i, 8]], velx[[i, 1]]);
        }
        let mut corr = test_field((6, 10));
        bc.apply_pres_corr(&mut corr);
        for i in 1..5 {
            assert_eq!(corr[[i, 0]], corr[[i, 8]]);
            assert_eq!(corr[[i, 9]], corr[[i, 1]]);
        }
    }
}
