//! Jacobi relaxation of the discrete Poisson equation
use ndarray::{s, Array2};

/// Fixed-budget Jacobi relaxation.
///
/// Each sweep replaces every interior cell with the average of its four
/// neighbors in the previous iterate minus `h^2 * rhs / 4`, then re-applies
/// the homogeneous boundary rules so that the ghost values feed into the
/// next sweep. The iteration is stationary: identical inputs and sweep
/// count produce identical output.
///
/// The solver always runs exactly `n_sweeps` sweeps and carries no
/// convergence check; the sweep budget is never validated against the grid
/// resolution, so an under-resolved relaxation leaves a residual divergence
/// that is not reported. Setting `residual_tol` enables an early stop on
/// the max-norm of the between-sweep update; this is a deviation from the
/// fixed-budget contract and is off by default.
#[derive(Clone, Debug)]
pub struct Jacobi {
    /// Number of relaxation sweeps per solve
    pub n_sweeps: usize,
    /// Optional early-stop tolerance on the between-sweep update
    pub residual_tol: Option<f64>,
}

impl Jacobi {
    /// Create a solver with a fixed sweep budget and no early stop
    pub fn new(n_sweeps: usize) -> Self {
        Jacobi {
            n_sweeps,
            residual_tol: None,
        }
    }

    /// Relax `correction` towards the solution of the Poisson equation
    /// with right hand side `rhs`.
    ///
    /// `rhs` holds interior cells only; `correction` carries one ghost
    /// layer per side and is updated in place. `apply_bc` is invoked on
    /// the new iterate after every single sweep.
    pub fn solve<F>(
        &self,
        rhs: &Array2<f64>,
        correction: &mut Array2<f64>,
        cell_spacing: f64,
        apply_bc: F,
    ) where
        F: Fn(&mut Array2<f64>),
    {
        let h2 = cell_spacing * cell_spacing;
        for _ in 0..self.n_sweeps {
            let prev = correction.to_owned();
            let mut next = Array2::zeros(prev.raw_dim());
            {
                let mut interior = next.slice_mut(s![1..-1, 1..-1]);
                interior.assign(&prev.slice(s![1..-1, 2..]));
                interior += &prev.slice(s![2.., 1..-1]);
                interior += &prev.slice(s![1..-1, ..-2]);
                interior += &prev.slice(s![..-2, 1..-1]);
                interior -= &rhs.mapv(|r| h2 * r);
                interior *= 0.25;
            }
            apply_bc(&mut next);
            if let Some(tol) = self.residual_tol {
                let delta = next
                    .iter()
                    .zip(prev.iter())
                    .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()));
                *correction = next;
                if delta <= tol {
                    break;
                }
            } else {
                *correction = next;
            }
        }
    }
}
