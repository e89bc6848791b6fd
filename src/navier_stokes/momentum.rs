//! Finite-difference terms of the momentum and pressure equations
//!
//! All operators act on the interior cells of the staggered arrays and
//! return freshly allocated arrays of interior shape; ghost values are
//! only ever read, never written. Forward-time, central-space
//! discretization throughout.
use ndarray::{s, Array2, ArrayView2};

/// Fluid density (incompressible, constant)
pub const DENSITY: f64 = 1.0;

/// Diffusion term: 5-point Laplacian of `v` scaled by the viscosity
/// $$
/// nu (v\[i+1,j\] + v\[i-1,j\] + v\[i,j+1\] + v\[i,j-1\] - 4 v\[i,j\]) / h^2
/// $$
pub fn diffusion(v: ArrayView2<f64>, cell_spacing: f64, nu: f64) -> Array2<f64> {
    let mut lap = v.slice(s![1..-1, 2..]).to_owned();
    lap += &v.slice(s![2.., 1..-1]);
    lap += &v.slice(s![1..-1, ..-2]);
    lap += &v.slice(s![..-2, 1..-1]);
    lap -= &v.slice(s![1..-1, 1..-1]).mapv(|c| 4.0 * c);
    lap *= nu / (cell_spacing * cell_spacing);
    lap
}

/// Convection term of the x-momentum equation
///
/// Conservative central difference of the squared x-velocity plus the
/// cross term `vy * dvx/dy`, with the transverse velocity interpolated
/// from its four surrounding staggered nodes.
pub fn convection_x(
    velx: ArrayView2<f64>,
    vely: ArrayView2<f64>,
    cell_spacing: f64,
) -> Array2<f64> {
    // d(vx^2)/dx
    let mut du2dx = velx.slice(s![1..-1, 2..]).mapv(|c| c * c);
    du2dx -= &velx.slice(s![1..-1, ..-2]).mapv(|c| c * c);
    du2dx /= 2.0 * cell_spacing;
    // vy interpolated onto the vx nodes
    let mut vely_avg = vely.slice(s![1.., 1..-2]).to_owned();
    vely_avg += &vely.slice(s![1.., 2..-1]);
    vely_avg += &vely.slice(s![..-1, 1..-2]);
    vely_avg += &vely.slice(s![..-1, 2..-1]);
    vely_avg /= 4.0;
    // dvx/dy
    let mut dudy = velx.slice(s![2.., 1..-1]).to_owned();
    dudy -= &velx.slice(s![..-2, 1..-1]);
    dudy /= 2.0 * cell_spacing;
    du2dx + vely_avg * dudy
}

/// Convection term of the y-momentum equation
///
/// Cross term `vx * dvy/dx` with interpolated axial velocity plus the
/// conservative central difference of the squared y-velocity.
pub fn convection_y(
    velx: ArrayView2<f64>,
    vely: ArrayView2<f64>,
    cell_spacing: f64,
) -> Array2<f64> {
    // vx interpolated onto the vy nodes
    let mut velx_avg = velx.slice(s![2..-1, 1..]).to_owned();
    velx_avg += &velx.slice(s![2..-1, ..-1]);
    velx_avg += &velx.slice(s![1..-2, 1..]);
    velx_avg += &velx.slice(s![1..-2, ..-1]);
    velx_avg /= 4.0;
    // dvy/dx
    let mut dvdx = vely.slice(s![1..-1, 2..]).to_owned();
    dvdx -= &vely.slice(s![1..-1, ..-2]);
    dvdx /= 2.0 * cell_spacing;
    // d(vy^2)/dy
    let mut dv2dy = vely.slice(s![2.., 1..-1]).mapv(|c| c * c);
    dv2dy -= &vely.slice(s![..-2, 1..-1]).mapv(|c| c * c);
    dv2dy /= 2.0 * cell_spacing;
    velx_avg * dvdx + dv2dy
}

/// Axial pressure gradient at the interior x-velocity nodes
pub fn pressure_gradient_x(pres: ArrayView2<f64>, cell_spacing: f64) -> Array2<f64> {
    let mut dpdx = pres.slice(s![1..-1, 2..-1]).to_owned();
    dpdx -= &pres.slice(s![1..-1, 1..-2]);
    dpdx /= cell_spacing;
    dpdx
}

/// Cross-section pressure gradient at the interior y-velocity nodes
pub fn pressure_gradient_y(pres: ArrayView2<f64>, cell_spacing: f64) -> Array2<f64> {
    let mut dpdy = pres.slice(s![2..-1, 1..-1]).to_owned();
    dpdy -= &pres.slice(s![1..-2, 1..-1]);
    dpdy /= cell_spacing;
    dpdy
}

/// Tentative x-velocity from the momentum predictor
/// $$
/// v\* = v + dt (-dp/dx + diffusion - convection)
/// $$
/// Interior cells only; the caller applies the boundary policy.
pub fn tentative_velocity_x(
    velx: ArrayView2<f64>,
    vely: ArrayView2<f64>,
    pres: ArrayView2<f64>,
    cell_spacing: f64,
    nu: f64,
    dt: f64,
) -> Array2<f64> {
    let mut incr = diffusion(velx, cell_spacing, nu);
    incr -= &convection_x(velx, vely, cell_spacing);
    incr -= &pressure_gradient_x(pres, cell_spacing);
    incr *= dt;
    let mut tent = velx.to_owned();
    let mut interior = tent.slice_mut(s![1..-1, 1..-1]);
    interior += &incr;
    tent
}

/// Tentative y-velocity from the momentum predictor
pub fn tentative_velocity_y(
    velx: ArrayView2<f64>,
    vely: ArrayView2<f64>,
    pres: ArrayView2<f64>,
    cell_spacing: f64,
    nu: f64,
    dt: f64,
) -> Array2<f64> {
    let mut incr = diffusion(vely, cell_spacing, nu);
    incr -= &convection_y(velx, vely, cell_spacing);
    incr -= &pressure_gradient_y(pres, cell_spacing);
    incr *= dt;
    let mut tent = vely.to_owned();
    let mut interior = tent.slice_mut(s![1..-1, 1..-1]);
    interior += &incr;
    tent
}

/// Discrete divergence of the tentative velocity at the interior
/// pressure cells
pub fn divergence(
    velx: ArrayView2<f64>,
    vely: ArrayView2<f64>,
    cell_spacing: f64,
) -> Array2<f64> {
    let mut div = velx.slice(s![1..-1, 1..]).to_owned();
    div -= &velx.slice(s![1..-1, ..-1]);
    div += &vely.slice(s![1.., 1..-1]);
    div -= &vely.slice(s![..-1, 1..-1]);
    div /= cell_spacing;
    div
}

/// Corrected x-velocity: tentative velocity re-projected with the
/// pressure-correction gradient, interior cells only
pub fn corrected_velocity_x(
    velx_tent: ArrayView2<f64>,
    corr: ArrayView2<f64>,
    cell_spacing: f64,
    dt: f64,
) -> Array2<f64> {
    let mut grad = pressure_gradient_x(corr, cell_spacing);
    grad *= dt;
    let mut next = velx_tent.to_owned();
    let mut interior = next.slice_mut(s![1..-1, 1..-1]);
    interior -= &grad;
    next
}

/// Corrected y-velocity, interior cells only
pub fn corrected_velocity_y(
    vely_tent: ArrayView2<f64>,
    corr: ArrayView2<f64>,
    cell_spacing: f64,
    dt: f64,
) -> Array2<f64> {
    let mut grad = pressure_gradient_y(corr, cell_spacing);
    grad *= dt;
    let mut next = vely_tent.to_owned();
    let mut interior = next.slice_mut(s![1..-1, 1..-1]);
    interior -= &grad;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_uniform_field_has_no_forcing() {
        let velx = Array2::from_elem((6, 9), 0.8);
        let vely = Array2::from_elem((5, 10), 0.3);
        let pres = Array2::from_elem((6, 10), 2.0);
        let diff = diffusion(velx.view(), 0.25, 0.01);
        assert!(diff.iter().all(|&v| v.abs() < 1e-14));
        let conv = convection_x(velx.view(), vely.view(), 0.25);
        assert!(conv.iter().all(|&v| v.abs() < 1e-14));
        let conv = convection_y(velx.view(), vely.view(), 0.25);
        assert!(conv.iter().all(|&v| v.abs() < 1e-14));
        let dpdx = pressure_gradient_x(pres.view(), 0.25);
        assert!(dpdx.iter().all(|&v| v.abs() < 1e-14));

        let tent = tentative_velocity_x(velx.view(), vely.view(), pres.view(), 0.25, 0.01, 0.001);
        for (a, b) in tent.iter().zip(velx.iter()) {
            assert!((a - b).abs() < 1e-14);
        }
    }

    #[test]
    fn test_interior_shapes() {
        let velx = Array2::zeros((6, 9));
        let vely = Array2::zeros((5, 10));
        let pres = Array2::zeros((6, 10));
        assert_eq!(diffusion(velx.view(), 0.25, 1.0).dim(), (4, 7));
        assert_eq!(convection_x(velx.view(), vely.view(), 0.25).dim(), (4, 7));
        assert_eq!(convection_y(velx.view(), vely.view(), 0.25).dim(), (3, 8));
        assert_eq!(pressure_gradient_x(pres.view(), 0.25).dim(), (4, 7));
        assert_eq!(pressure_gradient_y(pres.view(), 0.25).dim(), (3, 8));
        assert_eq!(divergence(velx.view(), vely.view(), 0.25).dim(), (4, 8));
    }

    #[test]
    fn test_divergence_of_uniform_flow_is_zero() {
        let velx = Array2::from_elem((6, 9), 1.0);
        let vely = Array2::zeros((5, 10));
        let div = divergence(velx.view(), vely.view(), 0.25);
        assert!(div.iter().all(|&v| v.abs() < 1e-14));
    }

    #[test]
    fn test_diffusion_of_linear_profile_is_zero() {
        // A profile linear in y has a vanishing Laplacian
        let mut velx = Array2::zeros((6, 9));
        for ((i, _), v) in velx.indexed_iter_mut() {
            *v = 2.0 * i as f64;
        }
        let diff = diffusion(velx.view(), 0.25, 0.01);
        assert!(diff.iter().all(|&v| v.abs() < 1e-12));
    }

    #[test]
    fn test_pressure_gradient_of_linear_ramp() {
        // p = x  =>  dp/dx = 1
        let mut pres = Array2::zeros((6, 10));
        let h = 0.25;
        for ((_, j), p) in pres.indexed_iter_mut() {
            *p = h * j as f64;
        }
        let dpdx = pressure_gradient_x(pres.view(), h);
        assert!(dpdx.iter().all(|&v| (v - 1.0).abs() < 1e-12));
        let dpdy = pressure_gradient_y(pres.view(), h);
        assert!(dpdy.iter().all(|&v| v.abs() < 1e-12));
    }
}
