//! Some useful post-processing functions
use ndarray::{s, Array2, ArrayBase, ArrayView2, Data, Dimension};
use num_traits::Float;

/// Return l2 norm of an array
pub fn norm_l2<A, S, D>(array: &ArrayBase<S, D>) -> A
where
    A: Float,
    S: Data<Elem = A>,
    D: Dimension,
{
    array.iter().fold(A::zero(), |acc, &x| acc + x * x).sqrt()
}

/// Interpolate the staggered x-velocity onto the mesh vertices
pub fn vertex_centered_x(velx: ArrayView2<f64>) -> Array2<f64> {
    let mut vc = velx.slice(s![1.., ..]).to_owned();
    vc += &velx.slice(s![..-1, ..]);
    vc /= 2.0;
    vc
}

/// Interpolate the staggered y-velocity onto the mesh vertices
pub fn vertex_centered_y(vely: ArrayView2<f64>) -> Array2<f64> {
    let mut vc = vely.slice(s![.., 1..]).to_owned();
    vc += &vely.slice(s![.., ..-1]);
    vc /= 2.0;
    vc
}

/// Vorticity `dvy/dx - dvx/dy` at the interior mesh vertices, computed
/// from the vertex-centered velocity components
pub fn vorticity(
    velx_vc: ArrayView2<f64>,
    vely_vc: ArrayView2<f64>,
    cell_spacing: f64,
) -> Array2<f64> {
    let mut omega = vely_vc.slice(s![1..-1, 2..]).to_owned();
    omega -= &vely_vc.slice(s![1..-1, ..-2]);
    omega -= &velx_vc.slice(s![2.., 1..-1]);
    omega += &velx_vc.slice(s![..-2, 1..-1]);
    omega /= 2.0 * cell_spacing;
    omega
}

/// Mean axial velocity over the interior x-velocity cells
pub fn bulk_velocity(velx: ArrayView2<f64>) -> f64 {
    let interior = velx.slice(s![1..-1, ..]);
    interior.sum() / interior.len() as f64
}
