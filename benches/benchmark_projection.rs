use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use pipeflow::navier_stokes::Channel2D;
use pipeflow::navier_stokes::boundary_conditions::{BcPolicy, BoundaryConditions, OpenChannel};
use pipeflow::params::Parameters;
use pipeflow::solver::Jacobi;

pub fn bench_projection_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel2d");
    for n_points_y in [15, 33].iter() {
        let params = Parameters {
            n_points_y: *n_points_y,
            aspect_ratio: 4,
            ..Parameters::default()
        };
        let mut navier = Channel2D::new_open_channel(&params).unwrap();
        let name = format!("step_{}", *n_points_y);
        group.bench_function(name, |b| {
            b.iter(|| {
                navier.step().unwrap();
            })
        });
    }
    group.finish();
}

pub fn bench_jacobi_relaxation(c: &mut Criterion) {
    let (ny, nx) = (33, 129);
    let h = 1.0 / (ny - 1) as f64;
    let mut rhs = Array2::zeros((ny - 1, nx - 1));
    for ((i, j), r) in rhs.indexed_iter_mut() {
        *r = (0.1 * i as f64).sin() * (0.05 * j as f64).cos();
    }
    let bc = BcPolicy::OpenChannel(OpenChannel {
        inflow_velocity: 1.0,
    });
    let solver = Jacobi::new(50);
    c.bench_function("jacobi_50_sweeps", |b| {
        b.iter(|| {
            let mut corr = Array2::zeros((ny + 1, nx + 1));
            solver.solve(&rhs, &mut corr, h, |f| bc.apply_pres_corr(f));
            corr
        })
    });
}

criterion_group!(benches, bench_projection_step, bench_jacobi_relaxation);
criterion_main!(benches);
