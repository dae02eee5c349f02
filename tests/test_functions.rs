#[path = "../benches/test_functions.rs"]
mod test_functions;

use test_functions::*;

const TOL: f64 = 1e-10;

#[test]
fn sphere_at_optimum() {
    assert!(sphere(&[0.0, 0.0]).abs() < TOL);
    assert!(sphere(&[0.0; 10]).abs() < TOL);
}

#[test]
fn rosenbrock_at_optimum() {
    assert!(rosenbrock(&[1.0, 1.0]).abs() < TOL);
    assert!(rosenbrock(&[1.0; 5]).abs() < TOL);
}

#[test]
fn rastrigin_at_optimum() {
    assert!(rastrigin(&[0.0, 0.0]).abs() < TOL);
    assert!(rastrigin(&[0.0; 10]).abs() < TOL);
}
