//! Shared test utilities for qft-rs integration tests.

use ndarray::Array1;
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use qft_rs::state::State;

#[allow(dead_code)]
pub const ATOL: f64 = 1e-10;

/// Random unit-norm state on `n` qubits, reproducible from `seed`.
#[allow(dead_code)]
pub fn random_state(n: usize, seed: u64) -> State {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Array1<Complex64> = (0..1usize << n)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let mut state = State::from_amplitudes(n, data).unwrap();
    state.normalize().unwrap();
    state
}

#[allow(dead_code)]
pub fn assert_state_approx(result: &State, expected: &[Complex64]) {
    assert_eq!(result.data.len(), expected.len());
    for (i, (r, e)) in result.data.iter().zip(expected.iter()).enumerate() {
        assert!(
            (r - e).norm() < ATOL,
            "State mismatch at index {}: got {:?}, expected {:?}",
            i,
            r,
            e
        );
    }
}
