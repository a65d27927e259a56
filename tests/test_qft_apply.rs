mod common;

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use ndarray::{Array1, Axis};
use num_complex::Complex64;

use common::{assert_state_approx, random_state, ATOL};
use qft_rs::circuit::Circuit;
use qft_rs::{qft, qft_with, rev_qft, rev_qft_with, QftConfig, QftError, Register, Rescale, State};

// ============================================================
// Round trips
// ============================================================

#[test]
fn test_forward_then_inverse_restores_state() {
    for n in 1..=6 {
        let original = random_state(n, 42 + n as u64);
        let mut state = original.clone();

        qft(&mut state, n).unwrap();
        rev_qft(&mut state, n).unwrap();

        assert_state_approx(&state, original.data.as_slice().unwrap());
    }
}

#[test]
fn test_inverse_then_forward_restores_state() {
    for n in 1..=6 {
        let original = random_state(n, 7 * n as u64);
        let mut state = original.clone();

        rev_qft(&mut state, n).unwrap();
        qft(&mut state, n).unwrap();

        assert_abs_diff_eq!(state.fidelity(&original), 1.0, epsilon = ATOL);
        assert_state_approx(&state, original.data.as_slice().unwrap());
    }
}

#[test]
fn test_round_trip_keeps_unnormalized_amplitudes() {
    let data = Array1::from(vec![Complex64::new(3.0, 0.0), Complex64::new(0.0, 0.0)]);
    let mut state = State::from_amplitudes(1, data).unwrap();

    qft(&mut state, 1).unwrap();
    rev_qft(&mut state, 1).unwrap();

    assert_state_approx(&state, &[Complex64::new(3.0, 0.0), Complex64::new(0.0, 0.0)]);

    for n in 1..=4 {
        let mut original = random_state(n, 300 + n as u64);
        original.scale(2.5);
        let mut state = original.clone();

        qft(&mut state, n).unwrap();
        assert_abs_diff_eq!(state.norm(), 2.5, epsilon = ATOL);
        rev_qft(&mut state, n).unwrap();

        assert_state_approx(&state, original.data.as_slice().unwrap());
    }
}

#[test]
fn test_zero_vector_passes_through() {
    let mut state = State::zero_state(2);
    state.scale(0.0);

    qft(&mut state, 2).unwrap();
    rev_qft(&mut state, 2).unwrap();

    assert_eq!(state.norm(), 0.0);
}

#[test]
fn test_reversed_stride_amplitudes() {
    // |11> stored back to front
    let mut data: Array1<Complex64> = (0..4)
        .map(|i| Complex64::new(if i == 0 { 1.0 } else { 0.0 }, 0.0))
        .collect();
    data.invert_axis(Axis(0));
    let mut state = State::from_amplitudes(2, data).unwrap();

    qft(&mut state, 2).unwrap();

    let mut expected = State::basis_state(2, 3);
    qft(&mut expected, 2).unwrap();
    assert_state_approx(&state, expected.data.as_slice().unwrap());

    // the public field can also be swapped for a strided array
    state.data.invert_axis(Axis(0));
    rev_qft(&mut state, 2).unwrap();
    assert!(state.data.is_standard_layout());
}

#[test]
fn test_chaining_returns_same_register() {
    let original = random_state(3, 1);
    let mut state = original.clone();

    let out = qft(&mut state, 3).and_then(|s| rev_qft(s, 3)).unwrap();

    assert_state_approx(out, original.data.as_slice().unwrap());
}

#[test]
fn test_transform_on_leading_qubits_of_wider_register() {
    let original = random_state(4, 99);
    let mut state = original.clone();

    qft(&mut state, 2).unwrap();
    assert!(state.fidelity(&original) < 1.0 - 1e-6);
    rev_qft(&mut state, 2).unwrap();

    assert_state_approx(&state, original.data.as_slice().unwrap());
}

// ============================================================
// Transform values
// ============================================================

#[test]
fn test_zero_state_maps_to_uniform_superposition() {
    let n = 4;
    let mut state = State::zero_state(n);
    qft(&mut state, n).unwrap();

    let amp = 1.0 / (16f64).sqrt();
    for a in state.data.iter() {
        assert!((a - Complex64::new(amp, 0.0)).norm() < ATOL);
    }
}

#[test]
fn test_matches_discrete_fourier_transform() {
    // <y|QFT|x> = exp(2πi·xy/N) / √N
    let n = 3;
    let dim = 1usize << n;
    for x in 0..dim {
        let mut state = State::basis_state(n, x);
        qft(&mut state, n).unwrap();

        let expected: Vec<Complex64> = (0..dim)
            .map(|y| {
                let angle = 2.0 * PI * (x * y) as f64 / dim as f64;
                Complex64::from_polar(1.0 / (dim as f64).sqrt(), angle)
            })
            .collect();
        assert_state_approx(&state, &expected);
    }
}

#[test]
fn test_inverse_matches_conjugate_fourier_transform() {
    let n = 3;
    let dim = 1usize << n;
    for x in 0..dim {
        let mut state = State::basis_state(n, x);
        rev_qft(&mut state, n).unwrap();

        let expected: Vec<Complex64> = (0..dim)
            .map(|y| {
                let angle = -2.0 * PI * (x * y) as f64 / dim as f64;
                Complex64::from_polar(1.0 / (dim as f64).sqrt(), angle)
            })
            .collect();
        assert_state_approx(&state, &expected);
    }
}

#[test]
fn test_single_qubit_is_hadamard() {
    let mut state = State::product_state(&[1]);
    qft(&mut state, 1).unwrap();
    let s = std::f64::consts::FRAC_1_SQRT_2;
    assert_state_approx(&state, &[Complex64::new(s, 0.0), Complex64::new(-s, 0.0)]);
}

// ============================================================
// Rescale modes
// ============================================================

#[test]
fn test_fixed_sqrt_half_rescale_halves_round_trip() {
    let original = random_state(3, 5);
    let mut state = original.clone();
    let config = QftConfig {
        rescale: Rescale::FRAC_1_SQRT_2,
    };

    qft_with(&mut state, 3, &config).unwrap();
    assert_abs_diff_eq!(state.norm(), std::f64::consts::FRAC_1_SQRT_2, epsilon = ATOL);
    rev_qft_with(&mut state, 3, &config).unwrap();

    let halved: Vec<Complex64> = original.data.iter().map(|a| *a * 0.5).collect();
    assert_state_approx(&state, &halved);
}

#[test]
fn test_unit_norm_rescale_fixes_unnormalized_input() {
    let mut state = random_state(2, 11);
    state.scale(3.0);
    let config = QftConfig {
        rescale: Rescale::UnitNorm,
    };

    qft_with(&mut state, 2, &config).unwrap();

    assert_abs_diff_eq!(state.norm(), 1.0, epsilon = ATOL);
}

#[test]
fn test_skip_rescale_preserves_input_norm() {
    let mut state = random_state(2, 12);
    state.scale(2.0);
    let config = QftConfig {
        rescale: Rescale::Skip,
    };
    assert_eq!(config, QftConfig::default());

    qft_with(&mut state, 2, &config).unwrap();

    assert_abs_diff_eq!(state.norm(), 2.0, epsilon = ATOL);
}

// ============================================================
// Errors
// ============================================================

#[test]
fn test_zero_vector_rejected_under_unit_norm() {
    let mut state = State::zero_state(2);
    state.scale(0.0);
    let config = QftConfig {
        rescale: Rescale::UnitNorm,
    };
    assert_eq!(qft_with(&mut state, 2, &config).unwrap_err(), QftError::ZeroNorm);
}

#[test]
fn test_too_many_qubits_leaves_state_untouched() {
    let original = random_state(2, 3);
    let mut state = original.clone();

    let err = qft(&mut state, 3).unwrap_err();

    assert_eq!(err, QftError::WidthMismatch { circuit: 3, register: 2 });
    assert_eq!(state, original);
}

// ============================================================
// Custom registers
// ============================================================

/// Register wrapper that records how many circuits it has executed.
struct CountingRegister {
    inner: State,
    circuits_run: usize,
    gates_run: usize,
}

impl Register for CountingRegister {
    fn num_qubits(&self) -> usize {
        self.inner.num_qubits()
    }

    fn apply_circuit(&mut self, circuit: &Circuit) -> qft_rs::Result<()> {
        self.inner.apply_circuit(circuit)?;
        self.circuits_run += 1;
        self.gates_run += circuit.len();
        Ok(())
    }

    fn amplitudes_mut(&mut self) -> qft_rs::Result<&mut [Complex64]> {
        Register::amplitudes_mut(&mut self.inner)
    }
}

#[test]
fn test_runs_against_any_register() {
    let original = random_state(4, 21);
    let mut reg = CountingRegister {
        inner: original.clone(),
        circuits_run: 0,
        gates_run: 0,
    };

    qft(&mut reg, 4).unwrap();
    rev_qft(&mut reg, 4).unwrap();

    assert_eq!(reg.circuits_run, 2);
    // 4 H + 6 cR + 2 SWAP per direction
    assert_eq!(reg.gates_run, 24);
    assert_state_approx(&reg.inner, original.data.as_slice().unwrap());
}

#[test]
fn test_trait_object_register() {
    let original = random_state(2, 8);
    let mut state = original.clone();
    let reg: &mut dyn Register = &mut state;

    qft(&mut *reg, 2).unwrap();
    rev_qft(reg, 2).unwrap();

    assert_state_approx(&state, original.data.as_slice().unwrap());
}
