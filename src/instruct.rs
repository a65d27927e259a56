//! Primitive amplitude operations for state vector simulation.
//!
//! These functions directly manipulate amplitudes of an `n`-qubit state vector
//! in place. Controls are active-high: a gate fires only on basis states where
//! every control qubit is |1⟩.

use ndarray::Array2;
use num_complex::Complex64;

use crate::index::{iter_ones, qubit_mask};

/// Apply a 2x2 unitary gate to a pair of amplitudes at indices i and j.
///
/// The gate matrix is [[a, b], [c, d]] and transforms:
/// - new_i = a * state[i] + b * state[j]
/// - new_j = c * state[i] + d * state[j]
///
/// # Example
/// ```
/// use ndarray::Array2;
/// use num_complex::Complex64;
/// use qft_rs::instruct::u1rows;
///
/// let mut state = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// let x_gate = Array2::from_shape_vec((2, 2), vec![
///     Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0),
///     Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0),
/// ]).unwrap();
/// u1rows(&mut state, 0, 1, &x_gate);
/// assert!((state[1].norm() - 1.0).abs() < 1e-10);
/// ```
pub fn u1rows(state: &mut [Complex64], i: usize, j: usize, gate: &Array2<Complex64>) {
    debug_assert_eq!(gate.nrows(), 2);
    debug_assert_eq!(gate.ncols(), 2);

    let old_i = state[i];
    let old_j = state[j];

    state[i] = gate[[0, 0]] * old_i + gate[[0, 1]] * old_j;
    state[j] = gate[[1, 0]] * old_i + gate[[1, 1]] * old_j;
}

/// Multiply an amplitude at index i by a scalar factor.
pub fn mulrow(state: &mut [Complex64], i: usize, factor: Complex64) {
    state[i] *= factor;
}

/// Apply a 2x2 gate on qubit `loc`, optionally controlled.
///
/// For every basis index with `loc` = 0 (and all controls = 1), the pair
/// (index, index | mask(loc)) is rotated with [`u1rows`].
pub fn instruct_single(
    state: &mut [Complex64],
    n: usize,
    gate: &Array2<Complex64>,
    loc: usize,
    controls: &[usize],
) {
    debug_assert_eq!(state.len(), 1 << n);
    let mask = qubit_mask(loc, n);
    let pairs: Vec<usize> = iter_ones(n, controls).filter(|&i| i & mask == 0).collect();
    for i in pairs {
        u1rows(state, i, i | mask, gate);
    }
}

/// Apply diag(1, phase) on qubit `loc`, optionally controlled.
///
/// Only amplitudes where `loc` and every control are |1⟩ change.
///
/// # Example
/// ```
/// use num_complex::Complex64;
/// use qft_rs::instruct::instruct_diagonal;
///
/// // controlled-Z on |11>
/// let mut state = vec![Complex64::new(0.5, 0.0); 4];
/// instruct_diagonal(&mut state, 2, Complex64::new(-1.0, 0.0), 1, &[0]);
/// assert_eq!(state[3], Complex64::new(-0.5, 0.0));
/// assert_eq!(state[1], Complex64::new(0.5, 0.0));
/// ```
pub fn instruct_diagonal(
    state: &mut [Complex64],
    n: usize,
    phase: Complex64,
    loc: usize,
    controls: &[usize],
) {
    debug_assert_eq!(state.len(), 1 << n);
    let mut locs = controls.to_vec();
    locs.push(loc);
    let indices: Vec<usize> = iter_ones(n, &locs).collect();
    for i in indices {
        mulrow(state, i, phase);
    }
}

/// Exchange qubits `a` and `b`, optionally controlled.
pub fn instruct_swap(state: &mut [Complex64], n: usize, a: usize, b: usize, controls: &[usize]) {
    debug_assert_eq!(state.len(), 1 << n);
    let mask_a = qubit_mask(a, n);
    let mask_b = qubit_mask(b, n);
    // each |..1..0..> pairs with exactly one |..0..1..>
    let indices: Vec<usize> = iter_ones(n, controls)
        .filter(|&i| i & mask_a != 0 && i & mask_b == 0)
        .collect();
    for i in indices {
        state.swap(i, i ^ mask_a ^ mask_b);
    }
}
