use ndarray::Array1;
use num_complex::Complex64;

use crate::error::{QftError, Result};
use crate::index::basis_index;

/// Dense state vector of an `nqubits`-qubit register.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub nqubits: usize,
    pub data: Array1<Complex64>,
}

impl State {
    /// Creates |0,0,...,0> state (first basis element = 1, rest = 0)
    pub fn zero_state(nqubits: usize) -> Self {
        State::basis_state(nqubits, 0)
    }

    /// Creates the computational basis state with flat index `index`.
    ///
    /// # Panics
    /// Panics if `index >= 2^nqubits`.
    pub fn basis_state(nqubits: usize, index: usize) -> Self {
        let total = 1usize << nqubits;
        assert!(index < total, "basis index {} out of range for {} qubits", index, nqubits);
        let mut data = Array1::zeros(total);
        data[index] = Complex64::new(1.0, 0.0);
        State { nqubits, data }
    }

    /// Creates |b_0, b_1, ..., b_{n-1}> with qubit 0 as the most significant bit.
    pub fn product_state(bits: &[usize]) -> Self {
        State::basis_state(bits.len(), basis_index(bits))
    }

    /// Wraps an existing amplitude vector. Its length must be `2^nqubits`.
    ///
    /// Arrays with non-standard strides (e.g. after `invert_axis`) are copied
    /// into standard layout.
    pub fn from_amplitudes(nqubits: usize, data: Array1<Complex64>) -> Result<Self> {
        let expected = 1usize << nqubits;
        if data.len() != expected {
            return Err(QftError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(State { nqubits, data })
    }

    /// L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Amplitudes as a contiguous slice, re-laid out first if needed.
    pub fn amplitudes_mut(&mut self) -> Result<&mut [Complex64]> {
        if !self.data.is_standard_layout() {
            self.data = self.data.as_standard_layout().into_owned();
        }
        self.data.as_slice_mut().ok_or(QftError::NonContiguous)
    }

    /// Length of the data vector
    pub fn total_dim(&self) -> usize {
        self.data.len()
    }

    /// Multiply every amplitude by a real factor, in place.
    pub fn scale(&mut self, factor: f64) {
        self.data.mapv_inplace(|a| a * factor);
    }

    /// Rescale to unit norm, in place.
    pub fn normalize(&mut self) -> Result<()> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(QftError::ZeroNorm);
        }
        self.scale(1.0 / norm);
        Ok(())
    }

    /// Probability of each computational basis state.
    pub fn probs(&self) -> Vec<f64> {
        self.data.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Inner product ⟨self|other⟩.
    pub fn inner(&self, other: &State) -> Complex64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// Fidelity |⟨self|other⟩|² between two states.
    pub fn fidelity(&self, other: &State) -> f64 {
        self.inner(other).norm_sqr()
    }
}
