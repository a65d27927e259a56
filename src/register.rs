//! The register abstraction the Fourier transform runs against.
//!
//! Anything that can execute a [`Circuit`] in place and expose its amplitude
//! vector can be transformed by [`crate::qft::qft`] and [`crate::qft::rev_qft`].
//! [`State`] is the dense state-vector implementation shipped with the crate.

use num_complex::Complex64;

use crate::apply::apply;
use crate::circuit::Circuit;
use crate::error::Result;
use crate::state::State;

/// A simulated quantum register that gates can be applied to.
pub trait Register {
    /// Number of qubits held by the register.
    fn num_qubits(&self) -> usize;

    /// Apply every gate of `circuit` in order, mutating the register in place.
    ///
    /// On error the register must be left unchanged.
    fn apply_circuit(&mut self, circuit: &Circuit) -> Result<()>;

    /// Mutable view of the amplitude vector, basis index order.
    fn amplitudes_mut(&mut self) -> Result<&mut [Complex64]>;
}

impl Register for State {
    fn num_qubits(&self) -> usize {
        self.nqubits
    }

    fn apply_circuit(&mut self, circuit: &Circuit) -> Result<()> {
        apply(circuit, self)
    }

    fn amplitudes_mut(&mut self) -> Result<&mut [Complex64]> {
        State::amplitudes_mut(self)
    }
}
