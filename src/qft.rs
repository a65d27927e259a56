//! Quantum Fourier Transform circuits and their application to a register.
//!
//! [`qft_circuit`] emits the textbook gate sequence: for each qubit a Hadamard
//! followed by controlled phase rotations of decreasing angle, then a layer of
//! SWAPs that reverses the qubit order. [`qft`] and [`rev_qft`] run that circuit
//! (or its adjoint) on anything implementing [`Register`]. The circuit is
//! unitary, so by default the amplitudes are left as it produced them.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::circuit::{control, put, Circuit};
use crate::error::{QftError, Result};
use crate::gate::Gate;
use crate::register::Register;

/// Which way the transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn inverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    /// Sign applied to every controlled phase angle.
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

impl FromStr for Direction {
    type Err = QftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "reverse" => Ok(Direction::Reverse),
            _ => Err(QftError::UnknownDirection(s.to_string())),
        }
    }
}

/// How amplitudes are rescaled after the circuit runs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Rescale {
    /// Leave the amplitudes as the circuit produced them.
    #[default]
    Skip,
    /// Divide by the L2 norm so the register ends at unit norm.
    UnitNorm,
    /// Multiply every amplitude by a fixed real factor.
    Factor(f64),
}

impl Rescale {
    /// Fixed 1/√2 factor. A forward/inverse pair with this setting scales the state by 1/2.
    pub const FRAC_1_SQRT_2: Rescale = Rescale::Factor(std::f64::consts::FRAC_1_SQRT_2);
}

/// Options for [`qft_with`] and [`rev_qft_with`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QftConfig {
    pub rescale: Rescale,
}

/// Phase of the controlled rotation between qubits `k - 1` apart: 2π / 2^k.
pub fn rotation_angle(k: usize, direction: Direction) -> f64 {
    direction.sign() * 2.0 * PI / 2f64.powi(k as i32)
}

/// Build an n-qubit QFT circuit.
///
/// For each qubit j: H on j, then for k in 2..=n-j a controlled Phase(±2π/2^k)
/// with control j and target j+k-1 (negative under [`Direction::Reverse`]).
/// Finally SWAP(i, n-1-i) for i < n/2 to reverse the qubit order.
///
/// The reverse circuit still lists its gates in forward order; reverse it with
/// [`Circuit::reverse_gates`] to obtain the adjoint.
///
/// # Example
/// ```
/// use qft_rs::{qft_circuit, Direction, Gate};
/// let c = qft_circuit(3, Direction::Forward);
/// assert_eq!(c.len(), 7);
/// assert_eq!(c.gates[0].gate, Gate::H);
/// assert_eq!(c.gates[6].gate, Gate::SWAP);
/// ```
pub fn qft_circuit(n: usize, direction: Direction) -> Circuit {
    let mut circuit = Circuit::new(n);

    for j in 0..n {
        circuit.add_gate(put(vec![j], Gate::H));
        for k in 2..=(n - j) {
            let theta = rotation_angle(k, direction);
            circuit.add_gate(control(vec![j], vec![j + k - 1], Gate::Phase(theta)));
        }
    }

    // bit reversal, identical for both directions
    for i in 0..(n / 2) {
        circuit.add_gate(put(vec![i, n - 1 - i], Gate::SWAP));
    }

    debug!(n, %direction, gates = circuit.len(), "built qft circuit");
    circuit
}

/// Forward QFT on the leading `n` qubits of `state`, with the default config.
///
/// The register is mutated in place and handed back for chaining.
pub fn qft<R: Register + ?Sized>(state: &mut R, n: usize) -> Result<&mut R> {
    qft_with(state, n, &QftConfig::default())
}

/// Inverse QFT on the leading `n` qubits of `state`, with the default config.
pub fn rev_qft<R: Register + ?Sized>(state: &mut R, n: usize) -> Result<&mut R> {
    rev_qft_with(state, n, &QftConfig::default())
}

/// Forward QFT on the leading `n` qubits of `state`. `config.rescale` decides
/// how the amplitudes are scaled once the circuit has run.
pub fn qft_with<'a, R: Register + ?Sized>(
    state: &'a mut R,
    n: usize,
    config: &QftConfig,
) -> Result<&'a mut R> {
    let circuit = qft_circuit(n, Direction::Forward);
    run(state, &circuit, config)?;
    Ok(state)
}

/// Inverse QFT: phases negated at construction and gate order reversed, which
/// together give the adjoint of the forward circuit.
pub fn rev_qft_with<'a, R: Register + ?Sized>(
    state: &'a mut R,
    n: usize,
    config: &QftConfig,
) -> Result<&'a mut R> {
    let mut circuit = qft_circuit(n, Direction::Reverse);
    circuit.reverse_gates();
    run(state, &circuit, config)?;
    Ok(state)
}

fn run<R: Register + ?Sized>(state: &mut R, circuit: &Circuit, config: &QftConfig) -> Result<()> {
    // a zero vector must fail before any gate runs
    if matches!(config.rescale, Rescale::UnitNorm) && l2_norm(state.amplitudes_mut()?) == 0.0 {
        return Err(QftError::ZeroNorm);
    }

    state.apply_circuit(circuit)?;

    let scale = match config.rescale {
        Rescale::Skip => None,
        Rescale::UnitNorm => Some(1.0 / l2_norm(state.amplitudes_mut()?)),
        Rescale::Factor(c) => Some(c),
    };
    if let Some(scale) = scale {
        debug!(scale, "rescale amplitudes");
        for a in state.amplitudes_mut()? {
            *a *= scale;
        }
    }
    Ok(())
}

fn l2_norm(amps: &[Complex64]) -> f64 {
    amps.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
}
