use std::fmt;

use crate::error::{QftError, Result};
use crate::gate::Gate;

/// A gate placed at specific qubits in a circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedGate {
    pub gate: Gate,
    pub target_locs: Vec<usize>,
    pub control_locs: Vec<usize>,
}

impl PositionedGate {
    /// Creates a new PositionedGate.
    pub fn new(gate: Gate, target_locs: Vec<usize>, control_locs: Vec<usize>) -> Self {
        PositionedGate {
            gate,
            target_locs,
            control_locs,
        }
    }

    /// Returns all locations (control locations followed by target locations).
    pub fn all_locs(&self) -> Vec<usize> {
        let mut locs = self.control_locs.clone();
        locs.extend(&self.target_locs);
        locs
    }

    /// Phase angle of a (controlled) phase gate.
    pub fn phase(&self) -> Option<f64> {
        self.gate.phase()
    }

    pub fn is_controlled(&self) -> bool {
        !self.control_locs.is_empty()
    }

    /// Adjoint of this gate at the same locations.
    pub fn dagger(&self) -> Self {
        PositionedGate {
            gate: self.gate.dagger(),
            target_locs: self.target_locs.clone(),
            control_locs: self.control_locs.clone(),
        }
    }

    /// Check the gate against a register of `num_qubits` qubits.
    pub(crate) fn validate(&self, num_qubits: usize) -> Result<()> {
        if self.target_locs.len() != self.gate.num_sites() {
            return Err(QftError::DimensionMismatch {
                expected: self.gate.num_sites(),
                actual: self.target_locs.len(),
            });
        }
        let locs = self.all_locs();
        for (i, &loc) in locs.iter().enumerate() {
            if loc >= num_qubits {
                return Err(QftError::LocOutOfRange { loc, num_qubits });
            }
            if locs[..i].contains(&loc) {
                return Err(QftError::OverlappingLocs { loc });
            }
        }
        Ok(())
    }
}

/// An ordered sequence of positioned gates on a register of `nqubits` qubits.
///
/// The circuit is append-only while it is built. Qubit indices are checked
/// when the circuit is applied, not when gates are added.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    pub nqubits: usize,
    pub gates: Vec<PositionedGate>,
}

impl Circuit {
    /// Creates an empty circuit on `nqubits` qubits.
    pub fn new(nqubits: usize) -> Self {
        Circuit {
            nqubits,
            gates: Vec::new(),
        }
    }

    /// Creates a circuit from an existing gate list.
    pub fn from_gates(nqubits: usize, gates: Vec<PositionedGate>) -> Self {
        Circuit { nqubits, gates }
    }

    /// Append a gate at the end of the circuit.
    pub fn add_gate(&mut self, gate: PositionedGate) {
        self.gates.push(gate);
    }

    pub fn num_qubits(&self) -> usize {
        self.nqubits
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Reverse the gate order in place. The gates themselves are unchanged.
    pub fn reverse_gates(&mut self) {
        self.gates.reverse();
    }

    /// Return the adjoint circuit U†: gates in reverse order, each replaced by its adjoint.
    ///
    /// For a unitary circuit U, U† U = I.
    pub fn dagger(&self) -> Self {
        Circuit {
            nqubits: self.nqubits,
            gates: self.gates.iter().rev().map(PositionedGate::dagger).collect(),
        }
    }

    /// Validate every gate against a register of `num_qubits` qubits.
    pub fn validate(&self, num_qubits: usize) -> Result<()> {
        if self.nqubits > num_qubits {
            return Err(QftError::WidthMismatch {
                circuit: self.nqubits,
                register: num_qubits,
            });
        }
        self.gates.iter().try_for_each(|pg| pg.validate(num_qubits))
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nqubits: {}", self.nqubits)?;
        for pg in &self.gates {
            if pg.control_locs.is_empty() {
                writeln!(f, "  {} @ q[{}]", pg.gate, format_locs(&pg.target_locs))?;
            } else {
                writeln!(
                    f,
                    "  C(q[{}]) {} @ q[{}]",
                    format_locs(&pg.control_locs),
                    pg.gate,
                    format_locs(&pg.target_locs)
                )?;
            }
        }
        Ok(())
    }
}

fn format_locs(locs: &[usize]) -> String {
    locs.iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Place a gate on target locations (no controls).
///
/// # Example
/// ```
/// use qft_rs::circuit::put;
/// use qft_rs::gate::Gate;
/// let pg = put(vec![0], Gate::H);
/// assert_eq!(pg.target_locs, vec![0]);
/// assert!(pg.control_locs.is_empty());
/// ```
pub fn put(target_locs: Vec<usize>, gate: Gate) -> PositionedGate {
    PositionedGate::new(gate, target_locs, vec![])
}

/// Place a gate that fires when every control qubit is |1⟩.
///
/// # Example
/// ```
/// use qft_rs::circuit::control;
/// use qft_rs::gate::Gate;
/// let cr = control(vec![0], vec![1], Gate::Phase(0.5));
/// assert_eq!(cr.control_locs, vec![0]);
/// assert_eq!(cr.target_locs, vec![1]);
/// ```
pub fn control(ctrl_locs: Vec<usize>, target_locs: Vec<usize>, gate: Gate) -> PositionedGate {
    PositionedGate::new(gate, target_locs, ctrl_locs)
}

/// Build a gate from a string label, the way gate factories in circuit
/// description formats do.
///
/// Labels: `"H"`, `"X"`, `"R"` (phase), `"cR"` (controlled phase) and `"SWAP"`.
/// For single-qubit labels `control == target` means uncontrolled. For `"SWAP"`
/// the two qubits are `target` and `control`.
///
/// # Example
/// ```
/// use qft_rs::circuit::make_gate;
/// use qft_rs::gate::Gate;
/// let cr = make_gate("cR", 2, 0, Some(0.25)).unwrap();
/// assert_eq!(cr.gate, Gate::Phase(0.25));
/// assert_eq!(cr.control_locs, vec![0]);
/// assert_eq!(cr.target_locs, vec![2]);
/// ```
pub fn make_gate(
    label: &str,
    target: usize,
    control: usize,
    parameter: Option<f64>,
) -> Result<PositionedGate> {
    let controls = if control == target { vec![] } else { vec![control] };
    let phase = || parameter.ok_or_else(|| QftError::MissingParameter(label.to_string()));

    let pg = match label {
        "H" => PositionedGate::new(Gate::H, vec![target], controls),
        "X" => PositionedGate::new(Gate::X, vec![target], controls),
        "R" => PositionedGate::new(Gate::Phase(phase()?), vec![target], controls),
        "cR" => {
            if control == target {
                return Err(QftError::OverlappingLocs { loc: target });
            }
            PositionedGate::new(Gate::Phase(phase()?), vec![target], vec![control])
        }
        "SWAP" => PositionedGate::new(Gate::SWAP, vec![target, control], vec![]),
        other => return Err(QftError::UnknownGate(other.to_string())),
    };
    Ok(pg)
}
