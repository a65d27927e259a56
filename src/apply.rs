use num_complex::Complex64;
use tracing::trace;

use crate::circuit::{Circuit, PositionedGate};
use crate::error::{QftError, Result};
use crate::gate::Gate;
use crate::instruct::{instruct_diagonal, instruct_single, instruct_swap};
use crate::state::State;

/// Apply a single positioned gate to a raw amplitude vector of an `n`-qubit register.
///
/// The gate must already be validated against `n`.
fn apply_gate(amps: &mut [Complex64], n: usize, pg: &PositionedGate) {
    let controls = &pg.control_locs;
    match pg.gate {
        Gate::SWAP => instruct_swap(amps, n, pg.target_locs[0], pg.target_locs[1], controls),
        Gate::Phase(theta) => instruct_diagonal(
            amps,
            n,
            Complex64::from_polar(1.0, theta),
            pg.target_locs[0],
            controls,
        ),
        Gate::H | Gate::X => instruct_single(amps, n, &pg.gate.matrix(), pg.target_locs[0], controls),
    }
}

/// Apply a circuit to a quantum state in place.
///
/// Every gate is checked against the register before any amplitude is touched,
/// so on error the state is unchanged.
///
/// # Errors
/// Returns [`QftError::WidthMismatch`] if the circuit is wider than the state,
/// [`QftError::LocOutOfRange`] or [`QftError::OverlappingLocs`] for a bad gate,
/// and [`QftError::DimensionMismatch`] if the amplitude vector is not `2^n` long.
pub fn apply(circuit: &Circuit, state: &mut State) -> Result<()> {
    let n = state.nqubits;
    let expected = 1usize << n;
    if state.data.len() != expected {
        return Err(QftError::DimensionMismatch {
            expected,
            actual: state.data.len(),
        });
    }
    circuit.validate(n)?;

    let amps = state.amplitudes_mut()?;
    for pg in &circuit.gates {
        trace!(gate = %pg.gate, targets = ?pg.target_locs, controls = ?pg.control_locs, "apply gate");
        apply_gate(amps, n, pg);
    }
    Ok(())
}
