use serde::{Deserialize, Serialize};

use crate::circuit::{Circuit, PositionedGate};
use crate::error::{QftError, Result};
use crate::gate::Gate;

#[derive(Serialize, Deserialize)]
struct CircuitJson {
    num_qubits: usize,
    gates: Vec<GateJson>,
}

#[derive(Serialize, Deserialize)]
struct GateJson {
    gate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<Vec<f64>>,
    targets: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    controls: Vec<usize>,
}

fn positioned_gate_to_json(pg: &PositionedGate) -> GateJson {
    let params = pg.gate.phase().map(|theta| vec![theta]);
    let name = match pg.gate {
        Gate::H => "H",
        Gate::X => "X",
        Gate::Phase(_) => "Phase",
        Gate::SWAP => "SWAP",
    };
    GateJson {
        gate: name.to_string(),
        params,
        targets: pg.target_locs.clone(),
        controls: pg.control_locs.clone(),
    }
}

fn gate_json_to_positioned(gj: GateJson) -> Result<PositionedGate> {
    let gate = match gj.gate.as_str() {
        "H" => Gate::H,
        "X" => Gate::X,
        "SWAP" => Gate::SWAP,
        "Phase" => {
            let theta = gj
                .params
                .as_deref()
                .and_then(|p| p.first().copied())
                .ok_or_else(|| QftError::MissingParameter(gj.gate.clone()))?;
            Gate::Phase(theta)
        }
        other => return Err(QftError::UnknownGate(other.to_string())),
    };
    Ok(PositionedGate::new(gate, gj.targets, gj.controls))
}

/// Serialize a Circuit to a pretty-printed JSON string.
///
/// # Example
/// ```
/// use qft_rs::{circuit_to_json, qft_circuit, Direction};
/// let json = circuit_to_json(&qft_circuit(2, Direction::Forward)).unwrap();
/// assert!(json.contains("\"num_qubits\": 2"));
/// ```
pub fn circuit_to_json(circuit: &Circuit) -> Result<String> {
    let circuit_json = CircuitJson {
        num_qubits: circuit.num_qubits(),
        gates: circuit.gates.iter().map(positioned_gate_to_json).collect(),
    };
    Ok(serde_json::to_string_pretty(&circuit_json)?)
}

/// Deserialize a Circuit from JSON. Gate locations are validated against `num_qubits`.
pub fn circuit_from_json(json: &str) -> Result<Circuit> {
    let circuit_json: CircuitJson = serde_json::from_str(json)?;
    let gates = circuit_json
        .gates
        .into_iter()
        .map(gate_json_to_positioned)
        .collect::<Result<Vec<_>>>()?;
    let circuit = Circuit::from_gates(circuit_json.num_qubits, gates);
    circuit.validate(circuit.num_qubits())?;
    Ok(circuit)
}
