pub mod error;
pub mod gate;
pub mod circuit;
pub mod index;
pub mod state;
pub mod instruct;
pub mod apply;
pub mod register;
pub mod qft;
pub mod json;

pub use error::{QftError, Result};
pub use gate::Gate;
pub use circuit::{Circuit, PositionedGate, put, control, make_gate};
pub use state::State;
pub use register::Register;
pub use apply::apply;
pub use qft::{Direction, QftConfig, Rescale, qft_circuit, qft, rev_qft, qft_with, rev_qft_with};
pub use json::{circuit_to_json, circuit_from_json};
