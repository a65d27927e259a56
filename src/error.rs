//! Error types for circuit construction and execution.

use thiserror::Error;

/// Errors raised while building, serializing or applying circuits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QftError {
    /// A gate references a qubit outside the register
    #[error("location {loc} is out of range (num_qubits = {num_qubits})")]
    LocOutOfRange { loc: usize, num_qubits: usize },

    /// A gate uses the same qubit twice (control == target, or SWAP(a, a))
    #[error("gate uses qubit {loc} more than once")]
    OverlappingLocs { loc: usize },

    /// The circuit spans more qubits than the register holds
    #[error("circuit on {circuit} qubits cannot run on a {register}-qubit register")]
    WidthMismatch { circuit: usize, register: usize },

    /// Amplitude vector length is not 2^n
    #[error("amplitude vector has length {actual}, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Unit-norm rescale of an all-zero amplitude vector
    #[error("cannot normalize a state with zero norm")]
    ZeroNorm,

    /// The amplitude storage cannot be viewed as one contiguous slice
    #[error("amplitude vector is not contiguous in memory")]
    NonContiguous,

    #[error("unknown QFT direction {0:?} (expected \"forward\" or \"reverse\")")]
    UnknownDirection(String),

    #[error("unknown gate label {0:?}")]
    UnknownGate(String),

    #[error("gate {0:?} requires a phase parameter")]
    MissingParameter(String),

    #[error("json error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for QftError {
    fn from(err: serde_json::Error) -> Self {
        QftError::Json(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QftError>;
