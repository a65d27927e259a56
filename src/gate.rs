use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// Qubit gates used to assemble Fourier transform circuits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    H,
    X,
    /// Phase gate: diag(1, e^(iθ)). Controlled, this is the `cR` rotation of the QFT.
    Phase(f64),
    SWAP,
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gate::H => write!(f, "H"),
            Gate::X => write!(f, "X"),
            Gate::SWAP => write!(f, "SWAP"),
            Gate::Phase(theta) => write!(f, "Phase({:.4})", theta),
        }
    }
}

impl Gate {
    /// Returns the number of qubits the gate acts on (controls excluded).
    pub fn num_sites(&self) -> usize {
        match self {
            Gate::SWAP => 2,
            _ => 1,
        }
    }

    /// Returns whether the gate is diagonal in the computational basis.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Gate::Phase(_))
    }

    /// Phase angle carried by the gate, if any.
    pub fn phase(&self) -> Option<f64> {
        match self {
            Gate::Phase(theta) => Some(*theta),
            _ => None,
        }
    }

    /// Return the adjoint (conjugate transpose) of this gate.
    ///
    /// H, X and SWAP are Hermitian. Phase(θ)† = Phase(-θ).
    pub fn dagger(&self) -> Self {
        match self {
            Gate::Phase(theta) => Gate::Phase(-theta),
            Gate::H | Gate::X | Gate::SWAP => *self,
        }
    }

    /// Matrix representation in the computational basis.
    ///
    /// Single-qubit gates are 2x2, SWAP is 4x4 with rows ordered |00>, |01>, |10>, |11>.
    pub fn matrix(&self) -> Array2<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);

        match self {
            Gate::H => {
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                Array2::from_shape_fn((2, 2), |(r, c)| if r == 1 && c == 1 { -s } else { s })
            }
            Gate::X => Array2::from_shape_fn((2, 2), |(r, c)| if r != c { one } else { zero }),
            Gate::Phase(theta) => {
                let mut m = Array2::zeros((2, 2));
                m[[0, 0]] = one;
                m[[1, 1]] = Complex64::from_polar(1.0, *theta);
                m
            }
            Gate::SWAP => {
                let mut m = Array2::zeros((4, 4));
                m[[0, 0]] = one; // |00> -> |00>
                m[[1, 2]] = one; // |01> -> |10>
                m[[2, 1]] = one; // |10> -> |01>
                m[[3, 3]] = one; // |11> -> |11>
                m
            }
        }
    }
}
