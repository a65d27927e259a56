//! Quantum Fourier Transform demo.
//!
//! Builds the 4-qubit QFT circuit, applies it to |0000⟩ and |0001⟩, and runs
//! the inverse to get back to the input.
//!
//! Run with: RUST_LOG=debug cargo run --example qft

use qft_rs::{circuit_to_json, qft, qft_circuit, rev_qft, Direction, State};
use tracing_subscriber::EnvFilter;

fn print_amplitudes(state: &State, n: usize) {
    for (i, amp) in state.data.iter().enumerate().take(8) {
        println!(
            "    |{:0width$b}⟩: {:+.6} {:+.6}i  (|amp|={:.6})",
            i,
            amp.re,
            amp.im,
            amp.norm(),
            width = n
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let n = 4;
    println!("=== {}-qubit Quantum Fourier Transform ===\n", n);

    let circuit = qft_circuit(n, Direction::Forward);
    print!("{}", circuit);
    println!("\nJSON:\n{}", circuit_to_json(&circuit)?);

    // QFT|0000⟩ is the uniform superposition
    let mut zero = State::zero_state(n);
    qft(&mut zero, n)?;
    println!("\nQFT|0000⟩ (expected amplitude {:.6}):", 1.0 / (zero.total_dim() as f64).sqrt());
    print_amplitudes(&zero, n);

    // QFT|0001⟩ has phases e^(2πi y/16)
    let input = State::product_state(&[0, 0, 0, 1]);
    let mut state = input.clone();
    qft(&mut state, n)?;
    println!("\nQFT|0001⟩ (phase progression):");
    print_amplitudes(&state, n);

    rev_qft(&mut state, n)?;
    println!("\nFidelity after inverse: {:.10}", state.fidelity(&input));
    Ok(())
}
