//! Qubit indexing utilities.
//!
//! Basis states are laid out big-endian: qubit 0 is the most significant bit of
//! the flat state vector index, so `|q0 q1 ... q(n-1)⟩` reads like a binary number.

/// Bit mask of qubit `loc` in an `n`-qubit register.
///
/// # Example
/// ```
/// use qft_rs::index::qubit_mask;
/// // qubit 0 of 3 is the leading bit
/// assert_eq!(qubit_mask(0, 3), 0b100);
/// assert_eq!(qubit_mask(2, 3), 0b001);
/// ```
pub fn qubit_mask(loc: usize, n: usize) -> usize {
    debug_assert!(loc < n, "qubit {} out of range for {} qubits", loc, n);
    1usize << (n - 1 - loc)
}

/// Convert per-qubit values to a flat state vector index.
///
/// # Example
/// ```
/// use qft_rs::index::basis_index;
/// assert_eq!(basis_index(&[1, 0, 1]), 5);
/// ```
pub fn basis_index(bits: &[usize]) -> usize {
    bits.iter().fold(0usize, |acc, &b| {
        debug_assert!(b < 2, "qubit value must be 0 or 1, got {}", b);
        (acc << 1) | b
    })
}

/// Iterate over basis indices where every qubit in `locs` is |1⟩.
///
/// Used for controlled gates: only those amplitudes are touched.
///
/// # Example
/// ```
/// use qft_rs::index::iter_ones;
/// // 2 qubits, qubit 0 fixed to 1: |10> and |11>
/// let indices: Vec<_> = iter_ones(2, &[0]).collect();
/// assert_eq!(indices, vec![2, 3]);
/// ```
pub fn iter_ones(n: usize, locs: &[usize]) -> impl Iterator<Item = usize> {
    let mask = locs.iter().fold(0usize, |m, &loc| m | qubit_mask(loc, n));
    (0..1usize << n).filter(move |&i| i & mask == mask)
}
