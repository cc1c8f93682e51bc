//! Nucleotide sequence helpers.

/// Watson-Crick complement of a single base.
///
/// Case is preserved. Anything other than A/C/G/T (e.g. `N`) is returned
/// unchanged, so it can only ever match itself.
#[inline]
#[must_use]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        other => other,
    }
}

/// Reverse complement of a sequence.
///
/// # Examples
///
/// ```
/// use flank_extract::core::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement(b"AACGTN"), b"NACGTT".to_vec());
/// assert_eq!(reverse_complement(b"acgT"), b"Acgt".to_vec());
/// ```
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}
