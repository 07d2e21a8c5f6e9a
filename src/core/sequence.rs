//! Nucleotide transforms.

/// Watson-Crick complement of a single base.
///
/// Only uppercase `A`, `C`, `G` and `T` are complemented; every other byte
/// (lowercase bases, `N`, IUPAC codes, punctuation) is returned unchanged.
#[inline]
#[must_use]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Reverse complement of a DNA string.
///
/// Non-ACGT characters keep their mirrored position without being complemented,
/// so the result always has the same length as the input.
///
/// # Examples
///
/// ```
/// use kmer_locate::core::sequence::reverse_complement;
///
/// assert_eq!(reverse_complement("AACG"), "CGTT");
/// assert_eq!(reverse_complement("ANG"), "CNT");
/// assert_eq!(reverse_complement(""), "");
/// ```
#[must_use]
pub fn reverse_complement(seq: &str) -> String {
    // Multi-byte characters are reversed as whole chars; only ASCII is complemented
    seq.chars()
        .rev()
        .map(|c| {
            if c.is_ascii() {
                complement(c as u8) as char
            } else {
                c
            }
        })
        .collect()
}
