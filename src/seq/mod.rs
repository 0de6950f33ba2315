pub mod code;

use std::str;

use crate::constants::*;

pub type Nucleotide = u8;
pub type Residue = u8;

pub type Codon = [Nucleotide; CODON_LEN];

/// Position of each nucleotide of a codon within `NUCLEOTIDES`.
pub type CodonIndex = [usize; CODON_LEN];

/// Index of a nucleotide within `NUCLEOTIDES`.
/// Lowercase and ambiguous nucleotides have no index.
#[inline]
pub fn nucleotide_index(x: Nucleotide) -> Option<usize> {
    NUCLEOTIDES.iter().position(|&nt| nt == x)
}

/// Codon spelled by a codon index.
#[inline]
pub fn codon_at(idx: CodonIndex) -> Codon {
    [NUCLEOTIDES[idx[0]], NUCLEOTIDES[idx[1]], NUCLEOTIDES[idx[2]]]
}

/// Index of a codon, if it consists of exactly three unambiguous uppercase nucleotides.
pub fn codon_index(x: &[Nucleotide]) -> Option<CodonIndex> {
    if x.len() != CODON_LEN {
        return None;
    }

    let mut idx = [0; CODON_LEN];
    for (i, &nt) in x.iter().enumerate() {
        idx[i] = nucleotide_index(nt)?;
    }

    Some(idx)
}

/// Iterate over all codon indices.
/// The last position varies fastest: AAA, AAG, AAC, AAT, AGA, ...
pub fn codons() -> impl Iterator<Item = CodonIndex> {
    (0 .. N_CODONS).map(|x| {
        [x / (N_NUCLEOTIDES * N_NUCLEOTIDES), (x / N_NUCLEOTIDES) % N_NUCLEOTIDES, x % N_NUCLEOTIDES]
    })
}

/// Codon with the nucleotide at `pos` replaced.
#[inline]
pub fn substitute(codon: Codon, pos: usize, nt_alt: Nucleotide) -> Codon {
    let mut mutant = codon;
    mutant[pos] = nt_alt;
    mutant
}

/// Codon as a string slice; codons are always built from `NUCLEOTIDES`.
pub fn codon_str(x: &Codon) -> &str {
    str::from_utf8(x).unwrap_or("???")
}
