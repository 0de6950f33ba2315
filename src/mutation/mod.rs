use std::fmt;
use std::slice;

use crate::seq::{Nucleotide,Residue};

/// Type of a single nucleotide substitution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MutType {
    /// Purine to purine (A <-> G) or pyrimidine to pyrimidine (C <-> T)
    Transition,
    Transversion,
}

impl MutType {
    /// Classify a substitution by the pair of nucleotides involved.
    pub fn classify(nt_ref: Nucleotide, nt_alt: Nucleotide) -> MutType {
        debug_assert!(nt_ref != nt_alt);

        match (nt_ref, nt_alt) {
            (b'A', b'G') | (b'G', b'A') | (b'C', b'T') | (b'T', b'C') => MutType::Transition,
            _ => MutType::Transversion,
        }
    }

    pub fn iter() -> slice::Iter<'static, MutType> {
        use self::MutType::*;
        static MUTATION_TYPES: [MutType; 2] = [Transition, Transversion];
        MUTATION_TYPES.iter()
    }
}

impl fmt::Display for MutType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match *self {
            MutType::Transition => "ts",
            MutType::Transversion => "tv",
        };

        write!(f, "{}", c)
    }
}

/// Impact of a codon substitution on the encoded amino acid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MutImpact {
    Synonymous,
    Nonsynonymous,
}

impl MutImpact {
    /// Compare the reference and alternate residues.
    /// Stop codons must be filtered out beforehand.
    #[inline]
    pub fn of(aa_ref: Residue, aa_alt: Residue) -> MutImpact {
        if aa_ref == aa_alt {
            MutImpact::Synonymous
        } else {
            MutImpact::Nonsynonymous
        }
    }
}

impl fmt::Display for MutImpact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match *self {
            MutImpact::Synonymous => "syn",
            MutImpact::Nonsynonymous => "non",
        };

        write!(f, "{}", c)
    }
}
