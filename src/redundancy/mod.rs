//! Codon degeneracy tables after Comeron (1995).
//!
//! For every codon, the first and third positions are split into
//! nondegenerate, twofold (transition or transversion) and fourfold
//! degenerate fractions by enumerating all point substitutions.
//! The per-codon sums (L-values) are the site counts used by
//! codon-based estimators of synonymous and nonsynonymous divergence.

pub mod first;
pub mod lvalues;
pub mod table;
pub mod tally;
pub mod third;

use bio::alphabets::Alphabet;
use log::debug;

use crate::constants::*;
use crate::error::{Error, Result};
use crate::seq::{self, Codon, CodonIndex, Residue};
use crate::seq::code::{GeneticCode, Translator};

pub use self::first::{FirstSite, FirstTables};
pub use self::lvalues::{LTables, LValues};
pub use self::third::{ThirdSite, ThirdTables};

/// Precomputed degeneracy of every codon under one genetic code.
///
/// All tables are filled on construction and never change afterwards,
/// so a table can be shared between threads without locking.
#[derive(Clone, Debug)]
pub struct DegeneracyTable {
    code: GeneticCode,
    alphabet: Alphabet,
    first: FirstTables,
    third: ThirdTables,
    l: LTables,
}

/// One codon with all of its degeneracy values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Row {
    pub codon: Codon,
    pub aa: Residue,
    pub first: FirstSite,
    pub third: ThirdSite,
    pub l: LValues,
}

impl DegeneracyTable {
    pub fn new(code: GeneticCode) -> DegeneracyTable {
        debug!("building codon degeneracy tables for genetic code {} ({})", code, code.name());

        let first = FirstTables::fill(&code);
        let third = ThirdTables::fill(&code);
        let l = LTables::fill(&code, &first, &third);

        DegeneracyTable {
            code,
            alphabet: Alphabet::new(&NUCLEOTIDES),
            first,
            third,
            l,
        }
    }

    /// Genetic code the tables were built for.
    #[inline]
    pub fn genetic_code(&self) -> GeneticCode {
        self.code
    }

    /// Validate a codon and look up its table index.
    fn index(&self, codon: &str) -> Result<CodonIndex> {
        let x = codon.as_bytes();
        if x.len() != CODON_LEN || !self.alphabet.is_word(x) {
            return Err(Error::InvalidCodon(codon.to_owned()));
        }
        seq::codon_index(x).ok_or_else(|| Error::InvalidCodon(codon.to_owned()))
    }

    /// Nondegenerate fraction of the first position.
    pub fn first_non(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.first.non[idx])
    }

    /// Fraction of the first position that is synonymous via a transition.
    pub fn first_2s(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.first.two_s[idx])
    }

    /// Fraction of the first position that is synonymous via a transversion.
    pub fn first_2v(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.first.two_v[idx])
    }

    /// Nondegenerate fraction of the third position.
    pub fn third_non(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.third.non[idx])
    }

    /// Fourfold degenerate fraction of the third position.
    pub fn third_four(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.third.four[idx])
    }

    /// Fraction of the third position that is synonymous via a transition.
    pub fn third_2s(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.third.two_s[idx])
    }

    /// Fraction of the third position that is synonymous via a transversion.
    pub fn third_2v(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.third.two_v[idx])
    }

    /// Number of nondegenerate sites: `1 + first_non + third_non`.
    pub fn l0(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.l.l0[idx])
    }

    /// Number of transitional silent sites: `first_2s + third_2s`.
    pub fn l2s(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.l.l2s[idx])
    }

    /// Number of transversional silent sites: `first_2v + third_2v`.
    pub fn l2v(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.l.l2v[idx])
    }

    /// Number of fourfold silent sites: `third_four`.
    pub fn l4(&self, codon: &str) -> Result<f64> {
        self.index(codon).map(|idx| self.l.l4[idx])
    }

    pub fn first_site(&self, codon: &str) -> Result<FirstSite> {
        self.index(codon).map(|idx| self.first.get(idx))
    }

    pub fn third_site(&self, codon: &str) -> Result<ThirdSite> {
        self.index(codon).map(|idx| self.third.get(idx))
    }

    pub fn lvalues(&self, codon: &str) -> Result<LValues> {
        self.index(codon).map(|idx| self.l.get(idx))
    }

    /// All degeneracy values of one codon.
    pub fn row(&self, codon: &str) -> Result<Row> {
        self.index(codon).map(|idx| self.row_at(idx))
    }

    /// Iterate over all codons in table order.
    pub fn rows<'a>(&'a self) -> impl Iterator<Item = Row> + 'a {
        seq::codons().map(move |idx| self.row_at(idx))
    }

    fn row_at(&self, idx: CodonIndex) -> Row {
        let codon = seq::codon_at(idx);
        Row {
            codon,
            aa: self.code.translate(&codon),
            first: self.first.get(idx),
            third: self.third.get(idx),
            l: self.l.get(idx),
        }
    }
}

impl Default for DegeneracyTable {
    fn default() -> Self {
        DegeneracyTable::new(GeneticCode::default())
    }
}
