use crate::redundancy::first::FirstTables;
use crate::redundancy::table::CodonTable;
use crate::redundancy::third::ThirdTables;
use crate::seq::{self, CodonIndex};
use crate::seq::code::Translator;

/// Number of sites of each degeneracy class in a codon.
/// All values are zero for stop codons.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LValues {
    /// Nondegenerate sites
    pub l0: f64,
    /// Twofold degenerate sites, synonymous via a transition
    pub l2s: f64,
    /// Twofold degenerate sites, synonymous via a transversion
    pub l2v: f64,
    /// Fourfold degenerate sites
    pub l4: f64,
}

impl LValues {
    /// Total number of sites; three for any sense codon.
    #[inline]
    pub fn total(&self) -> f64 {
        self.l0 + self.l2s + self.l2v + self.l4
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LTables {
    pub l0: CodonTable,
    pub l2s: CodonTable,
    pub l2v: CodonTable,
    pub l4: CodonTable,
}

impl LTables {
    /// Sum the first and third position degeneracies of each sense codon.
    /// The second position is always nondegenerate.
    pub fn fill<T: Translator>(translator: &T, first: &FirstTables, third: &ThirdTables) -> LTables {
        let mut tables = LTables::default();
        for idx in seq::codons() {
            if translator.is_stop(translator.translate(&seq::codon_at(idx))) {
                continue;
            }
            tables.l0[idx] = 1.0 + first.non[idx] + third.non[idx];
            tables.l2s[idx] = first.two_s[idx] + third.two_s[idx];
            tables.l2v[idx] = first.two_v[idx] + third.two_v[idx];
            tables.l4[idx] = third.four[idx];
        }
        tables
    }

    #[inline]
    pub fn get(&self, idx: CodonIndex) -> LValues {
        LValues { l0: self.l0[idx], l2s: self.l2s[idx], l2v: self.l2v[idx], l4: self.l4[idx] }
    }
}
