use crate::constants::*;
use crate::mutation::{MutImpact, MutType};
use crate::seq::{self, CodonIndex};
use crate::seq::code::Translator;

/// Counts of the point substitutions at one codon position.
/// Substitutions from or to a stop codon are not counted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Nonsynonymous substitutions
    pub non: u32,
    /// Synonymous transitions
    pub syn_ts: u32,
    /// Synonymous transversions
    pub syn_tv: u32,
    /// Possible transitions
    pub poss_ts: u32,
    /// Possible transversions
    pub poss_tv: u32,
}

impl Tally {
    /// Enumerate the three substitutions at position `pos` of a codon.
    pub fn count<T: Translator>(translator: &T, idx: CodonIndex, pos: usize) -> Tally {
        let codon = seq::codon_at(idx);
        let aa_ref = translator.translate(&codon);

        let mut x = Tally::default();
        for (l, &nt_alt) in NUCLEOTIDES.iter().enumerate() {
            if l == idx[pos] {
                continue;
            }

            let mutant = seq::substitute(codon, pos, nt_alt);
            let aa_alt = translator.translate(&mutant);
            if translator.is_stop(aa_ref) || translator.is_stop(aa_alt) {
                continue;
            }

            x.add(MutType::classify(codon[pos], nt_alt), MutImpact::of(aa_ref, aa_alt));
        }

        x
    }

    pub fn add(&mut self, ty: MutType, impact: MutImpact) {
        match ty {
            MutType::Transition => self.poss_ts += 1,
            MutType::Transversion => self.poss_tv += 1,
        }
        match (impact, ty) {
            (MutImpact::Nonsynonymous, _) => self.non += 1,
            (MutImpact::Synonymous, MutType::Transition) => self.syn_ts += 1,
            (MutImpact::Synonymous, MutType::Transversion) => self.syn_tv += 1,
        }
    }

    #[inline]
    pub fn possible(&self) -> u32 {
        self.poss_ts + self.poss_tv
    }

    #[inline]
    pub fn synonymous(&self) -> u32 {
        self.syn_ts + self.syn_tv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::code::GeneticCode;

    fn count(codon: &[u8], pos: usize) -> Tally {
        let idx = seq::codon_index(codon).unwrap();
        Tally::count(&GeneticCode::STANDARD, idx, pos)
    }

    #[test]
    fn test_fourfold_third_position() {
        // CTN: leucine
        let x = count(b"CTC", 2);
        assert_eq!(x, Tally { non: 0, syn_ts: 1, syn_tv: 2, poss_ts: 1, poss_tv: 2 });
    }

    #[test]
    fn test_methionine_first_position() {
        // CTG (L), GTG (V), TTG (L)
        let x = count(b"ATG", 0);
        assert_eq!(x, Tally { non: 3, syn_ts: 0, syn_tv: 0, poss_ts: 1, poss_tv: 2 });
    }

    #[test]
    fn test_stop_neighbour_is_skipped() {
        // TGG (W) has TGA (stop) as its only transition at the third position
        let x = count(b"TGG", 2);
        assert_eq!(x, Tally { non: 2, syn_ts: 0, syn_tv: 0, poss_ts: 0, poss_tv: 2 });
        assert_eq!(x.possible(), 2);
    }

    #[test]
    fn test_stop_codon_has_no_substitutions() {
        for &pos in [0, 2].iter() {
            let x = count(b"TAA", pos);
            assert_eq!(x, Tally::default());
        }
    }

    #[test]
    fn test_mixed_first_position() {
        // AGG (R): GGG (G, ts), CGG (R, tv), TGG (W, tv)
        let x = count(b"AGG", 0);
        assert_eq!(x, Tally { non: 2, syn_ts: 0, syn_tv: 1, poss_ts: 1, poss_tv: 2 });
        assert_eq!(x.synonymous(), 1);
    }
}
