use log::trace;

use crate::redundancy::table::CodonTable;
use crate::redundancy::tally::Tally;
use crate::seq::{self, CodonIndex};
use crate::seq::code::Translator;

/// Degeneracy of the third codon position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ThirdSite {
    /// Nondegenerate fraction
    pub non: f64,
    /// Fraction that is synonymous via a transition
    pub two_s: f64,
    /// Fraction that is synonymous via a transversion
    pub two_v: f64,
    /// Fourfold degenerate fraction
    pub four: f64,
}

impl ThirdSite {
    /// Resolve the degeneracy of a third position from its substitution counts.
    ///
    /// The cases are checked in order:
    /// no counted substitutions (stop codon), no synonymous substitutions,
    /// all three substitutions synonymous, one synonymous type absent,
    /// and fractional degeneracy, which is split evenly.
    pub fn from_tally(x: &Tally) -> ThirdSite {
        if x.possible() == 0 {
            ThirdSite::default()
        } else if x.synonymous() == 0 {
            ThirdSite { non: 1.0, ..ThirdSite::default() }
        } else if x.synonymous() == 3 {
            ThirdSite { four: 1.0, ..ThirdSite::default() }
        } else if x.syn_ts == 0 || x.syn_tv == 0 {
            // each type is divided by its own number of possible substitutions
            let two_s = if x.poss_ts > 0 { x.syn_ts as f64 / x.poss_ts as f64 } else { 0.0 };
            let two_v = if x.poss_tv > 0 { x.syn_tv as f64 / x.poss_tv as f64 } else { 0.0 };
            ThirdSite { non: 1.0 - two_s - two_v, two_s, two_v, four: 0.0 }
        } else {
            let third = 1.0 / 3.0;
            ThirdSite { non: third, two_s: third, two_v: third, four: 0.0 }
        }
    }
}

/// Third position degeneracy of every codon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThirdTables {
    pub non: CodonTable,
    pub two_s: CodonTable,
    pub two_v: CodonTable,
    pub four: CodonTable,
}

impl ThirdTables {
    pub fn fill<T: Translator>(translator: &T) -> ThirdTables {
        let mut tables = ThirdTables::default();
        for idx in seq::codons() {
            let x = Tally::count(translator, idx, 2);
            let site = ThirdSite::from_tally(&x);
            trace!("third position of {}: {:?} -> {:?}", seq::codon_str(&seq::codon_at(idx)), x, site);
            tables.set(idx, site);
        }
        tables
    }

    #[inline]
    pub fn get(&self, idx: CodonIndex) -> ThirdSite {
        ThirdSite {
            non: self.non[idx],
            two_s: self.two_s[idx],
            two_v: self.two_v[idx],
            four: self.four[idx],
        }
    }

    fn set(&mut self, idx: CodonIndex, site: ThirdSite) {
        self.non[idx] = site.non;
        self.two_s[idx] = site.two_s;
        self.two_v[idx] = site.two_v;
        self.four[idx] = site.four;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::code::GeneticCode;

    const EPS: f64 = 1.0e-6;

    fn tally(syn_ts: u32, syn_tv: u32, poss_ts: u32, poss_tv: u32) -> Tally {
        Tally { non: poss_ts + poss_tv - syn_ts - syn_tv, syn_ts, syn_tv, poss_ts, poss_tv }
    }

    fn assert_site(x: ThirdSite, non: f64, two_s: f64, two_v: f64, four: f64) {
        assert!((x.non - non).abs() < EPS, "{:?}", x);
        assert!((x.two_s - two_s).abs() < EPS, "{:?}", x);
        assert!((x.two_v - two_v).abs() < EPS, "{:?}", x);
        assert!((x.four - four).abs() < EPS, "{:?}", x);
    }

    #[test]
    fn test_branches() {
        assert_eq!(ThirdSite::from_tally(&Tally::default()), ThirdSite::default());
        assert_site(ThirdSite::from_tally(&tally(0, 0, 1, 2)), 1.0, 0.0, 0.0, 0.0);
        assert_site(ThirdSite::from_tally(&tally(1, 2, 1, 2)), 0.0, 0.0, 0.0, 1.0);
        // twofold by transition
        assert_site(ThirdSite::from_tally(&tally(1, 0, 1, 2)), 0.0, 1.0, 0.0, 0.0);
        // one of two transversions synonymous
        assert_site(ThirdSite::from_tally(&tally(0, 1, 1, 2)), 0.5, 0.0, 0.5, 0.0);
        // threefold
        assert_site(ThirdSite::from_tally(&tally(1, 1, 1, 2)), 1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 0.0);
    }

    #[test]
    fn test_even_split_with_stop_neighbour() {
        // both remaining substitutions synonymous, third one leads to a stop
        assert_site(ThirdSite::from_tally(&tally(1, 1, 1, 1)), 1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 0.0);
    }

    #[test]
    fn test_standard_code() {
        let tables = ThirdTables::fill(&GeneticCode::STANDARD);
        let get = |codon: &[u8]| tables.get(seq::codon_index(codon).unwrap());

        assert_site(get(b"CTC"), 0.0, 0.0, 0.0, 1.0);
        assert_site(get(b"ACA"), 0.0, 0.0, 0.0, 1.0);
        assert_site(get(b"ATG"), 1.0, 0.0, 0.0, 0.0);
        assert_site(get(b"TGG"), 1.0, 0.0, 0.0, 0.0);
        assert_site(get(b"AAA"), 0.0, 1.0, 0.0, 0.0);
        // ATC (I): ATT (I), ATA (I), ATG (M)
        assert_site(get(b"ATC"), 1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 0.0);
        // ATA (I): ATG (M) by transition, ATC and ATT (I) by transversion
        assert_site(get(b"ATA"), 0.0, 0.0, 1.0, 0.0);
        assert_site(get(b"TAA"), 0.0, 0.0, 0.0, 0.0);
    }

    #[test]
    fn test_scenedesmus_mitochondrial_code() {
        // TCA is a stop, so TCT keeps only TCC (S) and TCG (S)
        let tables = ThirdTables::fill(&GeneticCode::from_id(22).unwrap());
        let x = tables.get(seq::codon_index(b"TCT").unwrap());
        assert_site(x, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 0.0);
    }
}
