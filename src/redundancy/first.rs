use log::trace;

use crate::redundancy::table::CodonTable;
use crate::redundancy::tally::Tally;
use crate::seq::{self, CodonIndex};
use crate::seq::code::Translator;

/// Degeneracy of the first codon position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FirstSite {
    /// Nondegenerate fraction
    pub non: f64,
    /// Fraction that is synonymous via a transition
    pub two_s: f64,
    /// Fraction that is synonymous via a transversion
    pub two_v: f64,
}

impl FirstSite {
    /// Resolve the degeneracy of a first position from its substitution counts.
    ///
    /// The cases are checked in order:
    /// no counted substitutions (stop codon), no synonymous substitutions,
    /// both transitions and transversions possible, and a single substitution type.
    pub fn from_tally(x: &Tally) -> FirstSite {
        let syn_ts = x.syn_ts as f64;
        let syn_tv = x.syn_tv as f64;
        let poss_ts = x.poss_ts as f64;
        let poss_tv = x.poss_tv as f64;

        if x.possible() == 0 {
            FirstSite::default()
        } else if x.synonymous() == 0 {
            FirstSite { non: 1.0, two_s: 0.0, two_v: 0.0 }
        } else if x.poss_ts > 0 && x.poss_tv > 0 {
            let (two_s, two_v) = if syn_ts / poss_ts != 1.0 && syn_tv / poss_tv != 1.0 {
                // fractional redundancy: share the combined number of possible substitutions
                (syn_ts / (poss_ts + poss_tv), syn_tv / (poss_ts + poss_tv))
            } else {
                // one type is entirely synonymous
                (syn_ts / poss_ts, syn_tv / poss_tv)
            };
            FirstSite { non: 1.0 - two_s - two_v, two_s, two_v }
        } else {
            let two_s = if x.poss_ts > 0 { syn_ts / (poss_ts + poss_tv) } else { 0.0 };
            let two_v = if x.poss_tv > 0 { syn_tv / (poss_tv + poss_ts) } else { 0.0 };
            FirstSite { non: 1.0 - two_s - two_v, two_s, two_v }
        }
    }
}

/// First position degeneracy of every codon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FirstTables {
    pub non: CodonTable,
    pub two_s: CodonTable,
    pub two_v: CodonTable,
}

impl FirstTables {
    pub fn fill<T: Translator>(translator: &T) -> FirstTables {
        let mut tables = FirstTables::default();
        for idx in seq::codons() {
            let x = Tally::count(translator, idx, 0);
            let site = FirstSite::from_tally(&x);
            trace!("first position of {}: {:?} -> {:?}", seq::codon_str(&seq::codon_at(idx)), x, site);
            tables.set(idx, site);
        }
        tables
    }

    #[inline]
    pub fn get(&self, idx: CodonIndex) -> FirstSite {
        FirstSite { non: self.non[idx], two_s: self.two_s[idx], two_v: self.two_v[idx] }
    }

    fn set(&mut self, idx: CodonIndex, site: FirstSite) {
        self.non[idx] = site.non;
        self.two_s[idx] = site.two_s;
        self.two_v[idx] = site.two_v;
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

    fn assert_site(x: FirstSite, non: f64, two_s: f64, two_v: f64) {
        assert!((x.non - non).abs() < EPS, "{:?}", x);
        assert!((x.two_s - two_s).abs() < EPS, "{:?}", x);
        assert!((x.two_v - two_v).abs() < EPS, "{:?}", x);
    }

    #[test]
    fn test_stop() {
        assert_eq!(FirstSite::from_tally(&Tally::default()), FirstSite::default());
    }

    #[test]
    fn test_nondegenerate() {
        assert_site(FirstSite::from_tally(&tally(0, 0, 1, 2)), 1.0, 0.0, 0.0);
        assert_site(FirstSite::from_tally(&tally(0, 0, 0, 1)), 1.0, 0.0, 0.0);
    }

    #[test]
    fn test_fractional_redundancy() {
        // divided by the combined number of possible substitutions
        assert_site(FirstSite::from_tally(&tally(0, 1, 1, 2)), 2.0 / 3.0, 0.0, 1.0 / 3.0);
    }

    #[test]
    fn test_odd_degeneracy() {
        // all transitions are synonymous: each class divided by its own count
        assert_site(FirstSite::from_tally(&tally(1, 0, 1, 2)), 0.0, 1.0, 0.0);
        assert_site(FirstSite::from_tally(&tally(0, 1, 1, 1)), 0.0, 0.0, 1.0);
    }

    #[test]
    fn test_single_type() {
        assert_site(FirstSite::from_tally(&tally(0, 1, 0, 2)), 0.5, 0.0, 0.5);
        assert_site(FirstSite::from_tally(&tally(1, 0, 1, 0)), 0.0, 1.0, 0.0);
    }

    #[test]
    fn test_standard_code() {
        let tables = FirstTables::fill(&GeneticCode::STANDARD);
        let get = |codon: &[u8]| tables.get(seq::codon_index(codon).unwrap());

        assert_site(get(b"ATG"), 1.0, 0.0, 0.0);
        assert_site(get(b"TAA"), 0.0, 0.0, 0.0);
        // CGA (R): TGA is a stop, AGA (R) and GGA (G) are transversions
        assert_site(get(b"CGA"), 0.5, 0.0, 0.5);
        // AGA (R): GGA (G) by transition, CGA (R) by transversion, TGA is a stop
        assert_site(get(b"AGA"), 0.0, 0.0, 1.0);
        assert_site(get(b"AGG"), 2.0 / 3.0, 0.0, 1.0 / 3.0);
        // TTA (L): CTA (L) by transition, ATA (I) and GTA (V) by transversion
        assert_site(get(b"TTA"), 0.0, 1.0, 0.0);
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let code = GeneticCode::STANDARD;
        let tables = FirstTables::fill(&code);
        for idx in seq::codons() {
            let x = tables.get(idx);
            let sum = x.non + x.two_s + x.two_v;
            if code.is_stop(code.translate(&seq::codon_at(idx))) {
                assert_eq!(sum, 0.0);
            } else {
                assert!((sum - 1.0).abs() < EPS);
            }
        }
    }
}
