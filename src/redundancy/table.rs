use std::fmt;
use std::ops;

use crate::constants::*;
use crate::seq::CodonIndex;

type Cube = [[[f64; N_NUCLEOTIDES]; N_NUCLEOTIDES]; N_NUCLEOTIDES];

/// Dense table holding one value for each of the 64 codons.
#[derive(Clone, Copy)]
pub struct CodonTable(Cube);

impl CodonTable {
    #[inline]
    pub fn new() -> CodonTable {
        CodonTable([[[0.0; N_NUCLEOTIDES]; N_NUCLEOTIDES]; N_NUCLEOTIDES])
    }

    /// Iterate over values with the last codon position varying fastest.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter().flat_map(|x| x.iter()).flat_map(|x| x.iter())
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        CodonTable::new()
    }
}

impl PartialEq for CodonTable {
    fn eq(&self, other: &CodonTable) -> bool {
        self.iter().eq(other.iter())
    }
}

impl fmt::Debug for CodonTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl ops::Index<CodonIndex> for CodonTable {
    type Output = f64;

    #[inline]
    fn index(&self, idx: CodonIndex) -> &f64 {
        &self.0[idx[0]][idx[1]][idx[2]]
    }
}

impl ops::IndexMut<CodonIndex> for CodonTable {
    #[inline]
    fn index_mut(&mut self, idx: CodonIndex) -> &mut f64 {
        &mut self.0[idx[0]][idx[1]][idx[2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq;

    #[test]
    fn test_index() {
        let mut x = CodonTable::new();
        x[[1, 2, 3]] = 0.5;
        assert_eq!(x[[1, 2, 3]], 0.5);
        assert_eq!(x[[3, 2, 1]], 0.0);
        assert_eq!(x.iter().filter(|&&v| v != 0.0).count(), 1);
    }

    #[test]
    fn test_iter_order() {
        let mut x = CodonTable::new();
        for (i, idx) in seq::codons().enumerate() {
            x[idx] = i as f64;
        }
        let ys: Vec<f64> = x.iter().cloned().collect();
        assert_eq!(ys.len(), N_CODONS);
        for (i, &y) in ys.iter().enumerate() {
            assert_eq!(y, i as f64);
        }
    }
}
