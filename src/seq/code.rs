use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::{Error, Result};
use crate::seq::{Codon, Nucleotide, Residue};

/// Translation of codons into amino acid residues.
pub trait Translator {
    /// Amino acid residue encoded by a codon.
    /// Must be defined for every codon spelled from `NUCLEOTIDES`.
    fn translate(&self, codon: &Codon) -> Residue;

    /// Whether a translated residue marks a stop codon.
    #[inline]
    fn is_stop(&self, aa: Residue) -> bool {
        aa == STOP
    }
}

// NCBI translation tables (gc.prt); codon positions follow the order T, C, A, G
const TABLES: [(u8, &str, &[u8; 64]); 27] = [
    (1, "Standard",
        b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (2, "Vertebrate Mitochondrial",
        b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG"),
    (3, "Yeast Mitochondrial",
        b"FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (4, "Mold, Protozoan, and Coelenterate Mitochondrial and Mycoplasma/Spiroplasma",
        b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (5, "Invertebrate Mitochondrial",
        b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG"),
    (6, "Ciliate, Dasycladacean and Hexamita Nuclear",
        b"FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (9, "Echinoderm and Flatworm Mitochondrial",
        b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    (10, "Euplotid Nuclear",
        b"FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (11, "Bacterial, Archaeal and Plant Plastid",
        b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (12, "Alternative Yeast Nuclear",
        b"FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (13, "Ascidian Mitochondrial",
        b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG"),
    (14, "Alternative Flatworm Mitochondrial",
        b"FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    (15, "Blepharisma Macronuclear",
        b"FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (16, "Chlorophycean Mitochondrial",
        b"FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (21, "Trematode Mitochondrial",
        b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    (22, "Scenedesmus obliquus Mitochondrial",
        b"FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (23, "Thraustochytrium Mitochondrial",
        b"FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (24, "Rhabdopleuridae Mitochondrial",
        b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
    (25, "Candidate Division SR1 and Gracilibacteria",
        b"FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (26, "Pachysolen tannophilus Nuclear",
        b"FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (27, "Karyorelict Nuclear",
        b"FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (28, "Condylostoma Nuclear",
        b"FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (29, "Mesodinium Nuclear",
        b"FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (30, "Peritrich Nuclear",
        b"FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (31, "Blastocrithidia Nuclear",
        b"FFLLSSSSYYEECCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (32, "Balanophoraceae Plastid",
        b"FFLLSSSSYY*WCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    (33, "Cephalodiscidae Mitochondrial",
        b"FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
];

/// Genetic code, identified by its NCBI translation table id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneticCode {
    /// Index into `TABLES`
    entry: usize,
}

impl GeneticCode {
    pub const STANDARD: GeneticCode = GeneticCode { entry: 0 };
    pub const VERTEBRATE_MITOCHONDRIAL: GeneticCode = GeneticCode { entry: 1 };

    pub fn from_id(id: u8) -> Result<GeneticCode> {
        TABLES.iter()
            .position(|&(x, _, _)| x == id)
            .map(|entry| GeneticCode { entry })
            .ok_or_else(|| Error::UnknownGeneticCode(id.to_string()))
    }

    /// All supported genetic codes, in order of NCBI id.
    pub fn all() -> impl Iterator<Item = GeneticCode> {
        (0 .. TABLES.len()).map(|entry| GeneticCode { entry })
    }

    #[inline]
    pub fn id(&self) -> u8 {
        TABLES[self.entry].0
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        TABLES[self.entry].1
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        GeneticCode::STANDARD
    }
}

#[inline]
fn ncbi_index(x: Nucleotide) -> usize {
    match x {
        b'T' => 0,
        b'C' => 1,
        b'A' => 2,
        b'G' => 3,
        _ => 0,
    }
}

impl Translator for GeneticCode {
    fn translate(&self, codon: &Codon) -> Residue {
        let i = (ncbi_index(codon[0]) * N_NUCLEOTIDES + ncbi_index(codon[1])) * N_NUCLEOTIDES
            + ncbi_index(codon[2]);
        TABLES[self.entry].2[i]
    }
}

impl fmt::Display for GeneticCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for GeneticCode {
    type Err = Error;

    /// Parse an NCBI table id, or the name of one of the named codes.
    fn from_str(s: &str) -> Result<GeneticCode> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return GeneticCode::from_id(id);
        }
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(GeneticCode::STANDARD),
            "vertebrate_mitochondrial" => Ok(GeneticCode::VERTEBRATE_MITOCHONDRIAL),
            _ => Err(Error::UnknownGeneticCode(s.to_owned())),
        }
    }
}
