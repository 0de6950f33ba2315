// nucleotides are enumerated and looked up in the order A, G, C, T
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'G', b'C', b'T'];
pub const N_NUCLEOTIDES: usize = 4;

pub const N_CODONS: usize = N_NUCLEOTIDES * N_NUCLEOTIDES * N_NUCLEOTIDES;
pub const CODON_LEN: usize = 3;

pub const STOP: u8 = b'*';
