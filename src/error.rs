use std::io;
use std::result;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Codon is not exactly three of the uppercase nucleotides A, G, C, T
    #[error("invalid codon {0:?}: expected three of A, G, C, T")]
    InvalidCodon(String),
    #[error("unknown genetic code: {0}")]
    UnknownGeneticCode(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
