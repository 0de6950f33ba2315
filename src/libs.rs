pub mod constants;
pub mod error;
pub mod seq;
pub mod mutation;
pub mod redundancy;
pub mod io;

pub use crate::error::{Error, Result};
pub use crate::redundancy::{DegeneracyTable, LValues};
pub use crate::seq::code::{GeneticCode, Translator};
