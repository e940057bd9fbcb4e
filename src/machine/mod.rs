//! The enzyme machine.
//!
//! This module implements the Typogenetics instruction set:
//! - 16 two-base codons decoding to 15 amino acids
//! - an execution state of strands, locus, copy mode and active strand
//! - one transition per amino acid, applied one at a time by the caller

pub mod amino;
pub mod table;
pub mod state;
pub mod execute;
pub mod enzyme;

pub use amino::{AminoAcid, Codon, Fold};
pub use table::{InstructionTable, LookupError};
pub use state::ExecutionState;
pub use enzyme::{Enzyme, EnzymeError};
