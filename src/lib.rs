//! # Typogenetics
//!
//! A strand-editing machine after Hofstadter's Typogenetics.
//!
//! Strands are rows of the four bases A, C, G, T. An enzyme made of amino
//! acids binds to a strand and edits it one instruction at a time: moving,
//! searching, inserting, deleting and cutting, and, in copy mode, building
//! a complementary strand alongside.

pub mod strand;
pub mod machine;

// Re-export commonly used types
pub use strand::{complement, Base, Strand, StrandError, StrandSet};
pub use machine::{AminoAcid, Enzyme, EnzymeError, ExecutionState, Fold, InstructionTable, LookupError};
