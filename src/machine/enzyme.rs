//! Enzyme: a validated list of amino acids.
//!
//! An enzyme comes either from a command list (three-letter names, as found
//! in a JSON document) or from a strand read two bases at a time. Running
//! the enzyme is left to the caller, one [`ExecutionState::execute`] per
//! amino acid.
//!
//! [`ExecutionState::execute`]: crate::machine::ExecutionState::execute

use std::fmt;
use log::warn;
use serde::{Serialize, Deserialize};
use serde_json::Value;
use thiserror::Error;
use crate::machine::amino::{AminoAcid, Fold};
use crate::machine::table::{InstructionTable, LookupError};
use crate::strand::Strand;

/// A checked sequence of amino acids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Enzyme {
    commands: Vec<AminoAcid>,
}

impl Enzyme {
    /// Validate a command list.
    ///
    /// Every token must be a string naming one of the 15 amino acids. The
    /// first bad token stops validation; its index and the kind of violation
    /// are reported.
    pub fn new(table: &InstructionTable, tokens: &[Value]) -> Result<Self, EnzymeError> {
        let commands = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                table
                    .resolve_name_token(token)
                    .map_err(|source| EnzymeError::Command { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { commands })
    }

    /// Parse a JSON array of names, then validate it like [`Enzyme::new`].
    pub fn from_json(table: &InstructionTable, text: &str) -> Result<Self, EnzymeError> {
        let tokens: Vec<Value> = serde_json::from_str(text)?;
        Self::new(table, &tokens)
    }

    /// Read the enzyme a strand encodes, one codon per two bases.
    ///
    /// A trailing odd base and codons touching an empty cell are skipped.
    pub fn translate(table: &InstructionTable, strand: &Strand) -> Self {
        let commands = strand
            .cells()
            .chunks(2)
            .enumerate()
            .filter_map(|(i, pair)| match pair {
                [Some(first), Some(second)] => Some(table.decode([*first, *second])),
                [_] => None,
                _ => {
                    warn!("skipping codon {} at offset {}: empty cell", i, i * 2);
                    None
                }
            })
            .collect();
        Self { commands }
    }

    pub fn commands(&self) -> &[AminoAcid] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The fold of each amino acid, in order.
    pub fn folds(&self) -> Vec<Fold> {
        self.commands.iter().map(|a| a.fold()).collect()
    }

    /// The three-letter names, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|a| a.name()).collect()
    }
}

impl fmt::Display for Enzyme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join("-"))
    }
}

/// Errors from building an enzyme.
#[derive(Debug, Error)]
pub enum EnzymeError {
    #[error("command {index}: {source}")]
    Command {
        index: usize,
        #[source]
        source: LookupError,
    },

    #[error("malformed command list: {0}")]
    Json(#[from] serde_json::Error),
}

impl EnzymeError {
    /// The lookup failure behind a rejected command, if that is what this is.
    pub fn lookup(&self) -> Option<&LookupError> {
        match self {
            EnzymeError::Command { source, .. } => Some(source),
            EnzymeError::Json(_) => None,
        }
    }
}
