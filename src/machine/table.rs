//! Codon and name lookup.
//!
//! The [`InstructionTable`] is built once and then only read. Anything that
//! turns raw tokens into amino acids takes a reference to it.

use std::collections::HashMap;
use serde_json::Value;
use thiserror::Error;
use crate::machine::amino::{all_codons, AminoAcid, Codon};
use crate::strand::Base;

/// Read-only codon → amino acid and name → amino acid maps.
#[derive(Debug, Clone)]
pub struct InstructionTable {
    by_codon: HashMap<Codon, AminoAcid>,
    by_name: HashMap<&'static str, AminoAcid>,
}

impl InstructionTable {
    /// Build the table over all 16 codons and 15 names.
    pub fn new() -> Self {
        let by_codon = all_codons().map(|c| (c, AminoAcid::from_codon(c))).collect();
        let by_name = AminoAcid::ALL.iter().map(|a| (a.name(), *a)).collect();
        Self { by_codon, by_name }
    }

    /// Look up a codon written as two upper-case letters, e.g. `"TC"`.
    pub fn resolve_codon(&self, text: &str) -> Result<AminoAcid, LookupError> {
        parse_codon(text)
            .and_then(|c| self.by_codon.get(&c).copied())
            .ok_or_else(|| LookupError::NotInSet(text.to_string()))
    }

    /// Look up a three-letter name, e.g. `"rpu"`.
    pub fn resolve_name(&self, text: &str) -> Result<AminoAcid, LookupError> {
        self.by_name
            .get(text)
            .copied()
            .ok_or_else(|| LookupError::NotInSet(text.to_string()))
    }

    /// Look up either form: two characters are read as a codon, anything
    /// else as a name.
    pub fn resolve_str(&self, text: &str) -> Result<AminoAcid, LookupError> {
        if text.chars().count() == 2 {
            self.resolve_codon(text)
        } else {
            self.resolve_name(text)
        }
    }

    /// Look up an untrusted token. Non-strings are rejected before their
    /// content is looked at.
    pub fn resolve(&self, token: &Value) -> Result<AminoAcid, LookupError> {
        self.resolve_str(expect_str(token)?)
    }

    /// Like [`resolve`](Self::resolve), but only names are accepted.
    pub fn resolve_name_token(&self, token: &Value) -> Result<AminoAcid, LookupError> {
        self.resolve_name(expect_str(token)?)
    }

    /// Decode a codon already held as bases.
    pub fn decode(&self, codon: Codon) -> AminoAcid {
        self.by_codon.get(&codon).copied().unwrap_or_else(|| AminoAcid::from_codon(codon))
    }

    /// Codons that decode to `amino`, in alphabet order.
    pub fn codons_of(&self, amino: AminoAcid) -> Vec<Codon> {
        all_codons().filter(|c| self.decode(*c) == amino).collect()
    }

    pub fn codon_count(&self) -> usize {
        self.by_codon.len()
    }

    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }
}

impl Default for InstructionTable {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_codon(text: &str) -> Option<Codon> {
    let mut chars = text.chars();
    let first = Base::from_char(chars.next()?)?;
    let second = Base::from_char(chars.next()?)?;
    match chars.next() {
        None => Some([first, second]),
        Some(_) => None,
    }
}

fn expect_str(token: &Value) -> Result<&str, LookupError> {
    token.as_str().ok_or(LookupError::NotAString(json_kind(token)))
}

fn json_kind(token: &Value) -> &'static str {
    match token {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Why a token could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The token is not text at all.
    #[error("expected a string, found {0}")]
    NotAString(&'static str),

    /// The token is text but names no codon or amino acid.
    #[error("{0:?} is not a known codon or amino acid")]
    NotInSet(String),
}

impl LookupError {
    pub fn is_type_violation(&self) -> bool {
        matches!(self, LookupError::NotAString(_))
    }

    pub fn is_value_violation(&self) -> bool {
        matches!(self, LookupError::NotInSet(_))
    }
}
