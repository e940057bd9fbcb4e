//! Enzyme execution state.
//!
//! The state bundles everything an amino acid may change:
//! - the strand set (owned here, nowhere else)
//! - the locus: the enzyme's position on the active strand
//! - copy mode
//! - the index of the active strand

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::strand::{Strand, StrandSet};

/// One snapshot of an enzyme bound to a strand.
///
/// `locus` may equal the active strand's length, meaning the enzyme has
/// run off the end.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionState {
    pub strands: StrandSet,
    pub locus: usize,
    pub copy_mode: bool,
    pub active: usize,
}

impl ExecutionState {
    /// Bind to `primary` at `locus`, copy mode off.
    ///
    /// A locus past the end is clamped to the strand's length.
    pub fn new(primary: Strand, locus: usize) -> Self {
        let locus = locus.min(primary.len());
        Self {
            strands: StrandSet::new(primary),
            locus,
            copy_mode: false,
            active: 0,
        }
    }

    /// Wrap an existing strand set. `active` and `locus` are clamped into range.
    ///
    /// The shorter strand of each pair is padded with blanks on the right, so
    /// paired strands always line up cell for cell.
    pub fn with_strands(strands: StrandSet, locus: usize, copy_mode: bool, active: usize) -> Self {
        let mut state = Self { strands, locus, copy_mode, active };
        if state.strands.is_empty() {
            state.strands.push(Strand::default());
        }
        state.strands.align_pairs();
        state.active = state.active.min(state.strands.len() - 1);
        state.locus = state.locus.min(state.active_len());
        state
    }

    /// The strand the locus points into.
    pub fn active_strand(&self) -> &Strand {
        &self.strands[self.active]
    }

    pub fn active_len(&self) -> usize {
        self.active_strand().len()
    }

    /// True if the locus is past the last cell.
    pub fn off_strand(&self) -> bool {
        self.locus >= self.active_len()
    }

    /// Turn the duplex over so the active strand reads left to right.
    ///
    /// Every strand is reversed and the locus is mapped onto the same cell
    /// of the reversed active strand. Pairs are padded to a common length
    /// first so partner cells stay opposite each other.
    pub fn turn_over(&mut self) {
        self.strands.align_pairs();
        let len = self.active_len();
        self.strands.reverse_all();
        self.locus = if self.locus < len { len - self.locus - 1 } else { len };
    }

    /// True if the documented bounds hold and paired strands line up.
    pub fn is_consistent(&self) -> bool {
        self.active < self.strands.len()
            && self.locus <= self.active_len()
            && self.strands.pairs_aligned()
    }
}

impl fmt::Debug for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionState")
            .field("strands", &self.strands)
            .field("locus", &self.locus)
            .field("copy_mode", &self.copy_mode)
            .field("active", &self.active)
            .finish()
    }
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, strand) in self.strands.iter().enumerate() {
            let marker = if i == self.active { '>' } else { ' ' };
            writeln!(f, "{} {}: |{}|", marker, i, strand)?;
            if i == self.active {
                writeln!(f, "     {}^ locus {}", " ".repeat(self.locus), self.locus)?;
            }
        }
        write!(f, "copy mode: {}", if self.copy_mode { "on" } else { "off" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_locus() {
        let state = ExecutionState::new(Strand::parse("ACGT").unwrap(), 9);
        assert_eq!(state.locus, 4);
        assert!(state.off_strand());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_with_strands_clamps_active() {
        let set = StrandSet::parse(&["ACGT", "TG"]).unwrap();
        let state = ExecutionState::with_strands(set, 3, true, 5);
        assert_eq!(state.active, 1);
        assert_eq!(state.locus, 3);
        assert_eq!(state.strands[1].to_string(), "TG  ");
        assert!(state.is_consistent());
    }

    #[test]
    fn test_turn_over_keeps_short_partner_opposite() {
        let mut state = ExecutionState::new(Strand::parse("ACGT").unwrap(), 0);
        state.strands.push(Strand::parse("T").unwrap());
        state.turn_over();
        assert_eq!(state.strands[0].to_string(), "TGCA");
        assert_eq!(state.strands[1].to_string(), "   T");
        assert_eq!(state.strands[1].base(3), Some(crate::strand::Base::T));
        assert_eq!(state.locus, 3);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_turn_over_maps_locus() {
        let set = StrandSet::parse(&["TAGATCCAGTCCACTCGA", "             GA   "]).unwrap();
        let mut state = ExecutionState::with_strands(set, 13, true, 1);
        state.turn_over();
        assert_eq!(state.locus, 4);
        assert_eq!(state.strands[0].to_string(), "AGCTCACCTGACCTAGAT");
        assert_eq!(state.strands[1].to_string(), "   AG             ");
    }

    #[test]
    fn test_turn_over_off_end_stays_off_end() {
        let mut state = ExecutionState::new(Strand::parse("ACG").unwrap(), 3);
        state.turn_over();
        assert_eq!(state.locus, 3);
    }
}
