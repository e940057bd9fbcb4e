//! Strands and strand sets.
//!
//! A [`Strand`] is a row of cells, each holding a [`Base`] or nothing. Empty
//! cells come from padding and from deletion and are written as spaces, so
//! `"T  G"` is a four-cell strand with two gaps.
//!
//! A [`StrandSet`] holds every strand of one run. Strands are kept in pairs
//! (0 with 1, 2 with 3, ...) and every strand of a pair is addressed in the
//! same offset space as its partner.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::strand::Base;

/// One cell of a strand: a base, or the empty marker.
pub type Cell = Option<Base>;

/// An editable row of cells.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Strand {
    cells: Vec<Cell>,
}

impl Strand {
    /// Create a strand from raw cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Create a strand of `len` empty cells.
    pub fn blank(len: usize) -> Self {
        Self { cells: vec![None; len] }
    }

    /// Parse strand text. Bases may be upper or lower case; a space is an
    /// empty cell.
    pub fn parse(s: &str) -> Result<Self, StrandError> {
        let cells = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                ' ' => Ok(None),
                _ => Base::from_char(c.to_ascii_uppercase())
                    .map(Some)
                    .ok_or(StrandError::InvalidSymbol { symbol: c, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells of this strand.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The base at `index`, or `None` for an empty cell or an index past the end.
    #[inline]
    pub fn base(&self, index: usize) -> Option<Base> {
        self.cells.get(index).copied().flatten()
    }

    /// Overwrite a cell. Indices past the end are ignored.
    pub fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// Insert a cell at `index` (clamped to the end), shifting the tail right.
    pub fn insert(&mut self, index: usize, cell: Cell) {
        let index = index.min(self.cells.len());
        self.cells.insert(index, cell);
    }

    /// Remove the cell at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Option<Cell> {
        if index < self.cells.len() {
            Some(self.cells.remove(index))
        } else {
            None
        }
    }

    /// Keep only the first `len` cells.
    pub fn truncate(&mut self, len: usize) {
        self.cells.truncate(len);
    }

    /// Append empty cells until the strand is at least `len` long.
    pub fn pad_to(&mut self, len: usize) {
        if self.cells.len() < len {
            self.cells.resize(len, None);
        }
    }

    /// Reverse the cell order in place.
    pub fn reverse(&mut self) {
        self.cells.reverse();
    }
}

/// The complement of `strand` over `[start, end)`.
///
/// The result has the same length as `strand`; cells outside the range,
/// and empty cells inside it, are empty.
pub fn complement(strand: &Strand, start: usize, end: usize) -> Strand {
    let end = end.min(strand.len());
    let mut out = Strand::blank(strand.len());
    for i in start..end {
        out.set(i, strand.base(i).map(Base::complement));
    }
    out
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(b) => write!(f, "{}", b)?,
                None => write!(f, " ")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strand(\"{}\")", self)
    }
}

impl FromStr for Strand {
    type Err = StrandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strand::parse(s)
    }
}

impl TryFrom<String> for Strand {
    type Error = StrandError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Strand::parse(&s)
    }
}

impl From<Strand> for String {
    fn from(strand: Strand) -> Self {
        strand.to_string()
    }
}

/// All strands of one run. Index 0 is the primary strand.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrandSet {
    strands: Vec<Strand>,
}

impl StrandSet {
    /// A set holding only the primary strand.
    pub fn new(primary: Strand) -> Self {
        Self { strands: vec![primary] }
    }

    pub fn from_strands(strands: Vec<Strand>) -> Self {
        Self { strands }
    }

    /// Parse each text as a strand, in order.
    pub fn parse(texts: &[&str]) -> Result<Self, StrandError> {
        let strands = texts.iter().map(|t| Strand::parse(t)).collect::<Result<_, _>>()?;
        Ok(Self { strands })
    }

    /// Index of the strand paired with `index`.
    #[inline]
    pub const fn partner_of(index: usize) -> usize {
        index ^ 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    pub fn push(&mut self, strand: Strand) {
        self.strands.push(strand);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Strand> {
        self.strands.iter()
    }

    /// True if the strand paired with `index` exists.
    pub fn has_partner(&self, index: usize) -> bool {
        Self::partner_of(index) < self.strands.len()
    }

    /// Append a blank partner for `index` if it has none, sized like the
    /// strand at `index`.
    pub fn ensure_partner(&mut self, index: usize) {
        let len = self.strands.get(index).map_or(0, Strand::len);
        while !self.has_partner(index) {
            self.strands.push(Strand::blank(len));
        }
    }

    /// Mutable access to the strand at `index` and its partner, in that order.
    ///
    /// # Panics
    /// Panics if either strand does not exist; call [`ensure_partner`] first.
    ///
    /// [`ensure_partner`]: StrandSet::ensure_partner
    pub fn pair_mut(&mut self, index: usize) -> (&mut Strand, &mut Strand) {
        let partner = Self::partner_of(index);
        let (lo, hi) = (index.min(partner), index.max(partner));
        let (left, right) = self.strands.split_at_mut(hi);
        let (low, high) = (&mut left[lo], &mut right[0]);
        if index < partner {
            (low, high)
        } else {
            (high, low)
        }
    }

    /// Pad the shorter strand of every pair with blanks so both strands of
    /// a pair have the same length. An unpaired last strand is left alone.
    pub fn align_pairs(&mut self) {
        for pair in self.strands.chunks_mut(2) {
            if let [first, second] = pair {
                let len = first.len().max(second.len());
                first.pad_to(len);
                second.pad_to(len);
            }
        }
    }

    /// True if both strands of every pair have the same length.
    pub fn pairs_aligned(&self) -> bool {
        self.strands
            .chunks(2)
            .all(|pair| pair.iter().all(|s| s.len() == pair[0].len()))
    }

    /// Reverse every strand in place.
    pub fn reverse_all(&mut self) {
        for s in &mut self.strands {
            s.reverse();
        }
    }
}

impl std::ops::Index<usize> for StrandSet {
    type Output = Strand;

    fn index(&self, index: usize) -> &Strand {
        &self.strands[index]
    }
}

impl std::ops::IndexMut<usize> for StrandSet {
    fn index_mut(&mut self, index: usize) -> &mut Strand {
        &mut self.strands[index]
    }
}

impl fmt::Debug for StrandSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.strands.iter()).finish()
    }
}

impl fmt::Display for StrandSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.strands.iter().enumerate() {
            writeln!(f, "{}: |{}|", i, s)?;
        }
        Ok(())
    }
}

/// Errors from reading strand text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrandError {
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Strand {
        Strand::parse(text).unwrap()
    }

    #[test]
    fn test_parse_display_roundtrip() {
        for text in ["ACGT", "T  G", "", "   "] {
            assert_eq!(s(text).to_string(), text);
        }
        assert_eq!(s("acgt"), s("ACGT"));
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        assert_eq!(
            Strand::parse("ACXT"),
            Err(StrandError::InvalidSymbol { symbol: 'X', position: 2 })
        );
    }

    #[test]
    fn test_complement_keeps_offsets() {
        let strand = s("TAGATCCAGTCCACTCGA");
        let c = complement(&strand, 13, 14);
        assert_eq!(c.to_string(), "             G    ");
        assert_eq!(c.len(), strand.len());
    }

    #[test]
    fn test_complement_full_range_and_gaps() {
        assert_eq!(complement(&s("ACGT"), 0, 4).to_string(), "TGCA");
        assert_eq!(complement(&s("A G "), 0, 4).to_string(), "T C ");
        assert_eq!(complement(&s("ACGT"), 2, 99).to_string(), "  CA");
        assert_eq!(complement(&s("ACGT"), 3, 1).to_string(), "    ");
    }

    #[test]
    fn test_insert_and_remove_shift_tail() {
        let mut strand = s("ACGT");
        strand.insert(1, Some(Base::T));
        assert_eq!(strand.to_string(), "ATCGT");
        assert_eq!(strand.remove(0), Some(Some(Base::A)));
        assert_eq!(strand.to_string(), "TCGT");
        assert_eq!(strand.remove(10), None);
        strand.insert(99, None);
        assert_eq!(strand.to_string(), "TCGT ");
    }

    #[test]
    fn test_pad_never_shrinks() {
        let mut strand = s("AC");
        strand.pad_to(4);
        assert_eq!(strand.to_string(), "AC  ");
        strand.pad_to(1);
        assert_eq!(strand.len(), 4);
    }

    #[test]
    fn test_ensure_partner_and_pair_mut() {
        let mut set = StrandSet::new(s("ACG"));
        assert!(!set.has_partner(0));
        set.ensure_partner(0);
        assert_eq!(set.len(), 2);
        assert_eq!(set[1].to_string(), "   ");

        let (active, partner) = set.pair_mut(1);
        active.set(0, Some(Base::T));
        partner.set(0, Some(Base::G));
        assert_eq!(set[0].to_string(), "GCG");
        assert_eq!(set[1].to_string(), "T  ");
    }

    #[test]
    fn test_align_pairs_pads_shorter_partner() {
        let mut set = StrandSet::parse(&["ACGT", "T", "G"]).unwrap();
        assert!(!set.pairs_aligned());
        set.align_pairs();
        assert!(set.pairs_aligned());
        assert_eq!(set[0].to_string(), "ACGT");
        assert_eq!(set[1].to_string(), "T   ");
        assert_eq!(set[2].to_string(), "G");
    }

    #[test]
    fn test_serde_as_text() {
        let set = StrandSet::parse(&["AC G", "T"]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"strands":["AC G","T"]}"#);
        let back: StrandSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
