//! Single strand unit (base).
//!
//! A base is one of four symbols. They pair up crosswise:
//! - `A` ↔ `T`
//! - `C` ↔ `G`
//!
//! and fall into two classes used by the search instructions:
//! - purines: `A`, `G`
//! - pyrimidines: `C`, `T`

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single base of a strand.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// All bases in alphabet order: A, C, G, T
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Parse a base from its upper-case letter.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Base::A),
            'C' => Some(Base::C),
            'G' => Some(Base::G),
            'T' => Some(Base::T),
            _ => None,
        }
    }

    /// The letter for this base.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }

    /// The pairing partner (A ↔ T, C ↔ G).
    #[inline]
    pub const fn complement(self) -> Self {
        match self {
            Base::A => Base::T,
            Base::C => Base::G,
            Base::G => Base::C,
            Base::T => Base::A,
        }
    }

    #[inline]
    pub const fn is_purine(self) -> bool {
        matches!(self, Base::A | Base::G)
    }

    #[inline]
    pub const fn is_pyrimidine(self) -> bool {
        matches!(self, Base::C | Base::T)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Base {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Base::from_char(c).ok_or(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_involution() {
        for b in Base::ALL {
            assert_eq!(b.complement().complement(), b, "complement twice should give back {:?}", b);
            assert_ne!(b.complement(), b);
        }
    }

    #[test]
    fn test_classes_partition_alphabet() {
        for b in Base::ALL {
            assert_ne!(b.is_purine(), b.is_pyrimidine());
        }
        assert!(Base::A.is_purine());
        assert!(Base::G.is_purine());
        assert!(Base::C.is_pyrimidine());
        assert!(Base::T.is_pyrimidine());
    }

    #[test]
    fn test_complement_swaps_class() {
        for b in Base::ALL {
            assert_eq!(b.is_purine(), b.complement().is_pyrimidine());
        }
    }

    #[test]
    fn test_char_roundtrip() {
        for b in Base::ALL {
            assert_eq!(Base::from_char(b.to_char()), Some(b));
        }
        assert_eq!(Base::from_char('a'), None);
        assert_eq!(Base::try_from('X'), Err('X'));
    }
}
