//! Amino acids: the enzyme's instruction set.
//!
//! Each amino acid is written on a strand as a two-base codon, giving 16
//! codons for 15 instructions (deletion owns both `AA` and `AG`). Each also
//! has a three-letter name and a fold tag describing how it bends the
//! enzyme's tertiary structure.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::strand::Base;

/// A two-base codon.
pub type Codon = [Base; 2];

/// Fold contributed to the enzyme's tertiary structure.
///
/// Only descriptive; it never changes what an instruction does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fold {
    /// Straight (`s`)
    Straight,
    /// Right turn (`r`)
    Right,
    /// Left turn (`l`)
    Left,
}

impl Fold {
    /// The one-letter tag.
    pub const fn tag(self) -> char {
        match self {
            Fold::Straight => 's',
            Fold::Right => 'r',
            Fold::Left => 'l',
        }
    }
}

impl fmt::Display for Fold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One enzyme instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AminoAcid {
    // ==================== Strand editing ====================

    /// Cut the strand(s) to the right of the current unit
    Cut,
    /// Delete the current unit
    Dlt,

    // ==================== Enzyme control ====================

    /// Switch to the other strand of the pair
    Swi,
    /// Move one unit right
    Mvr,
    /// Move one unit left
    Mvl,
    /// Copy mode on
    Cop,
    /// Copy mode off
    Off,

    // ==================== Insertion ====================

    /// Insert A right of the current unit
    Ina,
    /// Insert C right of the current unit
    Inc,
    /// Insert G right of the current unit
    Ing,
    /// Insert T right of the current unit
    Itt,

    // ==================== Search ====================

    /// Nearest pyrimidine to the right
    Rpy,
    /// Nearest purine to the right
    Rpu,
    /// Nearest pyrimidine to the left
    Lpy,
    /// Nearest purine to the left
    Lpu,
}

impl AminoAcid {
    /// Every amino acid, each once.
    pub const ALL: [AminoAcid; 15] = [
        AminoAcid::Cut,
        AminoAcid::Dlt,
        AminoAcid::Swi,
        AminoAcid::Mvr,
        AminoAcid::Mvl,
        AminoAcid::Cop,
        AminoAcid::Off,
        AminoAcid::Ina,
        AminoAcid::Inc,
        AminoAcid::Ing,
        AminoAcid::Itt,
        AminoAcid::Rpy,
        AminoAcid::Rpu,
        AminoAcid::Lpy,
        AminoAcid::Lpu,
    ];

    /// The three-letter name.
    pub const fn name(self) -> &'static str {
        match self {
            AminoAcid::Cut => "cut",
            AminoAcid::Dlt => "dlt",
            AminoAcid::Swi => "swi",
            AminoAcid::Mvr => "mvr",
            AminoAcid::Mvl => "mvl",
            AminoAcid::Cop => "cop",
            AminoAcid::Off => "off",
            AminoAcid::Ina => "ina",
            AminoAcid::Inc => "inc",
            AminoAcid::Ing => "ing",
            AminoAcid::Itt => "itt",
            AminoAcid::Rpy => "rpy",
            AminoAcid::Rpu => "rpu",
            AminoAcid::Lpy => "lpy",
            AminoAcid::Lpu => "lpu",
        }
    }

    /// The turn this amino acid puts into the folded enzyme.
    pub const fn fold(self) -> Fold {
        match self {
            AminoAcid::Cut
            | AminoAcid::Dlt
            | AminoAcid::Mvr
            | AminoAcid::Mvl
            | AminoAcid::Ina => Fold::Straight,
            AminoAcid::Swi
            | AminoAcid::Cop
            | AminoAcid::Inc
            | AminoAcid::Ing
            | AminoAcid::Rpy => Fold::Right,
            AminoAcid::Off
            | AminoAcid::Itt
            | AminoAcid::Rpu
            | AminoAcid::Lpy
            | AminoAcid::Lpu => Fold::Left,
        }
    }

    /// Short human description, for listings.
    pub const fn description(self) -> &'static str {
        match self {
            AminoAcid::Cut => "cut strand(s) to the right of this unit",
            AminoAcid::Dlt => "delete this unit from the strand",
            AminoAcid::Swi => "switch enzyme to the other strand",
            AminoAcid::Mvr => "move one unit to the right",
            AminoAcid::Mvl => "move one unit to the left",
            AminoAcid::Cop => "turn on copy mode",
            AminoAcid::Off => "turn off copy mode",
            AminoAcid::Ina => "insert A to the right of this unit",
            AminoAcid::Inc => "insert C to the right of this unit",
            AminoAcid::Ing => "insert G to the right of this unit",
            AminoAcid::Itt => "insert T to the right of this unit",
            AminoAcid::Rpy => "search for the nearest pyrimidine to the right",
            AminoAcid::Rpu => "search for the nearest purine to the right",
            AminoAcid::Lpy => "search for the nearest pyrimidine to the left",
            AminoAcid::Lpu => "search for the nearest purine to the left",
        }
    }

    /// Decode a codon. Total over all 16 codons.
    pub const fn from_codon(codon: Codon) -> Self {
        use Base::*;
        match codon {
            [A, A] => AminoAcid::Dlt,
            [A, C] => AminoAcid::Cut,
            [A, G] => AminoAcid::Dlt,
            [A, T] => AminoAcid::Swi,
            [C, A] => AminoAcid::Mvr,
            [C, C] => AminoAcid::Mvl,
            [C, G] => AminoAcid::Cop,
            [C, T] => AminoAcid::Off,
            [G, A] => AminoAcid::Ina,
            [G, C] => AminoAcid::Inc,
            [G, G] => AminoAcid::Ing,
            [G, T] => AminoAcid::Itt,
            [T, A] => AminoAcid::Rpy,
            [T, C] => AminoAcid::Rpu,
            [T, G] => AminoAcid::Lpy,
            [T, T] => AminoAcid::Lpu,
        }
    }

    /// The base an insertion instruction writes.
    pub const fn inserted_base(self) -> Option<Base> {
        match self {
            AminoAcid::Ina => Some(Base::A),
            AminoAcid::Inc => Some(Base::C),
            AminoAcid::Ing => Some(Base::G),
            AminoAcid::Itt => Some(Base::T),
            _ => None,
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// All 16 codons in alphabet order (`AA`, `AC`, ..., `TT`).
pub fn all_codons() -> impl Iterator<Item = Codon> {
    Base::ALL
        .into_iter()
        .flat_map(|first| Base::ALL.into_iter().map(move |second| [first, second]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_distinct() {
        let names: HashSet<_> = AminoAcid::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn test_codons_cover_every_amino_acid() {
        let decoded: HashSet<_> = all_codons().map(AminoAcid::from_codon).collect();
        assert_eq!(decoded.len(), 15);
        assert_eq!(all_codons().count(), 16);
    }

    #[test]
    fn test_deletion_owns_two_codons() {
        let dlt: Vec<_> = all_codons()
            .filter(|c| AminoAcid::from_codon(*c) == AminoAcid::Dlt)
            .collect();
        assert_eq!(dlt, vec![[Base::A, Base::A], [Base::A, Base::G]]);
    }

    #[test]
    fn test_fold_tags() {
        let expected = [
            ("cut", 's'), ("dlt", 's'), ("swi", 'r'), ("mvr", 's'),
            ("mvl", 's'), ("cop", 'r'), ("off", 'l'),
            ("ina", 's'), ("inc", 'r'), ("ing", 'r'), ("itt", 'l'),
            ("rpy", 'r'), ("rpu", 'l'), ("lpy", 'l'), ("lpu", 'l'),
        ];
        for (amino, (name, tag)) in AminoAcid::ALL.iter().zip(expected) {
            assert_eq!(amino.name(), name);
            assert_eq!(amino.fold().tag(), tag, "fold of {}", name);
        }
    }

    #[test]
    fn test_inserted_base() {
        assert_eq!(AminoAcid::Itt.inserted_base(), Some(Base::T));
        assert_eq!(AminoAcid::Ina.inserted_base(), Some(Base::A));
        assert_eq!(AminoAcid::Rpy.inserted_base(), None);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&AminoAcid::Rpu).unwrap();
        assert_eq!(json, "\"rpu\"");
    }
}
