//! Instruction engine.
//!
//! Implements every amino acid as a transition on an [`ExecutionState`].
//! Transitions never fail and always leave `locus <= len(active strand)`.
//!
//! While copy mode is on, every cell the enzyme passes over is mirrored as
//! its complement onto the partner of the active strand, at the same offset.
//! The partner is created (blank) and padded as needed.

use log::{debug, trace};
use crate::machine::amino::AminoAcid;
use crate::machine::state::ExecutionState;
use crate::strand::{Base, StrandSet};

impl ExecutionState {
    /// Apply one amino acid. Returns the new locus.
    pub fn execute(&mut self, amino: AminoAcid) -> usize {
        let before = self.locus;

        match amino {
            // ==================== Strand editing ====================

            AminoAcid::Cut => self.cut(),
            AminoAcid::Dlt => self.dlt(),

            // ==================== Enzyme control ====================

            AminoAcid::Swi => {
                self.swi();
            }
            AminoAcid::Mvr => {
                self.mvr();
            }
            AminoAcid::Mvl => {
                self.mvl();
            }
            AminoAcid::Cop => {
                self.cop();
            }
            AminoAcid::Off => {
                self.off();
            }

            // ==================== Insertion ====================

            AminoAcid::Ina => {
                self.insert(Base::A);
            }
            AminoAcid::Inc => {
                self.insert(Base::C);
            }
            AminoAcid::Ing => {
                self.insert(Base::G);
            }
            AminoAcid::Itt => {
                self.insert(Base::T);
            }

            // ==================== Search ====================

            AminoAcid::Rpy => {
                self.search_right(Base::is_pyrimidine);
            }
            AminoAcid::Rpu => {
                self.search_right(Base::is_purine);
            }
            AminoAcid::Lpy => {
                self.search_left(Base::is_pyrimidine);
            }
            AminoAcid::Lpu => {
                self.search_left(Base::is_purine);
            }
        }

        debug!(
            "{}: locus {} -> {}, strand {}, copy {}",
            amino, before, self.locus, self.active, self.copy_mode
        );
        self.locus
    }

    /// Cut the active strand and its partner to the right of the locus.
    /// The cut-off tails are discarded.
    pub fn cut(&mut self) {
        let keep = self.locus + 1;
        self.strands[self.active].truncate(keep);
        if self.strands.has_partner(self.active) {
            let (_, partner) = self.strands.pair_mut(self.active);
            partner.truncate(keep);
        }
    }

    /// Delete the cell under the locus. The locus stays put and now points
    /// at the cell that slid into place.
    ///
    /// Without copy mode the paired cell of the partner goes too. In copy
    /// mode the partner is deliberately left alone, with no blank written
    /// opposite the locus, and the active strand is padded at its end
    /// instead, so both strands keep their length and stay aligned.
    pub fn dlt(&mut self) {
        let locus = self.locus;
        let len = self.active_len();
        if locus >= len {
            return;
        }

        if self.copy_mode {
            let strand = &mut self.strands[self.active];
            strand.remove(locus);
            strand.pad_to(len);
        } else if self.strands.has_partner(self.active) {
            let (active, partner) = self.strands.pair_mut(self.active);
            active.remove(locus);
            partner.remove(locus);
        } else {
            self.strands[self.active].remove(locus);
        }
    }

    /// Switch to the other strand of the pair. Only the index changes;
    /// reading the locus against the new strand is up to the caller
    /// (see [`turn_over`](ExecutionState::turn_over)). The partner is padded
    /// to the active length so the locus stays in range.
    pub fn swi(&mut self) -> usize {
        let len = self.active_len();
        self.strands.ensure_partner(self.active);
        let (_, partner) = self.strands.pair_mut(self.active);
        partner.pad_to(len);
        self.active = StrandSet::partner_of(self.active);
        self.active
    }

    /// Step one cell right, stopping past the end. In copy mode the cell
    /// left and the cell landed on are both mirrored.
    pub fn mvr(&mut self) -> usize {
        self.mirror(self.locus, self.locus + 1);
        self.locus = (self.locus + 1).min(self.active_len());
        self.locus
    }

    /// Step one cell left, stopping at 0. In copy mode the cell left and
    /// the cell landed on are both mirrored.
    pub fn mvl(&mut self) -> usize {
        self.mirror(self.locus.saturating_sub(1), self.locus);
        self.locus = self.locus.saturating_sub(1);
        self.locus
    }

    /// Turn copy mode on. Nothing is mirrored until the enzyme moves.
    pub fn cop(&mut self) -> bool {
        self.copy_mode = true;
        self.copy_mode
    }

    /// Turn copy mode off.
    pub fn off(&mut self) -> bool {
        self.copy_mode = false;
        self.copy_mode
    }

    /// Insert `base` to the right of the locus and move onto it.
    ///
    /// The partner, if any, gets a cell at the same offset: the complement
    /// of `base` in copy mode, an empty cell otherwise. A short partner is
    /// padded to the active length first, so the pair stays aligned.
    pub fn insert(&mut self, base: Base) -> usize {
        let len = self.active_len();
        let at = (self.locus + 1).min(len);
        if self.copy_mode {
            self.strands.ensure_partner(self.active);
        }

        if self.strands.has_partner(self.active) {
            let paired = if self.copy_mode { Some(base.complement()) } else { None };
            let (active, partner) = self.strands.pair_mut(self.active);
            partner.pad_to(len);
            active.insert(at, Some(base));
            partner.insert(at, paired);
        } else {
            self.strands[self.active].insert(at, Some(base));
        }

        self.locus = at;
        self.locus
    }

    /// Move right to the nearest base matching `wanted`, starting one cell
    /// right of the locus. Lands past the end if there is none.
    pub fn search_right(&mut self, wanted: fn(Base) -> bool) -> usize {
        let start = self.locus;
        let len = self.active_len();
        let strand = self.active_strand();
        let found = (start + 1..len)
            .find(|&i| strand.base(i).is_some_and(wanted))
            .unwrap_or(len);

        self.mirror(start, found);
        self.locus = found;
        found
    }

    /// Move left to the nearest base matching `wanted`, starting one cell
    /// left of the locus. Stops at 0 if there is none.
    pub fn search_left(&mut self, wanted: fn(Base) -> bool) -> usize {
        let start = self.locus;
        let strand = self.active_strand();
        let found = (0..start.min(strand.len()))
            .rev()
            .find(|&i| strand.base(i).is_some_and(wanted))
            .unwrap_or(0);

        self.mirror(found, start);
        self.locus = found;
        found
    }

    /// In copy mode, write the complements of active cells `from..=to` onto
    /// the partner. Empty source cells leave the partner as it is.
    fn mirror(&mut self, from: usize, to: usize) {
        if !self.copy_mode {
            return;
        }
        let len = self.active_len();
        if from >= len {
            return;
        }
        let to = to.min(len - 1);

        self.strands.ensure_partner(self.active);
        let (active, partner) = self.strands.pair_mut(self.active);
        partner.pad_to(len);
        for i in from..=to {
            if let Some(base) = active.base(i) {
                partner.set(i, Some(base.complement()));
            }
        }
        trace!("mirrored {}..={} -> |{}|", from, to, partner);
    }
}
