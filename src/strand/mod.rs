//! Strand primitives.
//!
//! This module provides the data the enzyme works on:
//! - [`Base`] - One of the four units A, C, G, T
//! - [`Strand`] - A row of bases and empty cells
//! - [`StrandSet`] - The primary strand plus the strands copied from it

mod base;
mod sequence;

pub use base::Base;
pub use sequence::{complement, Cell, Strand, StrandError, StrandSet};
