//! Moteur de classification de cellules pour vectascii.
//!
//! Maps a single character per cell to its geometric primitives through an
//! ordered, first-match-wins rule table.

pub mod anchor;
pub mod rules;

pub use anchor::CellFrame;
pub use rules::classify;
