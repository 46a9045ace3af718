//! Randomart ("drunken bishop") rendering of byte sequences.
//!
//! A [`Board`] walks a bishop over a small grid, four diagonal steps per input
//! byte, counting visits per cell, then draws the counts as a framed block of
//! ASCII symbols.

pub mod draw;
pub mod error;
pub mod types;
pub mod utils;

pub use error::BishopError;
pub use types::{Board, Config, Grid, InputMode};
