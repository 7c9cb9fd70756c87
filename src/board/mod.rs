//! Board Representation and Loading
//!
//! Owns the textual board data and the one-time file read.
//! No rule knowledge - validation lives in the validation module.

pub mod grid;
pub mod loader;

pub use grid::{Board, interior_span};
pub use loader::load_board;
