//! Core board types.
//!
//! - `Piece` and `Color` - piece variants and player colors
//! - `Square` - (rank, file) square representation with label parsing

mod piece;
mod square;

pub use piece::{Color, Piece};
pub use square::Square;
