//! Board representation and per-piece move rules.
//!
//! The board is a plain occupancy grid; legality is decided by pure
//! per-piece predicates over that grid, and turn order by [`crate::game`].
//!
//! # Example
//! ```
//! use chess_validator::board::{Board, Color, Piece, Square};
//!
//! let board = Board::new();
//! assert_eq!(board.piece_at(Square(0, 4)), Some((Color::White, Piece::King)));
//! assert!(board.is_legal_move(Piece::Pawn, Color::White, Square(1, 0), Square(2, 0)));
//! ```

mod builder;
mod error;
mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardSetupError, MoveError, SquareError};
pub use state::Board;
pub use types::{Color, Piece, Square};
