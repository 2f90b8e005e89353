//! Fluent builder for constructing board positions.
//!
//! The builder is the public path for custom board sizes and placement maps.
//!
//! # Example
//! ```
//! use chess_validator::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 0), Color::White, Piece::Rook)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_at(Square(0, 0)), Some((Color::White, Piece::Rook)));
//! ```

use super::error::BoardSetupError;
use super::state::MAX_BOARD_SIZE;
use super::{Board, Color, Piece, Square};

/// A fluent builder for `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    size: usize,
    pieces: Vec<(Square, Color, Piece)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a builder for an empty 8×8 board.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            size: 8,
            pieces: Vec::new(),
        }
    }

    /// Create a builder pre-loaded with the standard starting layout.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let board = Board::new();
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if let Some((color, piece)) = board.piece_at(sq) {
                    builder.pieces.push((sq, color, piece));
                }
            }
        }
        builder
    }

    /// Set the board edge length (validated at `build` time).
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Place a piece, replacing any earlier placement on the same square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a pending placement from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board, validating the size and every placement's bounds.
    pub fn build(self) -> Result<Board, BoardSetupError> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(BoardSetupError::InvalidSize { size: self.size });
        }
        let mut board = Board::empty(self.size);
        for (square, color, piece) in self.pieces {
            if !board.contains(square) {
                return Err(BoardSetupError::PieceOutOfBounds {
                    square,
                    size: self.size,
                });
            }
            board.set_piece(square, color, piece);
        }
        Ok(board)
    }
}
