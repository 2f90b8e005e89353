//! Board occupancy state.
//!
//! The board is a mailbox grid: one `Option<(Color, Piece)>` per square. It
//! answers occupancy queries and applies placements; move legality lives
//! entirely in the rules module, and turn order in the game state machine.

use std::fmt;

use super::error::BoardSetupError;
use super::{Color, Piece, Square};

/// Largest supported board edge ('a'..='z' file letters)
pub(crate) const MAX_BOARD_SIZE: usize = 26;

/// An N×N grid of squares, each empty or holding one colored piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: Vec<Option<(Color, Piece)>>,
}

impl Board {
    /// Create the standard 8×8 starting position: back ranks of
    /// R N B Q K B S R (S = SquareKnight) plus a full pawn rank per side,
    /// White on ranks 0-1.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty(8);
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::SquareKnight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board
    }

    /// Create an empty board. Callers validate `size`; the builder is the
    /// public construction path for non-default sizes.
    pub(crate) fn empty(size: usize) -> Self {
        Board {
            size,
            squares: vec![None; size * size],
        }
    }

    /// Edge length of the board
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether the square exists on this board
    #[inline]
    #[must_use]
    pub const fn contains(&self, square: Square) -> bool {
        square.rank() < self.size && square.file() < self.size
    }

    /// The occupant of a square, if any. Off-board squares read as empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        if self.contains(square) {
            self.squares[square.rank() * self.size + square.file()]
        } else {
            None
        }
    }

    /// True if the square exists and holds no piece
    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.contains(square) && self.piece_at(square).is_none()
    }

    /// True if `color` may land on the square: it is empty or holds an
    /// opposing piece (a capture). False for own pieces and off-board squares.
    #[must_use]
    pub fn is_square_available_to(&self, color: Color, square: Square) -> bool {
        if !self.contains(square) {
            return false;
        }
        match self.piece_at(square) {
            None => true,
            Some((occupant_color, _)) => occupant_color != color,
        }
    }

    /// Place a piece, overwriting any occupant. Fails on off-board squares.
    pub fn place(
        &mut self,
        square: Square,
        color: Color,
        piece: Piece,
    ) -> Result<(), BoardSetupError> {
        if !self.contains(square) {
            return Err(BoardSetupError::PieceOutOfBounds {
                square,
                size: self.size,
            });
        }
        self.set_piece(square, color, piece);
        Ok(())
    }

    /// Empty a square. Fails on off-board squares.
    pub fn clear(&mut self, square: Square) -> Result<(), BoardSetupError> {
        if !self.contains(square) {
            return Err(BoardSetupError::PieceOutOfBounds {
                square,
                size: self.size,
            });
        }
        self.remove_piece(square);
        Ok(())
    }

    /// Infallible placement on a pre-validated square
    pub(crate) fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        debug_assert!(self.contains(square));
        self.squares[square.rank() * self.size + square.file()] = Some((color, piece));
    }

    /// Infallible removal on a pre-validated square
    pub(crate) fn remove_piece(&mut self, square: Square) {
        debug_assert!(self.contains(square));
        self.squares[square.rank() * self.size + square.file()] = None;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Render the grid top rank first, occupied squares as `Variant(Color)`
    /// tags and empty squares as `.`, with rank numbers and a file legend.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..self.size).rev() {
            write!(f, "{:>2} ", rank + 1)?;
            for file in 0..self.size {
                if file > 0 {
                    write!(f, " ")?;
                }
                match self.piece_at(Square(rank, file)) {
                    Some((color, piece)) => write!(f, "{}({})", piece.name(), color)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for file in 0..self.size {
            if file > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", (file as u8 + b'a') as char)?;
        }
        Ok(())
    }
}
