//! Error types for board construction and move validation.
//!
//! Every error here is a recoverable, reported outcome: a rejected move or a
//! bad setup never mutates state and never aborts the process.

use std::fmt;

use super::types::{Color, Piece, Square};

/// Error type for square-label parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Label is not a file letter followed by a one-based rank number
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSetupError {
    /// Board size outside the supported range (file letters cap it at 26)
    InvalidSize { size: usize },
    /// A placement names a square outside the configured board
    PieceOutOfBounds { square: Square, size: usize },
}

impl fmt::Display for BoardSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardSetupError::InvalidSize { size } => {
                write!(f, "Board size {size} not supported (must be 1-26)")
            }
            BoardSetupError::PieceOutOfBounds { square, size } => {
                write!(
                    f,
                    "Placement at ({}, {}) outside {size}x{size} board",
                    square.rank(),
                    square.file()
                )
            }
        }
    }
}

impl std::error::Error for BoardSetupError {}

/// Error type for rejected move attempts.
///
/// One variant per rejection stage of [`Game::attempt_move`]; the attempt
/// leaves board and turn untouched whichever variant is returned.
///
/// [`Game::attempt_move`]: crate::game::Game::attempt_move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Label malformed or outside the configured board's coordinate space
    InvalidPosition { notation: String },
    /// Start square is empty
    NoPieceAtSquare { square: Square },
    /// Start square holds a piece of the color not on move
    WrongTurn { square: Square, color: Color },
    /// The occupying piece's rule rejected the move
    IllegalMove {
        piece: Piece,
        from: Square,
        to: Square,
    },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidPosition { notation } => {
                write!(f, "Invalid position '{notation}'")
            }
            MoveError::NoPieceAtSquare { square } => {
                write!(f, "No piece at {square}")
            }
            MoveError::WrongTurn { square, color } => {
                write!(f, "Piece at {square} is {color}, not on move")
            }
            MoveError::IllegalMove { piece, from, to } => {
                write!(f, "{piece} cannot move from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

impl From<SquareError> for MoveError {
    fn from(e: SquareError) -> Self {
        match e {
            SquareError::InvalidNotation { notation } => MoveError::InvalidPosition { notation },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_setup_error_invalid_size() {
        let err = BoardSetupError::InvalidSize { size: 40 };
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn test_setup_error_out_of_bounds() {
        let err = BoardSetupError::PieceOutOfBounds {
            square: Square(9, 9),
            size: 8,
        };
        assert!(err.to_string().contains("8x8"));
    }

    #[test]
    fn test_move_error_no_piece() {
        let err = MoveError::NoPieceAtSquare {
            square: Square(3, 4),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_wrong_turn() {
        let err = MoveError::WrongTurn {
            square: Square(6, 0),
            color: Color::Black,
        };
        assert!(err.to_string().contains("Black"));
    }

    #[test]
    fn test_move_error_illegal() {
        let err = MoveError::IllegalMove {
            piece: Piece::Rook,
            from: Square(0, 0),
            to: Square(1, 1),
        };
        assert!(err.to_string().contains("Rook"));
        assert!(err.to_string().contains("a1"));
        assert!(err.to_string().contains("b2"));
    }

    #[test]
    fn test_square_error_converts_to_invalid_position() {
        let err: MoveError = SquareError::InvalidNotation {
            notation: "z99z".to_string(),
        }
        .into();
        assert_eq!(
            err,
            MoveError::InvalidPosition {
                notation: "z99z".to_string()
            }
        );
    }

    #[test]
    fn test_error_clone_equality() {
        let err = MoveError::NoPieceAtSquare {
            square: Square(0, 0),
        };
        assert_eq!(err, err.clone());
    }
}
