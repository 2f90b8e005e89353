//! Turn-taking game state machine.
//!
//! `Game` wraps one [`Board`] and the color on move, and is the only writer
//! of either. A move attempt is validated end to end and then committed, or
//! rejected with a [`MoveError`] and no state change at all. There are
//! exactly two states, White to move and Black to move; nothing here knows
//! about check, checkmate or game over.

use crate::board::{Board, Color, MoveError, Square};

/// A game in progress: board occupancy plus whose turn it is.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Start a game from the standard layout, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
        }
    }

    /// Start a game from a custom position, White to move.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            turn: Color::White,
        }
    }

    /// The board as it currently stands
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color currently on move
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Validate and apply one move given as square labels.
    ///
    /// Validation stages, in order:
    /// 1. resolve both labels against this board ([`MoveError::InvalidPosition`])
    /// 2. the start square must be occupied ([`MoveError::NoPieceAtSquare`])
    /// 3. the occupant must belong to the color on move ([`MoveError::WrongTurn`])
    /// 4. the destination must be empty or opposing, and the occupant's own
    ///    rule must accept the move ([`MoveError::IllegalMove`])
    ///
    /// On success the piece is moved, overwriting any opposing piece on the
    /// destination (captures, the King included), and the turn flips. On any
    /// error neither the board nor the turn changes.
    pub fn attempt_move(&mut self, start: &str, end: &str) -> Result<(), MoveError> {
        let from = self.resolve(start)?;
        let to = self.resolve(end)?;

        let (color, piece) = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSquare { square: from })?;
        if color != self.turn {
            return Err(MoveError::WrongTurn {
                square: from,
                color,
            });
        }

        #[cfg(feature = "logging")]
        log::debug!("{color} attempts {piece} {from} -> {to}");

        // Own-piece destinations are rejected here rather than in the piece
        // rules, which never inspect the destination occupant.
        if !self.board.is_square_available_to(color, to)
            || !self.board.is_legal_move(piece, color, from, to)
        {
            #[cfg(feature = "logging")]
            log::debug!("rejected: {piece} {from} -> {to}");
            return Err(MoveError::IllegalMove { piece, from, to });
        }

        self.board.remove_piece(from);
        self.board.set_piece(to, color, piece);
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Parse a label and check it against this board's bounds. A well-formed
    /// label naming a square off this board is as invalid as a malformed one.
    fn resolve(&self, label: &str) -> Result<Square, MoveError> {
        let square: Square = label.parse()?;
        if !self.board.contains(square) {
            return Err(MoveError::InvalidPosition {
                notation: label.to_string(),
            });
        }
        Ok(square)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
