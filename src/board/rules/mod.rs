//! Per-piece move legality predicates.
//!
//! Each predicate is a pure function of board occupancy, the mover's color
//! and the two endpoint squares. None of them inspects the destination's
//! occupant color or the turn; ownership and self-capture screening belong
//! to the game state machine.
//!
//! Files split by piece family, one `impl Board` block each:
//! - `pawns.rs`   - directional single/double step and diagonal capture
//! - `sliders.rs` - rook/bishop/queen line moves with obstruction scan
//! - `knights.rs` - knight and square-knight leaps
//! - `kings.rs`   - single king step

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Piece, Square};

impl Board {
    /// Decide whether `piece` of `color` may move from `from` to `to` under
    /// its own movement rule, given current occupancy.
    ///
    /// Returns false for zero displacement or off-board endpoints; otherwise
    /// dispatches exhaustively on the piece variant.
    #[must_use]
    pub fn is_legal_move(&self, piece: Piece, color: Color, from: Square, to: Square) -> bool {
        if from == to || !self.contains(from) || !self.contains(to) {
            return false;
        }
        match piece {
            Piece::Pawn => self.pawn_move_is_legal(color, from, to),
            Piece::Rook => self.straight_move_is_legal(from, to),
            Piece::Bishop => self.diagonal_move_is_legal(from, to),
            Piece::Queen => {
                self.straight_move_is_legal(from, to) || self.diagonal_move_is_legal(from, to)
            }
            Piece::King => Self::king_step_is_legal(from, to),
            Piece::Knight => Self::knight_leap_is_legal(from, to),
            Piece::SquareKnight => Self::square_leap_is_legal(from, to),
        }
    }
}

/// Absolute rank/file displacement between two squares
pub(crate) fn displacement(from: Square, to: Square) -> (usize, usize) {
    (
        from.rank().abs_diff(to.rank()),
        from.file().abs_diff(to.file()),
    )
}
