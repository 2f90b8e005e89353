use super::super::{Board, Color, Square};

impl Board {
    /// Rank a pawn of `color` double-steps from: 1 for White, size-2 for Black
    pub(crate) fn pawn_start_rank(&self, color: Color) -> usize {
        match color {
            Color::White => 1,
            Color::Black => self.size() - 2,
        }
    }

    /// Pawn legality: single forward step onto an empty square, double step
    /// from the starting rank through an empty intermediate square, or a
    /// one-square diagonal step onto an opposing piece. Diagonal onto an
    /// empty square is illegal (no en passant), as is any backward move.
    pub(crate) fn pawn_move_is_legal(&self, color: Color, from: Square, to: Square) -> bool {
        let dir = color.pawn_direction();
        let rank = from.rank() as isize;
        let to_rank = to.rank() as isize;

        if to.file() == from.file() {
            if to_rank == rank + dir {
                return self.is_empty(to);
            }
            if to_rank == rank + 2 * dir && from.rank() == self.pawn_start_rank(color) {
                let between = Square((rank + dir) as usize, from.file());
                return self.is_empty(between) && self.is_empty(to);
            }
            return false;
        }

        if from.file().abs_diff(to.file()) == 1 && to_rank == rank + dir {
            return matches!(self.piece_at(to), Some((occupant, _)) if occupant != color);
        }

        false
    }
}
