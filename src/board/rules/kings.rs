use super::displacement;
use super::super::{Board, Square};

impl Board {
    /// King legality: exactly one square in any of the eight directions
    /// (Chebyshev distance 1). No castling, no check awareness.
    pub(crate) fn king_step_is_legal(from: Square, to: Square) -> bool {
        let (d_rank, d_file) = displacement(from, to);
        d_rank.max(d_file) == 1
    }
}
