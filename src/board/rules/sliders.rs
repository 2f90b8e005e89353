use super::displacement;
use super::super::{Board, Square};

impl Board {
    /// Rook-style legality: endpoints share a rank or a file and every
    /// square strictly between them is empty.
    pub(crate) fn straight_move_is_legal(&self, from: Square, to: Square) -> bool {
        if from.rank() != to.rank() && from.file() != to.file() {
            return false;
        }
        self.path_is_clear(from, to)
    }

    /// Bishop-style legality: nonzero equal rank/file displacement and every
    /// square strictly on the diagonal between the endpoints is empty.
    pub(crate) fn diagonal_move_is_legal(&self, from: Square, to: Square) -> bool {
        let (d_rank, d_file) = displacement(from, to);
        if d_rank != d_file || d_rank == 0 {
            return false;
        }
        self.path_is_clear(from, to)
    }

    /// Walk the line from `from` toward `to`, exclusive of both endpoints,
    /// requiring every interior square to be empty. An occupied interior
    /// square blocks the slide regardless of the occupant's color; the
    /// destination itself is not inspected here.
    ///
    /// Callers guarantee the endpoints are collinear (same rank, same file,
    /// or same diagonal).
    fn path_is_clear(&self, from: Square, to: Square) -> bool {
        let rank_step = (to.rank() as isize - from.rank() as isize).signum();
        let file_step = (to.file() as isize - from.file() as isize).signum();

        let mut rank = from.rank() as isize + rank_step;
        let mut file = from.file() as isize + file_step;
        while (rank, file) != (to.rank() as isize, to.file() as isize) {
            if !self.is_empty(Square(rank as usize, file as usize)) {
                return false;
            }
            rank += rank_step;
            file += file_step;
        }
        true
    }
}
