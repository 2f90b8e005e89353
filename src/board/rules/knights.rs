use super::displacement;
use super::super::{Board, Square};

impl Board {
    /// Knight legality: the standard (2,1)/(1,2) L-shaped leap. Leapers
    /// ignore occupancy between the endpoints.
    pub(crate) fn knight_leap_is_legal(from: Square, to: Square) -> bool {
        matches!(displacement(from, to), (2, 1) | (1, 2))
    }

    /// Square-knight legality: a leap of exactly two squares along both
    /// axes at once, also ignoring anything in between.
    pub(crate) fn square_leap_is_legal(from: Square, to: Square) -> bool {
        displacement(from, to) == (2, 2)
    }
}
