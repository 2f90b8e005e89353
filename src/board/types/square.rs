//! Square type and algebraic-notation parsing.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (rank, file).
///
/// Rank 0 is the rank labeled "1" (White's back rank); file 0 is file 'a'.
/// The pair itself carries no board-size bound: whether a square actually
/// exists on a given board is answered by [`Board::contains`].
///
/// [`Board::contains`]: crate::board::Board::contains
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Get the rank (0 = the rank labeled "1")
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0 = file 'a')
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, self.0 + 1)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Rank-major, so a1 < b1 < ... < a2
        (self.0, self.1).cmp(&(other.0, other.1))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse a label like "a1" or "c12": one file letter followed by a
    /// one-based rank number. Format-only; board bounds are checked by the
    /// consumer against the board actually in play.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let file = match chars.next() {
            Some(c @ 'a'..='z') => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };

        // A leading zero would break the Display/parse inverse ("a01" -> "a1")
        let digits = chars.as_str();
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let rank: usize = digits.parse().map_err(|_| invalid())?;

        Ok(Square(rank - 1, file))
    }
}
