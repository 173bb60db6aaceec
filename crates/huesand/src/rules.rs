//! Destination rule for a single particle during `Grid::step`.
//!
//! Every check reads the frozen pre-step grid, never the buffer being filled.

use crate::rng::SignSource;
use crate::Grid;

/// Where a particle ends up after one tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Move {
    /// Sitting on the bottom row.
    Floor,
    /// Straight down into an empty cell.
    Fall,
    /// Down and sideways by the given column offset (`1` or `-1`).
    Diagonal(i32),
    /// Nothing below or beside-below is free.
    Blocked,
}

impl Move {
    #[must_use]
    pub fn is_resting(self) -> bool {
        matches!(self, Self::Floor | Self::Blocked)
    }

    /// Target cell for a particle currently at `(col, row)`.
    #[must_use]
    pub fn target(self, col: i32, row: i32) -> (i32, i32) {
        match self {
            Self::Floor | Self::Blocked => (col, row),
            Self::Fall => (col, row + 1),
            Self::Diagonal(dx) => (col + dx, row + 1),
        }
    }
}

/// Floor, then straight down, then the randomly chosen diagonal, then the
/// other diagonal, else stay. The sign source is consulted only once the
/// straight fall is blocked.
pub fn destination<S>(grid: &Grid, col: i32, row: i32, signs: &mut S) -> Move
where
    S: SignSource + ?Sized,
{
    if row + 1 >= grid.rows() as i32 {
        return Move::Floor;
    }
    let below = row + 1;
    if grid.is_vacant(col, below) {
        return Move::Fall;
    }

    let direction = signs.next_sign();
    if grid.is_vacant(col + direction, below) {
        return Move::Diagonal(direction);
    }
    if grid.is_vacant(col - direction, below) {
        return Move::Diagonal(-direction);
    }
    Move::Blocked
}
