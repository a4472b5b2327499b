use core::fmt;

use crate::game::directions;

/// A coordinate on a square board. Owns no tile data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize, side: usize) -> Self {
        Self {
            row: index / side,
            col: index % side,
        }
    }

    pub fn index(&self, side: usize) -> usize {
        self.row * side + self.col
    }

    pub fn is_within(&self, side: usize) -> bool {
        self.row < side && self.col < side
    }

    /// True when `other` is one of the eight surrounding cells.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }

    /// In-bounds neighbours in the fixed `DIRECTIONS` order.
    pub fn neighbors(&self, side: usize) -> impl Iterator<Item = Position> {
        let origin = *self;
        directions::DIRECTIONS
            .into_iter()
            .filter_map(move |direction| {
                let row = origin.row.checked_add_signed(direction.0)?;
                let col = origin.col.checked_add_signed(direction.1)?;
                let next = Position { row, col };
                next.is_within(side).then_some(next)
            })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
