use core::fmt;
use std::collections::HashSet;

use tracing::info;

use crate::error::{Result, WordSearchError};

pub mod path;
pub mod position;

pub use path::{Path, PathFinder};
pub use position::Position;

const DEFAULT_TILES: [&str; 16] = [
    "E", "E", "C", "A", //
    "A", "L", "E", "P", //
    "H", "N", "B", "O", //
    "Q", "T", "T", "Y",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub letter: String,
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows.iter().enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col_idx, tile) in row.tiles.iter().enumerate() {
                if col_idx > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile.letter)?;
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_square(&DEFAULT_TILES, 4)
    }
}

impl Board {
    /// Builds a board from `N²` tiles in row-major order. Tiles are upper-cased.
    pub fn configure<S: AsRef<str>>(letters: &[S]) -> Result<Self> {
        let side = integer_sqrt(letters.len());
        if letters.is_empty() || side * side != letters.len() {
            return Err(WordSearchError::InvalidShape { len: letters.len() });
        }

        if let Some(index) = letters.iter().position(|l| l.as_ref().is_empty()) {
            return Err(WordSearchError::invalid_input(format!(
                "tile {} must not be empty",
                index
            )));
        }

        let board = Self::from_square(letters, side);
        info!("Configured {}x{} board", side, side);
        Ok(board)
    }

    fn from_square<S: AsRef<str>>(letters: &[S], side: usize) -> Self {
        Self {
            rows: letters
                .chunks(side)
                .map(|chunk| Row {
                    tiles: chunk
                        .iter()
                        .map(|letter| Tile {
                            letter: letter.as_ref().to_uppercase(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn side_length(&self) -> usize {
        self.rows.len()
    }

    pub fn tile_count(&self) -> usize {
        self.side_length() * self.side_length()
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.tiles.get(col))
            .map(|tile| tile.letter.as_str())
    }

    pub(crate) fn tile(&self, position: Position) -> &str {
        &self.rows[position.row].tiles[position.col].letter
    }

    /// Tile strings in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|row| row.tiles.iter().map(|tile| tile.letter.as_str()))
    }

    pub fn index_of(&self, position: Position) -> Option<usize> {
        position
            .is_within(self.side_length())
            .then(|| position.index(self.side_length()))
    }

    pub fn position_of(&self, index: usize) -> Option<Position> {
        (index < self.tile_count()).then(|| Position::from_index(index, self.side_length()))
    }

    pub fn neighbors(&self, position: Position) -> Vec<Position> {
        position.neighbors(self.side_length()).collect()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn find_path(&self, word: &str) -> Result<Path> {
        PathFinder::new(self).find(word)
    }

    /// Checks that `path` is a simple chain of adjacent tiles spelling `word`.
    pub fn spells(&self, word: &str, path: &[usize]) -> bool {
        if path.is_empty() {
            return false;
        }

        let mut positions = Vec::with_capacity(path.len());
        for &index in path {
            match self.position_of(index) {
                Some(position) => positions.push(position),
                None => return false,
            }
        }

        let unique: HashSet<_> = path.iter().collect();
        if unique.len() != path.len() {
            return false;
        }

        if !positions.windows(2).all(|w| w[0].is_adjacent(&w[1])) {
            return false;
        }

        let spelled: String = positions.iter().map(|p| self.tile(*p)).collect();
        spelled == word
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
