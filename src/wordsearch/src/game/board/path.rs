use core::fmt;

use super::{position::Position, Board};
use crate::error::{Result, WordSearchError};

/// Row-major tile indices spelling one word, each index used at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    pub indices: Vec<usize>,
}

impl Path {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of tiles consumed, which is not the character count when a
    /// tile holds more than one letter.
    pub fn tile_count(&self) -> usize {
        self.indices.len()
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Path { indices }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.indices.iter().map(|i| i.to_string()).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

// Owned by a single search call; never stored on the board.
struct SearchState<'w> {
    target: &'w str,
    visited: Vec<bool>,
    fragment: String,
    path: Vec<usize>,
}

impl<'w> SearchState<'w> {
    fn new(target: &'w str, tile_count: usize) -> Self {
        Self {
            target,
            visited: vec![false; tile_count],
            fragment: String::with_capacity(target.len()),
            path: Vec::new(),
        }
    }
}

/// Backtracking search for a single word over a borrowed board.
pub struct PathFinder<'b> {
    board: &'b Board,
}

impl<'b> PathFinder<'b> {
    pub fn new(board: &'b Board) -> Self {
        Self { board }
    }

    /// Returns the first path spelling `word`, trying roots in row-major order
    /// and neighbours in `DIRECTIONS` order. An empty path means the word is
    /// not on the board.
    pub fn find(&self, word: &str) -> Result<Path> {
        if word.is_empty() {
            return Err(WordSearchError::invalid_input("word must not be empty"));
        }

        if let Some(index) = self.board.tiles().position(|tile| tile == word) {
            return Ok(Path::from(vec![index]));
        }

        let side = self.board.side_length();
        for (index, tile) in self.board.tiles().enumerate() {
            if !word.starts_with(tile) {
                continue;
            }

            let mut state = SearchState::new(word, self.board.tile_count());
            if self.extend(Position::from_index(index, side), &mut state) {
                return Ok(Path::from(state.path));
            }
        }

        Ok(Path::default())
    }

    fn extend(&self, position: Position, state: &mut SearchState) -> bool {
        let side = self.board.side_length();
        let index = position.index(side);
        if state.visited[index] {
            return false;
        }

        let tile = self.board.tile(position);
        let fragment_len = state.fragment.len();
        if fragment_len + tile.len() > state.target.len()
            || !state.target[fragment_len..].starts_with(tile)
        {
            return false;
        }

        state.visited[index] = true;
        state.fragment.push_str(tile);
        state.path.push(index);

        // The fragment is a prefix of the target, so equal length means equal.
        if state.fragment.len() == state.target.len() {
            return true;
        }

        for neighbor in position.neighbors(side) {
            if self.extend(neighbor, state) {
                return true;
            }
        }

        state.path.pop();
        state.fragment.truncate(fragment_len);
        state.visited[index] = false;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils;

    #[test]
    fn test_finds_straight_row() {
        let board = test_utils::create_test_board("catsxxxxxxxxxxxx");
        let path = PathFinder::new(&board).find("CATS").unwrap();
        assert_eq!(path.indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_missing_word_gives_empty_path() {
        let board = Board::default();
        let path = PathFinder::new(&board).find("ZZZZ").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_empty_word_is_invalid_input() {
        let board = Board::default();
        let result = PathFinder::new(&board).find("");
        assert!(matches!(result, Err(WordSearchError::InvalidInput(_))));
    }

    #[test]
    fn test_does_not_reuse_a_tile() {
        // A B
        // X X
        let board = test_utils::create_test_board("abxx");
        assert!(PathFinder::new(&board).find("ABA").unwrap().is_empty());
        assert_eq!(PathFinder::new(&board).find("AB").unwrap().indices, vec![0, 1]);
    }

    #[test]
    fn test_backtracks_out_of_dead_end() {
        // E A E
        // X X T
        // X X X
        let board = Board::configure(&["E", "A", "E", "X", "X", "T", "X", "X", "X"]).unwrap();
        let path = PathFinder::new(&board).find("EAT").unwrap();
        assert_eq!(path.indices, vec![0, 1, 5]);

        // "AET": A(1) -> E(0) has no T neighbour, must backtrack to E(2) -> T(5).
        let path = PathFinder::new(&board).find("AET").unwrap();
        assert_eq!(path.indices, vec![1, 2, 5]);
    }

    #[test]
    fn test_whole_tile_shortcut() {
        let board = Board::configure(&["QU", "I", "T", "E"]).unwrap();
        let path = PathFinder::new(&board).find("QU").unwrap();
        assert_eq!(path.indices, vec![0]);
    }

    #[test]
    fn test_multi_character_tile_counts_as_one_step() {
        let board = Board::configure(&["QU", "I", "T", "E"]).unwrap();
        let path = PathFinder::new(&board).find("QUIT").unwrap();
        assert_eq!(path.indices, vec![0, 1, 2]);
        assert_eq!(path.tile_count(), 3);
        assert!(board.spells("QUIT", &path.indices));
    }

    #[test]
    fn test_multi_character_tile_mid_word() {
        let board = Board::configure(&["A", "QU", "X", "X", "A", "X", "X", "X", "X"]).unwrap();
        let path = PathFinder::new(&board).find("AQUA").unwrap();
        assert_eq!(path.indices, vec![0, 1, 4]);
    }

    #[test]
    fn test_single_and_multi_character_tiles_side_by_side() {
        // Q  QU
        // U  X
        let board = Board::configure(&["Q", "QU", "U", "X"]).unwrap();
        assert_eq!(PathFinder::new(&board).find("QU").unwrap().indices, vec![1]);
        assert_eq!(PathFinder::new(&board).find("Q").unwrap().indices, vec![0]);
        // Roots are tried in row-major order, so Q at 0 wins over QU at 1.
        assert_eq!(PathFinder::new(&board).find("QUX").unwrap().indices, vec![0, 2, 3]);
    }

    #[test]
    fn test_word_longer_than_board_is_not_found() {
        let board = Board::configure(&["A", "B", "C", "D"]).unwrap();
        assert!(PathFinder::new(&board).find("ABCDA").unwrap().is_empty());
    }

    #[test]
    fn test_search_is_idempotent() {
        let board = Board::default();
        let finder = PathFinder::new(&board);
        assert_eq!(finder.find("PEEL").unwrap(), finder.find("PEEL").unwrap());
    }

    #[test]
    fn test_path_display() {
        assert_eq!(Path::from(vec![7, 6, 1]).to_string(), "[7, 6, 1]");
        assert_eq!(Path::default().to_string(), "[]");
    }
}
