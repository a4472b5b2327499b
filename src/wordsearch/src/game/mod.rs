pub mod board;
pub mod directions;
pub mod lexicon;
pub mod scanner;
pub mod scoring;

pub use board::{Board, Path, Position};
pub use lexicon::Lexicon;
pub use scoring::Scorer;

use std::collections::BTreeSet;
use std::io::BufRead;

use tracing::info;

use crate::error::Result;

/// One word search session: a board, a lexicon and the operations over them.
/// Board and lexicon are replaced wholesale, never edited.
#[derive(Clone, Debug, Default)]
pub struct WordSearchEngine {
    board: Board,
    lexicon: Lexicon,
    scorer: Scorer,
}

impl WordSearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            ..Self::default()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn configure_board<S: AsRef<str>>(&mut self, letters: &[S]) -> Result<()> {
        self.board = Board::configure(letters)?;
        Ok(())
    }

    pub fn load_lexicon<R: BufRead>(&mut self, source: R, source_name: &str) -> Result<()> {
        self.lexicon.load(source, source_name)
    }

    pub fn load_lexicon_file<P: AsRef<std::path::Path>>(&mut self, path: P) -> Result<()> {
        self.lexicon.load_file(path)
    }

    pub fn render_board(&self) -> String {
        self.board.render()
    }

    pub fn is_valid_word(&self, word: &str) -> Result<bool> {
        self.lexicon.contains(word)
    }

    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool> {
        self.lexicon.has_prefix(prefix)
    }

    /// Row-major indices of the first path spelling `word`, or an empty vector
    /// when the word is not on the board.
    pub fn find_path(&self, word: &str) -> Result<Vec<usize>> {
        let path = self.board.find_path(&word.to_uppercase())?;
        Ok(path.into_indices())
    }

    pub fn all_scorable_words(&self, min_length: usize) -> Result<BTreeSet<String>> {
        let words = scanner::all_scorable_words(&self.board, &self.lexicon, min_length)?;
        info!(
            "Found {} scorable words with minimum length {}",
            words.len(),
            min_length
        );
        Ok(words)
    }

    pub fn score<I, S>(&self, words: I, min_length: usize) -> Result<u32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.scorer
            .score(&self.board, &self.lexicon, words, min_length)
    }
}
