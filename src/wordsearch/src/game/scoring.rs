use std::collections::BTreeSet;

use super::{board::Board, lexicon::Lexicon, scanner::check_min_length};
use crate::error::{Result, WordSearchError};

/// Length-weighted scoring: a qualifying word earns one point for reaching
/// the minimum and one more for each character beyond it.
#[derive(Clone, Debug, Default)]
pub struct Scorer;

impl Scorer {
    pub fn new() -> Self {
        Self
    }

    pub fn points_for(&self, word: &str, min_length: usize) -> u32 {
        let length = word.chars().count();
        if length < min_length {
            return 0;
        }
        (1 + length - min_length) as u32
    }

    /// Scores `words`, re-checking each one against the board. Words that are
    /// not on the board or use fewer than `min_length` tiles score nothing.
    pub fn score<I, S>(
        &self,
        board: &Board,
        lexicon: &Lexicon,
        words: I,
        min_length: usize,
    ) -> Result<u32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_min_length(min_length)?;
        if !lexicon.is_loaded() {
            return Err(WordSearchError::NotLoaded);
        }

        let words: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();

        let mut total = 0;
        for word in &words {
            let path = board.find_path(word)?;
            if !path.is_empty() && path.tile_count() >= min_length {
                total += self.points_for(word, min_length);
            }
        }
        Ok(total)
    }
}
