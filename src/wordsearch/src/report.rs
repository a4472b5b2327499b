use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::game::{Scorer, WordSearchEngine};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<usize>,
    pub points: u32,
}

/// Outcome of solving one board, suitable for printing as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    pub board: Vec<Vec<String>>,
    pub min_word_length: usize,
    pub words: Vec<FoundWord>,
    pub total_score: u32,
}

impl SearchReport {
    pub fn build(engine: &WordSearchEngine, min_word_length: usize) -> Result<Self> {
        let scorable = engine.all_scorable_words(min_word_length)?;
        let scorer = Scorer::new();

        let mut words = Vec::with_capacity(scorable.len());
        for word in &scorable {
            words.push(FoundWord {
                word: word.clone(),
                path: engine.find_path(word)?,
                points: scorer.points_for(word, min_word_length),
            });
        }

        Ok(Self {
            board: engine
                .board()
                .rows
                .iter()
                .map(|row| row.tiles.iter().map(|t| t.letter.clone()).collect())
                .collect(),
            min_word_length,
            words,
            total_score: engine.score(&scorable, min_word_length)?,
        })
    }
}
