use std::{
    borrow::Cow,
    collections::BTreeSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{info, warn};

use crate::error::{Result, WordSearchError};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum LexiconState {
    #[default]
    Unloaded,
    Loaded(BTreeSet<String>),
}

/// Upper-cased word list with ordered membership and prefix queries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lexicon {
    state: LexiconState,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current words with the first token of every line. Bytes
    /// that are not UTF-8 are replaced rather than failing the load. On a read
    /// error the previous state is kept.
    pub fn load<R: BufRead>(&mut self, source: R, source_name: &str) -> Result<()> {
        let mut words = BTreeSet::new();
        let mut lossy_lines = 0;
        for line in source.split(b'\n') {
            let line = line.map_err(|e| {
                warn!("Failed reading lexicon source {}: {}", source_name, e);
                WordSearchError::SourceUnavailable {
                    source_name: source_name.to_string(),
                    source: e,
                }
            })?;
            let line = String::from_utf8_lossy(&line);
            if let Cow::Owned(_) = line {
                lossy_lines += 1;
            }
            if let Some(word) = first_token(&line) {
                words.insert(word);
            }
        }

        if lossy_lines > 0 {
            warn!(
                "{} lines of {} were not valid UTF-8 and were decoded lossily",
                lossy_lines, source_name
            );
        }
        info!("Loaded {} words from {}", words.len(), source_name);
        self.state = LexiconState::Loaded(words);
        Ok(())
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let name = path.as_ref().display().to_string();
        let file = File::open(path.as_ref()).map_err(|e| {
            warn!("Cannot open lexicon {}: {}", name, e);
            WordSearchError::SourceUnavailable {
                source_name: name.clone(),
                source: e,
            }
        })?;
        self.load(BufReader::new(file), &name)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LexiconState::Loaded(_))
    }

    fn loaded_words(&self) -> Result<&BTreeSet<String>> {
        match &self.state {
            LexiconState::Loaded(words) => Ok(words),
            LexiconState::Unloaded => Err(WordSearchError::NotLoaded),
        }
    }

    /// Words in ascending order.
    pub fn words(&self) -> Result<impl Iterator<Item = &str>> {
        Ok(self.loaded_words()?.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        match &self.state {
            LexiconState::Loaded(words) => words.len(),
            LexiconState::Unloaded => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, word: &str) -> Result<bool> {
        let words = self.loaded_words()?;
        if word.is_empty() {
            return Err(WordSearchError::invalid_input("word must not be empty"));
        }
        Ok(words.contains(&word.to_uppercase()))
    }

    /// True when some word starts with `prefix`. The first word not less than
    /// the prefix is the only candidate that needs checking.
    pub fn has_prefix(&self, prefix: &str) -> Result<bool> {
        let words = self.loaded_words()?;
        if prefix.is_empty() {
            return Err(WordSearchError::invalid_input("prefix must not be empty"));
        }
        let prefix = prefix.to_uppercase();
        Ok(words
            .range(prefix.clone()..)
            .next()
            .is_some_and(|word| word.starts_with(&prefix)))
    }

    fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| first_token(w.as_ref()))
            .collect();
        Self {
            state: LexiconState::Loaded(words),
        }
    }
}

fn first_token(line: &str) -> Option<String> {
    line.split_whitespace().next().map(str::to_uppercase)
}

impl From<Vec<&str>> for Lexicon {
    fn from(words: Vec<&str>) -> Self {
        Lexicon::from_words(words)
    }
}

impl From<Vec<String>> for Lexicon {
    fn from(words: Vec<String>) -> Self {
        Lexicon::from_words(words)
    }
}

impl From<String> for Lexicon {
    fn from(text: String) -> Self {
        Lexicon::from_words(text.lines())
    }
}
