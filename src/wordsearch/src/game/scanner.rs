use std::collections::BTreeSet;

use tracing::debug;

use super::{board::Board, lexicon::Lexicon};
use crate::error::{Result, WordSearchError};

pub(crate) fn check_min_length(min_length: usize) -> Result<()> {
    if min_length < 1 {
        return Err(WordSearchError::invalid_input(
            "minimum word length must be at least 1",
        ));
    }
    Ok(())
}

/// Every lexicon word that can be traced on `board` using at least
/// `min_length` tiles.
pub fn all_scorable_words(
    board: &Board,
    lexicon: &Lexicon,
    min_length: usize,
) -> Result<BTreeSet<String>> {
    check_min_length(min_length)?;

    let mut found = BTreeSet::new();
    let mut examined = 0usize;
    for word in lexicon.words()? {
        examined += 1;
        // A path can never use more tiles than the word has characters.
        if word.chars().count() < min_length {
            continue;
        }
        let path = board.find_path(word)?;
        if !path.is_empty() && path.tile_count() >= min_length {
            found.insert(word.to_string());
        }
    }

    debug!(
        "Scanned {} lexicon words, {} scorable with at least {} tiles",
        examined,
        found.len(),
        min_length
    );
    Ok(found)
}
