#[cfg(test)]
pub mod test_utils {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::game::{Board, Lexicon, WordSearchEngine};

    /// Builds a square board with one single-letter tile per character.
    pub fn create_test_board(letters: &str) -> Board {
        let tiles: Vec<String> = letters.chars().map(|c| c.to_string()).collect();
        Board::configure(tiles.as_slice()).unwrap()
    }

    /// Creates a temporary wordlist file for testing
    pub fn create_test_wordlist() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "test").unwrap();
        writeln!(file, "stop").unwrap();
        writeln!(file, "the").unwrap();
        writeln!(file, "tea").unwrap();
        writeln!(file, "set").unwrap();
        writeln!(file, "pots").unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_test_lexicon() -> Lexicon {
        Lexicon::from(vec!["test", "stop", "the", "tea", "set", "pots"])
    }

    /// Creates an engine over `letters` with a temporary wordlist loaded
    pub fn create_test_engine(letters: &str) -> (WordSearchEngine, NamedTempFile) {
        let wordlist_file = create_test_wordlist();
        let tiles: Vec<String> = letters.chars().map(|c| c.to_string()).collect();
        let mut engine = WordSearchEngine::new();
        engine.configure_board(tiles.as_slice()).unwrap();
        engine.load_lexicon_file(wordlist_file.path()).unwrap();
        (engine, wordlist_file)
    }
}
