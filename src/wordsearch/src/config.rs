use std::env;
use std::path::PathBuf;

pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub lexicon_path: PathBuf,
    /// Row-major tiles; `None` keeps the built-in board.
    pub board_tiles: Option<Vec<String>>,
    pub min_word_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon_path: PathBuf::from("wordlist"),
            board_tiles: None,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("LEXICON_PATH") {
            config.lexicon_path = PathBuf::from(path);
        }

        if let Some(tiles) = lookup("BOARD_TILES") {
            let tiles: Vec<String> = tiles
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !tiles.is_empty() {
                config.board_tiles = Some(tiles);
            }
        }

        if let Some(length) = lookup("MIN_WORD_LENGTH") {
            if let Ok(value) = length.trim().parse::<usize>() {
                config.min_word_length = value;
            }
        }

        config
    }
}
