use anyhow::{Context, Result};
use tracing::{info, warn};

use wordsearch::config::Config;
use wordsearch::game::WordSearchEngine;
use wordsearch::report::SearchReport;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting word search");

    let config = Config::from_env();
    let mut engine = WordSearchEngine::new();

    if let Some(tiles) = &config.board_tiles {
        engine
            .configure_board(tiles.as_slice())
            .context("BOARD_TILES must hold a perfect square of tiles")?;
    }
    info!("Board:\n{}", engine.render_board());

    engine
        .load_lexicon_file(&config.lexicon_path)
        .with_context(|| format!("failed to load lexicon {}", config.lexicon_path.display()))?;

    let report = SearchReport::build(&engine, config.min_word_length)
        .context("failed to search board")?;

    for found in &report.words {
        if !engine.board().spells(&found.word, &found.path) {
            warn!("Path {:?} does not spell {}", found.path, found.word);
        }
    }

    info!(
        "{} scorable words, total score {}",
        report.words.len(),
        report.total_score
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
