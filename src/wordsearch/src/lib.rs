pub mod config;
pub mod error;
pub mod game;
pub mod report;

#[cfg(test)]
mod test_utils;

pub use error::{Result, WordSearchError};
