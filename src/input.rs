//! Deck and message files.
//!
//! A deck file holds 28 whitespace-separated card tokens. A message file
//! holds one message per line; lines without letters are skipped.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::deck::Deck;
use crate::error::{ConfigurationError, Result, SolitaireError};
use crate::message::{parse_messages, Message};
use crate::utils::card::parse_deck;

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SolitaireError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a deck file.
///
/// # Errors
/// - [`SolitaireError::Io`] if the file cannot be read.
/// - [`ConfigurationError::EmptyDeckFile`] if it holds no tokens.
/// - Any error [`parse_deck`] reports.
pub fn read_deck_file(path: impl AsRef<Path>) -> Result<Deck> {
    let path = path.as_ref();
    let text = read_to_string(path)?;
    if text.trim().is_empty() {
        return Err(ConfigurationError::EmptyDeckFile {
            path: path.to_path_buf(),
        }
        .into());
    }
    let deck = parse_deck(&text)?;
    debug!("loaded deck from {}", path.display());
    Ok(deck)
}

/// Reads a message file.
///
/// # Errors
/// - [`SolitaireError::Io`] if the file cannot be read.
/// - [`SolitaireError::EmptyMessageFile`] if no line holds a letter.
pub fn read_message_file(path: impl AsRef<Path>) -> Result<Vec<Message>> {
    let path = path.as_ref();
    let messages = parse_messages(&read_to_string(path)?);
    if messages.is_empty() {
        return Err(SolitaireError::EmptyMessageFile {
            path: path.to_path_buf(),
        });
    }
    debug!("read {} messages from {}", messages.len(), path.display());
    Ok(messages)
}

/// Writes one line per message.
///
/// # Errors
/// Returns [`SolitaireError::Io`] if the file cannot be written.
pub fn write_messages(path: impl AsRef<Path>, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|source| SolitaireError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} messages to {}", lines.len(), path.display());
    Ok(())
}
