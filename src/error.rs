//! Error types for the Solitaire library.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a deck ordering or a generator setting cannot be accepted.
///
/// All of these are detected before any keystream is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The ordering does not hold exactly 28 cards.
    #[error("deck must hold exactly 28 cards, found {found}")]
    WrongCardCount { found: usize },

    /// A card value is outside `1..=28`.
    #[error("card value {value} at position {position} is outside 1..=28")]
    CardOutOfRange { position: usize, value: u8 },

    /// A card value appears more than once.
    #[error("card value {value} at position {position} appears more than once")]
    DuplicateCard { position: usize, value: u8 },

    /// A deck file token is not a known card name.
    #[error("unknown card token '{token}' at line {line}, column {column}")]
    UnknownCardToken {
        token: String,
        line: usize,
        column: usize,
    },

    /// The deck file holds no tokens at all.
    #[error("deck file {} is empty", path.display())]
    EmptyDeckFile { path: PathBuf },

    /// The mixing round cap is outside its accepted range.
    #[error("max rounds must be between 1 and {limit}, got {found}")]
    InvalidMaxRounds { found: usize, limit: usize },
}

/// Errors produced by the Solitaire library.
#[derive(Debug, Error)]
pub enum SolitaireError {
    /// The initial deck or a generator setting is invalid.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A card the algorithm needs is missing from the deck.
    #[error("deck corruption: card {value} is missing from the deck")]
    DeckCorruption { value: u8 },

    /// Every mixing round within the cap landed on a joker.
    #[error("no keystream value after {rounds} mixing rounds")]
    KeystreamStalled { rounds: usize },

    /// A symbol or keystream value is outside `1..=26`.
    #[error("value {value} is outside the letter range 1..=26")]
    InputRange { value: u8 },

    /// A message symbol is outside `1..=26`.
    #[error("symbol {value} at position {position} is outside the letter range 1..=26")]
    InvalidMessageSymbol { position: usize, value: u8 },

    /// A character is not an ASCII letter.
    #[error("character {letter:?} is not a letter A-Z")]
    InvalidLetter { letter: char },

    /// Message and keystream slices are not aligned.
    #[error("message holds {symbols} symbols but keystream holds {keystream}")]
    LengthMismatch { symbols: usize, keystream: usize },

    /// A batch message was rejected; the batch carries on without it.
    #[error("message on line {line} rejected: {source}")]
    MessageRejected {
        line: usize,
        #[source]
        source: Box<SolitaireError>,
    },

    /// The message file has no line containing a letter.
    #[error("message file {} does not contain any letters", path.display())]
    EmptyMessageFile { path: PathBuf },

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SolitaireError {
    /// Returns `true` for faults that must abort the whole run.
    ///
    /// Symbol range problems only abort the message they occur in.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            SolitaireError::InputRange { .. }
                | SolitaireError::InvalidMessageSymbol { .. }
                | SolitaireError::InvalidLetter { .. }
                | SolitaireError::LengthMismatch { .. }
                | SolitaireError::MessageRejected { .. }
        )
    }
}

/// A convenience `Result` type alias using the crate's `SolitaireError` type.
pub type Result<T> = std::result::Result<T, SolitaireError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wrong_card_count() {
        let err = SolitaireError::from(ConfigurationError::WrongCardCount { found: 27 });
        assert_eq!(
            format!("{}", err),
            "configuration error: deck must hold exactly 28 cards, found 27"
        );
    }

    #[test]
    fn test_display_unknown_card_token() {
        let err = ConfigurationError::UnknownCardToken {
            token: "11C".to_string(),
            line: 2,
            column: 5,
        };
        assert_eq!(
            format!("{}", err),
            "unknown card token '11C' at line 2, column 5"
        );
    }

    #[test]
    fn test_display_deck_corruption() {
        let err = SolitaireError::DeckCorruption { value: 27 };
        assert_eq!(
            format!("{}", err),
            "deck corruption: card 27 is missing from the deck"
        );
    }

    #[test]
    fn test_display_message_rejected_names_line() {
        let err = SolitaireError::MessageRejected {
            line: 4,
            source: Box::new(SolitaireError::InvalidMessageSymbol {
                position: 3,
                value: 0,
            }),
        };
        assert_eq!(
            format!("{}", err),
            "message on line 4 rejected: symbol 0 at position 3 is outside the letter range 1..=26"
        );
    }

    #[test]
    fn test_display_empty_message_file() {
        let err = SolitaireError::EmptyMessageFile {
            path: PathBuf::from("msg.txt"),
        };
        assert_eq!(
            format!("{}", err),
            "message file msg.txt does not contain any letters"
        );
    }

    #[test]
    fn test_fatal_classification() {
        assert!(SolitaireError::DeckCorruption { value: 28 }.is_fatal());
        assert!(SolitaireError::KeystreamStalled { rounds: 5 }.is_fatal());
        assert!(SolitaireError::from(ConfigurationError::WrongCardCount { found: 0 }).is_fatal());
        assert!(!SolitaireError::InputRange { value: 27 }.is_fatal());
        assert!(!SolitaireError::InvalidLetter { letter: '7' }.is_fatal());
    }

    #[test]
    fn test_configuration_error_equality() {
        assert_eq!(
            ConfigurationError::WrongCardCount { found: 3 },
            ConfigurationError::WrongCardCount { found: 3 }
        );
        assert_ne!(
            ConfigurationError::WrongCardCount { found: 3 },
            ConfigurationError::DuplicateCard {
                position: 3,
                value: 3
            }
        );
    }
}
