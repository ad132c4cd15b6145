//! Numeric messages prepared from lines of text.

use crate::error::Result;
use crate::utils::converter::{clean_message, has_letters, numbers_to_string};

/// One message: the numeric letters of a cleaned line, with the line it
/// came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    line: usize,
    symbols: Vec<u8>,
}

impl Message {
    /// Wraps already-numeric symbols.
    ///
    /// The symbols are not checked here; the cipher rejects values outside
    /// `1..=26` when the message is processed.
    pub fn new(line: usize, symbols: Vec<u8>) -> Self {
        Message { line, symbols }
    }

    /// Prepares a raw line: keeps its letters, uppercases them, pads with
    /// `X` to a multiple of 5 and numbers them `A = 1` .. `Z = 26`.
    ///
    /// Returns `None` for a line without any ASCII letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::Message;
    ///
    /// let message = Message::from_line(1, "Hi!").unwrap();
    /// assert_eq!(message.symbols(), &[8, 9, 24, 24, 24]);
    /// assert!(Message::from_line(2, "-- 42 --").is_none());
    /// ```
    pub fn from_line(line: usize, raw: &str) -> Option<Self> {
        if !has_letters(raw) {
            return None;
        }
        let symbols = clean_message(raw).bytes().map(|b| b - b'A' + 1).collect();
        Some(Message { line, symbols })
    }

    /// Line number (1-based) of the source text.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Numeric letters.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the message holds no letters.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The message as uppercase letters.
    ///
    /// # Errors
    /// Fails if a symbol is outside `1..=26`.
    pub fn text(&self) -> Result<String> {
        numbers_to_string(&self.symbols)
    }
}

/// Prepares every line of `text` that holds a letter, in order.
pub fn parse_messages(text: &str) -> Vec<Message> {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| Message::from_line(index + 1, raw))
        .collect()
}
