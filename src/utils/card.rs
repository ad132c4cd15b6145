//! Card names and their deck values.
//!
//! Clubs take values 1..=13 and diamonds 14..=26, each suit ordered
//! `A, 2..10, J, Q, K`. The jokers are written `JA` (27) and `JB` (28).

use log::debug;

use crate::deck::{Deck, JOKER_A, JOKER_B};
use crate::error::{ConfigurationError, Result};

const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// The two suits a 28-card deck uses.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Diamonds,
}

impl Suit {
    /// Value of this suit's ace minus one.
    fn offset(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 13,
        }
    }

    fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = char;
    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            _ => Err(c),
        }
    }
}

/// Returns the deck value of a card token, ignoring case.
///
/// # Examples
///
/// ```
/// use solitaire::utils::card::card_value;
///
/// assert_eq!(card_value("AC"), Some(1));
/// assert_eq!(card_value("10d"), Some(23));
/// assert_eq!(card_value("JB"), Some(28));
/// assert_eq!(card_value("AH"), None);
/// ```
pub fn card_value(token: &str) -> Option<u8> {
    let token = token.to_ascii_uppercase();
    match token.as_str() {
        "JA" => return Some(JOKER_A),
        "JB" => return Some(JOKER_B),
        _ => {}
    }
    let suit_char = token.chars().last()?;
    let suit = Suit::try_from(suit_char).ok()?;
    let rank = &token[..token.len() - suit_char.len_utf8()];
    let index = RANKS.iter().position(|&r| r == rank)?;
    Some(suit.offset() + index as u8 + 1)
}

/// Returns the token naming a deck value, or `None` outside `1..=28`.
pub fn card_token(value: u8) -> Option<String> {
    match value {
        JOKER_A => Some("JA".to_string()),
        JOKER_B => Some("JB".to_string()),
        1..=26 => {
            let suit = if value <= 13 { Suit::Clubs } else { Suit::Diamonds };
            let rank = RANKS[(value - suit.offset() - 1) as usize];
            Some(format!("{}{}", rank, suit.letter()))
        }
        _ => None,
    }
}

/// Splits a line on whitespace, keeping each token's 1-based column.
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut found = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                found.push((s + 1, &line[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        found.push((s + 1, &line[s..]));
    }
    found
}

/// Parses whitespace-separated card tokens into a deck.
///
/// # Errors
/// - [`ConfigurationError::UnknownCardToken`] for the first unknown token.
/// - Any error [`Deck::new`] reports for the resulting ordering.
///
/// # Examples
///
/// ```
/// use solitaire::utils::card::parse_deck;
///
/// let text = "AC 2C 3C 4C 5C 6C 7C 8C 9C 10C JC QC KC\n\
///             AD 2D 3D 4D 5D 6D 7D 8D 9D 10D JD QD KD JA JB";
/// let deck = parse_deck(text).unwrap();
/// assert_eq!(deck, solitaire::Deck::unkeyed());
/// ```
pub fn parse_deck(text: &str) -> Result<Deck> {
    let mut values = Vec::with_capacity(crate::deck::DECK_SIZE);
    for (line_index, line) in text.lines().enumerate() {
        for (column, token) in tokens(line) {
            let value = card_value(token).ok_or_else(|| ConfigurationError::UnknownCardToken {
                token: token.to_string(),
                line: line_index + 1,
                column,
            })?;
            values.push(value);
        }
    }
    debug!("parsed {} card tokens", values.len());
    Deck::new(&values)
}

/// Renders a deck as card tokens, top first.
pub fn deck_tokens(deck: &Deck) -> String {
    deck.cards()
        .iter()
        .filter_map(|&value| card_token(value))
        .collect::<Vec<String>>()
        .join(" ")
}
