//! Deck: the 28-card permutation that holds the entire cipher state.
//!
//! A [`Deck`] stores 26 ordinary cards (values 1..=26) and two jokers
//! (27 and 28). It exposes the primitive rearrangements the keystream
//! generator is built from: locate, swap, joker advance, triple cut and
//! count cut. It knows nothing about letters or encryption.
//!
//! Every operation keeps the deck a permutation of `1..=28`. Structural
//! operations rebuild the deck into a fresh fixed-size array.

use std::fmt;

use crate::error::{ConfigurationError, Result, SolitaireError};

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 28;

/// Value of joker A.
pub const JOKER_A: u8 = 27;

/// Value of joker B.
pub const JOKER_B: u8 = 28;

/// Position of the bottom card.
const BOTTOM: usize = DECK_SIZE - 1;

/// Returns `true` if `value` is one of the two jokers.
pub fn is_joker(value: u8) -> bool {
    value == JOKER_A || value == JOKER_B
}

/// A 28-card deck ordered from top (position 0) to bottom (position 27).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [u8; DECK_SIZE],
}

impl Default for Deck {
    fn default() -> Self {
        Self::unkeyed()
    }
}

impl Deck {
    /// Builds a deck from an externally supplied ordering.
    ///
    /// # Parameters
    /// - `ordering`: Card values from top to bottom.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] unless `ordering` holds exactly 28
    /// distinct values, all in `1..=28`.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::Deck;
    ///
    /// let ordering: Vec<u8> = (1..=28).rev().collect();
    /// let deck = Deck::new(&ordering).unwrap();
    /// assert_eq!(deck.top(), 28);
    ///
    /// assert!(Deck::new(&[1, 2, 3]).is_err());
    /// ```
    pub fn new(ordering: &[u8]) -> Result<Self> {
        if ordering.len() != DECK_SIZE {
            return Err(ConfigurationError::WrongCardCount {
                found: ordering.len(),
            }
            .into());
        }

        let mut seen = [false; DECK_SIZE + 1];
        let mut cards = [0u8; DECK_SIZE];
        for (position, &value) in ordering.iter().enumerate() {
            if !(1..=JOKER_B).contains(&value) {
                return Err(ConfigurationError::CardOutOfRange { position, value }.into());
            }
            if seen[value as usize] {
                return Err(ConfigurationError::DuplicateCard { position, value }.into());
            }
            seen[value as usize] = true;
            cards[position] = value;
        }
        Ok(Deck { cards })
    }

    /// Returns the unkeyed deck `1, 2, ..., 28`.
    pub fn unkeyed() -> Self {
        let mut cards = [0u8; DECK_SIZE];
        for (value, card) in (1..=JOKER_B).zip(cards.iter_mut()) {
            *card = value;
        }
        Deck { cards }
    }

    /// Returns the cards from top to bottom.
    pub fn cards(&self) -> &[u8; DECK_SIZE] {
        &self.cards
    }

    /// Returns the card at `position`.
    ///
    /// # Panics
    /// Panics if `position >= 28`.
    pub fn card_at(&self, position: usize) -> u8 {
        self.cards[position]
    }

    /// Returns the top card.
    pub fn top(&self) -> u8 {
        self.cards[0]
    }

    /// Returns the bottom card.
    pub fn bottom(&self) -> u8 {
        self.cards[BOTTOM]
    }

    /// Returns the 0-based position of `value`.
    ///
    /// # Errors
    /// Returns [`SolitaireError::DeckCorruption`] if `value` is not in the deck.
    pub fn locate(&self, value: u8) -> Result<usize> {
        self.cards
            .iter()
            .position(|&card| card == value)
            .ok_or(SolitaireError::DeckCorruption { value })
    }

    /// Exchanges the cards at `pos_a` and `pos_b`.
    ///
    /// # Panics
    /// Panics if either position is `>= 28`.
    pub fn swap(&mut self, pos_a: usize, pos_b: usize) {
        self.cards.swap(pos_a, pos_b);
    }

    /// Moves the card `value` down `steps` positions, one swap at a time.
    ///
    /// A card on the bottom wraps to the top by swapping with position 0.
    /// The card is located again before each step.
    ///
    /// # Errors
    /// Returns [`SolitaireError::DeckCorruption`] if `value` is not in the deck.
    pub fn advance_joker(&mut self, value: u8, steps: usize) -> Result<()> {
        for _ in 0..steps {
            let position = self.locate(value)?;
            let next = if position == BOTTOM { 0 } else { position + 1 };
            self.swap(position, next);
        }
        Ok(())
    }

    /// Exchanges the cards above the first joker with the cards below the
    /// second joker. The jokers and the cards between them keep their order.
    ///
    /// # Errors
    /// Returns [`SolitaireError::DeckCorruption`] if a joker is missing.
    pub fn triple_cut(&mut self) -> Result<()> {
        let pos_a = self.locate(JOKER_A)?;
        let pos_b = self.locate(JOKER_B)?;
        let lo = pos_a.min(pos_b);
        let hi = pos_a.max(pos_b);

        self.rebuild(&[hi + 1..DECK_SIZE, lo..hi + 1, 0..lo]);
        Ok(())
    }

    /// Rotates the top 27 cards left by the bottom card's value.
    ///
    /// The bottom card stays in place. Does nothing when the bottom card
    /// is a joker.
    pub fn count_cut(&mut self) {
        let bottom = self.bottom();
        if is_joker(bottom) {
            return;
        }
        let count = bottom as usize;
        self.rebuild(&[count..BOTTOM, 0..count, BOTTOM..DECK_SIZE]);
    }

    /// Reads the card that sits below the top `count` cards, where `count`
    /// is the top card's value (27 for either joker).
    ///
    /// The deck is not modified.
    pub fn output_card(&self) -> u8 {
        let top = self.top();
        let count = if is_joker(top) { JOKER_A } else { top };
        self.cards[count as usize]
    }

    /// Replaces the deck with the concatenation of `segments` of the
    /// current ordering. The segments must cover every position once.
    fn rebuild(&mut self, segments: &[std::ops::Range<usize>]) {
        let mut cards = [0u8; DECK_SIZE];
        let mut index = 0;
        for segment in segments {
            let len = segment.len();
            cards[index..index + len].copy_from_slice(&self.cards[segment.clone()]);
            index += len;
        }
        debug_assert_eq!(index, DECK_SIZE);
        self.cards = cards;
    }
}

impl TryFrom<&[u8]> for Deck {
    type Error = SolitaireError;

    fn try_from(ordering: &[u8]) -> Result<Self> {
        Deck::new(ordering)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl Drop for Deck {
    /// Clears the ordering on drop; it is the key.
    fn drop(&mut self) {
        for card in self.cards.iter_mut() {
            *card = 0;
        }
    }
}
