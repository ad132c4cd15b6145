//! KeystreamGenerator: drives a [`Deck`] through mixing rounds and reads
//! one keystream value per call.
//!
//! A mixing round is: advance joker A one step, advance joker B two steps,
//! triple cut, count cut. After each round the output card is read; a
//! joker is discarded and another round is run.

use log::trace;

use crate::deck::{is_joker, Deck, JOKER_A, JOKER_B};
use crate::error::{ConfigurationError, Result, SolitaireError};

/// Default cap on mixing rounds per keystream value.
pub const DEFAULT_MAX_ROUNDS: usize = 1024;

/// Largest accepted cap on mixing rounds per keystream value.
pub const MAX_ROUNDS_LIMIT: usize = 1_000_000;

/// Keystream generator owning the deck it mutates.
///
/// The deck is advanced by every call, so two generators built from the
/// same deck produce the same keystream only while they are driven
/// through the same calls.
#[derive(Debug, Clone)]
pub struct KeystreamGenerator {
    deck: Deck,
    max_rounds: usize,
    rounds: u64,
}

impl KeystreamGenerator {
    /// Creates a generator with the default round cap.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::{Deck, KeystreamGenerator};
    ///
    /// let mut keystream = KeystreamGenerator::new(Deck::unkeyed());
    /// assert_eq!(keystream.next_value().unwrap(), 8);
    /// ```
    pub fn new(deck: Deck) -> Self {
        KeystreamGenerator {
            deck,
            max_rounds: DEFAULT_MAX_ROUNDS,
            rounds: 0,
        }
    }

    /// Creates a generator with a custom cap on mixing rounds per value.
    ///
    /// # Parameters
    /// - `deck`: The initial deck.
    /// - `max_rounds`: Rounds allowed per value (1..=1_000_000).
    ///
    /// # Errors
    /// Returns [`ConfigurationError::InvalidMaxRounds`] when `max_rounds`
    /// is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::{Deck, KeystreamGenerator};
    ///
    /// assert!(KeystreamGenerator::with_max_rounds(Deck::unkeyed(), 64).is_ok());
    /// assert!(KeystreamGenerator::with_max_rounds(Deck::unkeyed(), 0).is_err());
    /// ```
    pub fn with_max_rounds(deck: Deck, max_rounds: usize) -> Result<Self> {
        if !(1..=MAX_ROUNDS_LIMIT).contains(&max_rounds) {
            return Err(ConfigurationError::InvalidMaxRounds {
                found: max_rounds,
                limit: MAX_ROUNDS_LIMIT,
            }
            .into());
        }
        Ok(KeystreamGenerator {
            deck,
            max_rounds,
            rounds: 0,
        })
    }

    /// Returns the current deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Consumes the generator and returns its deck.
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    /// Replaces the deck, keeping the round cap.
    pub(crate) fn rekey(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the configured cap on rounds per value.
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Returns the number of mixing rounds run so far.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Runs one mixing round on the deck.
    ///
    /// # Errors
    /// Returns [`SolitaireError::DeckCorruption`] if a joker is missing.
    pub fn mix(&mut self) -> Result<()> {
        self.deck.advance_joker(JOKER_A, 1)?;
        self.deck.advance_joker(JOKER_B, 2)?;
        self.deck.triple_cut()?;
        self.deck.count_cut();
        self.rounds += 1;
        Ok(())
    }

    /// Produces the next keystream value, in `1..=26`.
    ///
    /// # Errors
    /// - [`SolitaireError::DeckCorruption`] if a joker is missing.
    /// - [`SolitaireError::KeystreamStalled`] if every round within the cap
    ///   landed on a joker.
    pub fn next_value(&mut self) -> Result<u8> {
        for _ in 0..self.max_rounds {
            self.mix()?;
            let candidate = self.deck.output_card();
            if !is_joker(candidate) {
                return Ok(candidate);
            }
            trace!("round {} landed on joker {}, mixing again", self.rounds, candidate);
        }
        Err(SolitaireError::KeystreamStalled {
            rounds: self.max_rounds,
        })
    }

    /// Produces the next `n` keystream values in order.
    ///
    /// # Errors
    /// Fails on the first value that [`next_value`](Self::next_value)
    /// cannot produce.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::{Deck, KeystreamGenerator};
    ///
    /// let mut keystream = KeystreamGenerator::new(Deck::unkeyed());
    /// assert_eq!(keystream.next_sequence(5).unwrap(), vec![8, 16, 11, 8, 6]);
    /// ```
    pub fn next_sequence(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            values.push(self.next_value()?);
        }
        trace!("deck after {} values: {}", n, self.deck);
        Ok(values)
    }
}
