//! Solitaire: message-level encryption and decryption over one deck.
//!
//! Keeps the key deck, a [`KeystreamGenerator`] advanced by every message,
//! and the [`KeySchedule`] deciding whether a batch restores the key
//! between messages.

use log::{debug, warn};

use crate::deck::Deck;
use crate::error::{Result, SolitaireError};
use crate::keystream::KeystreamGenerator;
use crate::message::Message;
use crate::transform::{decrypt_symbols, encrypt_symbols, ALPHABET_SIZE};

/// How the deck carries over between the messages of a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum KeySchedule {
    /// One deck runs through every message; message N's keystream starts
    /// where message N-1's ended.
    #[default]
    Continuous,
    /// The key deck is restored before each message.
    PerMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Solitaire cipher session.
///
/// # Examples
///
/// ```
/// use solitaire::{Deck, Solitaire};
///
/// let mut encoder = Solitaire::new(Deck::unkeyed());
/// let mut decoder = Solitaire::new(Deck::unkeyed());
///
/// let plain = vec![1u8; 5];
/// let cipher = encoder.encrypt(&plain).unwrap();
/// assert_eq!(cipher, vec![9, 17, 12, 9, 7]);
/// assert_eq!(decoder.decrypt(&cipher).unwrap(), plain);
/// ```
#[derive(Debug, Clone)]
pub struct Solitaire {
    key: Deck,
    keystream: KeystreamGenerator,
    schedule: KeySchedule,
    processed: usize,
}

impl Solitaire {
    /// Creates a session keyed with `key`, using the default round cap.
    pub fn new(key: Deck) -> Self {
        Solitaire {
            keystream: KeystreamGenerator::new(key.clone()),
            key,
            schedule: KeySchedule::default(),
            processed: 0,
        }
    }

    /// Creates a session with a custom cap on mixing rounds per value.
    ///
    /// # Errors
    /// Returns a configuration error when `max_rounds` is out of range.
    pub fn with_max_rounds(key: Deck, max_rounds: usize) -> Result<Self> {
        Ok(Solitaire {
            keystream: KeystreamGenerator::with_max_rounds(key.clone(), max_rounds)?,
            key,
            schedule: KeySchedule::default(),
            processed: 0,
        })
    }

    /// Sets the key schedule used by the batch operations.
    pub fn with_key_schedule(mut self, schedule: KeySchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Returns the key schedule.
    pub fn key_schedule(&self) -> KeySchedule {
        self.schedule
    }

    /// Returns the current deck.
    pub fn deck(&self) -> &Deck {
        self.keystream.deck()
    }

    /// Returns the keystream generator.
    pub fn keystream(&self) -> &KeystreamGenerator {
        &self.keystream
    }

    /// Number of messages handed to the batch operations so far.
    pub fn messages_processed(&self) -> usize {
        self.processed
    }

    /// Restores the deck to the key ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use solitaire::{Deck, Solitaire};
    ///
    /// let mut cipher = Solitaire::new(Deck::unkeyed());
    /// let first = cipher.encrypt(&[1, 2, 3, 4, 5]).unwrap();
    /// cipher.reset();
    /// assert_eq!(cipher.encrypt(&[1, 2, 3, 4, 5]).unwrap(), first);
    /// ```
    pub fn reset(&mut self) {
        self.keystream.rekey(self.key.clone());
    }

    /// Encrypts numeric plaintext with the next keystream values.
    ///
    /// # Errors
    /// - [`SolitaireError::InvalidMessageSymbol`] if a symbol is outside
    ///   `1..=26`; no keystream is consumed in that case.
    /// - [`SolitaireError::DeckCorruption`] or
    ///   [`SolitaireError::KeystreamStalled`] from the generator.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, Direction::Encrypt)
    }

    /// Decrypts numeric ciphertext with the next keystream values.
    ///
    /// # Errors
    /// Same as [`encrypt`](Self::encrypt).
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, Direction::Decrypt)
    }

    /// Encrypts each message in order.
    ///
    /// The outer error is a fault that stops the batch. A message with a
    /// bad symbol yields an inner [`SolitaireError::MessageRejected`] and the
    /// batch moves on to the next message.
    pub fn encrypt_batch(&mut self, messages: &[Message]) -> Result<Vec<Result<Vec<u8>>>> {
        self.process_batch(messages, Direction::Encrypt)
    }

    /// Decrypts each message in order. See [`encrypt_batch`](Self::encrypt_batch).
    pub fn decrypt_batch(&mut self, messages: &[Message]) -> Result<Vec<Result<Vec<u8>>>> {
        self.process_batch(messages, Direction::Decrypt)
    }

    fn process(&mut self, symbols: &[u8], direction: Direction) -> Result<Vec<u8>> {
        if let Some((position, &value)) = symbols
            .iter()
            .enumerate()
            .find(|&(_, &value)| !(1..=ALPHABET_SIZE).contains(&value))
        {
            return Err(SolitaireError::InvalidMessageSymbol { position, value });
        }

        let keystream = self.keystream.next_sequence(symbols.len())?;
        match direction {
            Direction::Encrypt => encrypt_symbols(symbols, &keystream),
            Direction::Decrypt => decrypt_symbols(symbols, &keystream),
        }
    }

    fn process_batch(
        &mut self,
        messages: &[Message],
        direction: Direction,
    ) -> Result<Vec<Result<Vec<u8>>>> {
        let mut results = Vec::with_capacity(messages.len());
        for message in messages {
            if self.schedule == KeySchedule::PerMessage {
                self.reset();
            }
            self.processed += 1;

            match self.process(message.symbols(), direction) {
                Ok(output) => {
                    debug!(
                        "{:?} message on line {} ({} letters)",
                        direction,
                        message.line(),
                        output.len()
                    );
                    results.push(Ok(output));
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!("skipping message on line {}: {}", message.line(), err);
                    results.push(Err(SolitaireError::MessageRejected {
                        line: message.line(),
                        source: Box::new(err),
                    }));
                }
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello_deck() -> Deck {
        Deck::new(&[
            27, 5, 26, 15, 9, 28, 23, 1, 20, 3, 25, 17, 8, 11, 19, 14, 10, 2, 22, 18, 16, 13, 6,
            24, 21, 4, 12, 7,
        ])
        .unwrap()
    }

    fn messages() -> Vec<Message> {
        vec![
            Message::from_line(1, "Hello, World!").unwrap(),
            Message::from_line(2, "Meet me at the usual place at ten.").unwrap(),
        ]
    }

    fn texts(results: Vec<Result<Vec<u8>>>) -> Vec<String> {
        results
            .into_iter()
            .map(|r| crate::utils::converter::numbers_to_string(&r.unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn test_default_construction() {
        let cipher = Solitaire::new(Deck::unkeyed());
        assert_eq!(cipher.key_schedule(), KeySchedule::Continuous);
        assert_eq!(cipher.deck(), &Deck::unkeyed());
        assert_eq!(cipher.messages_processed(), 0);
    }

    #[test]
    fn test_invalid_max_rounds() {
        assert!(Solitaire::with_max_rounds(Deck::unkeyed(), 0).is_err());
        let cipher = Solitaire::with_max_rounds(Deck::unkeyed(), 10).unwrap();
        assert_eq!(cipher.keystream().max_rounds(), 10);
    }

    #[test]
    fn test_encrypt_unkeyed_a_run() {
        let mut cipher = Solitaire::new(Deck::unkeyed());
        let out = cipher.encrypt(&[1; 15]).unwrap();
        assert_eq!(
            crate::utils::converter::numbers_to_string(&out).unwrap(),
            "IQLIGZFBUHQIADG"
        );
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let mut encoder = Solitaire::new(hello_deck());
        let mut decoder = Solitaire::new(hello_deck());
        let plain = messages()[1].symbols().to_vec();

        let cipher = encoder.encrypt(&plain).unwrap();
        assert_ne!(cipher, plain);
        assert_eq!(decoder.decrypt(&cipher).unwrap(), plain);
    }

    #[test]
    fn test_bad_symbol_consumes_no_keystream() {
        let mut cipher = Solitaire::new(Deck::unkeyed());
        assert!(matches!(
            cipher.encrypt(&[1, 2, 27, 4, 5]),
            Err(SolitaireError::InvalidMessageSymbol {
                position: 2,
                value: 27
            })
        ));
        assert_eq!(cipher.deck(), &Deck::unkeyed());
        assert_eq!(cipher.keystream().rounds(), 0);
    }

    #[test]
    fn test_batch_continuous() {
        let mut cipher = Solitaire::new(hello_deck());
        let results = cipher.encrypt_batch(&messages()).unwrap();
        assert_eq!(
            texts(results),
            vec!["CNXLAFXOOA", "VGEYBKZVCODECEPANVCDZYMTRQHVVV"]
        );
        assert_eq!(cipher.messages_processed(), 2);
    }

    #[test]
    fn test_batch_per_message() {
        let mut cipher = Solitaire::new(hello_deck()).with_key_schedule(KeySchedule::PerMessage);
        let results = cipher.encrypt_batch(&messages()).unwrap();
        assert_eq!(
            texts(results),
            vec!["CNXLAFXOOA", "HNQTYNJQWENWSZPRONJJDKDDTCVHZY"]
        );
    }

    #[test]
    fn test_batch_decrypt_continuous() {
        let mut encoder = Solitaire::new(hello_deck());
        let cipher_messages: Vec<Message> = encoder
            .encrypt_batch(&messages())
            .unwrap()
            .into_iter()
            .enumerate()
            .map(|(i, r)| Message::new(i + 1, r.unwrap()))
            .collect();

        let mut decoder = Solitaire::new(hello_deck());
        let results = decoder.decrypt_batch(&cipher_messages).unwrap();
        assert_eq!(
            texts(results),
            vec!["HELLOWORLD", "MEETMEATTHEUSUALPLACEATTENXXXX"]
        );
    }

    #[test]
    fn test_batch_rejects_single_message() {
        let batch = vec![
            Message::new(1, vec![1, 1, 1, 1, 1]),
            Message::new(2, vec![1, 0, 1, 1, 1]),
            Message::new(3, vec![1, 1, 1, 1, 1]),
        ];
        let mut cipher = Solitaire::new(Deck::unkeyed());
        let results = cipher.encrypt_batch(&batch).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap(), &vec![9, 17, 12, 9, 7]);
        match &results[1] {
            Err(SolitaireError::MessageRejected { line, source }) => {
                assert_eq!(*line, 2);
                assert!(matches!(
                    **source,
                    SolitaireError::InvalidMessageSymbol {
                        position: 1,
                        value: 0
                    }
                ));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        // the rejected message drew no keystream
        assert_eq!(results[2].as_ref().unwrap(), &vec![26, 6, 2, 21, 8]);
    }

    #[test]
    fn test_batch_stall_aborts() {
        let mut cipher = Solitaire::with_max_rounds(Deck::unkeyed(), 1).unwrap();
        let batch = vec![Message::new(1, vec![1, 1, 1, 1, 1])];
        assert!(matches!(
            cipher.encrypt_batch(&batch),
            Err(SolitaireError::KeystreamStalled { rounds: 1 })
        ));
    }

    #[test]
    fn test_reset_restores_key() {
        let mut cipher = Solitaire::new(hello_deck());
        cipher.encrypt(&[1; 10]).unwrap();
        assert_ne!(cipher.deck(), &hello_deck());
        cipher.reset();
        assert_eq!(cipher.deck(), &hello_deck());
    }
}
