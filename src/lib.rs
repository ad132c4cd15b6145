//! Solitaire deck cipher.
//!
//! Solitaire is a stream cipher driven by a 28-card deck: 26 ordinary
//! cards (values 1..=26) and two jokers (27 and 28). Two parties sharing
//! the initial ordering of the deck derive the same keystream and use it
//! to encrypt and decrypt letters with 1-based modular arithmetic.
//!
//! This is a classic paper cipher. It is not a vetted cryptographic
//! primitive.
//!
//! # Architecture
//!
//! ```text
//! Deck               (28-card permutation: locate, swap, joker advance, cuts)
//!     ↕ owned and mutated by
//! KeystreamGenerator (mixing round + output card, joker rejection, round cap)
//!     ↕ values combined by
//! transform          (encrypt_symbol / decrypt_symbol over A=1..Z=26)
//!     ↕ driven per message by
//! Solitaire          (key deck, batches, key schedule)
//! ```
//!
//! Deck files and message files are read by [`input`]; card names and
//! letter conversion live in [`utils`].
//!
//! # Examples
//!
//! Encrypt and decrypt with the unkeyed deck:
//!
//! ```
//! use solitaire::utils::converter::{numbers_to_string, string_to_numbers};
//! use solitaire::{Deck, Solitaire};
//!
//! let plain = string_to_numbers("AAAAAAAAAAAAAAA").unwrap();
//!
//! let mut encoder = Solitaire::new(Deck::unkeyed());
//! let cipher = encoder.encrypt(&plain).unwrap();
//! assert_eq!(numbers_to_string(&cipher).unwrap(), "IQLIGZFBUHQIADG");
//!
//! let mut decoder = Solitaire::new(Deck::unkeyed());
//! assert_eq!(decoder.decrypt(&cipher).unwrap(), plain);
//! ```
//!
//! Draw raw keystream values from a keyed deck:
//!
//! ```
//! use solitaire::utils::card::parse_deck;
//! use solitaire::KeystreamGenerator;
//!
//! let deck = parse_deck(
//!     "JA 5C KD 2D 9C JB 10D AC 7D 3C QD 4D 8C JC \
//!      6D AD 10C 2C 9D 5D 3D KC 6C JD 8D 4C QC 7C",
//! )
//! .unwrap();
//! let mut keystream = KeystreamGenerator::new(deck);
//! assert_eq!(keystream.next_sequence(5).unwrap(), vec![21, 9, 12, 26, 12]);
//! ```

#![deny(clippy::all)]

pub mod deck;
pub mod error;
pub mod input;
pub mod keystream;
pub mod message;
pub mod transform;
pub mod utils;

mod solitaire;

pub use deck::Deck;
pub use error::{ConfigurationError, SolitaireError};
pub use keystream::KeystreamGenerator;
pub use message::Message;
pub use solitaire::{KeySchedule, Solitaire};
