//! Letter-to-number conversion utilities.
//!
//! Provides conversion between text and the 1-based numeric letters the
//! cipher works on (`A = 1` .. `Z = 26`), and the cleaning and padding
//! applied to raw message lines.

use crate::error::{Result, SolitaireError};
use crate::transform::ALPHABET_SIZE;

/// Messages are padded to a multiple of this many letters.
pub const GROUP_SIZE: usize = 5;

/// Letter used to pad messages.
pub const PAD_LETTER: char = 'X';

/// Converts a letter to its number, ignoring case.
///
/// # Parameters
/// - `letter`: An ASCII letter.
///
/// # Returns
/// The letter's position in the alphabet, `1..=26`.
///
/// # Errors
/// Returns [`SolitaireError::InvalidLetter`] if `letter` is not `A`-`Z`
/// or `a`-`z`.
pub fn letter_to_number(letter: char) -> Result<u8> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Ok(upper as u8 - b'A' + 1)
    } else {
        Err(SolitaireError::InvalidLetter { letter })
    }
}

/// Converts a number in `1..=26` to its uppercase letter.
///
/// # Errors
/// Returns [`SolitaireError::InputRange`] if `number` is outside `1..=26`.
pub fn number_to_letter(number: u8) -> Result<char> {
    if !(1..=ALPHABET_SIZE).contains(&number) {
        return Err(SolitaireError::InputRange { value: number });
    }
    Ok((b'A' + number - 1) as char)
}

/// Converts a run of numbers to an uppercase string.
///
/// # Errors
/// Returns [`SolitaireError::InvalidMessageSymbol`] naming the first
/// number outside `1..=26`.
pub fn numbers_to_string(numbers: &[u8]) -> Result<String> {
    numbers
        .iter()
        .enumerate()
        .map(|(position, &value)| {
            number_to_letter(value)
                .map_err(|_| SolitaireError::InvalidMessageSymbol { position, value })
        })
        .collect()
}

/// Converts a string of letters to numbers.
///
/// # Errors
/// Returns [`SolitaireError::InvalidLetter`] for the first non-letter.
pub fn string_to_numbers(text: &str) -> Result<Vec<u8>> {
    text.chars().map(letter_to_number).collect()
}

/// Returns `true` if `line` holds at least one ASCII letter.
pub fn has_letters(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_alphabetic())
}

/// Keeps only ASCII letters, uppercased, and pads with [`PAD_LETTER`] to a
/// multiple of [`GROUP_SIZE`].
///
/// # Examples
///
/// ```
/// use solitaire::utils::converter::clean_message;
///
/// assert_eq!(clean_message("Hello, World!"), "HELLOWORLD");
/// assert_eq!(clean_message("Do not use PC"), "DONOTUSEPC");
/// assert_eq!(clean_message("attack at 10"), "ATTACKATXX");
/// ```
pub fn clean_message(line: &str) -> String {
    let mut cleaned: String = line
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let remainder = cleaned.len() % GROUP_SIZE;
    if remainder != 0 {
        for _ in remainder..GROUP_SIZE {
            cleaned.push(PAD_LETTER);
        }
    }
    cleaned
}
