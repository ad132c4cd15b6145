//! Letter arithmetic combining message symbols with keystream values.
//!
//! Letters are 1-based (`A = 1` .. `Z = 26`); there is no symbol 0, so the
//! wrap rules below differ from a plain `% 26`.

use crate::error::{Result, SolitaireError};

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: u8 = 26;

fn check_letter(value: u8) -> Result<u8> {
    if (1..=ALPHABET_SIZE).contains(&value) {
        Ok(value)
    } else {
        Err(SolitaireError::InputRange { value })
    }
}

/// Encrypts one symbol: `((plain + key - 1) mod 26) + 1`.
///
/// # Errors
/// Returns [`SolitaireError::InputRange`] if either input is outside `1..=26`.
///
/// # Examples
///
/// ```
/// use solitaire::transform::encrypt_symbol;
///
/// assert_eq!(encrypt_symbol(1, 4).unwrap(), 5);
/// assert_eq!(encrypt_symbol(26, 26).unwrap(), 26);
/// ```
pub fn encrypt_symbol(plain: u8, key: u8) -> Result<u8> {
    let plain = check_letter(plain)?;
    let key = check_letter(key)?;
    Ok((plain + key - 1) % ALPHABET_SIZE + 1)
}

/// Decrypts one symbol: `cipher - key`, plus 26 when the difference is not
/// positive.
///
/// # Errors
/// Returns [`SolitaireError::InputRange`] if either input is outside `1..=26`.
///
/// # Examples
///
/// ```
/// use solitaire::transform::decrypt_symbol;
///
/// assert_eq!(decrypt_symbol(5, 4).unwrap(), 1);
/// assert_eq!(decrypt_symbol(4, 4).unwrap(), 26);
/// ```
pub fn decrypt_symbol(cipher: u8, key: u8) -> Result<u8> {
    let cipher = check_letter(cipher)? as i16;
    let key = check_letter(key)? as i16;
    let mut diff = cipher - key;
    if diff <= 0 {
        diff += ALPHABET_SIZE as i16;
    }
    Ok(diff as u8)
}

/// Applies `op` pairwise over aligned symbol and keystream slices.
fn combine(symbols: &[u8], keystream: &[u8], op: fn(u8, u8) -> Result<u8>) -> Result<Vec<u8>> {
    if symbols.len() != keystream.len() {
        return Err(SolitaireError::LengthMismatch {
            symbols: symbols.len(),
            keystream: keystream.len(),
        });
    }
    symbols
        .iter()
        .zip(keystream)
        .enumerate()
        .map(|(position, (&symbol, &key))| {
            check_letter(symbol)
                .map_err(|_| SolitaireError::InvalidMessageSymbol {
                    position,
                    value: symbol,
                })
                .and_then(|symbol| op(symbol, key))
        })
        .collect()
}

/// Encrypts a run of symbols with the aligned keystream values.
///
/// # Errors
/// - [`SolitaireError::LengthMismatch`] if the slices differ in length.
/// - [`SolitaireError::InvalidMessageSymbol`] naming the first bad symbol.
/// - [`SolitaireError::InputRange`] for a bad keystream value.
pub fn encrypt_symbols(plain: &[u8], keystream: &[u8]) -> Result<Vec<u8>> {
    combine(plain, keystream, encrypt_symbol)
}

/// Decrypts a run of symbols with the aligned keystream values.
///
/// # Errors
/// Same as [`encrypt_symbols`].
pub fn decrypt_symbols(cipher: &[u8], keystream: &[u8]) -> Result<Vec<u8>> {
    combine(cipher, keystream, decrypt_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_boundaries() {
        assert_eq!(encrypt_symbol(1, 1).unwrap(), 2);
        assert_eq!(encrypt_symbol(25, 1).unwrap(), 26);
        assert_eq!(encrypt_symbol(26, 1).unwrap(), 1);
        assert_eq!(encrypt_symbol(13, 13).unwrap(), 26);
        assert_eq!(encrypt_symbol(14, 13).unwrap(), 1);
    }

    #[test]
    fn test_decrypt_boundaries() {
        assert_eq!(decrypt_symbol(1, 1).unwrap(), 26);
        assert_eq!(decrypt_symbol(1, 26).unwrap(), 1);
        assert_eq!(decrypt_symbol(26, 26).unwrap(), 26);
        assert_eq!(decrypt_symbol(26, 1).unwrap(), 25);
    }

    #[test]
    fn test_out_of_range_inputs() {
        assert!(matches!(
            encrypt_symbol(0, 5),
            Err(SolitaireError::InputRange { value: 0 })
        ));
        assert!(matches!(
            encrypt_symbol(5, 27),
            Err(SolitaireError::InputRange { value: 27 })
        ));
        assert!(matches!(
            decrypt_symbol(27, 5),
            Err(SolitaireError::InputRange { value: 27 })
        ));
        assert!(matches!(
            decrypt_symbol(5, 0),
            Err(SolitaireError::InputRange { value: 0 })
        ));
    }

    #[test]
    fn test_encrypt_symbols() {
        // HELLOWORLD with its keystream
        let plain = [8, 5, 12, 12, 15, 23, 15, 18, 12, 4];
        let keystream = [21, 9, 12, 26, 12, 9, 9, 23, 3, 23];
        let cipher = encrypt_symbols(&plain, &keystream).unwrap();
        assert_eq!(cipher, [3, 14, 24, 12, 1, 6, 24, 15, 15, 1]);
        assert_eq!(decrypt_symbols(&cipher, &keystream).unwrap(), plain);
    }

    #[test]
    fn test_symbols_length_mismatch() {
        assert!(matches!(
            encrypt_symbols(&[1, 2, 3], &[1, 2]),
            Err(SolitaireError::LengthMismatch {
                symbols: 3,
                keystream: 2
            })
        ));
    }

    #[test]
    fn test_symbols_reports_position() {
        assert!(matches!(
            decrypt_symbols(&[1, 2, 30, 4], &[1, 1, 1, 1]),
            Err(SolitaireError::InvalidMessageSymbol {
                position: 2,
                value: 30
            })
        ));
    }
}
