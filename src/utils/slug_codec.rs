//! Public slug encoding for short link identifiers.
//!
//! Slugs are a base-32 positional rendering of a link's database id using the
//! RFC 4648 digit set `A-Z2-7`. Output is uppercase, most significant digit
//! first, and left-padded with the literal character `'0'` to a minimum of
//! two characters.
//!
//! `'0'` is **not** a digit of the alphabet. It is a pure padding
//! placeholder: [`decode`] strips every occurrence before reading digits, so
//! `"0B"`, `"B"` and `"00B"` all decode to `1`. This makes the scheme a
//! bijection between `u64` and the strings [`encode`] produces, but it is not
//! a general fixed-width base-32 codec.
//!
//! ```ignore
//! assert_eq!(encode(1), "0B");
//! assert_eq!(encode(9393939), "I6VYT");
//! assert_eq!(decode("i6vyt").unwrap(), 9393939);
//! ```

use thiserror::Error;

/// Digit set, indexed by digit value.
pub const SLUG_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Padding placeholder, excluded from the digit set.
const PADDING: char = '0';

/// Minimum length of an encoded slug.
const MIN_LENGTH: usize = 2;

const BASE: u64 = SLUG_ALPHABET.len() as u64;

/// Errors produced when decoding a slug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("invalid slug character '{0}'")]
    InvalidCharacter(char),

    #[error("slug value does not fit in 64 bits")]
    Overflow,
}

/// Encodes an identifier as a slug.
pub fn encode(mut id: u64) -> String {
    let mut digits = Vec::with_capacity(13);

    while id > 0 {
        digits.push(SLUG_ALPHABET[(id % BASE) as usize] as char);
        id /= BASE;
    }

    while digits.len() < MIN_LENGTH {
        digits.push(PADDING);
    }

    digits.iter().rev().collect()
}

/// Decodes a slug back into an identifier.
///
/// Input is trimmed and upper-cased first, so decoding is case-insensitive.
/// A slug consisting only of padding (or nothing at all) decodes to `0`.
///
/// # Errors
///
/// Returns [`SlugError::InvalidCharacter`] for any character outside the
/// alphabet that is not padding, and [`SlugError::Overflow`] when the value
/// exceeds `u64::MAX`.
pub fn decode(slug: &str) -> Result<u64, SlugError> {
    slug.trim()
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|&c| c != PADDING)
        .try_fold(0u64, |acc, c| {
            let digit = digit_value(c).ok_or(SlugError::InvalidCharacter(c))?;
            acc.checked_mul(BASE)
                .and_then(|v| v.checked_add(digit))
                .ok_or(SlugError::Overflow)
        })
}

fn digit_value(c: char) -> Option<u64> {
    if !c.is_ascii() {
        return None;
    }
    SLUG_ALPHABET
        .iter()
        .position(|&symbol| symbol == c as u8)
        .map(|pos| pos as u64)
}
