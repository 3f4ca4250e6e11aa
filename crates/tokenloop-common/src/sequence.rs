//! Deterministic zero-padded numeric input sequence.

use thiserror::Error;

/// Errors from the numeric sequence generator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// The input contained a character other than an ASCII decimal digit.
    #[error("data must be a numeric string")]
    InvalidInput,
}

/// Increment a zero-padded decimal string, preserving its width.
///
/// `"009"` becomes `"010"`. Overflowing the original width returns the
/// wider string untruncated: `"999"` becomes `"1000"`. Works for digit
/// strings of any length; the carry is digit-wise, never parsed into a
/// machine integer.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidInput`] if the input is empty or any
/// character is not an ASCII decimal digit.
pub fn increment_numeric_string(s: &str) -> Result<String, SequenceError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SequenceError::InvalidInput);
    }

    let mut digits = s.as_bytes().to_vec();
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return Ok(digits.into_iter().map(char::from).collect());
        }
    }

    // every digit was a 9: the value grows one digit wider
    digits.insert(0, b'1');
    Ok(digits.into_iter().map(char::from).collect())
}
