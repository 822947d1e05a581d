#![forbid(unsafe_code)]

//! Array and target input.
//!
//! The engines assume a well-typed integer sequence. This module is where
//! text from a user becomes one, and where random demo arrays come from.

use rand::Rng;

/// Largest array a run accepts.
pub const MAX_ARRAY_LEN: usize = 50;

/// Length range of [`random_array`].
pub const RANDOM_LEN: std::ops::RangeInclusive<usize> = 5..=24;

/// Value range of [`random_array`].
pub const RANDOM_VALUES: std::ops::RangeInclusive<i64> = 1..=100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("array cannot be empty")]
    Empty,

    #[error("invalid number: {token:?}")]
    InvalidNumber { token: String },

    #[error("array size should not exceed {max} elements (got {len})")]
    TooLong { len: usize, max: usize },

    #[error("invalid search target: {text:?}")]
    InvalidTarget { text: String },
}

/// Parse a comma-separated list of integers.
///
/// Whitespace around each value is ignored. Every token must be a complete
/// integer; the list must hold between 1 and [`MAX_ARRAY_LEN`] values.
pub fn parse_array(text: &str) -> Result<Vec<i64>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let values = text
        .split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<i64>().map_err(|_| InputError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() > MAX_ARRAY_LEN {
        return Err(InputError::TooLong {
            len: values.len(),
            max: MAX_ARRAY_LEN,
        });
    }
    Ok(values)
}

/// Parse a single search target.
pub fn parse_target(text: &str) -> Result<i64, InputError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidTarget {
            text: text.to_string(),
        })
}

/// Generate a demo array: 5 to 24 values, each between 1 and 100.
pub fn random_array<R: Rng + ?Sized>(rng: &mut R) -> Vec<i64> {
    let len = rng.random_range(RANDOM_LEN);
    (0..len).map(|_| rng.random_range(RANDOM_VALUES)).collect()
}

/// Render values the way [`parse_array`] reads them.
#[must_use]
pub fn format_array(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
