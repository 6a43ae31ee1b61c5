//! Parsing of operator-supplied value lists
//!
//! Accepts signed integers separated by commas and/or whitespace, e.g.
//! `"5, 3, -8 1"`. Blank input is an empty list. Empty fields left by
//! doubled or trailing commas are skipped.

use crate::step::Value;
use std::num::IntErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Token is not an integer
    #[error("'{token}' at column {column} is not a number")]
    InvalidNumber { token: String, column: usize },

    /// Token is an integer that does not fit a value
    #[error("'{token}' at column {column} is out of range")]
    OutOfRange { token: String, column: usize },
}

impl InputError {
    /// 1-based column of the offending token
    pub fn column(&self) -> usize {
        match self {
            InputError::InvalidNumber { column, .. } | InputError::OutOfRange { column, .. } => {
                *column
            }
        }
    }
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Parse a separated list of integers
pub fn parse_values(input: &str) -> Result<Vec<Value>, InputError> {
    let mut values = Vec::new();
    let mut chars = input.char_indices().peekable();
    let mut column = 0;

    while let Some(&(start, c)) = chars.peek() {
        if is_separator(c) {
            chars.next();
            column += 1;
            continue;
        }

        let token_column = column + 1;
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if is_separator(c) {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
            column += 1;
        }

        let token = &input[start..end];
        let value = token.parse::<Value>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange {
                token: token.to_string(),
                column: token_column,
            },
            _ => InputError::InvalidNumber {
                token: token.to_string(),
                column: token_column,
            },
        })?;
        values.push(value);
    }

    Ok(values)
}
