//! Parsing user-supplied arrays
//!
//! Input arrives as comma-separated text (`"5, 3, 8, 2"`). Tokens that are not
//! integers are dropped rather than failing the whole line, matching how the
//! web visualizer behaved; they are reported back so the caller can warn.

use crate::constants::MAX_INPUT_LEN;
use thiserror::Error;

/// Errors that can occur while parsing an input line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// No token parsed as an integer
    #[error("no numbers found in input")]
    NoValues,

    /// More values than the visualizer can show
    #[error("too many values: {len} (at most {max})")]
    TooLong { len: usize, max: usize },
}

/// Result of parsing an input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub values: Vec<i64>,
    /// Tokens that were skipped because they are not integers
    pub rejected: Vec<String>,
}

impl ParsedInput {
    pub fn has_rejected(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Parse a comma- or whitespace-separated list of integers
pub fn parse_values(text: &str) -> Result<ParsedInput, InputError> {
    let mut values = Vec::new();
    let mut rejected = Vec::new();

    for token in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        match token.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) => rejected.push(token.to_string()),
        }
    }

    if !rejected.is_empty() {
        tracing::warn!(?rejected, "skipped non-numeric input tokens");
    }
    if values.is_empty() {
        return Err(InputError::NoValues);
    }
    if values.len() > MAX_INPUT_LEN {
        return Err(InputError::TooLong {
            len: values.len(),
            max: MAX_INPUT_LEN,
        });
    }

    Ok(ParsedInput { values, rejected })
}

/// Render values back into the editable text form
pub fn format_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
