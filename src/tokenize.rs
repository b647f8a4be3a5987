//! Text normalization into token sequences.
//!
//! Tokens are lowercase words with every non-alphanumeric character removed.
//! The LCS core never calls into this module; it only consumes its output.

use crate::models::{Document, TokenSequence};

/// Split a sentence into lowercase, punctuation-free tokens.
///
/// e.g. `"The cat, the HAT!"` -> `["the", "cat", "the", "hat"]`
pub fn tokenize(text: &str) -> TokenSequence {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Tokenize a document line by line.
///
/// Blank lines keep their position as empty sentences. A trailing newline
/// does not add an extra line.
pub fn tokenize_by_lines(text: &str) -> Document {
    text.lines().map(tokenize).collect()
}
