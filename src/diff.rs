//! Localize the spans of a sentence that are not part of the LCS.
//!
//! Each side of a sentence pair is walked against the LCS independently.
//! Tokens matching the next unconsumed LCS token are covered; runs of
//! uncovered tokens merge into half-open ranges.

use crate::align::LcsError;
use crate::models::{DiffRange, DiffRanges};

/// Ranges of `tokens` not covered by `lcs`, sorted and non-overlapping.
///
/// Once the LCS is exhausted, every remaining token joins one final range.
/// Fails if `lcs` is not a subsequence of `tokens`.
pub fn find_diff<T: PartialEq>(tokens: &[T], lcs: &[T]) -> Result<Vec<DiffRange>, LcsError> {
    let mut ranges = Vec::new();
    let mut open: Option<usize> = None;
    let mut idx_lcs = 0;

    for (idx, token) in tokens.iter().enumerate() {
        if idx_lcs < lcs.len() && *token == lcs[idx_lcs] {
            idx_lcs += 1;
            if let Some(start) = open.take() {
                ranges.push(DiffRange::new(start, idx));
            }
        } else if open.is_none() {
            open = Some(idx);
        }
    }

    if let Some(start) = open {
        ranges.push(DiffRange::new(start, tokens.len()));
    }

    if idx_lcs < lcs.len() {
        return Err(LcsError::NotASubsequence);
    }

    Ok(ranges)
}

/// Diff ranges of both sentences against their shared LCS.
pub fn find_diff_in_sentence<T: PartialEq>(
    original_sentence_tokens: &[T],
    suspicious_sentence_tokens: &[T],
    lcs: &[T],
) -> Result<DiffRanges, LcsError> {
    Ok(DiffRanges {
        original: find_diff(original_sentence_tokens, lcs)?,
        suspicious: find_diff(suspicious_sentence_tokens, lcs)?,
    })
}

/// Number of tokens covered by the given ranges.
pub fn diff_token_count(ranges: &[DiffRange]) -> usize {
    ranges.iter().map(DiffRange::len).sum()
}
