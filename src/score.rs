//! Plagiarism scores for sentences and whole documents.

use crate::align::{check_threshold, find_lcs_length, LcsError};
use crate::models::TokenSequence;

/// Round to 3 decimal places, ties to even.
#[inline]
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round_ties_even() / 1000.0
}

/// Lines of `doc` right-padded with empty sentences up to `len`.
///
/// Lines beyond `len` are dropped; comparison is strictly positional.
pub(crate) fn padded_lines(doc: &[TokenSequence], len: usize) -> impl Iterator<Item = &[String]> {
    let empty: &[String] = &[];
    doc.iter()
        .map(Vec::as_slice)
        .chain(std::iter::repeat(empty))
        .take(len)
}

/// Share of the suspicious sentence covered by the LCS, rounded to 3 decimals.
///
/// Fails on an empty suspicious sentence; callers comparing documents treat
/// that case as a score of 0.
pub fn calculate_plagiarism_score<T>(
    lcs_length: usize,
    suspicious_sentence_tokens: &[T],
) -> Result<f64, LcsError> {
    if suspicious_sentence_tokens.is_empty() {
        return Err(LcsError::DegenerateComparison);
    }
    if lcs_length > suspicious_sentence_tokens.len() {
        return Err(LcsError::LcsTooLong {
            lcs_length,
            sentence_length: suspicious_sentence_tokens.len(),
        });
    }

    Ok(round3(
        lcs_length as f64 / suspicious_sentence_tokens.len() as f64,
    ))
}

/// Sentence score inside a document comparison: an empty suspicious line scores 0.
pub(crate) fn line_score<T>(lcs_length: usize, suspicious: &[T]) -> Result<f64, LcsError> {
    match calculate_plagiarism_score(lcs_length, suspicious) {
        Err(LcsError::DegenerateComparison) => Ok(0.0),
        other => other,
    }
}

/// Average sentence score over the lines of the suspicious document.
///
/// The original document is padded with empty sentences so that every
/// suspicious line has a partner. Each line's LCS length goes through the
/// threshold before scoring. The sum is divided by the number of suspicious
/// lines and rounded to 3 decimals; an empty suspicious document scores 0.
pub fn calculate_text_plagiarism_score(
    original_text_tokens: &[TokenSequence],
    suspicious_text_tokens: &[TokenSequence],
    plagiarism_threshold: f64,
) -> Result<f64, LcsError> {
    check_threshold(plagiarism_threshold)?;

    if suspicious_text_tokens.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for (original, suspicious) in padded_lines(original_text_tokens, suspicious_text_tokens.len())
        .zip(suspicious_text_tokens)
    {
        let suspicious = suspicious.as_slice();
        let lcs_length = find_lcs_length(original, suspicious, plagiarism_threshold)?;
        total += line_score(lcs_length, suspicious)?;
    }

    Ok(round3(total / suspicious_text_tokens.len() as f64))
}
