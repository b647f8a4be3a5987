//! Document comparison orchestration.
//!
//! This module coordinates the full comparison pipeline between two
//! documents: padding, per-line LCS, scoring, and diff localization.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::align::{check_threshold, fill_lcs_matrix, find_lcs, find_lcs_length, LcsError};
use crate::diff::find_diff_in_sentence;
use crate::models::*;
use crate::score::{calculate_text_plagiarism_score, line_score, padded_lines};
use crate::tokenize::tokenize_by_lines;

/// Compare one aligned sentence pair.
///
/// The LCS length and score honour `plagiarism_threshold`; the diff ranges
/// are computed from the unthresholded LCS so that short matches are still
/// localized.
pub fn sentence_stats(
    line: usize,
    original: &[String],
    suspicious: &[String],
    plagiarism_threshold: f64,
) -> Result<SentenceStats, LcsError> {
    let lcs_length = find_lcs_length(original, suspicious, plagiarism_threshold)?;
    let plagiarism_score = line_score(lcs_length, suspicious)?;

    let matrix = fill_lcs_matrix(original, suspicious);
    let lcs = find_lcs(original, suspicious, &matrix)?;
    let diff_ranges = find_diff_in_sentence(original, suspicious, &lcs)?;

    Ok(SentenceStats {
        line,
        lcs_length,
        plagiarism_score,
        diff_ranges,
        error: None,
    })
}

/// Accumulate LCS length, plagiarism score and diff ranges for every line
/// pair of two tokenized documents, plus the overall document score.
///
/// The shorter document is padded with empty sentences. A failure on one
/// line pair is recorded on that line's stats and does not abort the rest.
pub fn accumulate_diff_stats(
    original_text_tokens: &[TokenSequence],
    suspicious_text_tokens: &[TokenSequence],
    plagiarism_threshold: f64,
) -> Result<DocumentStats, LcsError> {
    accumulate_with_progress(
        original_text_tokens,
        suspicious_text_tokens,
        plagiarism_threshold,
        None,
    )
}

fn accumulate_with_progress(
    original_text_tokens: &[TokenSequence],
    suspicious_text_tokens: &[TokenSequence],
    plagiarism_threshold: f64,
    progress: Option<&ProgressBar>,
) -> Result<DocumentStats, LcsError> {
    check_threshold(plagiarism_threshold)?;

    let length = original_text_tokens.len().max(suspicious_text_tokens.len());
    let originals: Vec<&[String]> = padded_lines(original_text_tokens, length).collect();
    let suspicious: Vec<&[String]> = padded_lines(suspicious_text_tokens, length).collect();

    tracing::debug!(
        lines = length,
        original_lines = original_text_tokens.len(),
        suspicious_lines = suspicious_text_tokens.len(),
        threshold = plagiarism_threshold,
        "accumulating diff stats"
    );

    let per_sentence: Vec<SentenceStats> = (0..length)
        .into_par_iter()
        .map(|line| {
            let stats = sentence_stats(line, originals[line], suspicious[line], plagiarism_threshold)
                .unwrap_or_else(|err| {
                    tracing::warn!(line, error = %err, "sentence pair comparison failed");
                    SentenceStats::failed(line, err.to_string())
                });

            if let Some(pb) = progress {
                pb.inc(1);
            }

            stats
        })
        .collect();

    let overall_score = calculate_text_plagiarism_score(
        original_text_tokens,
        suspicious_text_tokens,
        plagiarism_threshold,
    )?;

    tracing::debug!(overall_score, "document comparison finished");

    Ok(DocumentStats {
        overall_score,
        per_sentence,
    })
}

/// Compare two tokenized documents and wrap the stats with run metadata.
pub fn compare_documents(
    original: &[TokenSequence],
    suspicious: &[TokenSequence],
    params: &ComparisonParams,
    show_progress: bool,
) -> Result<ComparisonResult, LcsError> {
    params.validate()?;

    let progress = if show_progress {
        let pb = ProgressBar::new(original.len().max(suspicious.len()) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines ({per_sec})",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let stats = accumulate_with_progress(
        original,
        suspicious,
        params.plagiarism_threshold,
        progress.as_ref(),
    )?;

    if let Some(pb) = progress {
        pb.finish_with_message("Done");
    }

    let failed = stats.per_sentence.iter().filter(|s| s.is_failed()).count();
    if failed > 0 {
        tracing::warn!(failed, "some sentence pairs could not be compared");
    }

    Ok(ComparisonResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        parameters: params.clone(),
        original: DocumentInfo::from_document(original),
        suspicious: DocumentInfo::from_document(suspicious),
        stats,
    })
}

/// Tokenize two raw texts line by line and compare them.
pub fn compare_texts(
    original_text: &str,
    suspicious_text: &str,
    params: &ComparisonParams,
    show_progress: bool,
) -> Result<ComparisonResult, LcsError> {
    let original = tokenize_by_lines(original_text);
    let suspicious = tokenize_by_lines(suspicious_text);

    tracing::info!(
        original_lines = original.len(),
        suspicious_lines = suspicious.len(),
        "tokenized documents"
    );

    compare_documents(&original, &suspicious, params, show_progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Vec<TokenSequence> {
        lines
            .iter()
            .map(|l| l.split_whitespace().map(String::from).collect())
            .collect()
    }

    #[test]
    fn test_sentence_stats_threshold_does_not_hide_diff() {
        let original = doc(&["the moon is rising"]);
        let suspicious = doc(&["a moon will rise"]);

        let stats = sentence_stats(0, &original[0], &suspicious[0], 0.3).unwrap();
        // 1/4 is below the threshold
        assert_eq!(stats.lcs_length, 0);
        assert_eq!(stats.plagiarism_score, 0.0);
        // but "moon" is still localized as common
        assert_eq!(
            stats.diff_ranges.original,
            vec![DiffRange::new(0, 1), DiffRange::new(2, 4)]
        );
        assert_eq!(
            stats.diff_ranges.suspicious,
            vec![DiffRange::new(0, 1), DiffRange::new(2, 4)]
        );
    }

    #[test]
    fn test_accumulate_scenario() {
        let original = doc(&["the cat is big", "the sun is beautiful", "the moon is rising"]);
        let suspicious = doc(&["the big cat", "the beautiful sun was rising", "a moon will rise"]);

        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();

        assert_eq!(stats.per_sentence.len(), 3);
        assert!((stats.overall_score - 0.356).abs() < 1e-9);

        let lengths: Vec<usize> = stats.per_sentence.iter().map(|s| s.lcs_length).collect();
        assert_eq!(lengths, vec![2, 2, 0]);
        let scores: Vec<f64> = stats.per_sentence.iter().map(|s| s.plagiarism_score).collect();
        assert_eq!(scores, vec![0.667, 0.4, 0.0]);

        let first = &stats.per_sentence[0];
        assert_eq!(first.line, 0);
        assert_eq!(first.diff_ranges.original, vec![DiffRange::new(2, 4)]);
        assert_eq!(first.diff_ranges.suspicious, vec![DiffRange::new(1, 2)]);
    }

    #[test]
    fn test_accumulate_pads_original() {
        let original = doc(&["the cat"]);
        let suspicious = doc(&["the cat", "a dog barks"]);

        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();
        assert_eq!(stats.per_sentence.len(), 2);

        let padded = &stats.per_sentence[1];
        assert_eq!(padded.lcs_length, 0);
        assert_eq!(padded.plagiarism_score, 0.0);
        assert!(padded.diff_ranges.original.is_empty());
        assert_eq!(padded.diff_ranges.suspicious, vec![DiffRange::new(0, 3)]);
        assert_eq!(stats.overall_score, 0.5);
    }

    #[test]
    fn test_accumulate_pads_suspicious() {
        let original = doc(&["the cat", "extra line here"]);
        let suspicious = doc(&["the cat"]);

        let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();
        assert_eq!(stats.per_sentence.len(), 2);

        let padded = &stats.per_sentence[1];
        assert_eq!(padded.plagiarism_score, 0.0);
        assert_eq!(padded.diff_ranges.original, vec![DiffRange::new(0, 3)]);
        assert!(padded.diff_ranges.suspicious.is_empty());
        // Only suspicious lines count toward the document score
        assert_eq!(stats.overall_score, 1.0);
    }

    #[test]
    fn test_accumulate_empty_documents() {
        let empty: Vec<TokenSequence> = Vec::new();
        let stats = accumulate_diff_stats(&empty, &empty, 0.3).unwrap();
        assert!(stats.per_sentence.is_empty());
        assert_eq!(stats.overall_score, 0.0);
    }

    #[test]
    fn test_accumulate_rejects_bad_threshold() {
        let d = doc(&["a"]);
        assert_eq!(
            accumulate_diff_stats(&d, &d, -1.0),
            Err(LcsError::InvalidThreshold(-1.0))
        );
    }

    #[test]
    fn test_compare_texts() {
        let params = ComparisonParams::default();
        let result = compare_texts(
            "The cat is big.\nThe sun is beautiful.",
            "The big cat!\nThe beautiful sun was rising.",
            &params,
            false,
        )
        .unwrap();

        assert_eq!(result.original.line_count, 2);
        assert_eq!(result.suspicious.token_count, 8);
        assert_eq!(result.parameters, params);
        assert_eq!(result.stats.per_sentence.len(), 2);
        assert_eq!(result.version, env!("CARGO_PKG_VERSION"));
    }
}
