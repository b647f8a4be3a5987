//! Output formatting for comparison results (JSON, CSV, text report).

use crate::models::{ComparisonResult, DiffRange, DocumentStats, SentenceStats, TokenSequence};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write comparison result as JSON.
pub fn write_json<W: Write>(result: &ComparisonResult, writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(result)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write comparison result as JSON to a file.
pub fn write_json_file(result: &ComparisonResult, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_json(result, &mut file)
}

/// Render ranges as `start-end` pairs separated by `;`.
fn format_ranges(ranges: &[DiffRange]) -> String {
    ranges
        .iter()
        .map(|r| format!("{}-{}", r.start, r.end))
        .collect::<Vec<_>>()
        .join(";")
}

/// Write per-sentence stats as CSV.
pub fn write_csv<W: Write>(stats: &DocumentStats, writer: &mut W) -> Result<(), OutputError> {
    writeln!(
        writer,
        "line,lcs_length,plagiarism_score,original_diff,suspicious_diff,error"
    )?;

    for sentence in &stats.per_sentence {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            sentence.line,
            sentence.lcs_length,
            sentence.plagiarism_score,
            format_ranges(&sentence.diff_ranges.original),
            format_ranges(&sentence.diff_ranges.suspicious),
            sentence.error.as_deref().unwrap_or("").replace(',', " ")
        )?;
    }

    Ok(())
}

/// Write per-sentence stats as CSV to a file.
pub fn write_csv_file(stats: &DocumentStats, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_csv(stats, &mut file)
}

/// Write a summary report.
pub fn write_summary<W: Write>(result: &ComparisonResult, writer: &mut W) -> Result<(), OutputError> {
    writeln!(writer, "\n=== Plagiarism Summary ===")?;
    writeln!(writer, "Version: {}", result.version)?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Original: {} lines ({} tokens)",
        result.original.line_count, result.original.token_count
    )?;
    writeln!(
        writer,
        "Suspicious: {} lines ({} tokens)",
        result.suspicious.line_count, result.suspicious.token_count
    )?;
    writeln!(writer)?;
    writeln!(writer, "Parameters:")?;
    writeln!(
        writer,
        "  Plagiarism threshold: {:.1}%",
        result.parameters.plagiarism_threshold * 100.0
    )?;
    writeln!(writer)?;
    writeln!(writer, "Results:")?;
    writeln!(
        writer,
        "  Text plagiarism: {:.1}%",
        result.stats.overall_score * 100.0
    )?;

    let flagged = result
        .stats
        .per_sentence
        .iter()
        .filter(|s| s.lcs_length > 0)
        .count();
    writeln!(
        writer,
        "  Lines above threshold: {}/{}",
        flagged,
        result.stats.per_sentence.len()
    )?;

    let failed = result.stats.per_sentence.iter().filter(|s| s.is_failed()).count();
    if failed > 0 {
        writeln!(writer, "  Failed lines: {}", failed)?;
    }
    Ok(())
}

/// Join tokens with spaces, wrapping every diff range in square brackets.
///
/// e.g. tokens `[the, big, cat]` with range `1..2` -> `the [big] cat`
pub fn highlight_diff(tokens: &[String], ranges: &[DiffRange]) -> String {
    let mut out = String::new();
    let mut pending = ranges.iter().peekable();

    for (idx, token) in tokens.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let range = pending.peek().copied();
        if range.is_some_and(|r| r.start == idx) {
            out.push('[');
        }
        out.push_str(token);
        if let Some(r) = range {
            if r.end == idx + 1 {
                out.push(']');
                pending.next();
            }
        }
    }

    out
}

/// Format one sentence pair as a human-readable block.
pub fn format_sentence(
    original: &[String],
    suspicious: &[String],
    stats: &SentenceStats,
) -> String {
    let mut block = format!(
        "- Line {}: score {:.3}, lcs length {}",
        stats.line + 1,
        stats.plagiarism_score,
        stats.lcs_length
    );
    if let Some(err) = &stats.error {
        let _ = write!(block, " (failed: {})", err);
        return block;
    }
    let _ = write!(
        block,
        "\n  Original:   {}\n  Suspicious: {}",
        highlight_diff(original, &stats.diff_ranges.original),
        highlight_diff(suspicious, &stats.diff_ranges.suspicious)
    );
    block
}

/// Build a line-by-line diff report for two documents.
///
/// Each line shows its score and LCS length, with the tokens outside the
/// LCS bracketed on both sides. Documents of unequal length are compared
/// against empty lines.
pub fn create_diff_report(
    original_text_tokens: &[TokenSequence],
    suspicious_text_tokens: &[TokenSequence],
    stats: &DocumentStats,
) -> String {
    let empty: TokenSequence = Vec::new();
    let mut report = String::new();

    for sentence in &stats.per_sentence {
        let original = original_text_tokens.get(sentence.line).unwrap_or(&empty);
        let suspicious = suspicious_text_tokens.get(sentence.line).unwrap_or(&empty);
        report.push_str(&format_sentence(original, suspicious, sentence));
        report.push('\n');
    }

    let _ = write!(
        report,
        "Text average plagiarism (words): {:.1}%",
        stats.overall_score * 100.0
    );
    report
}

/// Write the first `limit` line reports (all of them when `None`).
pub fn write_sentences<W: Write>(
    original_text_tokens: &[TokenSequence],
    suspicious_text_tokens: &[TokenSequence],
    stats: &DocumentStats,
    limit: Option<usize>,
    writer: &mut W,
) -> Result<(), OutputError> {
    let to_print = match limit {
        Some(n) => &stats.per_sentence[..n.min(stats.per_sentence.len())],
        None => &stats.per_sentence[..],
    };

    let empty: TokenSequence = Vec::new();
    for sentence in to_print {
        let original = original_text_tokens.get(sentence.line).unwrap_or(&empty);
        let suspicious = suspicious_text_tokens.get(sentence.line).unwrap_or(&empty);
        writeln!(writer, "{}", format_sentence(original, suspicious, sentence))?;
    }

    if let Some(n) = limit {
        if stats.per_sentence.len() > n {
            writeln!(writer, "... and {} more lines", stats.per_sentence.len() - n)?;
        }
    }
    Ok(())
}
