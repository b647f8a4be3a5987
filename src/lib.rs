//! LCS Plagiarism Detection Library
//!
//! Compares two documents line by line using the longest common subsequence
//! of their tokens, scores each sentence pair, and localizes the spans that
//! differ.
//!
//! # Example
//!
//! ```
//! use lcs_plagiarism::prelude::*;
//!
//! let original = tokenize_by_lines("The cat is big\nThe sun is beautiful");
//! let suspicious = tokenize_by_lines("The big cat\nThe beautiful sun was rising");
//!
//! let stats = accumulate_diff_stats(&original, &suspicious, 0.3).unwrap();
//!
//! assert_eq!(stats.per_sentence.len(), 2);
//! println!("Text plagiarism: {:.1}%", stats.overall_score * 100.0);
//! ```
//!
//! # Sentence-level Example
//!
//! ```
//! use lcs_plagiarism::prelude::*;
//!
//! let a = tokenize("the big cat is sleeping");
//! let b = tokenize("the cat is big");
//!
//! let matrix = fill_lcs_matrix(&a, &b);
//! let lcs = find_lcs(&a, &b, &matrix).unwrap();
//! let score = calculate_plagiarism_score(lcs.len(), &b).unwrap();
//!
//! assert_eq!(lcs, vec!["the", "cat", "is"]);
//! assert_eq!(score, 0.75);
//! ```

pub mod align;
pub mod compare;
pub mod diff;
pub mod models;
pub mod output;
pub mod score;
pub mod tokenize;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::align::{fill_lcs_matrix, find_lcs, find_lcs_length, LcsError};
    pub use crate::compare::{
        accumulate_diff_stats, compare_documents, compare_texts, sentence_stats,
    };
    pub use crate::diff::{diff_token_count, find_diff, find_diff_in_sentence};
    pub use crate::models::{
        ComparisonParams, ComparisonResult, DiffRange, DiffRanges, Document, DocumentInfo,
        DocumentStats, LcsMatrix, SentenceStats, TokenSequence, DEFAULT_PLAGIARISM_THRESHOLD,
    };
    pub use crate::output::{
        create_diff_report, format_sentence, highlight_diff, write_csv, write_csv_file, write_json,
        write_json_file, write_sentences, write_summary, OutputError,
    };
    pub use crate::score::{calculate_plagiarism_score, calculate_text_plagiarism_score};
    pub use crate::tokenize::{tokenize, tokenize_by_lines};
}

// Re-export commonly used types at the crate root
pub use align::LcsError;
pub use models::{ComparisonParams, ComparisonResult, DocumentStats, SentenceStats};
