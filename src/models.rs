//! Data structures for the LCS plagiarism detection pipeline.

use serde::{Deserialize, Serialize};

/// Default minimum overlap ratio below which a sentence match is treated as noise.
pub const DEFAULT_PLAGIARISM_THRESHOLD: f64 = 0.3;

/// One tokenized sentence: lowercase, punctuation-free words in order.
pub type TokenSequence = Vec<String>;

/// A tokenized document, one token sequence per line.
pub type Document = Vec<TokenSequence>;

/// LCS length table for every prefix pair of two token sequences.
///
/// Stored row-major in a flat buffer: cell (i, j) lives at `i * cols + j`.
/// Row 0 and column 0 are the empty-prefix base case and are always zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsMatrix {
    pub(crate) fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.cols + col] = value;
    }

    /// Number of rows (`len(a) + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`len(b) + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value of cell (row, col). Panics when out of bounds, like slice indexing.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.cols + col]
    }

    /// The bottom-right cell: LCS length of the full sequences.
    pub fn final_length(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }

    /// Iterate rows as slices.
    pub fn row_iter(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.cols.max(1))
    }
}

/// A half-open span `[start, end)` of tokens not covered by the LCS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRange {
    pub start: usize,
    pub end: usize,
}

impl DiffRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.start <= idx && idx < self.end
    }
}

/// Diff ranges for both sides of one sentence pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRanges {
    pub original: Vec<DiffRange>,
    pub suspicious: Vec<DiffRange>,
}

/// Statistics for one aligned sentence pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceStats {
    pub line: usize,
    pub lcs_length: usize,
    pub plagiarism_score: f64, // lcs_length / suspicious tokens, 3 decimals
    pub diff_ranges: DiffRanges,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>, // Set when this pair could not be compared
}

impl SentenceStats {
    /// Record for a pair whose comparison failed.
    pub fn failed(line: usize, reason: String) -> Self {
        Self {
            line,
            lcs_length: 0,
            plagiarism_score: 0.0,
            diff_ranges: DiffRanges::default(),
            error: Some(reason),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Aggregate statistics for a pair of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStats {
    pub overall_score: f64,
    pub per_sentence: Vec<SentenceStats>,
}

/// Comparison parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonParams {
    pub plagiarism_threshold: f64, // Minimum lcs/len ratio counted as overlap (default: 0.3)
}

impl Default for ComparisonParams {
    fn default() -> Self {
        Self {
            plagiarism_threshold: DEFAULT_PLAGIARISM_THRESHOLD,
        }
    }
}

impl ComparisonParams {
    /// Check that the parameters are usable before any comparison runs.
    pub fn validate(&self) -> Result<(), crate::align::LcsError> {
        crate::align::check_threshold(self.plagiarism_threshold)
    }
}

/// Shape of one input document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub line_count: usize,
    pub token_count: usize,
}

impl DocumentInfo {
    pub fn from_document(doc: &[TokenSequence]) -> Self {
        Self {
            line_count: doc.len(),
            token_count: doc.iter().map(Vec::len).sum(),
        }
    }
}

/// Full comparison result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub version: String,
    pub parameters: ComparisonParams,
    pub original: DocumentInfo,
    pub suspicious: DocumentInfo,
    pub stats: DocumentStats,
}
