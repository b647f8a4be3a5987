//! Longest common subsequence over token sequences.
//!
//! This is the HOT PATH: every sentence pair of a document comparison goes
//! through one matrix fill and one traceback.

use thiserror::Error;

use crate::models::LcsMatrix;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LcsError {
    #[error("Invalid plagiarism threshold: {0} (expected a value in [0, 1])")]
    InvalidThreshold(f64),
    #[error("Matrix shape {rows}x{cols} does not match token sequences (expected {expected_rows}x{expected_cols})")]
    MatrixShape {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },
    #[error("LCS length {lcs_length} exceeds suspicious sentence length {sentence_length}")]
    LcsTooLong {
        lcs_length: usize,
        sentence_length: usize,
    },
    #[error("LCS is not a subsequence of the given tokens")]
    NotASubsequence,
    #[error("Cannot score against an empty suspicious sentence")]
    DegenerateComparison,
}

impl LcsError {
    /// True for errors caused by an argument that violates its contract.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, LcsError::DegenerateComparison)
    }
}

/// Reject thresholds outside [0, 1] (NaN included).
pub(crate) fn check_threshold(threshold: f64) -> Result<(), LcsError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(LcsError::InvalidThreshold(threshold))
    }
}

/// Fill the LCS length matrix for two token sequences.
///
/// cell(i, j) = cell(i-1, j-1) + 1 when `a[i-1] == b[j-1]`,
/// otherwise max(cell(i-1, j), cell(i, j-1)).
/// An empty input yields an all-zero matrix.
pub fn fill_lcs_matrix<T: PartialEq>(a: &[T], b: &[T]) -> LcsMatrix {
    let rows = a.len() + 1;
    let cols = b.len() + 1;
    let mut matrix = LcsMatrix::zeroed(rows, cols);

    for i in 1..rows {
        let token_a = &a[i - 1];
        for j in 1..cols {
            let value = if *token_a == b[j - 1] {
                matrix.get(i - 1, j - 1) + 1
            } else {
                matrix.get(i - 1, j).max(matrix.get(i, j - 1))
            };
            matrix.set(i, j, value);
        }
    }

    matrix
}

/// LCS length of `a` and `b`, zeroed when it covers less than
/// `plagiarism_threshold` of `b`.
///
/// An empty `b` has no meaningful ratio and always yields 0.
pub fn find_lcs_length<T: PartialEq>(
    a: &[T],
    b: &[T],
    plagiarism_threshold: f64,
) -> Result<usize, LcsError> {
    check_threshold(plagiarism_threshold)?;

    if b.is_empty() {
        return Ok(0);
    }

    let lcs_length = fill_lcs_matrix(a, b).final_length();
    if (lcs_length as f64 / b.len() as f64) < plagiarism_threshold {
        return Ok(0);
    }
    Ok(lcs_length)
}

/// Recover the LCS itself by backtracking through a filled matrix.
///
/// Tie-break: when the tokens differ and the up and left neighbours hold the
/// same value, move up (drop a token of `a`). At column 0 the move is always
/// up, at row 0 always left.
pub fn find_lcs<T: PartialEq + Clone>(
    a: &[T],
    b: &[T],
    matrix: &LcsMatrix,
) -> Result<Vec<T>, LcsError> {
    if matrix.rows() != a.len() + 1 || matrix.cols() != b.len() + 1 {
        return Err(LcsError::MatrixShape {
            rows: matrix.rows(),
            cols: matrix.cols(),
            expected_rows: a.len() + 1,
            expected_cols: b.len() + 1,
        });
    }

    let mut lcs = Vec::with_capacity(matrix.final_length());
    let mut row = a.len();
    let mut col = b.len();

    while row > 0 || col > 0 {
        if row > 0 && col > 0 && a[row - 1] == b[col - 1] {
            lcs.push(a[row - 1].clone());
            row -= 1;
            col -= 1;
        } else if col == 0 {
            row -= 1;
        } else if row == 0 {
            col -= 1;
        } else if matrix.get(row - 1, col) >= matrix.get(row, col - 1) {
            row -= 1;
        } else {
            col -= 1;
        }
    }

    // Built backwards
    lcs.reverse();
    Ok(lcs)
}
