// ABOUTME: Output records for the density scorer: AnalysisResult and ErrorReport.
// ABOUTME: Both serialize to the single JSON object written on stdout.

use serde::{Deserialize, Serialize};

use crate::error::DensityError;

/// Ratio of meaningful tokens to all word tokens in a text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisResult {
    pub density_score: f64,
    pub meaningful_word_count: u64,
    pub total_word_count: u64,
}

impl AnalysisResult {
    /// Build a result from raw counts, deriving the score.
    ///
    /// Zero total yields a score of `0.0`.
    pub fn from_counts(meaningful_word_count: u64, total_word_count: u64) -> Self {
        debug_assert!(meaningful_word_count <= total_word_count);
        let density_score = if total_word_count == 0 {
            0.0
        } else {
            meaningful_word_count as f64 / total_word_count as f64
        };
        Self {
            density_score,
            meaningful_word_count,
            total_word_count,
        }
    }

    /// The result reported for empty input.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Machine-readable failure written instead of an AnalysisResult.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl From<&DensityError> for ErrorReport {
    fn from(err: &DensityError) -> Self {
        Self {
            error: err.to_string(),
            detail: err.detail().map(str::to_string),
        }
    }
}
