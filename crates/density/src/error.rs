// ABOUTME: Error types for the density scorer.
// ABOUTME: Provides DensityError with ModelUnavailable and InputRead variants.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while scoring text density.
#[derive(Debug, Error)]
pub enum DensityError {
    /// The part-of-speech model could not be located or loaded.
    #[error("language model not available: {reason}")]
    ModelUnavailable {
        reason: String,
        /// Remediation shown to the user.
        hint: String,
    },

    /// Reading the input text failed.
    #[error("failed to read input: {0}")]
    InputRead(#[from] io::Error),
}

impl DensityError {
    /// Creates a ModelUnavailable error for a model that failed at `path`.
    pub fn model_at(path: &Path, reason: impl Into<String>) -> Self {
        DensityError::ModelUnavailable {
            reason: reason.into(),
            hint: format!(
                "Install the Turkish lexicon model at {} or point DENSITY_MODEL at a valid model file.",
                path.display()
            ),
        }
    }

    /// Creates a ModelUnavailable error for a broken embedded model.
    pub fn bundled_model(reason: impl Into<String>) -> Self {
        DensityError::ModelUnavailable {
            reason: reason.into(),
            hint: "The built-in model is damaged; set DENSITY_MODEL to a valid model file."
                .to_string(),
        }
    }

    /// Creates a ModelUnavailable error when no candidate location exists.
    pub fn model_missing(searched: &[PathBuf]) -> Self {
        let places = searched
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        DensityError::ModelUnavailable {
            reason: "no model file found".to_string(),
            hint: format!(
                "Copy models/tr_core_lexicon.json to one of [{}] or set DENSITY_MODEL to its path.",
                places
            ),
        }
    }

    /// Returns true if this is a ModelUnavailable error.
    pub fn is_model_unavailable(&self) -> bool {
        matches!(self, DensityError::ModelUnavailable { .. })
    }

    /// Remediation text, present only for model failures.
    pub fn detail(&self) -> Option<&str> {
        match self {
            DensityError::ModelUnavailable { hint, .. } => Some(hint),
            DensityError::InputRead(_) => None,
        }
    }
}
