// ABOUTME: Locates and loads the part-of-speech model used by the density scorer.
// ABOUTME: Resolution order is DENSITY_MODEL, the user config dir, ./models, then the embedded model.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DensityError;
use crate::lexicon::LexiconTagger;

/// Environment variable naming an explicit model path.
pub const MODEL_ENV: &str = "DENSITY_MODEL";
/// File name of the bundled Turkish model.
pub const MODEL_FILE: &str = "tr_core_lexicon.json";

/// The Turkish model compiled into the binary.
pub const BUNDLED_MODEL: &str = include_str!("../models/tr_core_lexicon.json");

const APP_DIR: &str = "notes-density";

/// Per-user config directory for the scorer, e.g. `~/.config/notes-density` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join(APP_DIR))
}

/// Where a model comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    File(PathBuf),
    Bundled,
}

/// Finds the model among an explicit path, fallback files and the embedded copy.
#[derive(Debug, Clone, Default)]
pub struct ModelLocator {
    explicit: Option<PathBuf>,
    candidates: Vec<PathBuf>,
    bundled: bool,
}

impl ModelLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator configured from the process environment.
    pub fn from_env() -> Self {
        let mut locator = Self::new();
        if let Some(path) = env::var_os(MODEL_ENV).filter(|v| !v.is_empty()) {
            locator = locator.explicit(path);
        }
        if let Some(dir) = config_dir() {
            locator = locator.candidate(dir.join(MODEL_FILE));
        }
        locator
            .candidate(Path::new("models").join(MODEL_FILE))
            .bundled(true)
    }

    /// Use exactly this path; candidates and the embedded model are ignored.
    pub fn explicit(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit = Some(path.into());
        self
    }

    /// Append a fallback location.
    pub fn candidate(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidates.push(path.into());
        self
    }

    /// Fall back to the embedded model when no file is found.
    pub fn bundled(mut self, enabled: bool) -> Self {
        self.bundled = enabled;
        self
    }

    /// Pick the model source without reading it.
    pub fn resolve(&self) -> Result<ModelSource, DensityError> {
        if let Some(path) = &self.explicit {
            if path.is_file() {
                return Ok(ModelSource::File(path.clone()));
            }
            let reason = if path.exists() {
                format!("{} is not a file", path.display())
            } else {
                format!("{} does not exist", path.display())
            };
            return Err(DensityError::model_at(path, reason));
        }

        if let Some(path) = self.candidates.iter().find(|p| p.is_file()) {
            return Ok(ModelSource::File(path.clone()));
        }
        if self.bundled {
            return Ok(ModelSource::Bundled);
        }
        Err(DensityError::model_missing(&self.candidates))
    }

    /// Resolve and load the model.
    pub fn load(&self) -> Result<LexiconTagger, DensityError> {
        match self.resolve()? {
            ModelSource::File(path) => load_model(&path),
            ModelSource::Bundled => load_bundled(),
        }
    }
}

/// Load the model compiled into the binary.
pub fn load_bundled() -> Result<LexiconTagger, DensityError> {
    let tagger = LexiconTagger::from_json(BUNDLED_MODEL)
        .map_err(|e| DensityError::bundled_model(format!("invalid built-in model: {}", e)))?;
    tracing::debug!(model = tagger.name(), words = tagger.word_count(), "loaded built-in model");
    Ok(tagger)
}

/// Load a model file.
pub fn load_model(path: &Path) -> Result<LexiconTagger, DensityError> {
    let json = fs::read_to_string(path)
        .map_err(|e| DensityError::model_at(path, format!("cannot read {}: {}", path.display(), e)))?;
    let tagger = LexiconTagger::from_json(&json)
        .map_err(|e| DensityError::model_at(path, format!("invalid model {}: {}", path.display(), e)))?;
    tracing::debug!(
        path = %path.display(),
        model = tagger.name(),
        words = tagger.word_count(),
        "loaded model"
    );
    Ok(tagger)
}
