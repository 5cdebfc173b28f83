// ABOUTME: Library entry point for the text density scorer.
// ABOUTME: Re-exports analyze(), the Tagger seam, the bundled LexiconTagger and model loading.

//! Notes density - scores how much of a text is nouns, proper nouns,
//! numbers and verbs.
//!
//! # Example
//!
//! ```no_run
//! use notes_density::{analyze, ModelLocator};
//!
//! fn main() -> Result<(), notes_density::DensityError> {
//!     let tagger = ModelLocator::from_env().load()?;
//!     let result = analyze(&tagger, "Kitap okudum.");
//!     println!("{}", result.density_score);
//!     Ok(())
//! }
//! ```

pub mod analyze;
pub mod error;
pub mod lexicon;
pub mod logging;
pub mod model;
pub mod result;
pub mod tagger;

pub use crate::analyze::{analyze, analyze_reader};
pub use crate::error::DensityError;
pub use crate::lexicon::{LexiconModel, LexiconTagger, SuffixRule};
pub use crate::model::{
    load_bundled, load_model, ModelLocator, ModelSource, BUNDLED_MODEL, MODEL_ENV, MODEL_FILE,
};
pub use crate::result::{AnalysisResult, ErrorReport};
pub use crate::tagger::{PosTag, Tagger, Token};
