//! Error types for the Storyline content pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// Main error type for Storyline operations.
#[derive(Error, Debug)]
pub enum StoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The tutorial manifest could not be fetched or parsed.
    #[error("Manifest unavailable for tutorial '{tutorial}': {reason}")]
    ManifestUnavailable { tutorial: String, reason: String },

    /// A single step or snippet file could not be read.
    #[error("Content unavailable at {path}: {source}")]
    StepContentUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Watch error: {0}")]
    Watch(String),

    /// An error shared between every caller of one coalesced load.
    #[error(transparent)]
    Load(Arc<StoryError>),

    #[error("{0}")]
    Other(String),
}

impl StoryError {
    /// Creates a manifest error for the given tutorial.
    pub fn manifest(tutorial: impl Into<String>, reason: impl ToString) -> Self {
        Self::ManifestUnavailable {
            tutorial: tutorial.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns true if this error means the whole tutorial could not be loaded.
    pub fn is_manifest_unavailable(&self) -> bool {
        match self {
            Self::ManifestUnavailable { .. } => true,
            Self::Load(inner) => inner.is_manifest_unavailable(),
            _ => false,
        }
    }
}

/// Result type alias for Storyline operations.
pub type Result<T> = std::result::Result<T, StoryError>;
