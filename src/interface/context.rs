//! Execution context for Storyline operations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::io::{ContentSource, DirSource};
use crate::readers::{CmarkRenderer, MarkdownRenderer};

use super::assembler::Assembler;
use super::registry::ContentRegistry;

/// Context for Storyline operations.
///
/// Contains configuration, the content source and the markdown renderer.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration.
    pub config: Config,
    /// Where tutorial files are fetched from.
    pub source: Arc<dyn ContentSource>,
    /// Renderer for step prose.
    pub renderer: Arc<dyn MarkdownRenderer>,
    /// Base directory for operations.
    pub base_dir: PathBuf,
}

impl Context {
    /// Creates a context reading content from `base_dir/config.content_dir`.
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        let source = Arc::new(DirSource::new(base_dir.join(&config.content_dir)));
        Self::with_source(config, base_dir, source)
    }

    /// Creates a context over an arbitrary content source.
    pub fn with_source(config: Config, base_dir: PathBuf, source: Arc<dyn ContentSource>) -> Self {
        let renderer = Arc::new(CmarkRenderer::new(config.render.clone()));
        Self {
            config,
            source,
            renderer,
            base_dir,
        }
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Self {
        Self::new(Config::default(), base_dir)
    }

    /// Creates a context from the current directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        let base_dir = std::env::current_dir()?;
        let config = crate::config::read_config(&base_dir).unwrap_or_default();
        Ok(Self::new(config, base_dir))
    }

    /// Replaces the markdown renderer.
    pub fn set_renderer(&mut self, renderer: Arc<dyn MarkdownRenderer>) {
        self.renderer = renderer;
    }

    /// Directory holding the tutorials.
    pub fn content_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.content_dir)
    }

    /// Resolves a path relative to the base directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// An assembler sharing this context's source, renderer and config.
    pub fn assembler(&self) -> Assembler {
        Assembler::new(
            Arc::clone(&self.source),
            Arc::clone(&self.renderer),
            self.config.clone(),
        )
    }

    /// A registry for the configured default tutorial.
    pub fn registry(&self) -> ContentRegistry {
        ContentRegistry::new(self.assembler(), self.config.tutorial.clone())
    }
}
