//! Story assembly: manifest plus step files into a `TutorialContent`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::errors::{Result, StoryError};
use crate::io::ContentSource;
use crate::model::{CodeSnippet, SnippetMap, StoryStep, TutorialContent, PLACEHOLDER_CONTENT};
use crate::readers::{
    duplicate_keys, extract_snippet, paragraph, parse_manifest, render_step_html, CmarkRenderer,
    MarkdownRenderer,
};

/// Builds tutorials from a content source.
#[derive(Debug, Clone)]
pub struct Assembler {
    source: Arc<dyn ContentSource>,
    renderer: Arc<dyn MarkdownRenderer>,
    config: Arc<Config>,
}

/// Raw texts fetched during one assembly, so no file is requested twice.
#[derive(Default)]
struct FetchCache {
    texts: HashMap<PathBuf, std::result::Result<String, (io::ErrorKind, String)>>,
}

impl FetchCache {
    async fn fetch(&mut self, source: &dyn ContentSource, path: &Path) -> Result<String> {
        let entry = match self.texts.get(path) {
            Some(entry) => entry.clone(),
            None => {
                tracing::debug!("Fetching {}", path.display());
                let entry = source
                    .fetch(path)
                    .await
                    .map_err(|e| (e.kind(), e.to_string()));
                self.texts.insert(path.to_path_buf(), entry.clone());
                entry
            }
        };

        entry.map_err(|(kind, message)| StoryError::StepContentUnavailable {
            path: path.to_path_buf(),
            source: io::Error::new(kind, message),
        })
    }
}

impl Assembler {
    /// Creates an assembler.
    pub fn new(
        source: Arc<dyn ContentSource>,
        renderer: Arc<dyn MarkdownRenderer>,
        config: Config,
    ) -> Self {
        Self {
            source,
            renderer,
            config: Arc::new(config),
        }
    }

    /// Creates an assembler with the default renderer for `config`.
    pub fn with_source(source: Arc<dyn ContentSource>, config: Config) -> Self {
        let renderer = Arc::new(CmarkRenderer::new(config.render.clone()));
        Self::new(source, renderer, config)
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Assembles a tutorial.
    ///
    /// Only a missing or malformed manifest fails the call. Every other
    /// problem is logged and replaced by placeholder content, so the result
    /// always has one entry per manifest step in manifest order.
    ///
    /// Additional snippets (such as `contract`) are only fetched when no step
    /// or subsection has stored that key yet. An entry already present, even
    /// one aliased from another snippet, is kept rather than overwritten.
    pub async fn assemble(&self, tutorial: &str) -> Result<TutorialContent> {
        let mut cache = FetchCache::default();

        let manifest_path = self.config.manifest_path(tutorial);
        let raw = cache
            .fetch(self.source.as_ref(), &manifest_path)
            .await
            .map_err(|e| StoryError::manifest(tutorial, e))?;
        let mut story = parse_manifest(&raw).map_err(|e| StoryError::manifest(tutorial, e))?;

        for key in duplicate_keys(&story) {
            tracing::warn!(
                "Duplicate key '{}' in tutorial '{}'; the last snippet written wins",
                key,
                tutorial
            );
        }

        let mut snippets = SnippetMap::new();
        for step in &mut story {
            self.populate_step(tutorial, step, &mut snippets, &mut cache)
                .await;
        }

        for key in &self.config.additional_snippets {
            if snippets.contains_key(key) {
                continue;
            }
            match self.fetch_snippet(tutorial, key, &mut cache).await {
                Ok(snippet) => {
                    snippets.insert(key.clone(), Arc::new(snippet));
                }
                Err(e) => tracing::debug!("Skipping extra snippet '{}': {}", key, e),
            }
        }

        tracing::info!(
            "Assembled tutorial '{}': {} steps, {} snippets",
            tutorial,
            story.len(),
            snippets.len()
        );

        Ok(TutorialContent {
            story,
            code_snippets: snippets,
        })
    }

    /// Fills one step's snippet and prose, then its subsections.
    async fn populate_step(
        &self,
        tutorial: &str,
        step: &mut StoryStep,
        snippets: &mut SnippetMap,
        cache: &mut FetchCache,
    ) {
        let path = self.config.content_path(tutorial, &step.key);
        match cache.fetch(self.source.as_ref(), &path).await {
            Ok(raw) => {
                let snippet = extract_snippet(&raw, &self.config.snippet);
                snippets.insert(step.key.clone(), Arc::new(snippet));
                step.full_content = Some(render_step_html(&raw, self.renderer.as_ref()));
            }
            Err(e) => {
                tracing::warn!("Failed to load content for {}: {}", step.key, e);
                snippets.insert(
                    step.key.clone(),
                    Arc::new(CodeSnippet::loading(&self.config.snippet.default_language)),
                );
                step.full_content = Some(PLACEHOLDER_CONTENT.to_string());
            }
        }

        if let Some(code_key) = step.code_key.clone() {
            self.resolve_code_key(tutorial, &code_key, snippets, cache)
                .await;
        }

        let parent_code_key = step.effective_code_key().to_string();
        let parent_content = step.full_content.clone();

        for sub in &mut step.subsections {
            let target = sub.code_key.as_deref().unwrap_or(&parent_code_key);
            let snippet = self.resolve_code_key(tutorial, target, snippets, cache).await;
            snippets.insert(sub.key.clone(), snippet);

            sub.full_content = Some(
                parent_content
                    .clone()
                    .unwrap_or_else(|| paragraph(&sub.copy)),
            );
        }
    }

    /// Returns the snippet for `key`, fetching it if absent.
    ///
    /// A key that cannot be fetched gets the not-found placeholder, so every
    /// referenced code key resolves.
    async fn resolve_code_key(
        &self,
        tutorial: &str,
        key: &str,
        snippets: &mut SnippetMap,
        cache: &mut FetchCache,
    ) -> Arc<CodeSnippet> {
        if let Some(snippet) = snippets.get(key) {
            return Arc::clone(snippet);
        }

        let snippet = match self.fetch_snippet(tutorial, key, cache).await {
            Ok(snippet) => Arc::new(snippet),
            Err(e) => {
                tracing::warn!("Failed to load code for {}: {}", key, e);
                Arc::new(CodeSnippet::not_found(&self.config.snippet.default_language))
            }
        };
        snippets.insert(key.to_string(), Arc::clone(&snippet));
        snippet
    }

    async fn fetch_snippet(
        &self,
        tutorial: &str,
        key: &str,
        cache: &mut FetchCache,
    ) -> Result<CodeSnippet> {
        let path = self.config.content_path(tutorial, key);
        let raw = cache.fetch(self.source.as_ref(), &path).await?;
        Ok(extract_snippet(&raw, &self.config.snippet))
    }
}
