//! Configuration data structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure for Storyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one sub-directory per tutorial.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Tutorial loaded on initialization.
    #[serde(default = "default_tutorial")]
    pub tutorial: String,

    /// File name of the manifest inside a tutorial directory.
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,

    /// Extension of step content files.
    #[serde(default = "default_content_extension")]
    pub content_extension: String,

    /// Snippets referenced by the UI that do not appear in the manifest.
    #[serde(default = "default_additional_snippets")]
    pub additional_snippets: Vec<String>,

    /// Snippet extraction settings.
    #[serde(default)]
    pub snippet: SnippetConfig,

    /// Markdown rendering settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Watch configuration.
    #[serde(default)]
    pub watch: WatchConfig,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_tutorial() -> String {
    "survey-tutorial".to_string()
}

fn default_manifest_name() -> String {
    "story.json".to_string()
}

fn default_content_extension() -> String {
    "md".to_string()
}

fn default_additional_snippets() -> Vec<String> {
    vec!["contract".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            tutorial: default_tutorial(),
            manifest_name: default_manifest_name(),
            content_extension: default_content_extension(),
            additional_snippets: default_additional_snippets(),
            snippet: SnippetConfig::default(),
            render: RenderConfig::default(),
            watch: WatchConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative path of a tutorial's manifest.
    pub fn manifest_path(&self, tutorial: &str) -> PathBuf {
        PathBuf::from(tutorial).join(&self.manifest_name)
    }

    /// Relative path of the content file for `key` in a tutorial.
    pub fn content_path(&self, tutorial: &str, key: &str) -> PathBuf {
        PathBuf::from(tutorial).join(format!("{}.{}", key, self.content_extension))
    }
}

/// Settings for the snippet extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetConfig {
    /// Language used when a fence carries no tag.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Title used when the file has no top-level heading.
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,

    /// Code shown when the file has no fenced block.
    #[serde(default = "default_placeholder_code")]
    pub placeholder_code: String,

    /// Heading line that introduces a highlight range.
    #[serde(default = "default_highlight_marker")]
    pub highlight_marker: String,
}

fn default_language() -> String {
    "typescript".to_string()
}

fn default_fallback_title() -> String {
    "Code Example".to_string()
}

fn default_placeholder_code() -> String {
    "// No code available".to_string()
}

fn default_highlight_marker() -> String {
    "## Highlight Lines".to_string()
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            fallback_title: default_fallback_title(),
            placeholder_code: default_placeholder_code(),
            highlight_marker: default_highlight_marker(),
        }
    }
}

/// Settings for the markdown renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Render single line breaks as `<br />`.
    #[serde(default = "default_true")]
    pub hard_breaks: bool,

    #[serde(default = "default_true")]
    pub tables: bool,

    #[serde(default = "default_true")]
    pub strikethrough: bool,

    #[serde(default = "default_true")]
    pub tasklists: bool,

    #[serde(default)]
    pub footnotes: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hard_breaks: true,
            tables: true,
            strikethrough: true,
            tasklists: true,
            footnotes: false,
        }
    }
}

/// Watch mode configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Debounce delay in milliseconds.
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,
}

fn default_debounce() -> u64 {
    200
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce(),
        }
    }
}
