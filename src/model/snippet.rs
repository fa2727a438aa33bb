//! Code snippet representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Title of the snippet shown while content is missing or still loading.
pub const LOADING_TITLE: &str = "Loading...";
/// Code of the snippet shown while content is missing or still loading.
pub const LOADING_CODE: &str = "// Content loading...";
/// Title of the snippet returned for an unknown key.
pub const NOT_FOUND_TITLE: &str = "Not Found";
/// Code of the snippet returned for an unknown key.
pub const NOT_FOUND_CODE: &str = "// Content not found";

/// An inclusive, 1-indexed line range relative to a snippet's code.
///
/// Serialized as a two-element array, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Highlight {
    pub start: u32,
    pub end: u32,
}

impl Highlight {
    /// Creates a range covering `start..=end`.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Creates a range covering a single line.
    pub fn line(line: u32) -> Self {
        Self::new(line, line)
    }

    /// Number of highlighted lines.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }

    /// Returns true if `line` falls inside the range.
    pub fn contains(&self, line: u32) -> bool {
        (self.start..=self.end).contains(&line)
    }
}

impl From<(u32, u32)> for Highlight {
    fn from((start, end): (u32, u32)) -> Self {
        Self::new(start, end)
    }
}

impl From<Highlight> for (u32, u32) {
    fn from(h: Highlight) -> Self {
        (h.start, h.end)
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// One displayable source excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub title: String,
    pub language: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
}

impl CodeSnippet {
    /// Creates a snippet without a highlight.
    pub fn new(
        title: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            code: code.into(),
            highlight: None,
        }
    }

    /// Sets the highlight range.
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// Placeholder for content that has not loaded (or failed to load).
    pub fn loading(language: impl Into<String>) -> Self {
        Self::new(LOADING_TITLE, language, LOADING_CODE)
    }

    /// Placeholder for a key with no snippet.
    pub fn not_found(language: impl Into<String>) -> Self {
        Self::new(NOT_FOUND_TITLE, language, NOT_FOUND_CODE)
    }

    /// Returns true if this is one of the placeholder snippets.
    pub fn is_placeholder(&self) -> bool {
        (self.title == LOADING_TITLE && self.code == LOADING_CODE)
            || (self.title == NOT_FOUND_TITLE && self.code == NOT_FOUND_CODE)
    }

    /// Number of lines in the code.
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }
}
