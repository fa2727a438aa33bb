//! The assembled tutorial and navigation over it.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::snippet::{CodeSnippet, Highlight};
use super::story::{StoryStep, Subsection};

/// Snippet table keyed by step, subsection, or extra snippet key.
///
/// Aliased keys share one `Arc`.
pub type SnippetMap = IndexMap<String, Arc<CodeSnippet>>;

/// One loaded tutorial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialContent {
    pub story: Vec<StoryStep>,
    pub code_snippets: SnippetMap,
}

/// A story entry found by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryEntry<'a> {
    Step(&'a StoryStep),
    Subsection {
        parent: &'a StoryStep,
        subsection: &'a Subsection,
    },
}

impl<'a> StoryEntry<'a> {
    pub fn key(&self) -> &'a str {
        match self {
            Self::Step(step) => &step.key,
            Self::Subsection { subsection, .. } => &subsection.key,
        }
    }

    /// Highlight override declared in the manifest.
    pub fn highlight(&self) -> Option<Highlight> {
        match self {
            Self::Step(step) => step.highlight,
            Self::Subsection { subsection, .. } => subsection.highlight,
        }
    }

    pub fn effective_code_key(&self) -> &'a str {
        match self {
            Self::Step(step) => step.effective_code_key(),
            Self::Subsection { parent, subsection } => subsection.effective_code_key(parent),
        }
    }
}

/// A row of the flattened navigation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub key: String,
    pub title: String,
    /// 0 for steps, 1 for subsections.
    pub depth: usize,
    /// Display number, e.g. `2` or `2.1`.
    pub number: String,
}

/// What the code viewer shows for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeView {
    pub title: String,
    pub language: String,
    pub code: String,
    pub highlight: Option<Highlight>,
}

impl TutorialContent {
    /// Creates an empty tutorial.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the story has no steps.
    pub fn is_empty(&self) -> bool {
        self.story.is_empty()
    }

    /// Looks up a snippet by key.
    pub fn snippet(&self, key: &str) -> Option<&Arc<CodeSnippet>> {
        self.code_snippets.get(key)
    }

    /// Looks up a top-level step by key.
    pub fn step(&self, key: &str) -> Option<&StoryStep> {
        self.story.iter().find(|s| s.key == key)
    }

    /// Position of a top-level step.
    pub fn step_index(&self, key: &str) -> Option<usize> {
        self.story.iter().position(|s| s.key == key)
    }

    /// Looks up a step or subsection by key.
    pub fn find(&self, key: &str) -> Option<StoryEntry<'_>> {
        for step in &self.story {
            if step.key == key {
                return Some(StoryEntry::Step(step));
            }
            if let Some(subsection) = step.subsection(key) {
                return Some(StoryEntry::Subsection {
                    parent: step,
                    subsection,
                });
            }
        }
        None
    }

    /// Key of the step after `key`, if any.
    pub fn next_key(&self, key: &str) -> Option<&str> {
        let index = self.step_index(key)?;
        self.story.get(index + 1).map(|s| s.key.as_str())
    }

    /// Key of the step before `key`, if any.
    pub fn previous_key(&self, key: &str) -> Option<&str> {
        let index = self.step_index(key)?;
        index
            .checked_sub(1)
            .and_then(|i| self.story.get(i))
            .map(|s| s.key.as_str())
    }

    /// All steps and subsections in navigation order.
    pub fn flatten(&self) -> Vec<NavEntry> {
        let mut entries = Vec::new();
        for (i, step) in self.story.iter().enumerate() {
            entries.push(NavEntry {
                key: step.key.clone(),
                title: step.title.clone(),
                depth: 0,
                number: (i + 1).to_string(),
            });
            for (j, sub) in step.subsections.iter().enumerate() {
                entries.push(NavEntry {
                    key: sub.key.clone(),
                    title: sub.title.clone(),
                    depth: 1,
                    number: format!("{}.{}", i + 1, j + 1),
                });
            }
        }
        entries
    }

    /// Resolves what the code viewer should show for `key`.
    ///
    /// Keys outside the story (extra snippets) map straight to the snippet
    /// table. A manifest highlight beats the snippet's own.
    pub fn code_view(&self, key: &str) -> Option<CodeView> {
        let (snippet, override_highlight) = match self.find(key) {
            Some(entry) => {
                let snippet = self
                    .snippet(entry.effective_code_key())
                    .or_else(|| self.snippet(key))?;
                (snippet, entry.highlight())
            }
            None => (self.snippet(key)?, None),
        };

        Some(CodeView {
            title: snippet.title.clone(),
            language: snippet.language.clone(),
            code: snippet.code.clone(),
            highlight: override_highlight.or(snippet.highlight),
        })
    }
}
