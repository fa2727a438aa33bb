//! Data model for tutorials: snippets, steps, and the assembled story.

mod content;
mod snippet;
mod story;

pub use content::{CodeView, NavEntry, SnippetMap, StoryEntry, TutorialContent};
pub use snippet::{
    CodeSnippet, Highlight, LOADING_CODE, LOADING_TITLE, NOT_FOUND_CODE, NOT_FOUND_TITLE,
};
pub use story::{StoryStep, Subsection, PLACEHOLDER_CONTENT};
