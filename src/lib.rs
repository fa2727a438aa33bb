//! Storyline - Tutorial Content Pipeline
//!
//! This library turns a directory of markdown step files plus a JSON manifest
//! into a navigable, two-level tutorial "story". Every step carries rendered
//! HTML, a code snippet for the side-by-side viewer and an optional
//! highlighted line range.
//!
//! # Features
//!
//! - **Extract**: pick the code block to display from a step file
//! - **Rewrite**: turn callout blocks into styled containers and anchor headings
//! - **Assemble**: build a whole tutorial, degrading to placeholders per step
//! - **Registry**: share one loaded tutorial, coalescing concurrent loads
//!
//! # Example
//!
//! ```no_run
//! use storyline::interface::Context;
//!
//! # async fn run() -> storyline::Result<()> {
//! let ctx = Context::from_current_dir()?;
//! let registry = ctx.registry();
//! registry.initialize().await?;
//!
//! for step in registry.story_steps() {
//!     let snippet = registry.snippet(&step.key);
//!     println!("{}: {} lines of {}", step.title, snippet.line_count(), snippet.language);
//! }
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod errors;
pub mod interface;
pub mod io;
pub mod model;
pub mod readers;

// Re-export commonly used types
pub use config::Config;
pub use errors::{Result, StoryError};
pub use interface::{Assembler, ContentRegistry, Context};
pub use model::{CodeSnippet, Highlight, StoryStep, Subsection, TutorialContent};

// Re-export command options
pub use commands::{BuildOptions, CheckOptions, RenderOptions, SnippetOptions, WatchOptions};
