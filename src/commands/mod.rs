//! Command implementations for the Storyline CLI.

mod build;
mod check;
mod list;
mod render;
mod snippet;
mod watch;

use std::fs;
use std::path::Path;

pub use build::{build, BuildOptions};
pub use check::{check, CheckOptions};
pub use list::list;
pub use render::{render, RenderOptions};
pub use snippet::{snippet, SnippetOptions};
pub use watch::{watch, WatchOptions};

use crate::errors::Result;
use crate::model::TutorialContent;

/// Serializes a tutorial to JSON.
pub(crate) fn to_json(content: &TutorialContent, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(content)?
    } else {
        serde_json::to_string(content)?
    };
    Ok(json)
}

/// Writes `text` to `path`, creating parent directories.
pub(crate) fn write_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}
