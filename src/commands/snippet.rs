//! Snippet command implementation.

use std::fs;
use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::Context;
use crate::model::CodeSnippet;
use crate::readers::extract_snippet;

/// Options for the snippet command.
#[derive(Debug, Clone, Default)]
pub struct SnippetOptions {
    /// Markdown file to extract from.
    pub file: PathBuf,
}

/// Extracts the snippet of a single file.
pub fn read_snippet(ctx: &Context, options: &SnippetOptions) -> Result<CodeSnippet> {
    let raw = fs::read_to_string(ctx.resolve_path(&options.file))?;
    Ok(extract_snippet(&raw, &ctx.config.snippet))
}

/// Executes the snippet command.
pub fn snippet(ctx: &Context, options: SnippetOptions) -> Result<()> {
    let snippet = read_snippet(ctx, &options)?;
    println!("{}", serde_json::to_string_pretty(&snippet)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Highlight;
    use tempfile::tempdir;

    #[test]
    fn test_read_snippet() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("compute.md"),
            "# Compute\n```solidity\nfunction add() {}\n```\n## Highlight Lines\n1",
        )
        .unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());

        let options = SnippetOptions {
            file: PathBuf::from("compute.md"),
        };
        let snippet = read_snippet(&ctx, &options).unwrap();

        assert_eq!(snippet.title, "Compute");
        assert_eq!(snippet.language, "solidity");
        assert_eq!(snippet.highlight, Some(Highlight::line(1)));
    }

    #[test]
    fn test_snippet_missing_file() {
        let dir = tempdir().unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());

        let options = SnippetOptions {
            file: PathBuf::from("missing.md"),
        };
        assert!(snippet(&ctx, options).is_err());
    }
}
