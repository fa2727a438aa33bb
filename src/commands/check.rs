//! Check command implementation.

use crate::errors::{Result, StoryError};
use crate::interface::Context;
use crate::model::{TutorialContent, PLACEHOLDER_CONTENT};

/// Options for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Tutorial to check (defaults to the configured one).
    pub tutorial: Option<String>,
    /// List every entry.
    pub verbose: bool,
}

/// Keys of steps and snippets that fell back to placeholders.
pub(crate) fn degraded_keys(content: &TutorialContent) -> Vec<String> {
    let mut keys: Vec<String> = content
        .story
        .iter()
        .filter(|step| step.full_content.as_deref() == Some(PLACEHOLDER_CONTENT))
        .map(|step| step.key.clone())
        .collect();

    for (key, snippet) in &content.code_snippets {
        if snippet.is_placeholder() && !keys.contains(key) {
            keys.push(key.clone());
        }
    }

    keys
}

/// Executes the check command.
pub async fn check(ctx: &Context, options: CheckOptions) -> Result<()> {
    let tutorial = options
        .tutorial
        .unwrap_or_else(|| ctx.config.tutorial.clone());
    let content = ctx.assembler().assemble(&tutorial).await?;

    let subsections: usize = content.story.iter().map(|s| s.subsections.len()).sum();
    println!("Tutorial: {}", tutorial);
    println!("Steps: {} ({} subsections)", content.story.len(), subsections);
    println!("Snippets: {}", content.code_snippets.len());

    if options.verbose {
        for entry in content.flatten() {
            let indent = "  ".repeat(entry.depth + 1);
            let view = content.code_view(&entry.key);
            let highlight = view
                .as_ref()
                .and_then(|v| v.highlight)
                .map(|h| format!(" [lines {}]", h))
                .unwrap_or_default();
            println!("{}{} {}{}", indent, entry.number, entry.title, highlight);
        }
    }

    let degraded = degraded_keys(&content);
    if degraded.is_empty() {
        println!("\nAll content resolved.");
        return Ok(());
    }

    println!("\nPlaceholder content:");
    for key in &degraded {
        println!("  {}", key);
    }

    Err(StoryError::Other(format!(
        "{} entries fell back to placeholder content",
        degraded.len()
    )))
}
