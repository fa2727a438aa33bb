//! Build command implementation.

use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::Context;

use super::{to_json, write_file};

/// Options for the build command.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Tutorial to build (defaults to the configured one).
    pub tutorial: Option<String>,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
    /// Pretty-print the JSON.
    pub pretty: bool,
}

/// Executes the build command.
pub async fn build(ctx: &Context, options: BuildOptions) -> Result<()> {
    let tutorial = options
        .tutorial
        .unwrap_or_else(|| ctx.config.tutorial.clone());
    tracing::info!("Building tutorial '{}'...", tutorial);

    let content = ctx.assembler().assemble(&tutorial).await?;
    let json = to_json(&content, options.pretty)?;

    match options.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            write_file(&path, &json)?;
            println!(
                "Wrote {} steps and {} snippets to {}.",
                content.story.len(),
                content.code_snippets.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
