//! Render command implementation.

use std::fs;
use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::Context;
use crate::readers::render_step_html;

/// Options for the render command.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Markdown file to render.
    pub file: PathBuf,
}

/// Executes the render command.
pub fn render(ctx: &Context, options: RenderOptions) -> Result<()> {
    let raw = fs::read_to_string(ctx.resolve_path(&options.file))?;
    print!("{}", render_step_html(&raw, ctx.renderer.as_ref()));
    Ok(())
}
