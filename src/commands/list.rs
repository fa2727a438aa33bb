//! List command implementation.

use crate::errors::Result;
use crate::interface::Context;
use crate::io::list_tutorials;

/// Executes the list command.
pub fn list(ctx: &Context) -> Result<()> {
    let content_dir = ctx.content_dir();
    let tutorials = list_tutorials(&content_dir, &ctx.config.manifest_name)?;

    if tutorials.is_empty() {
        println!("No tutorials found in {}.", content_dir.display());
        return Ok(());
    }

    for name in &tutorials {
        let marker = if *name == ctx.config.tutorial { "*" } else { " " };
        println!("{} {}", marker, name);
    }

    Ok(())
}
