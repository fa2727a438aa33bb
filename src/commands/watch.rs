//! Watch command implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::unbounded_channel;

use crate::errors::{Result, StoryError};
use crate::interface::{ContentRegistry, Context};

use super::{to_json, write_file};

/// Options for the watch command.
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    /// Tutorial to watch (defaults to the configured one).
    pub tutorial: Option<String>,
    /// File the JSON is written to after every rebuild.
    pub output: PathBuf,
    /// Debounce delay in milliseconds; 0 uses the configured value.
    pub debounce_ms: u64,
}

/// Absolute form of the output path, matching the paths notify reports.
///
/// The file itself may not exist yet, so its parent directory is created
/// and canonicalized instead.
fn canonical_output(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| StoryError::Watch(format!("invalid output path: {}", path.display())))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    Ok(fs::canonicalize(parent)?.join(file_name))
}

/// Writes the registry's current tutorial to `output`.
async fn write_current(registry: &ContentRegistry, output: &Path) -> Result<()> {
    registry.load().await?;
    if let Some(content) = registry.content() {
        write_file(output, &to_json(&content, true)?)?;
        println!(
            "Rebuilt '{}': {} steps -> {}",
            registry.tutorial(),
            content.story.len(),
            output.display()
        );
    }
    Ok(())
}

/// Executes the watch command.
pub async fn watch(ctx: &Context, options: WatchOptions) -> Result<()> {
    let debounce = if options.debounce_ms > 0 {
        options.debounce_ms
    } else {
        ctx.config.watch.debounce_ms
    };
    let tutorial = options
        .tutorial
        .unwrap_or_else(|| ctx.config.tutorial.clone());
    let watch_dir = ctx.content_dir().join(&tutorial);
    let watch_dir = fs::canonicalize(&watch_dir).unwrap_or(watch_dir);
    let output = canonical_output(&ctx.resolve_path(&options.output))?;

    println!(
        "Watching {} (debounce: {}ms)...",
        watch_dir.display(),
        debounce
    );
    println!("Press Ctrl+C to stop.");

    let registry = ContentRegistry::new(ctx.assembler(), tutorial);
    if let Err(e) = write_current(&registry, &output).await {
        eprintln!("Initial build error: {}", e);
    }

    let (tx, mut rx) = unbounded_channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<notify::Event>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        },
        Config::default().with_poll_interval(Duration::from_millis(debounce)),
    )
    .map_err(|e| StoryError::Watch(e.to_string()))?;

    watcher
        .watch(&watch_dir, RecursiveMode::Recursive)
        .map_err(|e| StoryError::Watch(e.to_string()))?;

    while let Some(event) = rx.recv().await {
        // Writing the output inside the watched tree must not retrigger a build.
        if event.paths.iter().all(|p| *p == output) {
            continue;
        }

        tokio::time::sleep(Duration::from_millis(debounce)).await;
        while rx.try_recv().is_ok() {}

        tracing::debug!("Files changed: {:?}", event.paths);
        if let Err(e) = registry.reload().await {
            eprintln!("Rebuild error: {}", e);
            continue;
        }
        if let Err(e) = write_current(&registry, &output).await {
            eprintln!("Write error: {}", e);
        }
    }

    Err(StoryError::Watch("watcher stopped".to_string()))
}
