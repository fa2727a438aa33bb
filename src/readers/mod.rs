//! Readers for tutorial manifests and step markdown.

mod anchors;
mod callouts;
mod fences;
mod manifest;
mod markdown;
mod snippet;

pub use anchors::{inject_anchors, slugify};
pub use callouts::rewrite_callouts;
pub use fences::{fenced_blocks, scan_all, FenceScanner, FencedBlock, ScanResult, FENCE};
pub use manifest::{duplicate_keys, parse_manifest};
pub use markdown::{paragraph, render_step_html, CmarkRenderer, MarkdownRenderer};
pub use snippet::{extract_snippet, parse_highlight};
