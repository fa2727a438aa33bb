//! I/O: content sources and tutorial discovery.

mod source;
mod tutorials;

pub use source::{ContentSource, DirSource, MemorySource};
pub use tutorials::list_tutorials;
