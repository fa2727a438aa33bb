//! High-level interface: context, story assembly and the content registry.

mod assembler;
mod context;
mod registry;

pub use assembler::Assembler;
pub use context::Context;
pub use registry::ContentRegistry;
