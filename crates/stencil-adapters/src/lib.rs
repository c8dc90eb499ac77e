//! Infrastructure adapters for Stencil.
//!
//! This crate implements the ports defined in `stencil-core::application::ports`.
//! It contains all I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod template_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use template_source::{DirectoryTemplates, EmbeddedTemplates, InMemoryTemplates};

