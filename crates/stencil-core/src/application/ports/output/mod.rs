//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stencil-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{ComponentStructure, RenderContext, TemplateFile, TemplateId};
use crate::error::StencilResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;

    /// Check if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// List every file under `root`, relative to `root`, sorted.
    ///
    /// Directories only appear as components of file paths, so empty
    /// directories are never reported.
    fn list_files(&self, root: &Path) -> StencilResult<Vec<PathBuf>>;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `stencil_adapters::template_source::EmbeddedTemplates` (built into the binary)
/// - `stencil_adapters::template_source::DirectoryTemplates` (user directory)
/// - `stencil_adapters::template_source::InMemoryTemplates` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Load one template. Failure is fatal to the run; there is no fallback.
    fn load(&self, id: TemplateId) -> StencilResult<TemplateFile>;

    /// Human-readable description of where templates come from.
    fn describe(&self) -> String;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `stencil_adapters::renderer::SimpleRenderer` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render templates into a component structure rooted at `component_root`.
    fn render(
        &self,
        templates: &[TemplateFile],
        context: &RenderContext,
        component_root: &Path,
    ) -> StencilResult<ComponentStructure>;
}
