use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::template::TemplateId, error::DomainError};

/// Rendered component ready for materialization.
///
/// This is the output of the renderer. It contains no business logic, only
/// data: a root directory and the files to write beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentStructure {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<RenderedFile>,
}

impl ComponentStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, template: TemplateId, path: impl Into<PathBuf>, content: String) {
        self.files.push(RenderedFile {
            template,
            path: path.into(),
            content,
        });
    }

    pub fn with_file(
        mut self,
        template: TemplateId,
        path: impl Into<PathBuf>,
        content: String,
    ) -> Self {
        self.add_file(template, path, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyStructure);
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            if file.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: file.path.display().to_string(),
                });
            }
            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &RenderedFile> {
        self.files.iter()
    }

    /// Absolute path a file will be written to.
    pub fn target_path(&self, file: &RenderedFile) -> PathBuf {
        self.root.join(&file.path)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// One rendered file, relative to the component root. Written exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub template: TemplateId,
    pub path: PathBuf,
    pub content: String,
}

impl RenderedFile {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
