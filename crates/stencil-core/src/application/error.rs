//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the generation pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template could not be read from its source.
    #[error("Failed to load template {}: {reason}", path.display())]
    TemplateLoad { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state could not be accessed (lock poisoned).
    #[error("Adapter state is unavailable")]
    LockPoisoned,

    /// The component directory already exists.
    ///
    /// `path` is relative to the working directory, e.g. `./src/components/card`.
    #[error("Component {component} already exists at {path}")]
    ComponentExists { component: String, path: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateLoad { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check the templates directory (--templates or STENCIL_TEMPLATES_DIR)".into(),
                "Omit the override to use the built-in templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ComponentExists { path, .. } => vec![
                "Choose a different component name or directory".into(),
                format!("Remove the existing directory: rm -rf {path}"),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateLoad { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::ComponentExists { .. } => ErrorCategory::Validation,
        }
    }
}
