// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::CaseKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A name transform selector outside the six supported case kinds.
    ///
    /// `key` names the selector (`fileName` or `component`).
    #[error("Invalid {key} name transform '{value}'")]
    InvalidCaseKind { key: &'static str, value: String },

    #[error("Invalid component name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid stylesheet extension '{extension}'")]
    InvalidCssExtension { extension: String },

    #[error("Duplicate path in component: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Component structure is empty")]
    EmptyStructure,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidCaseKind { .. } => {
                let mut out = vec!["allowed transform functions are:".to_string()];
                out.extend(CaseKind::ALL.iter().map(|k| format!("  - {k}")));
                out
            }
            Self::InvalidName { .. } => vec![
                "Use a name containing letters or digits".into(),
                "Examples: \"my button\", my-button, MyButton".into(),
            ],
            Self::InvalidCssExtension { .. } => vec![
                "Pass an extension such as css, scss or .less".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } => vec![
                "The directory is resolved under ./src; pass a relative path".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidCaseKind { .. }
            | Self::InvalidName { .. }
            | Self::InvalidCssExtension { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::DuplicatePath { .. } | Self::EmptyStructure => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
