//! The `GenerationRequest` aggregate and its builder.
//!
//! A request is the fully-validated description of one component to
//! generate. Case-kind selectors arrive as free text (from flags or config
//! files) and are parsed in [`GenerationRequestBuilder::build`], so an
//! invalid selector never outlives request construction.
//!
//! This module must not import `tracing`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{names::ComponentNames, template::TemplateId},
    error::DomainError,
    value_objects::{CaseKind, CssExtension, TestFramework, TypeCheck},
};

/// Subdirectory of `src/` used when none is given.
pub const DEFAULT_DIRECTORY: &str = "components";
/// Default selector for both file and component names.
pub const DEFAULT_CASE: CaseKind = CaseKind::Pascal;

// ── Aggregate root ────────────────────────────────────────────────────────────

/// Immutable, validated input for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    raw_name: String,
    directory: PathBuf,
    file_format: CaseKind,
    component_format: CaseKind,
    functional: bool,
    type_check: TypeCheck,
    test: TestFramework,
    css_extension: CssExtension,
    semi: bool,
}

impl GenerationRequest {
    /// Start building a request for `raw_name`.
    pub fn builder(raw_name: impl Into<String>) -> GenerationRequestBuilder {
        GenerationRequestBuilder::new(raw_name)
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }
    pub fn directory(&self) -> &Path {
        &self.directory
    }
    pub const fn file_format(&self) -> CaseKind {
        self.file_format
    }
    pub const fn component_format(&self) -> CaseKind {
        self.component_format
    }
    pub const fn is_functional(&self) -> bool {
        self.functional
    }
    pub const fn type_check(&self) -> TypeCheck {
        self.type_check
    }
    pub const fn test(&self) -> TestFramework {
        self.test
    }
    pub fn css_extension(&self) -> &CssExtension {
        &self.css_extension
    }
    pub const fn semi(&self) -> bool {
        self.semi
    }

    /// Derive the file and component names.
    pub fn names(&self) -> Result<ComponentNames, DomainError> {
        ComponentNames::derive(&self.raw_name, self.file_format, self.component_format)
    }

    /// Templates needed for this request, scripts first.
    pub fn template_ids(&self) -> Vec<TemplateId> {
        let mut ids = vec![
            TemplateId::Index,
            if self.functional {
                TemplateId::Stateless
            } else {
                TemplateId::Stateful
            },
        ];
        if self.test.is_enabled() {
            ids.push(TemplateId::Test);
        }
        ids.push(TemplateId::Styles);
        ids
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' in src/{} ({} file, {} component, {})",
            self.raw_name,
            self.directory.display(),
            self.file_format,
            self.component_format,
            if self.functional { "functional" } else { "stateful" },
        )
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`GenerationRequest`].
///
/// Setters never fail; every check runs in [`build`](Self::build) in the
/// order: file format, component format, name, directory, css extension.
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    raw_name: String,
    directory: PathBuf,
    file_format: String,
    component_format: String,
    functional: bool,
    type_check: TypeCheck,
    test: TestFramework,
    css_extension: String,
    semi: bool,
}

impl GenerationRequestBuilder {
    fn new(raw_name: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            file_format: DEFAULT_CASE.as_str().to_string(),
            component_format: DEFAULT_CASE.as_str().to_string(),
            functional: true,
            type_check: TypeCheck::None,
            test: TestFramework::None,
            css_extension: CssExtension::DEFAULT.to_string(),
            semi: true,
        }
    }

    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn file_format(mut self, format: impl Into<String>) -> Self {
        self.file_format = format.into();
        self
    }

    pub fn component_format(mut self, format: impl Into<String>) -> Self {
        self.component_format = format.into();
        self
    }

    pub fn functional(mut self, functional: bool) -> Self {
        self.functional = functional;
        self
    }

    pub fn type_check(mut self, type_check: TypeCheck) -> Self {
        self.type_check = type_check;
        self
    }

    pub fn test(mut self, test: TestFramework) -> Self {
        self.test = test;
        self
    }

    pub fn css_extension(mut self, extension: impl Into<String>) -> Self {
        self.css_extension = extension.into();
        self
    }

    pub fn semi(mut self, semi: bool) -> Self {
        self.semi = semi;
        self
    }

    /// Validate and build the request.
    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        let file_format = CaseKind::parse_for("fileName", &self.file_format)?;
        let component_format = CaseKind::parse_for("component", &self.component_format)?;

        ComponentNames::derive(&self.raw_name, file_format, component_format)?;

        if self.directory.is_absolute() || self.directory.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: self.directory.display().to_string(),
            });
        }

        let css_extension = CssExtension::new(&self.css_extension)?;

        Ok(GenerationRequest {
            raw_name: self.raw_name,
            directory: self.directory,
            file_format,
            component_format,
            functional: self.functional,
            type_check: self.type_check,
            test: self.test,
            css_extension,
            semi: self.semi,
        })
    }
}
