//! Template Service - template catalogue queries.
//!
//! Separated from GenerateService for single responsibility.

use serde::Serialize;

use crate::{application::ports::TemplateSource, domain::TemplateId, error::StencilResult};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub file: String,
    pub description: String,
    pub source: String,
    pub lines: usize,
}

/// Service for template queries.
pub struct TemplateService {
    source: Box<dyn TemplateSource>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(source: Box<dyn TemplateSource>) -> Self {
        Self { source }
    }

    /// List every template, loading each one to confirm it is readable.
    pub fn list(&self) -> StencilResult<Vec<TemplateInfo>> {
        TemplateId::ALL
            .into_iter()
            .map(|id| {
                let template = self.source.load(id)?;
                Ok(TemplateInfo {
                    id: id.to_string(),
                    file: id.file_name().to_string(),
                    description: id.description().to_string(),
                    source: template.source_path.display().to_string(),
                    lines: template.raw_content.lines().count(),
                })
            })
            .collect()
    }

    /// Where templates are read from.
    pub fn origin(&self) -> String {
        self.source.describe()
    }
}
