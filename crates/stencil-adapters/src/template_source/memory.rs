//! In-memory template source.

use std::collections::HashMap;

use stencil_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{TemplateFile, TemplateId},
    error::StencilResult,
};

use super::EmbeddedTemplates;

/// Map of template id → text.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplates {
    templates: HashMap<TemplateId, String>,
}

impl InMemoryTemplates {
    /// Create an empty source. Every `load` fails until templates are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the built-in set.
    pub fn with_builtin() -> Self {
        let templates = TemplateId::ALL
            .into_iter()
            .map(|id| (id, EmbeddedTemplates::text(id).to_string()))
            .collect();
        Self { templates }
    }

    pub fn with_template(mut self, id: TemplateId, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }

    pub fn insert(&mut self, id: TemplateId, text: impl Into<String>) {
        self.templates.insert(id, text.into());
    }

    pub fn remove(&mut self, id: TemplateId) -> Option<String> {
        self.templates.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl TemplateSource for InMemoryTemplates {
    fn load(&self, id: TemplateId) -> StencilResult<TemplateFile> {
        let text = self
            .templates
            .get(&id)
            .ok_or_else(|| ApplicationError::TemplateLoad {
                path: format!("memory://{}", id.file_name()).into(),
                reason: "template not registered".into(),
            })?;

        Ok(TemplateFile::new(id, format!("memory://{}", id.file_name()), text.clone()))
    }

    fn describe(&self) -> String {
        format!("{} in-memory templates", self.templates.len())
    }
}
