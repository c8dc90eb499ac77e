//! Templates compiled into the binary.

use stencil_core::{
    application::ports::TemplateSource,
    domain::{TemplateFile, TemplateId},
    error::StencilResult,
};

const INDEX: &str = include_str!("../../templates/component/index.js");
const STATELESS: &str = include_str!("../../templates/component/stateless.js");
const STATEFUL: &str = include_str!("../../templates/component/stateful.js");
const TEST: &str = include_str!("../../templates/component/jest.js");
const STYLES: &str = include_str!("../../templates/component/styles.css");

/// Built-in component templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Raw text of a built-in template.
    pub const fn text(id: TemplateId) -> &'static str {
        match id {
            TemplateId::Index => INDEX,
            TemplateId::Stateless => STATELESS,
            TemplateId::Stateful => STATEFUL,
            TemplateId::Test => TEST,
            TemplateId::Styles => STYLES,
        }
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn load(&self, id: TemplateId) -> StencilResult<TemplateFile> {
        Ok(TemplateFile::new(
            id,
            format!("templates/component/{}", id.file_name()),
            Self::text(id),
        ))
    }

    fn describe(&self) -> String {
        "built-in templates".to_string()
    }
}
