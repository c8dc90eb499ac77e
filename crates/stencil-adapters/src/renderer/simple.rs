//! Simple placeholder substitution renderer.

use std::path::Path;

use stencil_core::{
    application::ports::TemplateRenderer,
    domain::{ComponentStructure, DomainValidator as validator, RenderContext, TemplateFile},
    error::StencilResult,
};
use tracing::{instrument, trace};

/// Renderer using literal token substitution.
///
/// Scripts get the type-check pragma first, then placeholder substitution.
/// Stylesheets are substituted only.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(root = %component_root.display()))]
    fn render(
        &self,
        templates: &[TemplateFile],
        context: &RenderContext,
        component_root: &Path,
    ) -> StencilResult<ComponentStructure> {
        let mut structure = ComponentStructure::new(component_root);

        for template in templates {
            let id = template.id;
            let scoped_name = id.scoped_name(context.file_name());

            let content = if id.is_script() {
                let annotated = context.type_check().annotate(&template.raw_content);
                context.render(&annotated, &scoped_name)
            } else {
                context.render(&template.raw_content, &scoped_name)
            };

            let file_name = id.output_file_name(context.file_name(), context.css_extension());
            trace!(template = %id, file = %file_name, "Rendered");
            structure.add_file(id, file_name, content);
        }

        validator::validate_component_structure(&structure)?;

        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use stencil_core::domain::{CaseKind, ComponentNames, CssExtension, TemplateId, TypeCheck};

    fn context(type_check: TypeCheck) -> RenderContext {
        let names = ComponentNames::derive("my button", CaseKind::Param, CaseKind::Pascal).unwrap();
        RenderContext::new(&names, CssExtension::new("css").unwrap(), true, type_check)
    }

    fn templates() -> Vec<TemplateFile> {
        vec![
            TemplateFile::new(TemplateId::Index, "index.js", "from './$name$'$semi$"),
            TemplateFile::new(TemplateId::Test, "jest.js", "// $name$"),
            TemplateFile::new(TemplateId::Styles, "styles.css", ".$Name$ {}"),
        ]
    }

    #[test]
    fn applies_naming_rule_per_template() {
        let structure = SimpleRenderer::new()
            .render(&templates(), &context(TypeCheck::None), Path::new("/c"))
            .unwrap();

        let files: Vec<_> = structure
            .files()
            .map(|f| (f.path.clone(), f.content.clone()))
            .collect();
        assert_eq!(
            files,
            vec![
                (PathBuf::from("index.js"), "from './index';".to_string()),
                (PathBuf::from("my-button.test.js"), "// my-button.test".to_string()),
                (PathBuf::from("my-button.css"), ".MyButton {}".to_string()),
            ]
        );
    }

    #[test]
    fn flow_pragma_only_on_scripts() {
        let structure = SimpleRenderer::new()
            .render(&templates(), &context(TypeCheck::Flow), Path::new("/c"))
            .unwrap();

        for file in structure.files() {
            if file.template.is_script() {
                assert!(file.content.starts_with("// @flow"), "{}", file.path.display());
            } else {
                assert!(!file.content.contains("@flow"));
            }
        }
    }

    #[test]
    fn empty_template_set_is_rejected() {
        assert!(
            SimpleRenderer::new()
                .render(&[], &context(TypeCheck::None), Path::new("/c"))
                .is_err()
        );
    }
}
