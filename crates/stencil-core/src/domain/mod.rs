// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stencil.
//!
//! This module contains pure logic with no I/O. Filesystem access, template
//! loading and rendering are reached through ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: requests and structures are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services
//!
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    component_structure::{ComponentStructure, RenderedFile},
    names::ComponentNames,
    render_context::RenderContext,
    request::{DEFAULT_CASE, DEFAULT_DIRECTORY, GenerationRequest, GenerationRequestBuilder},
    template::{SCRIPT_EXTENSION, TemplateFile, TemplateId},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{CaseKind, CssExtension, TestFramework, TypeCheck};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Request → names → render, end to end in the domain
    // ========================================================================

    #[test]
    fn request_drives_names_and_context() {
        let request = GenerationRequest::builder("my button")
            .file_format("paramCase")
            .component_format("pascalCase")
            .build()
            .unwrap();

        let names = request.names().unwrap();
        let ctx = RenderContext::from_request(&request, &names);

        assert_eq!(ctx.file_name(), "my-button");
        assert_eq!(ctx.component_name(), "MyButton");
        assert_eq!(
            ctx.render("export { default } from './$name$'$semi$", "index"),
            "export { default } from './index';"
        );
    }

    // ========================================================================
    // Component Structure Tests
    // ========================================================================

    #[test]
    fn component_structure_builds_correctly() {
        let structure = ComponentStructure::new("/tmp/src/components/card")
            .with_file(TemplateId::Index, "index.js", "export {}".into())
            .with_file(TemplateId::Styles, "card.css", ".Card {}".into());

        assert_eq!(structure.file_count(), 2);
        assert!(structure.validate().is_ok());
        let first = structure.files().next().unwrap();
        assert_eq!(
            structure.target_path(first),
            std::path::PathBuf::from("/tmp/src/components/card/index.js")
        );
    }

    #[test]
    fn component_structure_validates_duplicates() {
        let structure = ComponentStructure::new("/tmp/x")
            .with_file(TemplateId::Index, "index.js", String::new())
            .with_file(TemplateId::Index, "index.js", String::new());

        assert!(matches!(
            structure.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn component_structure_validates_empty() {
        let structure = ComponentStructure::new("/tmp/x");
        assert_eq!(structure.validate(), Err(DomainError::EmptyStructure));
    }

    #[test]
    fn component_structure_rejects_absolute_file_paths() {
        let structure = ComponentStructure::new("/tmp/x").with_file(
            TemplateId::Index,
            "/etc/passwd",
            String::new(),
        );
        assert!(matches!(
            structure.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn invalid_case_kind_suggestions_list_all_six() {
        let err = DomainError::InvalidCaseKind {
            key: "fileName",
            value: "upperCase".into(),
        };
        let suggestions = err.suggestions();
        for kind in CaseKind::ALL {
            assert!(suggestions.iter().any(|s| s.contains(kind.as_str())));
        }
    }
}
