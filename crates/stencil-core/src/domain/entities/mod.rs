pub mod component_structure;
pub mod names;
pub mod render_context;
pub mod request;
pub mod template;

pub use crate::domain::DomainError;
pub use component_structure::{ComponentStructure, RenderedFile};
pub use names::ComponentNames;
pub use render_context::RenderContext;
pub use request::GenerationRequest;
pub use template::{TemplateFile, TemplateId};
