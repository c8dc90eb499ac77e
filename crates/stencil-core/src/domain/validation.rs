use crate::domain::{entities::ComponentStructure, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_component_structure(structure: &ComponentStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
