use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::CaseKind};

/// The two identifiers derived from a raw component name.
///
/// `file_name` names the component directory and its files; `component_name`
/// is the exported symbol. They use independent conventions, e.g. kebab-case
/// files with a PascalCase symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentNames {
    pub file_name: String,
    pub component_name: String,
}

impl ComponentNames {
    /// Apply both case conversions to `raw`.
    ///
    /// Deterministic: identical inputs always produce identical names.
    pub fn derive(
        raw: &str,
        file_case: CaseKind,
        component_case: CaseKind,
    ) -> Result<Self, DomainError> {
        let file_name = file_case.apply(raw);
        let component_name = component_case.apply(raw);

        if file_name.is_empty() || component_name.is_empty() {
            return Err(DomainError::InvalidName {
                name: raw.to_string(),
                reason: "name has no letters or digits to convert".into(),
            });
        }

        Ok(Self {
            file_name,
            component_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_file_pascal_component() {
        let names = ComponentNames::derive("my button", CaseKind::Param, CaseKind::Pascal).unwrap();
        assert_eq!(names.file_name, "my-button");
        assert_eq!(names.component_name, "MyButton");
    }

    #[test]
    fn derivation_is_deterministic_for_every_pair() {
        for file_case in CaseKind::ALL {
            for component_case in CaseKind::ALL {
                let derive = || ComponentNames::derive("profile card", file_case, component_case);
                assert_eq!(derive().unwrap(), derive().unwrap());
            }
        }
    }

    #[test]
    fn punctuation_only_name_is_rejected() {
        assert!(matches!(
            ComponentNames::derive("--- !!", CaseKind::Param, CaseKind::Pascal),
            Err(DomainError::InvalidName { .. })
        ));
    }
}
