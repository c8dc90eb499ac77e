//! Component templates.
//!
//! A component is generated from a fixed set of templates. Exactly one of
//! [`TemplateId::Stateless`] / [`TemplateId::Stateful`] is used per run, the
//! test template is optional, and the entry script and stylesheet are
//! always present.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::CssExtension;

/// Extension given to every generated script.
pub const SCRIPT_EXTENSION: &str = "js";

/// Identifier for one logical template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    /// Entry script re-exporting the component.
    Index,
    /// Functional (stateless) implementation.
    Stateless,
    /// Class-based (stateful) implementation.
    Stateful,
    /// Test script.
    Test,
    /// Stylesheet.
    Styles,
}

impl TemplateId {
    pub const ALL: [TemplateId; 5] = [
        Self::Index,
        Self::Stateless,
        Self::Stateful,
        Self::Test,
        Self::Styles,
    ];

    /// File name of the template inside a template directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Index => "index.js",
            Self::Stateless => "stateless.js",
            Self::Stateful => "stateful.js",
            Self::Test => "jest.js",
            Self::Styles => "styles.css",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Stateless => "stateless",
            Self::Stateful => "stateful",
            Self::Test => "test",
            Self::Styles => "styles",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Index => "Entry script re-exporting the component",
            Self::Stateless => "Functional component implementation",
            Self::Stateful => "Class component implementation",
            Self::Test => "Jest test suite",
            Self::Styles => "Component stylesheet",
        }
    }

    pub const fn is_script(&self) -> bool {
        !matches!(self, Self::Styles)
    }

    /// Value substituted for the lowercase `$name$` placeholder.
    ///
    /// | Template   | Scoped name        |
    /// |------------|--------------------|
    /// | index      | `index`            |
    /// | test       | `<fileName>.test`  |
    /// | all others | `<fileName>`       |
    pub fn scoped_name(&self, file_name: &str) -> String {
        match self {
            Self::Index => "index".to_string(),
            Self::Test => format!("{file_name}.test"),
            _ => file_name.to_string(),
        }
    }

    /// Name of the generated file inside the component directory.
    pub fn output_file_name(&self, file_name: &str, css_extension: &CssExtension) -> String {
        if self.is_script() {
            format!("{}.{SCRIPT_EXTENSION}", self.scoped_name(file_name))
        } else {
            format!("{file_name}.{css_extension}")
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw template text as loaded from a template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub id: TemplateId,
    pub source_path: PathBuf,
    pub raw_content: String,
}

impl TemplateFile {
    pub fn new(
        id: TemplateId,
        source_path: impl Into<PathBuf>,
        raw_content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            source_path: source_path.into(),
            raw_content: raw_content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_names_follow_template_role() {
        assert_eq!(TemplateId::Index.scoped_name("my-button"), "index");
        assert_eq!(TemplateId::Test.scoped_name("my-button"), "my-button.test");
        assert_eq!(TemplateId::Stateless.scoped_name("my-button"), "my-button");
        assert_eq!(TemplateId::Styles.scoped_name("my-button"), "my-button");
    }

    #[test]
    fn output_file_names() {
        let scss = CssExtension::new("scss").unwrap();
        assert_eq!(TemplateId::Index.output_file_name("card", &scss), "index.js");
        assert_eq!(TemplateId::Stateful.output_file_name("card", &scss), "card.js");
        assert_eq!(TemplateId::Test.output_file_name("card", &scss), "card.test.js");
        assert_eq!(TemplateId::Styles.output_file_name("card", &scss), "card.scss");
    }

    #[test]
    fn only_styles_is_not_a_script() {
        let scripts: Vec<_> = TemplateId::ALL.iter().filter(|t| t.is_script()).collect();
        assert_eq!(scripts.len(), 4);
        assert!(!TemplateId::Styles.is_script());
    }
}
