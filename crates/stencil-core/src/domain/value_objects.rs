//! Domain value objects: CaseKind, TypeCheck, TestFramework, CssExtension.
//!
//! These are pure value types with equality-by-value and no identity. Each
//! one owns its string representation and its parser.

use std::fmt;
use std::str::FromStr;

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToTrainCase,
    ToUpperCamelCase,
};
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── CaseKind ──────────────────────────────────────────────────────────────────

/// A naming convention applied to the raw component name.
///
/// The accepted spellings are the camelCase identifiers below, matched
/// case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseKind {
    #[serde(rename = "camelCase")]
    Camel,
    #[serde(rename = "constantCase")]
    Constant,
    #[serde(rename = "headerCase")]
    Header,
    #[serde(rename = "paramCase")]
    Param,
    #[serde(rename = "pascalCase")]
    Pascal,
    #[serde(rename = "snakeCase")]
    Snake,
}

impl CaseKind {
    /// Every supported case kind, in display order.
    pub const ALL: [CaseKind; 6] = [
        Self::Camel,
        Self::Constant,
        Self::Header,
        Self::Param,
        Self::Pascal,
        Self::Snake,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Camel => "camelCase",
            Self::Constant => "constantCase",
            Self::Header => "headerCase",
            Self::Param => "paramCase",
            Self::Pascal => "pascalCase",
            Self::Snake => "snakeCase",
        }
    }

    /// Convert `input` to this naming convention.
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Camel => input.to_lower_camel_case(),
            Self::Constant => input.to_shouty_snake_case(),
            Self::Header => input.to_train_case(),
            Self::Param => input.to_kebab_case(),
            Self::Pascal => input.to_upper_camel_case(),
            Self::Snake => input.to_snake_case(),
        }
    }

    /// Parse a selector, attributing a failure to `key`.
    pub fn parse_for(key: &'static str, value: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == value)
            .ok_or_else(|| DomainError::InvalidCaseKind {
                key,
                value: value.to_string(),
            })
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_for("case", s)
    }
}

// ── TypeCheck ─────────────────────────────────────────────────────────────────

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Type-checking annotation style for generated scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCheck {
    #[default]
    None,
    Flow,
}

impl TypeCheck {
    pub const FLOW_PRAGMA: &'static str = "// @flow";

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Flow => "flow",
        }
    }

    /// Parse a configured mode. `None` means the value is not recognised;
    /// callers treat that as [`TypeCheck::None`].
    pub fn parse_setting(value: &str) -> Option<Self> {
        match value {
            "" | "none" => Some(Self::None),
            "flow" => Some(Self::Flow),
            _ => None,
        }
    }

    /// Prepend the pragma line for this mode. Scripts only.
    pub fn annotate(&self, content: &str) -> String {
        match self {
            Self::None => content.to_string(),
            Self::Flow => format!("{}{LINE_ENDING}{LINE_ENDING}{content}", Self::FLOW_PRAGMA),
        }
    }
}

impl fmt::Display for TypeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TestFramework ─────────────────────────────────────────────────────────────

/// Test framework for the optional generated test file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    #[default]
    None,
    Jest,
}

impl TestFramework {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Jest => "jest",
        }
    }

    /// Parse a configured framework; `None` when unrecognised.
    pub fn parse_setting(value: &str) -> Option<Self> {
        match value {
            "" | "none" => Some(Self::None),
            "jest" => Some(Self::Jest),
            _ => None,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CssExtension ──────────────────────────────────────────────────────────────

/// Stylesheet extension without its leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssExtension(String);

impl CssExtension {
    pub const DEFAULT: &'static str = "css";

    /// Strip a single leading `.` and reject empty results.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let ext = raw.strip_prefix('.').unwrap_or(raw);
        if ext.is_empty() {
            return Err(DomainError::InvalidCssExtension {
                extension: raw.to_string(),
            });
        }
        Ok(Self(ext.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CssExtension {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for CssExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
