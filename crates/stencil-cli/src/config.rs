//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STENCIL_<SECTION>__<KEY>`, e.g.
//!    `STENCIL_COMPONENT__FILE_FORMAT=paramCase`
//! 3. `--config FILE` (must exist)
//! 4. `.stencil.toml` in the current directory
//! 5. Global `config.toml` in the platform config directory
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use stencil_core::domain::{CaseKind, CssExtension, DEFAULT_CASE, DEFAULT_DIRECTORY};

use crate::error::{CliError, CliResult};

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".stencil.toml";

const ENV_PREFIX: &str = "STENCIL";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `stencil new`.
    pub component: ComponentDefaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

/// Settings for generated components. Mirrors the `new` flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentDefaults {
    pub directory: String,
    pub file_format: String,
    pub component_format: String,
    pub functional: bool,
    /// `none` or `flow`; anything else is treated as `none`.
    pub type_check: String,
    /// `none` or `jest`; anything else is treated as `none`.
    pub test: String,
    pub css_extension: String,
    pub semi: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory holding template overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
}

impl Default for ComponentDefaults {
    fn default() -> Self {
        Self {
            directory: DEFAULT_DIRECTORY.into(),
            file_format: DEFAULT_CASE.as_str().into(),
            component_format: CaseKind::Pascal.as_str().into(),
            functional: true,
            type_check: "none".into(),
            test: "none".into(),
            css_extension: CssExtension::DEFAULT.into(),
            semi: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
            message: "Failed to read the current directory".into(),
            source: e,
        })?;
        Self::load_from(Self::config_path().as_deref(), &cwd, config_file.map(PathBuf::as_path))
    }

    /// Layered load with explicit locations.
    pub fn load_from(
        global: Option<&Path>,
        cwd: &Path,
        explicit: Option<&Path>,
    ) -> CliResult<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CliError::ConfigError {
                    message: format!("Config file not found: {}", path.display()),
                    source: None,
                });
            }
        }

        let defaults = Config::try_from(&Self::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(global) = global {
            builder = builder.add_source(toml_file(global).required(false));
        }
        builder = builder.add_source(toml_file(&cwd.join(LOCAL_CONFIG_FILE)).required(false));
        if let Some(path) = explicit {
            builder = builder.add_source(toml_file(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stencil", "stencil")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
