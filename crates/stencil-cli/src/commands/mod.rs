//! Command handlers, one module per subcommand.

use std::path::Path;

use tracing::debug;

use stencil_adapters::{DirectoryTemplates, EmbeddedTemplates};
use stencil_core::application::ports::TemplateSource;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;

/// Pick the template source: `--templates`, then `templates.local_path`,
/// then a discovered directory, then the built-in set.
pub(crate) fn template_source(
    flag: Option<&Path>,
    config: &AppConfig,
) -> CliResult<Box<dyn TemplateSource>> {
    let explicit = flag.or(config.templates.local_path.as_deref());

    let directory = match explicit {
        Some(dir) if !dir.is_dir() => {
            return Err(CliError::InvalidInput {
                message: format!("Template directory not found: {}", dir.display()),
            });
        }
        Some(dir) => Some(DirectoryTemplates::new(dir)),
        None => DirectoryTemplates::discover(),
    };

    Ok(match directory {
        Some(templates) => {
            debug!(root = %templates.root().display(), "Using template directory");
            Box::new(templates)
        }
        None => Box::new(EmbeddedTemplates::new()),
    })
}
