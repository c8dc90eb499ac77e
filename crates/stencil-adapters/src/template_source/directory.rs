//! Filesystem-based template source.
//!
//! Reads `<root>/<template file>` for every template id. The expected
//! layout mirrors the built-in set:
//!
//! ```text
//! templates/
//! ├── index.js
//! ├── jest.js
//! ├── stateful.js
//! ├── stateless.js
//! └── styles.css
//! ```
//!
//! # Discovery
//!
//! [`DirectoryTemplates::discover`] checks, in order:
//!
//! 1. **`$STENCIL_TEMPLATES_DIR`**: environment variable override.
//! 2. **`<executable-dir>/templates/component`**: sibling to the binary.
//!
//! and returns `None` when neither exists, in which case callers fall back
//! to the embedded templates.

use std::{
    fs,
    path::{Path, PathBuf},
};

use stencil_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{TemplateFile, TemplateId},
    error::StencilResult,
};
use tracing::{debug, instrument};

/// Environment variable naming a template directory.
pub const TEMPLATES_DIR_ENV: &str = "STENCIL_TEMPLATES_DIR";

/// Templates read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a template directory using the order in the module docs.
    #[instrument]
    pub fn discover() -> Option<Self> {
        candidate_paths()
            .into_iter()
            .inspect(|p| debug!(path = %p.display(), "checking candidate templates path"))
            .find(|p| p.is_dir())
            .map(Self::new)
    }
}

impl TemplateSource for DirectoryTemplates {
    fn load(&self, id: TemplateId) -> StencilResult<TemplateFile> {
        let path = self.root.join(id.file_name());
        let content = fs::read_to_string(&path).map_err(|e| ApplicationError::TemplateLoad {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        Ok(TemplateFile::new(id, path, content))
    }

    fn describe(&self) -> String {
        format!("templates in {}", self.root.display())
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
        if !dir.is_empty() {
            paths.push(PathBuf::from(dir));
        }
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        paths.push(exe_dir.join("templates").join("component"));
    }

    paths
}
