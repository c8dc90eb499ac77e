//! Generate Service - main application orchestrator.
//!
//! This service runs the whole pipeline for one component:
//! 1. Derive names
//! 2. Resolve (and create) the component directory
//! 3. Load templates
//! 4. Render
//! 5. Write to the filesystem
//! 6. List what was written
//!
//! It never terminates the process; every failure is returned as a typed
//! error to the caller.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
    },
    domain::{
        ComponentNames, ComponentStructure, DomainValidator as validator, GenerationRequest,
        RenderContext, TemplateFile,
    },
    error::StencilResult,
};

/// Root directory, relative to the working directory, that receives every
/// component.
pub const SOURCE_ROOT: &str = "src";

/// Summary of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub component_name: String,
    pub file_name: String,
    pub component_path: PathBuf,
    /// Files under `component_path`, relative to it, sorted.
    pub files: Vec<PathBuf>,
}

/// Main generation service.
pub struct GenerateService {
    templates: Box<dyn TemplateSource>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        templates: Box<dyn TemplateSource>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            renderer,
            filesystem,
        }
    }

    /// Generate a component below `<cwd>/src`.
    ///
    /// `src/` and `src/<directory>/` are created before the collision check
    /// and stay in place if the component already exists.
    #[instrument(
        skip_all,
        fields(
            component = %request.raw_name(),
            cwd = %cwd.display()
        )
    )]
    pub fn generate(
        &self,
        request: &GenerationRequest,
        cwd: &Path,
    ) -> StencilResult<GenerationReport> {
        info!("Generating {}", request);

        // 1. Names
        let names = request.names()?;
        debug!(
            file_name = %names.file_name,
            component_name = %names.component_name,
            "Names derived"
        );

        // 2. Component directory
        let component_path = self.prepare_component_dir(&names, request.directory(), cwd)?;

        // 3. Templates
        let templates = self.load_templates(request)?;

        // 4. Render
        let context = RenderContext::from_request(request, &names);
        let structure = self.renderer.render(&templates, &context, &component_path)?;
        validator::validate_component_structure(&structure)?;
        debug!(files = structure.file_count(), "Templates rendered");

        // 5. Write
        self.write_structure(&structure)?;

        // 6. Report
        let files = self.filesystem.list_files(&component_path)?;
        info!(path = %component_path.display(), files = files.len(), "Component generated");

        Ok(GenerationReport {
            component_name: names.component_name,
            file_name: names.file_name,
            component_path,
            files,
        })
    }

    /// Run the pipeline without touching the filesystem.
    ///
    /// Reports a collision when the component path already exists, and
    /// otherwise returns what [`generate`](Self::generate) would write.
    #[instrument(skip_all, fields(component = %request.raw_name()))]
    pub fn plan(
        &self,
        request: &GenerationRequest,
        cwd: &Path,
    ) -> StencilResult<ComponentStructure> {
        let names = request.names()?;
        let component_path = component_path(cwd, request.directory(), &names.file_name);
        self.ensure_vacant(&names, &component_path, cwd)?;

        let templates = self.load_templates(request)?;
        let context = RenderContext::from_request(request, &names);
        let structure = self.renderer.render(&templates, &context, &component_path)?;
        validator::validate_component_structure(&structure)?;

        Ok(structure)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Create `src/` and `src/<directory>/`, reject an existing component,
    /// then create the empty component directory.
    fn prepare_component_dir(
        &self,
        names: &ComponentNames,
        directory: &Path,
        cwd: &Path,
    ) -> StencilResult<PathBuf> {
        let root = cwd.join(SOURCE_ROOT);
        self.filesystem.create_dir_all(&root)?;

        let dir = root.join(directory);
        self.filesystem.create_dir_all(&dir)?;

        let component_path = dir.join(&names.file_name);
        self.ensure_vacant(names, &component_path, cwd)?;

        self.filesystem.create_dir_all(&component_path)?;
        Ok(component_path)
    }

    fn ensure_vacant(
        &self,
        names: &ComponentNames,
        component_path: &Path,
        cwd: &Path,
    ) -> StencilResult<()> {
        if self.filesystem.exists(component_path) {
            return Err(ApplicationError::ComponentExists {
                component: names.component_name.clone(),
                path: relative_display(cwd, component_path),
            }
            .into());
        }
        Ok(())
    }

    fn load_templates(&self, request: &GenerationRequest) -> StencilResult<Vec<TemplateFile>> {
        request
            .template_ids()
            .into_iter()
            .map(|id| {
                let template = self.templates.load(id)?;
                debug!(template = %id, source = %template.source_path.display(), "Template loaded");
                Ok(template)
            })
            .collect()
    }

    /// Write every rendered file. No rollback on failure.
    fn write_structure(&self, structure: &ComponentStructure) -> StencilResult<()> {
        for file in structure.files() {
            let path = structure.target_path(file);
            self.filesystem.write_file(&path, &file.content)?;
            debug!(path = %path.display(), bytes = file.size(), "File written");
        }
        Ok(())
    }
}

fn component_path(cwd: &Path, directory: &Path, file_name: &str) -> PathBuf {
    cwd.join(SOURCE_ROOT).join(directory).join(file_name)
}

/// Render `path` as `./relative/to/cwd` for messages.
pub fn relative_display(cwd: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(cwd).unwrap_or(path);
    format!("./{}", relative.display())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        application::ports::output::{MockFilesystem, MockTemplateRenderer, MockTemplateSource},
        domain::{TemplateId, TestFramework},
        error::StencilError,
    };

    fn request() -> GenerationRequest {
        GenerationRequest::builder("my button")
            .file_format("paramCase")
            .component_format("pascalCase")
            .build()
            .unwrap()
    }

    fn templates() -> MockTemplateSource {
        let mut source = MockTemplateSource::new();
        source
            .expect_load()
            .returning(|id| Ok(TemplateFile::new(id, id.file_name(), "$Name$")));
        source.expect_describe().return_const("mock".to_string());
        source
    }

    /// Renders one file per template, named after the template.
    fn renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|templates, ctx, root| {
            let mut structure = ComponentStructure::new(root);
            for t in templates {
                structure.add_file(
                    t.id,
                    t.id.output_file_name(ctx.file_name(), ctx.css_extension()),
                    ctx.render(&t.raw_content, ctx.file_name()),
                );
            }
            Ok(structure)
        });
        renderer
    }

    #[test]
    fn generate_creates_dirs_writes_files_and_lists_them() {
        let cwd = PathBuf::from("/work");
        let created = Arc::new(Mutex::new(Vec::new()));
        let written = Arc::new(Mutex::new(Vec::new()));

        let mut fs = MockFilesystem::new();
        let log = Arc::clone(&created);
        fs.expect_create_dir_all().returning(move |p| {
            log.lock().unwrap().push(p.to_path_buf());
            Ok(())
        });
        fs.expect_exists().return_const(false);
        let log = Arc::clone(&written);
        fs.expect_write_file().returning(move |p, c| {
            log.lock().unwrap().push((p.to_path_buf(), c.to_string()));
            Ok(())
        });
        fs.expect_list_files().returning(|_| {
            Ok(vec![
                PathBuf::from("index.js"),
                PathBuf::from("my-button.css"),
                PathBuf::from("my-button.js"),
            ])
        });

        let service =
            GenerateService::new(Box::new(templates()), Box::new(renderer()), Box::new(fs));
        let report = service.generate(&request(), &cwd).unwrap();

        assert_eq!(
            *created.lock().unwrap(),
            vec![
                PathBuf::from("/work/src"),
                PathBuf::from("/work/src/components"),
                PathBuf::from("/work/src/components/my-button"),
            ]
        );

        let written = written.lock().unwrap();
        assert_eq!(written.len(), 3);
        assert!(
            written
                .iter()
                .all(|(p, c)| p.starts_with("/work/src/components/my-button") && c == "MyButton")
        );

        assert_eq!(report.component_name, "MyButton");
        assert_eq!(report.file_name, "my-button");
        assert_eq!(report.component_path, PathBuf::from("/work/src/components/my-button"));
        assert_eq!(report.files.len(), 3);
    }

    #[test]
    fn existing_component_is_rejected_without_writes() {
        let mut fs = MockFilesystem::new();
        // src/ and src/components/ are still created.
        fs.expect_create_dir_all()
            .withf(|p| !p.ends_with("my-button"))
            .times(2)
            .returning(|_| Ok(()));
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();
        fs.expect_list_files().never();

        let mut source = MockTemplateSource::new();
        source.expect_load().never();

        let service = GenerateService::new(Box::new(source), Box::new(renderer()), Box::new(fs));
        let err = service.generate(&request(), Path::new("/work")).unwrap_err();

        match err {
            StencilError::Application(ApplicationError::ComponentExists { component, path }) => {
                assert_eq!(component, "MyButton");
                assert_eq!(path, "./src/components/my-button");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn template_load_failure_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file().never();

        let mut source = MockTemplateSource::new();
        source.expect_load().returning(|id| {
            Err(ApplicationError::TemplateLoad {
                path: PathBuf::from(id.file_name()),
                reason: "missing".into(),
            }
            .into())
        });

        let service = GenerateService::new(Box::new(source), Box::new(renderer()), Box::new(fs));
        let err = service.generate(&request(), Path::new("/work")).unwrap_err();
        assert!(matches!(
            err,
            StencilError::Application(ApplicationError::TemplateLoad { .. })
        ));
    }

    #[test]
    fn write_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_write_file().times(1).returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_list_files().never();

        let service =
            GenerateService::new(Box::new(templates()), Box::new(renderer()), Box::new(fs));
        assert!(service.generate(&request(), Path::new("/work")).is_err());
    }

    #[test]
    fn plan_never_mutates_the_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_exists().return_const(false);

        let request = GenerationRequest::builder("my button")
            .file_format("paramCase")
            .test(TestFramework::Jest)
            .build()
            .unwrap();

        let service =
            GenerateService::new(Box::new(templates()), Box::new(renderer()), Box::new(fs));
        let structure = service.plan(&request, Path::new("/work")).unwrap();

        assert_eq!(structure.root(), Path::new("/work/src/components/my-button"));
        let templates: Vec<_> = structure.files().map(|f| f.template).collect();
        assert_eq!(
            templates,
            vec![
                TemplateId::Index,
                TemplateId::Stateless,
                TemplateId::Test,
                TemplateId::Styles
            ]
        );
    }

    #[test]
    fn relative_display_prefixes_dot() {
        assert_eq!(
            relative_display(Path::new("/work"), Path::new("/work/src/ui/card")),
            "./src/ui/card"
        );
    }
}
