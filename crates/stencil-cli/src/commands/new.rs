//! Implementation of the `stencil new` command.
//!
//! Responsibility: merge CLI flags over the loaded configuration into a
//! `GenerationRequest`, call the core generate service, and display results.
//! No business logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use stencil_adapters::{LocalFilesystem, SimpleRenderer};
use stencil_core::{
    application::{GenerateService, services::generate_service::relative_display},
    domain::{GenerationRequest, TestFramework, TypeCheck},
    error::StencilError,
};

use crate::{
    cli::{NewArgs, OutputFormat},
    config::{AppConfig, ComponentDefaults},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `stencil new` command.
///
/// Dispatch sequence:
/// 1. Build and validate the request (invalid case kinds stop here)
/// 2. Select the template source
/// 3. Early-exit with a preview if `--dry-run`
/// 4. Generate via `GenerateService`
/// 5. Print the report
#[instrument(skip_all, fields(component = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read the current directory")?;

    // 1. Request
    let request = build_request(&args, &config.component)?;

    // 2. Adapters
    let templates = super::template_source(args.templates.as_deref(), &config)?;
    let service = GenerateService::new(
        templates,
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let structure = service.plan(&request, &cwd)?;
        let mut files: Vec<PathBuf> = structure.files().map(|f| f.path.clone()).collect();
        files.sort();

        if output.format() == OutputFormat::Json {
            output.json(&serde_json::json!({
                "dry_run": true,
                "component_path": structure.root(),
                "files": files,
            }))?;
        } else {
            output.info(&format!(
                "Dry run: would create {}",
                relative_display(&cwd, structure.root())
            ))?;
            output.tree(structure.root(), &files)?;
        }
        return Ok(());
    }

    // 4. Generate
    info!(request = %request, "Generation started");
    let report = service.generate(&request, &cwd)?;
    info!(files = report.files.len(), "Generation completed");

    // 5. Report
    if output.format() == OutputFormat::Json {
        output.json(&report)?;
    } else {
        output.generated(&report.component_name, &report.component_path, &report.files)?;
    }

    Ok(())
}

/// Merge CLI flags over configured defaults and validate.
pub fn build_request(args: &NewArgs, defaults: &ComponentDefaults) -> CliResult<GenerationRequest> {
    let directory = args
        .directory
        .clone()
        .unwrap_or_else(|| PathBuf::from(&defaults.directory));

    let type_check = args
        .type_check
        .map(TypeCheck::from)
        .unwrap_or_else(|| configured_type_check(&defaults.type_check));

    let test = args
        .test
        .map(TestFramework::from)
        .unwrap_or_else(|| configured_test(&defaults.test));

    GenerationRequest::builder(&args.name)
        .directory(directory)
        .file_format(args.file_format.as_deref().unwrap_or(&defaults.file_format))
        .component_format(
            args.component_format
                .as_deref()
                .unwrap_or(&defaults.component_format),
        )
        .functional(args.functional_flag().unwrap_or(defaults.functional))
        .type_check(type_check)
        .test(test)
        .css_extension(args.css_ext.as_deref().unwrap_or(&defaults.css_extension))
        .semi(args.semi_flag().unwrap_or(defaults.semi))
        .build()
        .map_err(|e| StencilError::from(e).into())
}

fn configured_type_check(value: &str) -> TypeCheck {
    TypeCheck::parse_setting(value).unwrap_or_else(|| {
        warn!(value, "Unrecognised type_check setting, using none");
        TypeCheck::None
    })
}

fn configured_test(value: &str) -> TestFramework {
    TestFramework::parse_setting(value).unwrap_or_else(|| {
        warn!(value, "Unrecognised test setting, using none");
        TestFramework::None
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::*;
    use crate::{
        cli::{Cli, Commands},
        error::CliError,
    };

    fn args(argv: &[&str]) -> NewArgs {
        let mut full = vec!["stencil", "new"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::New(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn flags_override_config() {
        let defaults = ComponentDefaults {
            directory: "ui".into(),
            semi: false,
            ..ComponentDefaults::default()
        };
        let request = build_request(
            &args(&["my button", "-d", "widgets", "--semi", "--file-format", "snakeCase"]),
            &defaults,
        )
        .unwrap();

        assert_eq!(request.directory(), Path::new("widgets"));
        assert!(request.semi());
        assert_eq!(request.names().unwrap().file_name, "my_button");
    }

    #[test]
    fn config_fills_unset_flags() {
        let defaults = ComponentDefaults {
            functional: false,
            type_check: "flow".into(),
            test: "jest".into(),
            css_extension: ".scss".into(),
            ..ComponentDefaults::default()
        };
        let request = build_request(&args(&["card"]), &defaults).unwrap();

        assert!(!request.is_functional());
        assert_eq!(request.type_check(), TypeCheck::Flow);
        assert_eq!(request.test(), TestFramework::Jest);
        assert_eq!(request.css_extension().as_str(), "scss");
    }

    #[test]
    fn unknown_configured_settings_degrade_to_none() {
        let defaults = ComponentDefaults {
            type_check: "typescript".into(),
            test: "mocha".into(),
            ..ComponentDefaults::default()
        };
        let request = build_request(&args(&["card"]), &defaults).unwrap();
        assert_eq!(request.type_check(), TypeCheck::None);
        assert_eq!(request.test(), TestFramework::None);
    }

    #[test]
    fn invalid_case_kind_is_a_core_error() {
        let err = build_request(
            &args(&["card", "--component-format", "upperCase"]),
            &ComponentDefaults::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert!(err.to_string().contains("upperCase"));
    }
}
