//! Implementation of the `stencil list` command.

use serde::Serialize;
use stencil_core::{
    application::{TemplateInfo, TemplateService},
    domain::CaseKind,
};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Name used to show what each case kind produces.
const SAMPLE_NAME: &str = "my button";

#[derive(Debug, Serialize)]
struct CaseKindInfo {
    name: &'static str,
    example: String,
}

#[derive(Debug, Serialize)]
struct Listing {
    source: String,
    templates: Vec<TemplateInfo>,
    case_kinds: Vec<CaseKindInfo>,
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = TemplateService::new(super::template_source(None, &config)?);
    let listing = Listing {
        source: service.origin(),
        templates: service.list()?,
        case_kinds: case_kinds(),
    };

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Templates ({}):", listing.source))?;
            for t in &listing.templates {
                output.print(&format!(
                    "  {:<10} {:<13} {}",
                    t.id, t.file, t.description
                ))?;
            }
            output.print("")?;
            output.header("Case kinds:")?;
            for kind in &listing.case_kinds {
                output.print(&format!("  {:<14} {}", kind.name, kind.example))?;
            }
        }

        // JSON/list/CSV bypass quiet mode: they exist to be piped.
        ListFormat::Json => output.json(&listing)?,

        ListFormat::List => {
            for t in &listing.templates {
                println!("{}", t.file);
            }
        }

        ListFormat::Csv => {
            println!("id,file,description,source,lines");
            for t in &listing.templates {
                println!(
                    "{},{},{},{},{}",
                    t.id, t.file, t.description, t.source, t.lines
                );
            }
        }
    }

    Ok(())
}

fn case_kinds() -> Vec<CaseKindInfo> {
    CaseKind::ALL
        .into_iter()
        .map(|kind| CaseKindInfo {
            name: kind.as_str(),
            example: kind.apply(SAMPLE_NAME),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_kind_examples() {
        let examples: Vec<_> = case_kinds().into_iter().map(|k| k.example).collect();
        assert_eq!(
            examples,
            vec!["myButton", "MY_BUTTON", "My-Button", "my-button", "MyButton", "my_button"]
        );
    }
}
