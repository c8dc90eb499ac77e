//! Flags shared by every `stencil` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log the generation pipeline on stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log pipeline progress (-v, -vv, -vvv)",
        long_help = "Log pipeline progress on stderr:
    -v    - the resolved request and the directory being written
    -vv   - derived names, template source and every file
    -vvv  - per-template rendering detail"
    )]
    pub verbose: u8,

    /// Print nothing but errors. JSON output is still written.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Strip ANSI colour from the report and error messages.
    ///
    /// `NO_COLOR` counts when set to any value other than an empty or
    /// false-like one (`0`, `false`, `no`, `off`).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Config file layered above the global and `.stencil.toml` files.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Extra configuration file"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to print the generation report"
    )]
    pub output_format: OutputFormat,
}

/// Report style for `new` and `list`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored tree on a terminal, plain tree when piped.
    #[default]
    Auto,
    /// Colored tree.
    Human,
    /// Tree without ANSI codes.
    Plain,
    /// Machine-readable report.
    Json,
}

impl OutputFormat {
    /// Settle `Auto` against whether stdout is a terminal.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }

    pub fn is_colored(self) -> bool {
        self == Self::Human
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        global: GlobalArgs,
    }

    #[test]
    fn auto_follows_the_terminal() {
        assert_eq!(OutputFormat::Auto.resolve(true), OutputFormat::Human);
        assert_eq!(OutputFormat::Auto.resolve(false), OutputFormat::Plain);
        assert_eq!(OutputFormat::Json.resolve(true), OutputFormat::Json);
        assert_eq!(OutputFormat::Plain.resolve(true), OutputFormat::Plain);
    }

    #[test]
    fn only_human_is_colored() {
        assert!(OutputFormat::Human.is_colored());
        assert!(!OutputFormat::Plain.is_colored());
        assert!(!OutputFormat::Json.is_colored());
    }

    #[test]
    fn no_color_flag_sets_true() {
        let parsed = Harness::try_parse_from(["stencil", "--no-color"]).unwrap();
        assert!(parsed.global.no_color);
    }

    #[test]
    fn bare_invocation_keeps_defaults() {
        let parsed = Harness::try_parse_from(["stencil"]).unwrap();
        assert_eq!(parsed.global.verbose, 0);
        assert!(!parsed.global.quiet);
        assert_eq!(parsed.global.output_format, OutputFormat::Auto);
    }
}
