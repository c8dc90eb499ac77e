//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stencil_core::domain::{TestFramework, TypeCheck};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "stencil",
    bin_name = "stencil",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Component boilerplate generator",
    long_about = "Stencil generates a component directory (entry script, implementation, \
                  optional test and stylesheet) from a name and a set of naming conventions.",
    after_help = "EXAMPLES:\n\
        \x20 stencil new \"my button\" --file-format paramCase\n\
        \x20 stencil new card -d widgets --stateful --test jest --css-ext scss\n\
        \x20 stencil list\n\
        \x20 stencil completions bash > /usr/share/bash-completion/completions/stencil",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new component.
    #[command(
        visible_aliases = ["n", "component"],
        about = "Generate a new component",
        after_help = "EXAMPLES:\n\
            \x20 stencil new card\n\
            \x20 stencil new \"my button\" --file-format paramCase --component-format pascalCase\n\
            \x20 stencil new card --type-check flow --no-semi --dry-run"
    )]
    New(NewArgs),

    /// List templates and naming conventions.
    #[command(
        visible_alias = "ls",
        about = "List templates and case kinds",
        after_help = "EXAMPLES:\n\
            \x20 stencil list\n\
            \x20 stencil list --format json"
    )]
    List(ListArgs),

    /// Initialise a Stencil configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stencil init           # global config\n\
            \x20 stencil init --local   # .stencil.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stencil completions bash > ~/.local/share/bash-completion/completions/stencil\n\
            \x20 stencil completions zsh  > ~/.zfunc/_stencil\n\
            \x20 stencil completions fish > ~/.config/fish/completions/stencil.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stencil configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stencil config get component.file_format\n\
            \x20 stencil config list\n\
            \x20 stencil config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stencil new`.
///
/// Every option is optional; unset options fall back to the loaded
/// configuration and then to the built-in defaults.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Component name. Free text; quote names with spaces.
    #[arg(value_name = "NAME", help = "Component name")]
    pub name: String,

    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "Directory under src/ to place the component in"
    )]
    pub directory: Option<PathBuf>,

    /// Case kind for file names. Kept as a string so the core reports
    /// unknown values together with the allowed set.
    #[arg(
        long = "file-format",
        value_name = "CASE",
        help = "Case kind for file names (e.g. paramCase)"
    )]
    pub file_format: Option<String>,

    #[arg(
        long = "component-format",
        value_name = "CASE",
        help = "Case kind for the component symbol (e.g. pascalCase)"
    )]
    pub component_format: Option<String>,

    #[arg(
        long = "functional",
        conflicts_with = "stateful",
        help = "Generate a functional component"
    )]
    pub functional: bool,

    #[arg(long = "stateful", help = "Generate a stateful (class) component")]
    pub stateful: bool,

    #[arg(
        long = "type-check",
        value_name = "CHECKER",
        value_enum,
        help = "Type checker pragma to add to scripts"
    )]
    pub type_check: Option<TypeCheckArg>,

    #[arg(
        long = "test",
        value_name = "FRAMEWORK",
        value_enum,
        help = "Test framework to generate a test file for"
    )]
    pub test: Option<TestArg>,

    #[arg(
        long = "css-ext",
        value_name = "EXT",
        help = "Stylesheet extension (leading dot optional)"
    )]
    pub css_ext: Option<String>,

    #[arg(
        long = "semi",
        conflicts_with = "no_semi",
        help = "End statements with semicolons"
    )]
    pub semi: bool,

    #[arg(long = "no-semi", help = "Omit statement semicolons")]
    pub no_semi: bool,

    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Read templates from DIR instead of the built-in set"
    )]
    pub templates: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

impl NewArgs {
    /// `Some` when one of `--functional` / `--stateful` was given.
    pub fn functional_flag(&self) -> Option<bool> {
        flag_pair(self.functional, self.stateful)
    }

    /// `Some` when one of `--semi` / `--no-semi` was given.
    pub fn semi_flag(&self) -> Option<bool> {
        flag_pair(self.semi, self.no_semi)
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// `--type-check` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeCheckArg {
    None,
    Flow,
}

impl From<TypeCheckArg> for TypeCheck {
    fn from(arg: TypeCheckArg) -> Self {
        match arg {
            TypeCheckArg::None => Self::None,
            TypeCheckArg::Flow => Self::Flow,
        }
    }
}

/// `--test` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestArg {
    None,
    Jest,
}

impl From<TestArg> for TestFramework {
    fn from(arg: TestArg) -> Self {
        match arg {
            TestArg::None => Self::None,
            TestArg::Jest => Self::Jest,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One template file per line.
    List,
    /// JSON object.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stencil init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location (default).
    #[arg(long = "global", conflicts_with = "local", help = "Create global configuration")]
    pub global: bool,

    /// Write to `.stencil.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stencil completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stencil config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `component.directory`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the paths of the configuration files.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
