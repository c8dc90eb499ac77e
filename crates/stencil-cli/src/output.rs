//! Output management and formatting.

use std::{
    collections::{BTreeMap, BTreeSet},
    io::{self, IsTerminal},
    path::{Component, Path, PathBuf},
};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = args.output_format.resolve(io::stdout().is_terminal());

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !resolved_format.is_colored(),
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `Generated <Name>:`, a blank line, then the file tree.
    pub fn generated(&self, component: &str, root: &Path, files: &[PathBuf]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let heading = if self.no_color {
            format!("Generated {component}:")
        } else {
            format!(
                "{} {}{}",
                "Generated".green(),
                component.cyan().bold(),
                ":".green()
            )
        };
        self.term.write_line(&heading)?;
        self.term.write_line("")?;
        self.tree(root, files)
    }

    /// Directory tree of `files` (relative to `root`).
    pub fn tree(&self, root: &Path, files: &[PathBuf]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let label = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        for line in render_tree(&label, files) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    /// Pretty JSON on stdout. Not suppressed by `--quiet`: asking for JSON is
    /// asking for output.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── Tree rendering ────────────────────────────────────────────────────────────

#[derive(Default)]
struct TreeNode {
    dirs: BTreeMap<String, TreeNode>,
    files: BTreeSet<String>,
}

impl TreeNode {
    fn insert(&mut self, path: &Path) {
        let parts: Vec<String> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();

        let Some((file, dirs)) = parts.split_last() else {
            return;
        };

        let mut node = self;
        for dir in dirs {
            node = node.dirs.entry(dir.clone()).or_default();
        }
        node.files.insert(file.clone());
    }

    fn render(&self, prefix: &str, lines: &mut Vec<String>) {
        let entries: Vec<(&String, Option<&TreeNode>)> = self
            .dirs
            .iter()
            .map(|(name, node)| (name, Some(node)))
            .chain(self.files.iter().map(|name| (name, None)))
            .collect();

        let last = entries.len().saturating_sub(1);
        for (i, (name, child)) in entries.into_iter().enumerate() {
            let (connector, indent) = if i == last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            lines.push(format!("{prefix}{connector}{name}"));
            if let Some(child) = child {
                child.render(&format!("{prefix}{indent}"), lines);
            }
        }
    }
}

/// Render relative file paths as a tree under `root_label`.
///
/// Directories come before files, both alphabetical. Only directories that
/// contain files appear.
pub fn render_tree(root_label: &str, files: &[PathBuf]) -> Vec<String> {
    let mut root = TreeNode::default();
    for file in files {
        root.insert(file);
    }

    let mut lines = vec![root_label.to_string()];
    root.render("", &mut lines);
    lines
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Human,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn flat_tree() {
        let files = vec![
            PathBuf::from("index.js"),
            PathBuf::from("my-button.css"),
            PathBuf::from("my-button.js"),
        ];
        assert_eq!(
            render_tree("my-button", &files),
            vec![
                "my-button",
                "├── index.js",
                "├── my-button.css",
                "└── my-button.js",
            ]
        );
    }

    #[test]
    fn nested_dirs_come_first() {
        let files = vec![
            PathBuf::from("z.js"),
            PathBuf::from("assets/logo.svg"),
            PathBuf::from("assets/icons/a.svg"),
        ];
        assert_eq!(
            render_tree("card", &files),
            vec![
                "card",
                "├── assets",
                "│   ├── icons",
                "│   │   └── a.svg",
                "│   └── logo.svg",
                "└── z.js",
            ]
        );
    }

    #[test]
    fn empty_tree_is_just_the_root() {
        assert_eq!(render_tree("card", &[]), vec!["card"]);
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.quiet);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_strips_color() {
        assert!(!make_manager(false, false).no_color);
        assert!(make_manager(false, true).no_color);
    }

    #[test]
    fn config_can_strip_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(OutputManager::new(&args, &config).no_color);
    }

    #[test]
    fn format_accessor_returns_resolved() {
        assert_eq!(make_manager(false, false).format(), OutputFormat::Human);
    }
}
