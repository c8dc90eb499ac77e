//! stderr diagnostics for the `stencil` binary.
//!
//! Core and adapters emit events under their own crate targets; this module
//! installs the one subscriber that prints them. The default level shows
//! warnings about config values that were ignored. A failed run is reported
//! by `main` itself, not through this log.
//!
//! `RUST_LOG` replaces the computed filter when set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the selected level.
const TARGETS: [&str; 3] = ["stencil", "stencil_core", "stencil_adapters"];

/// How much of the pipeline to narrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Quiet,
    Normal,
    Steps,
    Files,
    Everything,
}

impl Verbosity {
    fn from_args(args: &GlobalArgs) -> Self {
        if args.quiet {
            return Self::Quiet;
        }
        match args.verbose {
            0 => Self::Normal,
            1 => Self::Steps,
            2 => Self::Files,
            _ => Self::Everything,
        }
    }

    const fn level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Steps => "info",
            Self::Files => "debug",
            Self::Everything => "trace",
        }
    }

    fn directives(self) -> String {
        let level = self.level();
        TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the stderr subscriber. Call once, before anything logs.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Verbosity::from_args(args).directives()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}
