#![deny(missing_docs)]

//! # Prebuild Tool
//!
//! Command line entry point run ahead of the engine build. Scans a project's
//! headers for `[[Serialize]]` fields and writes the generated metadata file.
//!
//! `prebuild-tool <project-directory> <target-path>`
//!
//! Invoked with fewer than two paths it prints its usage and exits cleanly.

use clap::{CommandFactory, Parser};
use prebuild_core::DEFAULT_EXTENSION;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;
use crate::run::{OutputFormat, RunArgs};

mod error;
mod run;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates reflection metadata for [[Serialize]] struct fields")]
struct Cli {
    /// Project directory scanned recursively for header sources.
    root: Option<PathBuf>,

    /// Path of the generated file.
    output: Option<PathBuf>,

    /// Format of the generated file.
    #[clap(long, value_enum, env = "PREBUILD_FORMAT", default_value_t = OutputFormat::Entt)]
    format: OutputFormat,

    /// Extension of scanned files, without the dot.
    #[clap(long, env = "PREBUILD_EXTENSION", default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// C++ namespace wrapping `RegisterMeta()` (entt format only).
    #[clap(long, env = "PREBUILD_NAMESPACE")]
    namespace: Option<String>,
}

impl Cli {
    /// Both paths, or `None` when the invocation is incomplete.
    fn run_args(&self) -> Option<RunArgs> {
        Some(RunArgs {
            root: self.root.clone()?,
            output: self.output.clone()?,
            extension: self.extension.clone(),
        })
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse();

    let Some(args) = cli.run_args() else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    let backend = cli.format.backend(cli.namespace.clone());
    tracing::debug!(?args, backend = backend.name(), "starting run");
    run::execute(&args, &*backend)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_incomplete_invocation_has_no_run_args() {
        let cli = Cli::try_parse_from(["prebuild-tool"]).unwrap();
        assert!(cli.run_args().is_none());

        let cli = Cli::try_parse_from(["prebuild-tool", "Engine"]).unwrap();
        assert!(cli.run_args().is_none());
    }

    #[test]
    fn test_full_invocation() {
        let cli = Cli::try_parse_from([
            "prebuild-tool",
            "--format",
            "json",
            "--extension",
            "h",
            "Engine",
            "Generated/meta.json",
        ])
        .unwrap();

        let args = cli.run_args().unwrap();
        assert_eq!(args.root, PathBuf::from("Engine"));
        assert_eq!(args.output, PathBuf::from("Generated/meta.json"));
        assert_eq!(args.extension, "h");
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.format.backend(None).name(), "json");
    }

    #[test]
    fn test_usage_mentions_positionals() {
        let usage = Cli::command().render_usage().to_string();
        assert!(usage.contains("[ROOT]"));
        assert!(usage.contains("[OUTPUT]"));
    }
}
