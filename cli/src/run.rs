#![deny(missing_docs)]

//! # Run Pipeline
//!
//! Implements the single pass: Discover -> Extract -> Render -> Write.
//!
//! 1. **Discover**: load every header under the root, in file-name order.
//! 2. **Extract**: scan each file and append its structs to one ordered set.
//! 3. **Render**: hand the whole set to the selected backend.
//! 4. **Write**: store the result at the destination path.

use crate::error::CliResult;
use prebuild_core::{
    discover_sources, EnttMetaBackend, JsonBackend, MetadataBackend, MetadataSet,
};
use std::fs;
use std::path::PathBuf;

/// Output format of the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// C++ header registering entt meta data.
    Entt,
    /// JSON manifest.
    Json,
}

impl OutputFormat {
    /// Instantiates the backend for this format.
    pub fn backend(self, namespace: Option<String>) -> Box<dyn MetadataBackend> {
        match self {
            OutputFormat::Entt => Box::new(EnttMetaBackend::new(namespace)),
            OutputFormat::Json => Box::new(JsonBackend),
        }
    }
}

/// Resolved inputs of one run.
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Directory scanned recursively.
    pub root: PathBuf,
    /// Destination of the generated file.
    pub output: PathBuf,
    /// Extension of scanned files, without the dot.
    pub extension: String,
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of source files scanned.
    pub files: usize,
    /// Number of struct descriptions emitted.
    pub structs: usize,
    /// Number of serialized field entries emitted.
    pub fields: usize,
}

/// Executes the pipeline.
///
/// # Arguments
///
/// * `args` - Resolved paths and filters.
/// * `backend` - The renderer used for the generated file.
pub fn execute(args: &RunArgs, backend: &dyn MetadataBackend) -> CliResult<RunSummary> {
    println!(
        "Scanning {:?} for *.{} sources...",
        args.root, args.extension
    );

    let units = discover_sources(&args.root, &args.extension)?;

    let set = MetadataSet::from_sources(&units);

    let code = backend.render(&set)?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&args.output, code)?;

    let summary = RunSummary {
        files: units.len(),
        structs: set.len(),
        fields: set.serialized_field_count(),
    };

    println!(
        "Wrote {} metadata for {} structs ({} fields, {} files) to {:?}.",
        backend.name(),
        summary.structs,
        summary.fields,
        summary.files,
        args.output
    );

    Ok(summary)
}
