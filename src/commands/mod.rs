//! Top-level subcommand implementations.
//!
//! Each command writes its result to the supplied writer (stdout in the
//! binary) and its progress through the [`Logger`].

pub mod fmt;
pub mod get;
pub mod sections;
pub mod set;
pub mod version;

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::ini::Document;
use crate::logging::Logger;
use crate::options::ParseOptions;

/// Resolve the effective parser options from the global flags.
///
/// Options are read from `--options` when given (a missing file yields the
/// defaults); `--lenient` then forces non-strict parsing.
///
/// # Errors
///
/// Returns an error if the options file exists but cannot be parsed.
pub fn resolve_options(global: &GlobalOpts, log: &Logger) -> Result<ParseOptions> {
    let mut options = match &global.options {
        Some(path) => {
            log.debug(&format!("options file: {}", path.display()));
            ParseOptions::load(path)?
        }
        None => ParseOptions::default(),
    };
    if global.lenient {
        options.strict = false;
    }
    log.debug(&format!("strict: {}", options.strict));
    Ok(options)
}

/// Load `path` with the options resolved from the global flags.
///
/// # Errors
///
/// Returns an error if the options cannot be resolved, the file cannot be
/// read, or its content is not valid INI.
pub fn load_document(global: &GlobalOpts, path: &Path, log: &Logger) -> Result<Document> {
    let options = resolve_options(global, log)?;

    log.stage(&format!("Loading {}", path.display()));
    let doc = Document::load_from_file_with(path, &options)
        .with_context(|| format!("loading {}", path.display()))?;
    log.debug(&format!("{} sections", doc.len()));
    Ok(doc)
}
