//! Command: list sections or export them as JSON.
use std::io::Write;

use anyhow::Result;

use crate::cli::{GlobalOpts, SectionsOpts};
use crate::logging::Logger;

/// Print one section name per line, or every section as a JSON object
/// (`{"name": {"key": "value"}}`) when `opts.json` is set.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or output cannot be written.
pub fn run(
    global: &GlobalOpts,
    opts: &SectionsOpts,
    out: &mut impl Write,
    log: &Logger,
) -> Result<()> {
    let doc = super::load_document(global, &opts.file, log)?;

    if opts.json {
        serde_json::to_writer_pretty(&mut *out, &doc.sections())?;
        writeln!(out)?;
    } else {
        for name in doc.section_names() {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}
