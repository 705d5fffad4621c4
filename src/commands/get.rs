//! Command: print a single value.
use std::io::Write;

use anyhow::Result;

use crate::cli::{GetOpts, GlobalOpts};
use crate::logging::Logger;

/// Print the value of `opts.key` in `opts.section`.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the section or key
/// does not exist.
pub fn run(global: &GlobalOpts, opts: &GetOpts, out: &mut impl Write, log: &Logger) -> Result<()> {
    let doc = super::load_document(global, &opts.file, log)?;
    let value = doc.get(&opts.section, &opts.key)?;
    writeln!(out, "{value}")?;
    Ok(())
}
