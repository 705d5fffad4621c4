//! Command: upsert a value and write the file back.
use anyhow::{Context as _, Result};

use crate::cli::{GlobalOpts, SetOpts};
use crate::logging::Logger;

/// Set `opts.key` in `opts.section` to `opts.value`.
///
/// The result is written to `opts.output` if given, otherwise back to the
/// input file.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the result cannot be
/// written.
pub fn run(global: &GlobalOpts, opts: &SetOpts, log: &Logger) -> Result<()> {
    let mut doc = super::load_document(global, &opts.file, log)?;

    if !doc.contains_section(&opts.section) {
        log.info(&format!("creating section [{}]", opts.section));
    }
    match doc.get(&opts.section, &opts.key) {
        Ok(old) if old == opts.value => log.debug(&format!("{} unchanged", opts.key)),
        Ok(old) => log.info(&format!("{}: {old} -> {}", opts.key, opts.value)),
        Err(_) => log.info(&format!("{} = {}", opts.key, opts.value)),
    }
    doc.set(&opts.section, &opts.key, &opts.value);

    let dest = opts.output.as_deref().unwrap_or(opts.file.as_path());
    log.stage(&format!("Writing {}", dest.display()));
    doc.save_to_file(dest)
        .with_context(|| format!("writing {}", dest.display()))?;
    Ok(())
}
