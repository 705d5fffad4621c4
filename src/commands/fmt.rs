//! Command: rewrite a file in canonical form.
use anyhow::{Context as _, Result, bail};

use crate::cli::{FmtOpts, GlobalOpts};
use crate::logging::Logger;

/// Rewrite `opts.file` in canonical form, or only check it with `--check`.
///
/// Comments and extra blank lines are not preserved.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or written, or if
/// `--check` finds the file is not canonical.
pub fn run(global: &GlobalOpts, opts: &FmtOpts, log: &Logger) -> Result<()> {
    let doc = super::load_document(global, &opts.file, log)?;
    let canonical = doc.to_string();

    if opts.check {
        let current = std::fs::read_to_string(&opts.file)
            .with_context(|| format!("reading {}", opts.file.display()))?;
        if current != canonical {
            bail!("{} is not in canonical form", opts.file.display());
        }
        log.info(&format!("{} is canonical", opts.file.display()));
        return Ok(());
    }

    let dest = opts.output.as_deref().unwrap_or(opts.file.as_path());
    log.stage(&format!("Writing {}", dest.display()));
    doc.save_to_file(dest)
        .with_context(|| format!("writing {}", dest.display()))?;
    Ok(())
}
