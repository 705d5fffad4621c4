//! Command: print version information.
use std::io::Write;

use anyhow::Result;

/// Version string baked in by `build.rs`, falling back to the package version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("INIFILE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the inifile version.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(out: &mut impl Write) -> Result<()> {
    writeln!(out, "inifile {}", version())?;
    Ok(())
}
