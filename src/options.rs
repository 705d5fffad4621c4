//! Parser configuration and its TOML loader.
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Options controlling how INI text is parsed.
///
/// Deserializes from TOML with every field optional:
///
/// ```toml
/// strict = false
/// ```
///
/// # Examples
///
/// ```
/// use inifile::options::ParseOptions;
///
/// assert!(ParseOptions::default().strict);
/// let options: ParseOptions = toml::from_str("strict = false").unwrap();
/// assert!(!options.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Reject key-value lines that appear before any section header.
    /// When `false` such lines are silently dropped.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl ParseOptions {
    /// Load options from a TOML file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML options: {}", path.display()))
    }
}
