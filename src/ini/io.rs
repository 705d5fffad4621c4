//! Reading documents from and writing them to disk.
use std::path::Path;

use super::document::Document;
use crate::error::Error;
use crate::options::ParseOptions;

impl Document {
    /// Read and parse an INI file with the default (strict) options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Parse`]
    /// if its content is invalid.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::load_from_file_with(path, &ParseOptions::default())
    }

    /// Read and parse an INI file with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or [`Error::Parse`]
    /// if its content is invalid.
    pub fn load_from_file_with(
        path: impl AsRef<Path>,
        options: &ParseOptions,
    ) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("read {} bytes from {}", content.len(), path.display());
        Ok(Self::parse_with(&content, options)?)
    }

    /// Write the canonical form of the document to `path`, replacing any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let content = self.to_string();
        std::fs::write(path, &content).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}
