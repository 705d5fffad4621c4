//! Error types for INI parsing, lookups and file I/O.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Each operation returns the narrowest type that describes its failures;
//! the CLI converts them to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! Error
//! ├── Parse(ParseError)   : malformed lines, orphan entries, empty headers
//! └── Io { path, source } : file read/write failures
//!
//! LookupError             : missing section or key (returned by `Document::get`)
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for operations that touch the filesystem.
#[derive(Error, Debug)]
pub enum Error {
    /// The content could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An I/O error occurred while reading or writing an INI file.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path to the file that could not be read or written.
        path: PathBuf,
        /// Underlying I/O error, unmodified.
        source: std::io::Error,
    },
}

/// Errors raised while parsing INI text.
///
/// Parsing stops at the first error; `line` is 1-based.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line that is not blank, a comment, or a header has no `=`.
    #[error("invalid key-value pair at line {line}: {content}")]
    MalformedLine {
        /// Line number of the offending line.
        line: usize,
        /// Trimmed content of the offending line.
        content: String,
    },

    /// A key-value line appeared before any section header (strict mode).
    #[error("line does not belong to any section at line {line}: {content}")]
    OrphanKeyValue {
        /// Line number of the offending line.
        line: usize,
        /// Trimmed content of the offending line.
        content: String,
    },

    /// A `[]` header with nothing between the brackets.
    #[error("section name cannot be empty at line {line}")]
    EmptySectionName {
        /// Line number of the offending header.
        line: usize,
    },
}

/// Errors raised when querying a [`Document`](crate::ini::Document).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The requested section does not exist.
    #[error("section [{section}] does not exist")]
    SectionNotFound {
        /// Name of the missing section.
        section: String,
    },

    /// The section exists but does not contain the requested key.
    #[error("key '{key}' does not exist in section [{section}]")]
    KeyNotFound {
        /// Name of the section that was searched.
        section: String,
        /// Name of the missing key.
        key: String,
    },
}
