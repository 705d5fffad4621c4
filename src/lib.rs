//! INI configuration file parser and serializer.
//!
//! Loads INI text from a string or file into an ordered in-memory
//! [`Document`](ini::Document), supports querying and editing it, and
//! writes it back in a canonical form.
//!
//! The public API is organised into these layers:
//!
//! - **[`ini`]**: line classification, parsing, the document model and serialization
//! - **[`options`]**: parser configuration (strict vs. lenient)
//! - **[`error`]**: typed errors for parsing, lookups and file I/O
//! - **[`commands`]** / **[`cli`]**: the `inifile` command-line front end
//!
//! ```
//! use inifile::ini::Document;
//!
//! let text = "[DEFAULT]\nServerAliveInterval = 45\nCompression = yes\n\n[forge.example]\nUser = hg\n\n";
//! let mut doc = Document::parse(text).unwrap();
//!
//! assert_eq!(doc.section_names(), ["DEFAULT", "forge.example"]);
//! assert_eq!(doc.get("DEFAULT", "ServerAliveInterval").unwrap(), "45");
//!
//! doc.set("DEFAULT", "Compression", "no");
//! assert_eq!(doc.get("DEFAULT", "Compression").unwrap(), "no");
//! ```
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod ini;
pub mod logging;
pub mod options;

pub use error::{Error, LookupError, ParseError};
pub use ini::{Document, Section};
pub use options::ParseOptions;
