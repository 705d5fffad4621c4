//! INI document model: line classification, parsing, querying and
//! serialization.
//!
//! The supported format is a minimal subset: `[section]` headers, flat
//! `key = value` entries, full-line `#`/`;` comments and blank lines.
//!
//! ```
//! use inifile::ini::Document;
//!
//! let doc = Document::parse("[forge.example]\nUser = hg\n").unwrap();
//! assert_eq!(doc.section_names(), ["forge.example"]);
//! assert_eq!(doc.get("forge.example", "User").unwrap(), "hg");
//! ```

mod document;
mod io;
mod line;
mod parser;
mod section;

pub use document::Document;
pub use line::Line;
pub use parser::Parser;
pub use section::Section;
