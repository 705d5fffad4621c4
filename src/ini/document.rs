//! In-memory INI document: query, mutation and serialization.
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use super::parser::Parser;
use super::section::Section;
use crate::error::{LookupError, ParseError};
use crate::options::ParseOptions;

/// An INI document: sections keyed by name, in order of first appearance.
///
/// Sections created with [`Document::set`] are appended at the end.
/// The document is plain owned data with no interior mutability; share it
/// across threads behind a lock if needed.
///
/// # Examples
///
/// ```
/// use inifile::ini::Document;
///
/// let mut doc = Document::parse("[DEFAULT]\nCompression = yes\n").unwrap();
/// doc.set("DEFAULT", "Compression", "no");
/// doc.set("forge.example", "User", "hg");
///
/// assert_eq!(doc.get("DEFAULT", "Compression").unwrap(), "no");
/// assert_eq!(
///     doc.to_string(),
///     "[DEFAULT]\nCompression = no\n\n[forge.example]\nUser = hg\n\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) const fn from_sections(sections: IndexMap<String, Section>) -> Self {
        Self { sections }
    }

    /// Parse INI text with the default (strict) options.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parse INI text with explicit options.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        Parser::new(options).parse(text)
    }

    /// Names of all sections, in document order.
    #[must_use]
    pub fn section_names(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    /// Owned export of every section as `name -> (key -> value)`.
    ///
    /// The result shares nothing with the document; changing it never
    /// changes the document.
    #[must_use]
    pub fn sections(&self) -> IndexMap<String, IndexMap<String, String>> {
        self.sections
            .iter()
            .map(|(name, section)| (name.clone(), section.to_map()))
            .collect()
    }

    /// Look up a single value.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::SectionNotFound`] if the section is absent, or
    /// [`LookupError::KeyNotFound`] if the section has no such key.
    pub fn get(&self, section: &str, key: &str) -> Result<&str, LookupError> {
        let found = self
            .sections
            .get(section)
            .ok_or_else(|| LookupError::SectionNotFound {
                section: section.to_string(),
            })?;
        found.get(key).ok_or_else(|| LookupError::KeyNotFound {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    /// Insert or overwrite `key` in `section`, creating the section if needed.
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        let name = section.into();
        self.sections
            .entry(name)
            .or_insert_with_key(|name| Section::new(name.clone()))
            .insert(key, value);
    }

    /// Borrow a section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Whether a section named `name` exists.
    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Sections in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the document has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Canonical form: `[name]`, one `key = value` line per entry, then a blank
/// line after every section. Nothing is escaped.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.iter() {
            writeln!(f, "[{}]", section.name())?;
            for (key, value) in section.iter() {
                writeln!(f, "{key} = {value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = indexmap::map::Values<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.values()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const SAMPLE: &str = "[DEFAULT]\nServerAliveInterval = 45\nCompression = yes\n\n[forge.example]\nUser = hg\n\n";

    fn sample() -> Document {
        Document::parse(SAMPLE).expect("sample should parse")
    }

    #[test]
    fn section_names_in_order() {
        assert_eq!(sample().section_names(), ["DEFAULT", "forge.example"]);
    }

    #[test]
    fn section_names_of_empty_document() {
        assert!(Document::new().section_names().is_empty());
    }

    #[test]
    fn get_existing_value() {
        assert_eq!(sample().get("DEFAULT", "ServerAliveInterval"), Ok("45"));
    }

    #[test]
    fn get_missing_section() {
        assert_eq!(
            sample().get("nope", "User"),
            Err(LookupError::SectionNotFound {
                section: "nope".to_string()
            })
        );
    }

    #[test]
    fn get_missing_key() {
        assert_eq!(
            sample().get("forge.example", "Port"),
            Err(LookupError::KeyNotFound {
                section: "forge.example".to_string(),
                key: "Port".to_string()
            })
        );
    }

    #[test]
    fn set_overwrites_existing_key() {
        let mut doc = sample();
        doc.set("DEFAULT", "Compression", "no");
        assert_eq!(doc.get("DEFAULT", "Compression"), Ok("no"));
    }

    #[test]
    fn set_creates_section_at_end() {
        let mut doc = sample();
        assert!(!doc.contains_section("NewSection"));
        doc.set("NewSection", "key2", "value2");
        assert_eq!(doc.get("NewSection", "key2"), Ok("value2"));
        assert_eq!(
            doc.section_names(),
            ["DEFAULT", "forge.example", "NewSection"]
        );
    }

    #[test]
    fn set_is_idempotent() {
        let mut once = sample();
        once.set("s", "k", "v");
        let mut twice = once.clone();
        twice.set("s", "k", "v");
        assert_eq!(once, twice);
    }

    #[test]
    fn sections_export_is_detached() {
        let doc = sample();
        let mut export = doc.sections();
        export
            .get_mut("DEFAULT")
            .unwrap()
            .insert("Compression".to_string(), "changed".to_string());
        export.insert("extra".to_string(), IndexMap::new());
        assert_eq!(doc.get("DEFAULT", "Compression"), Ok("yes"));
        assert!(!doc.contains_section("extra"));
    }

    #[test]
    fn sections_export_contents() {
        let export = sample().sections();
        assert_eq!(export.len(), 2);
        assert_eq!(export["DEFAULT"]["ServerAliveInterval"], "45");
        assert_eq!(export["DEFAULT"]["Compression"], "yes");
        assert_eq!(export["forge.example"]["User"], "hg");
    }

    #[test]
    fn display_round_trips_canonical_text() {
        assert_eq!(sample().to_string(), SAMPLE);
    }

    #[test]
    fn display_of_empty_document_is_empty() {
        assert_eq!(Document::new().to_string(), "");
    }

    #[test]
    fn display_of_header_only_section() {
        let doc = Document::parse("[empty]\n").unwrap();
        assert_eq!(doc.to_string(), "[empty]\n\n");
    }

    #[test]
    fn display_normalizes_spacing() {
        let doc = Document::parse("[s]\n  a=1\nb   =   2  \n").unwrap();
        insta::assert_snapshot!(doc.to_string(), @r"
        [s]
        a = 1
        b = 2
        ");
    }

    #[test]
    fn from_str_matches_parse() {
        let doc: Document = SAMPLE.parse().unwrap();
        assert_eq!(doc, sample());
    }

    #[test]
    fn iterates_sections_in_order() {
        let doc = sample();
        let names: Vec<&str> = (&doc).into_iter().map(Section::name).collect();
        assert_eq!(names, ["DEFAULT", "forge.example"]);
        assert_eq!(doc.len(), 2);
    }
}
