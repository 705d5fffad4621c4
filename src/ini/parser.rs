//! Line-by-line parser that builds a [`Document`].
use indexmap::IndexMap;

use super::document::Document;
use super::line::Line;
use super::section::Section;
use crate::error::ParseError;
use crate::options::ParseOptions;

/// Drives [`Line::classify`] over every line of the input.
///
/// Parsing is all-or-nothing: the first error aborts the load and no
/// partial document is returned.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'o> {
    options: &'o ParseOptions,
}

impl<'o> Parser<'o> {
    /// Create a parser with the given options.
    #[must_use]
    pub const fn new(options: &'o ParseOptions) -> Self {
        Self { options }
    }

    /// Parse `text` into a document.
    ///
    /// A repeated `[name]` header resets that section to empty; the section
    /// keeps the position of its first appearance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A line has no `=` and is not blank, a comment, or a header
    /// - An entry appears before any header while in strict mode
    /// - A header is `[]`
    pub fn parse(&self, text: &str) -> Result<Document, ParseError> {
        let mut sections: IndexMap<String, Section> = IndexMap::new();
        let mut current: Option<usize> = None;

        for (line_num, raw) in text.lines().enumerate() {
            let line = line_num + 1;

            match Line::classify(raw) {
                Line::Blank | Line::Comment => {}
                Line::SectionHeader("") => return Err(ParseError::EmptySectionName { line }),
                Line::SectionHeader(name) => {
                    let entry = sections.entry(name.to_string());
                    let index = entry.index();
                    entry
                        .and_modify(Section::clear)
                        .or_insert_with(|| Section::new(name));
                    current = Some(index);
                }
                kind @ (Line::KeyValue { .. } | Line::Malformed(_)) => {
                    let Some(index) = current else {
                        if self.options.strict {
                            return Err(ParseError::OrphanKeyValue {
                                line,
                                content: raw.trim().to_string(),
                            });
                        }
                        continue;
                    };
                    let Line::KeyValue { key, value } = kind else {
                        return Err(ParseError::MalformedLine {
                            line,
                            content: raw.trim().to_string(),
                        });
                    };
                    if let Some((_, section)) = sections.get_index_mut(index) {
                        section.insert(key, value);
                    }
                }
            }
        }

        Ok(Document::from_sections(sections))
    }
}
