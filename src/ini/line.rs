//! Classification of a single line of INI text.

/// The kind of a single INI line, borrowing its payload from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after trimming whitespace.
    Blank,
    /// First non-whitespace character is `#` or `;`.
    Comment,
    /// `[name]`; the name is taken verbatim between the brackets.
    SectionHeader(&'a str),
    /// `key = value`, split on the first `=` with both sides trimmed.
    KeyValue {
        /// Trimmed text before the first `=`.
        key: &'a str,
        /// Trimmed text after the first `=`.
        value: &'a str,
    },
    /// Any other line: not blank, not a comment, not a header, and no `=`.
    Malformed(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a raw line. Surrounding whitespace (including a trailing
    /// `\r`) is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use inifile::ini::Line;
    ///
    /// assert_eq!(Line::classify("  "), Line::Blank);
    /// assert_eq!(Line::classify("; note"), Line::Comment);
    /// assert_eq!(Line::classify("[core]"), Line::SectionHeader("core"));
    /// assert_eq!(
    ///     Line::classify("User = hg"),
    ///     Line::KeyValue { key: "User", value: "hg" }
    /// );
    /// assert_eq!(Line::classify("oops"), Line::Malformed("oops"));
    /// ```
    #[must_use]
    pub fn classify(raw: &'a str) -> Self {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Self::Blank;
        }
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            return Self::Comment;
        }
        if let Some(name) = parse_section_header(trimmed) {
            return Self::SectionHeader(name);
        }

        trimmed
            .split_once('=')
            .map_or(Self::Malformed(trimmed), |(key, value)| Self::KeyValue {
                key: key.trim(),
                value: value.trim(),
            })
    }
}

/// Parse a `[header]` line. The name is not trimmed.
fn parse_section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert_eq!(Line::classify(""), Line::Blank);
        assert_eq!(Line::classify("   \t  "), Line::Blank);
        assert_eq!(Line::classify("\r"), Line::Blank);
    }

    #[test]
    fn comments_with_either_marker() {
        assert_eq!(Line::classify("# hash comment"), Line::Comment);
        assert_eq!(Line::classify("; semicolon comment"), Line::Comment);
        assert_eq!(Line::classify("   # indented"), Line::Comment);
    }

    #[test]
    fn comment_containing_equals_is_still_a_comment() {
        assert_eq!(Line::classify("# key = value"), Line::Comment);
    }

    #[test]
    fn section_header_name_is_verbatim() {
        assert_eq!(
            Line::classify("[forge.example]"),
            Line::SectionHeader("forge.example")
        );
        // Inner whitespace is kept; only the line itself is trimmed.
        assert_eq!(
            Line::classify("  [ spaced name ]  "),
            Line::SectionHeader(" spaced name ")
        );
    }

    #[test]
    fn empty_brackets_yield_empty_name() {
        assert_eq!(Line::classify("[]"), Line::SectionHeader(""));
    }

    #[test]
    fn lone_bracket_is_not_a_header() {
        assert_eq!(Line::classify("["), Line::Malformed("["));
        assert_eq!(Line::classify("]"), Line::Malformed("]"));
    }

    #[test]
    fn key_value_is_split_on_first_equals() {
        assert_eq!(
            Line::classify("url = http://host/?a=b"),
            Line::KeyValue {
                key: "url",
                value: "http://host/?a=b"
            }
        );
    }

    #[test]
    fn key_value_sides_are_trimmed() {
        assert_eq!(
            Line::classify("\t key\t=\t value  \r"),
            Line::KeyValue {
                key: "key",
                value: "value"
            }
        );
    }

    #[test]
    fn empty_key_or_value_is_allowed() {
        assert_eq!(
            Line::classify("key ="),
            Line::KeyValue {
                key: "key",
                value: ""
            }
        );
        assert_eq!(
            Line::classify("= value"),
            Line::KeyValue {
                key: "",
                value: "value"
            }
        );
    }

    #[test]
    fn header_with_trailing_text_is_treated_as_entry() {
        assert_eq!(
            Line::classify("[a] = b"),
            Line::KeyValue {
                key: "[a]",
                value: "b"
            }
        );
    }

    #[test]
    fn line_without_equals_is_malformed() {
        assert_eq!(
            Line::classify("  just some words "),
            Line::Malformed("just some words")
        );
    }
}
