//! A named block of key-value pairs.
use indexmap::IndexMap;

/// One `[name]` block of an INI document.
///
/// Keys are unique within a section and iterate in insertion order;
/// assigning an existing key overwrites its value in place.
///
/// # Examples
///
/// ```
/// use inifile::ini::Document;
///
/// let doc = Document::parse("[core]\neditor = vim\npager = less\n").unwrap();
/// let section = doc.section("core").unwrap();
/// assert_eq!(section.name(), "core");
/// assert_eq!(section.get("pager"), Some("less"));
/// assert_eq!(section.keys().collect::<Vec<_>>(), ["editor", "pager"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: IndexMap<String, String>,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    /// The section name, as written between the brackets.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite `key`. An overwritten key keeps its position.
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Drop every entry, keeping the name.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the section has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of the entries, detached from this section.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.entries.clone()
    }
}
