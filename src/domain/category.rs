//! Category display labels (singular / plural) with fallback to the default category.

/// Category used when a key has no label of its own.
pub const DEFAULT_CATEGORY: &str = "community";

/// Immutable mapping from category key to display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSet {
    entries: &'static [(&'static str, &'static str)],
}

impl LabelSet {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        let entries: &'static [(&'static str, &'static str)] = self.entries;
        entries.iter().map(|(k, _)| *k)
    }
}

pub const SINGULARS: LabelSet = LabelSet::new(&[("person", "person"), ("community", "community")]);

pub const PLURALS: LabelSet = LabelSet::new(&[("person", "persons"), ("community", "communities")]);

/// Label for `key`, or for `default_key` when `key` is unknown.
///
/// Returns the empty string only if `default_key` is missing as well, which
/// never happens for [`SINGULARS`] and [`PLURALS`].
pub fn lookup(set: &LabelSet, key: &str, default_key: &str) -> &'static str {
    set.get(key)
        .or_else(|| set.get(default_key))
        .unwrap_or_default()
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display labels for one category key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabels {
    key: String,
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY)
    }
}

impl CategoryLabels {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// True if the key has its own labels rather than falling back.
    pub fn is_known(&self) -> bool {
        SINGULARS.contains(&self.key) && PLURALS.contains(&self.key)
    }

    pub fn singular(&self) -> &'static str {
        lookup(&SINGULARS, &self.key, DEFAULT_CATEGORY)
    }

    pub fn plural(&self) -> &'static str {
        lookup(&PLURALS, &self.key, DEFAULT_CATEGORY)
    }

    pub fn singular_capitalized(&self) -> String {
        capitalize_first(self.singular())
    }

    pub fn plural_capitalized(&self) -> String {
        capitalize_first(self.plural())
    }
}
