//! Repeatable list entries of the deposit form
//!
//! Two groups exist: relevant publications and most significant projects.
//! Each group is an ordered list of entries; an entry is addressed in the form
//! by its field path `<prefix>.<index>.<field>`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Static description of one input of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Rendered as a text area instead of a single-line input
    pub multiline: bool,
}

const PUBLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "title", label: "Title", multiline: false },
    FieldSpec { name: "doi", label: "DOI", multiline: false },
    FieldSpec { name: "keywords", label: "Keywords", multiline: false },
    FieldSpec { name: "summary", label: "Summary", multiline: true },
];

const PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "title", label: "Project title", multiline: false },
    FieldSpec { name: "institution", label: "Funding institution", multiline: false },
    FieldSpec { name: "role", label: "Your role in the project", multiline: false },
    FieldSpec { name: "abstract", label: "Abstract in English", multiline: true },
];

/// Kind of repeatable entry group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Publication,
    Project,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Publication, EntryKind::Project];

    pub fn name(&self) -> &'static str {
        match self {
            EntryKind::Publication => "publication",
            EntryKind::Project => "project",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            EntryKind::Publication => PUBLICATION_FIELDS,
            EntryKind::Project => PROJECT_FIELDS,
        }
    }

    pub fn add_button_label(&self) -> &'static str {
        match self {
            EntryKind::Publication => "Add Relevant Publications",
            EntryKind::Project => "Most Significant Projects",
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "publication" | "publications" => Ok(EntryKind::Publication),
            "project" | "projects" => Ok(EntryKind::Project),
            _ => Err(DomainError::UnknownEntryKind(s.to_string())),
        }
    }
}

/// Field path of one input: `prefix.index.name`, or `index.name` without prefix.
pub fn field_path(prefix: &str, index: usize, name: &str) -> String {
    if prefix.is_empty() {
        format!("{index}.{name}")
    } else {
        format!("{prefix}.{index}.{name}")
    }
}

/// A value stored in an [`EntryList`].
pub trait Entry: Default {
    const KIND: EntryKind;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationEntry {
    pub title: String,
    pub doi: String,
    pub keywords: String,
    pub summary: String,
}

impl Entry for PublicationEntry {
    const KIND: EntryKind = EntryKind::Publication;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub institution: String,
    pub role: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl Entry for ProjectEntry {
    const KIND: EntryKind = EntryKind::Project;
}

/// Ordered list behind a repeatable group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryList<T> {
    items: Vec<T>,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for EntryList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Entry> EntryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> EntryKind {
        T::KIND
    }

    pub fn push(&mut self, entry: T) -> usize {
        self.items.push(entry);
        self.items.len() - 1
    }

    /// Append an empty entry, as the group's add button does.
    pub fn push_default(&mut self) -> usize {
        self.push(T::default())
    }

    /// Remove the entry at `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> Result<T, DomainError> {
        if index >= self.items.len() {
            return Err(DomainError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Field paths of every input of every entry, entry by entry.
    pub fn field_paths(&self, prefix: &str) -> Vec<String> {
        (0..self.items.len())
            .flat_map(|index| {
                T::KIND
                    .fields()
                    .iter()
                    .map(move |f| field_path(prefix, index, f.name))
            })
            .collect()
    }
}
