//! Domain layer: metadata trees, labels and form entries
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod category;
pub mod entries;
pub mod error;
pub mod node;
pub mod options;

pub use category::{capitalize_first, lookup, CategoryLabels, LabelSet, DEFAULT_CATEGORY};
pub use entries::{
    field_path, Entry, EntryKind, EntryList, FieldSpec, ProjectEntry, PublicationEntry,
};
pub use error::DomainError;
pub use node::{identity, visit, visit_leaves, Node, Scalar};
pub use options::{compare_text, sort_options, SelectOption};
