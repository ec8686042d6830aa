//! Dropdown option lists.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One entry of a select/dropdown field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub text: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Case-insensitive text order, ties broken by the raw text so the order is total.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort options in place by their display text.
pub fn sort_options(options: &mut [SelectOption]) -> &mut [SelectOption] {
    options.sort_by(|a, b| compare_text(&a.text, &b.text));
    options
}
