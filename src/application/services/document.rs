//! Document service
//!
//! Loads metadata documents (JSON or TOML) into [`Node`] trees and inspects them.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{sort_options, Node, Scalar, SelectOption};
use crate::infrastructure::traits::FileSystem;

/// Serialization format of a document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> ApplicationResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(DocumentFormat::Json),
            Some("toml") => Ok(DocumentFormat::Toml),
            _ => Err(ApplicationError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse `content`; the error is the parser's message.
    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T, String> {
        match self {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => f.write_str("json"),
            DocumentFormat::Toml => f.write_str("toml"),
        }
    }
}

/// A leaf together with its field path.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafEntry {
    pub path: String,
    pub value: Scalar,
}

/// Shape statistics of a loaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub path: PathBuf,
    pub format: DocumentFormat,
    pub leaves: usize,
    pub depth: usize,
}

/// Option files are either a bare list or a table with an `options` list.
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionsDocument {
    List(Vec<SelectOption>),
    Table { options: Vec<SelectOption> },
}

/// Service for loading and inspecting metadata documents.
pub struct DocumentService {
    fs: Arc<dyn FileSystem>,
}

impl DocumentService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    fn read<T: DeserializeOwned>(&self, path: &Path) -> ApplicationResult<(DocumentFormat, T)> {
        let format = DocumentFormat::from_path(path)?;
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read document", path)?;
        debug!("read: {} bytes of {} from {}", content.len(), format, path.display());
        let value = format.parse(&content).map_err(|message| ApplicationError::Parse {
            path: path.to_path_buf(),
            message,
        })?;
        Ok((format, value))
    }

    /// Load a document as a tree.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Node> {
        self.read::<Node>(path).map(|(_, node)| node)
    }

    /// All leaves of the document with their paths, in document order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self, path: &Path, separator: &str) -> ApplicationResult<Vec<LeafEntry>> {
        let node = self.load(path)?;
        let mut out = Vec::new();
        node.visit_with_path(separator, |leaf_path, value| {
            out.push(LeafEntry {
                path: leaf_path.to_string(),
                value: value.clone(),
            })
        });
        debug!("leaves: {} found", out.len());
        Ok(out)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn summarize(&self, path: &Path) -> ApplicationResult<DocumentSummary> {
        let (format, node) = self.read::<Node>(path)?;
        Ok(DocumentSummary {
            path: path.to_path_buf(),
            format,
            leaves: node.leaf_count(),
            depth: node.depth(),
        })
    }

    /// Load select options and return them sorted by text.
    #[instrument(level = "debug", skip(self))]
    pub fn load_options(&self, path: &Path) -> ApplicationResult<Vec<SelectOption>> {
        let (_, document) = self.read::<OptionsDocument>(path)?;
        let mut options = match document {
            OptionsDocument::List(options) => options,
            OptionsDocument::Table { options } => options,
        };
        sort_options(&mut options);
        Ok(options)
    }
}
