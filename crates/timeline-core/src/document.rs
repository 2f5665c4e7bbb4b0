//! Timeline documents.
//!
//! A document is a JSON file holding the entries plus the layout props and
//! date settings used to render them. Every field except `items` is
//! optional.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

use crate::element::{ColorVariant, ElementId, Icon, Size, TimelineElement};
use crate::layout::LayoutProps;
use crate::time::{parse_date, DateFormat, DateLocale, TimeFormatter};

/// A timeline with its presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Entries in caller order; rendered reversed.
    pub items: Vec<TimelineElement>,

    #[serde(default)]
    pub size: Size,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<ColorVariant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_color: Option<ColorVariant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icon: Option<Icon>,

    #[serde(default = "default_animate")]
    pub animate: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(default)]
    pub locale: DateLocale,

    #[serde(default)]
    pub date_format: DateFormat,
}

fn default_animate() -> bool {
    true
}

impl Document {
    /// Create a document with default settings.
    pub fn new(items: Vec<TimelineElement>) -> Self {
        Self {
            items,
            size: Size::default(),
            icon_color: None,
            connector_color: None,
            custom_icon: None,
            animate: default_animate(),
            class_name: None,
            locale: DateLocale::default(),
            date_format: DateFormat::default(),
        }
    }

    /// Load a document from a file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        let document = Self::parse(&content)?;
        debug!(path = %path.display(), items = document.items.len(), "document loaded");
        Ok(document)
    }

    /// Parse a document from JSON text.
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(content).map_err(DocumentError::Parse)
    }

    /// Save the document to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let content = serde_json::to_string_pretty(self).map_err(DocumentError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Layout props described by this document.
    pub fn layout_props(&self) -> LayoutProps {
        LayoutProps {
            items: self.items.clone(),
            size: self.size,
            icon_color: self.icon_color,
            connector_color: self.connector_color,
            custom_icon: self.custom_icon.clone(),
            animate: self.animate,
            class_name: self.class_name.clone(),
            node_ref: None,
        }
    }

    pub fn formatter(&self) -> TimeFormatter {
        TimeFormatter::new(self.date_format.clone(), self.locale)
    }

    /// Problems that do not stop rendering but are worth reporting.
    pub fn issues(&self) -> Vec<DocumentIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for item in &self.items {
            if !seen.insert(&item.id) {
                issues.push(DocumentIssue::DuplicateId(item.id.clone()));
            }
            if item.loading && item.error.as_deref().is_some_and(|e| !e.is_empty()) {
                issues.push(DocumentIssue::ErrorShadowedByLoading(item.id.clone()));
            }
            if item.date.as_ref().is_some_and(|d| parse_date(d).is_none()) {
                issues.push(DocumentIssue::InvalidDate(item.id.clone()));
            }
        }

        for issue in &issues {
            warn!(%issue, "document issue");
        }
        issues
    }
}

/// A non-fatal problem in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentIssue {
    /// Two entries share an id; list diffing may be unstable.
    DuplicateId(ElementId),
    /// `loading` and `error` are both set; the error is never shown.
    ErrorShadowedByLoading(ElementId),
    /// The date cannot be parsed and renders empty.
    InvalidDate(ElementId),
}

impl fmt::Display for DocumentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate id {id}"),
            Self::ErrorShadowedByLoading(id) => {
                write!(f, "item {id} sets both loading and error; error is hidden")
            }
            Self::InvalidDate(id) => write!(f, "item {id} has an unparseable date"),
        }
    }
}

/// Errors that can occur when reading or writing documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// I/O error reading or writing the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing document JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing the document to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
