//! Timeline entry types.
//!
//! An entry is one chronological record supplied to the timeline:
//! - [`TimelineElement`] - the record itself
//! - [`Status`], [`ColorVariant`], [`Size`] - closed variant enumerations
//! - [`Icon`] - named glyphs with a literal fallback
//! - [`DateValue`] - a date as text, epoch milliseconds, or a UTC instant

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a timeline entry.
///
/// Documents may use numbers or strings. Uniqueness only matters for
/// stable diffing and is never enforced while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ElementId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Progress status of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Completed,
    InProgress,
    Pending,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Pending => "pending",
        }
    }
}

/// Color override for an entry's icon and connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorVariant {
    Primary,
    Secondary,
    Muted,
    Accent,
}

impl ColorVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Muted => "muted",
            Self::Accent => "accent",
        }
    }
}

/// Size variant, used for both item spacing and icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Visual glyph shown inside an entry's icon circle.
///
/// Named icons are mapped to a concrete glyph by each renderer. Any other
/// name is kept verbatim as [`Icon::Custom`] and drawn as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    Check,
    GitPullRequest,
    GitBranch,
    Calendar,
    Star,
    AlertTriangle,
    AlertCircle,
    Loader,
    Custom(String),
}

impl Icon {
    /// Stable name used in documents and in the `data-icon` attribute.
    pub fn name(&self) -> &str {
        match self {
            Self::Check => "check",
            Self::GitPullRequest => "git-pull-request",
            Self::GitBranch => "git-branch",
            Self::Calendar => "calendar",
            Self::Star => "star",
            Self::AlertTriangle => "alert-triangle",
            Self::AlertCircle => "alert-circle",
            Self::Loader => "loader",
            Self::Custom(glyph) => glyph,
        }
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        match name.as_str() {
            "check" => Self::Check,
            "git-pull-request" => Self::GitPullRequest,
            "git-branch" => Self::GitBranch,
            "calendar" => Self::Calendar,
            "star" => Self::Star,
            "alert-triangle" => Self::AlertTriangle,
            "alert-circle" => Self::AlertCircle,
            "loader" => Self::Loader,
            _ => Self::Custom(name),
        }
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Custom(glyph) => glyph,
            named => named.name().to_string(),
        }
    }
}

/// A date as supplied by the caller.
///
/// Strings are parsed leniently when rendered; anything unparseable renders
/// as an empty date rather than failing.
///
/// Variants are tried in declaration order when deserializing: RFC 3339
/// strings load as `Instant`, other strings as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Fractional milliseconds since the Unix epoch, truncated when rendered.
    Fractional(f64),
    /// An already-parsed instant.
    Instant(DateTime<Utc>),
    /// ISO-8601 date or date-time text.
    Text(String),
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for DateValue {
    fn from(ms: i64) -> Self {
        Self::Millis(ms)
    }
}

impl From<f64> for DateValue {
    fn from(ms: f64) -> Self {
        Self::Fractional(ms)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Instant(instant)
    }
}

/// One timeline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineElement {
    /// Identifier, stable across renders.
    pub id: ElementId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub date: Option<DateValue>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub status: Status,

    /// Explicit tint; wins over the status-derived default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorVariant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    /// Render the skeleton placeholder instead of content.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub loading: bool,

    /// Render the error state with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TimelineElement {
    /// Create a completed entry with no description.
    pub fn new(id: u64, title: impl Into<String>, date: impl Into<DateValue>) -> Self {
        Self {
            id: ElementId::Number(id),
            title: title.into(),
            date: Some(date.into()),
            description: String::new(),
            status: Status::default(),
            color: None,
            icon: None,
            loading: false,
            error: None,
        }
    }

    /// Replace the numeric id, e.g. with a string one.
    #[must_use]
    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn color(mut self, color: ColorVariant) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder() {
        let element = TimelineElement::new(1, "Release", "2024-01-01")
            .description("Shipped")
            .status(Status::InProgress)
            .color(ColorVariant::Accent)
            .icon(Icon::Star);

        assert_eq!(element.id, ElementId::Number(1));
        assert_eq!(element.description, "Shipped");
        assert_eq!(element.status, Status::InProgress);
        assert_eq!(element.color, Some(ColorVariant::Accent));
        assert_eq!(element.icon, Some(Icon::Star));
        assert!(!element.loading);
        assert!(element.error.is_none());
    }

    #[test]
    fn test_element_defaults_from_json() {
        let element: TimelineElement =
            serde_json::from_str(r#"{"id": "a", "title": "Only a title"}"#).unwrap();
        assert_eq!(element.id, ElementId::Text("a".into()));
        assert_eq!(element.status, Status::Completed);
        assert!(element.date.is_none());
        assert!(element.description.is_empty());
    }

    #[test]
    fn test_status_spelling() {
        let status: Status = serde_json::from_str(r#""in-progress""#).unwrap();
        assert_eq!(status, Status::InProgress);
        assert_eq!(Status::InProgress.as_str(), "in-progress");
    }

    #[test]
    fn test_icon_names() {
        assert_eq!(Icon::from("git-branch"), Icon::GitBranch);
        assert_eq!(Icon::from("★"), Icon::Custom("★".into()));
        assert_eq!(String::from(Icon::AlertCircle), "alert-circle");

        let icon: Icon = serde_json::from_str(r#""calendar""#).unwrap();
        assert_eq!(icon, Icon::Calendar);
    }

    #[test]
    fn test_date_value_variants() {
        let text: DateValue = serde_json::from_str(r#""2024-01-01""#).unwrap();
        assert_eq!(text, DateValue::Text("2024-01-01".into()));

        let millis: DateValue = serde_json::from_str("1704067200000").unwrap();
        assert_eq!(millis, DateValue::Millis(1_704_067_200_000));

        let fractional: DateValue = serde_json::from_str("1704067200000.0").unwrap();
        assert_eq!(fractional, DateValue::Fractional(1_704_067_200_000.0));
    }

    #[test]
    fn test_instant_survives_json() {
        let instant = DateTime::parse_from_rfc3339("2024-01-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let value = DateValue::from(instant);
        let json = serde_json::to_string(&value).unwrap();
        let back: DateValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
