//! Date formatting for timeline entries.
//!
//! Every rendered date carries two forms: a machine-readable ISO-8601
//! instant and a human-readable display string. The display string is
//! locale-formatted only once the host has finished its first paint;
//! before that it falls back to the ISO text so both passes agree.

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

use crate::element::DateValue;

/// First-paint flag. Moves from `Pending` to `Mounted` once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountState {
    #[default]
    Pending,
    Mounted,
}

impl MountState {
    pub fn mount(&mut self) {
        *self = Self::Mounted;
    }

    pub fn is_mounted(self) -> bool {
        self == Self::Mounted
    }
}

/// Locales supported for display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateLocale {
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
    #[serde(rename = "en_GB")]
    EnGb,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "ja_JP")]
    JaJp,
}

impl DateLocale {
    fn chrono(self) -> Locale {
        match self {
            Self::EnUs => Locale::en_US,
            Self::EnGb => Locale::en_GB,
            Self::FrFr => Locale::fr_FR,
            Self::DeDe => Locale::de_DE,
            Self::EsEs => Locale::es_ES,
            Self::JaJp => Locale::ja_JP,
        }
    }

    fn order(self) -> DateOrder {
        match self {
            Self::EnUs => DateOrder::MonthDayYear,
            Self::EnGb | Self::FrFr | Self::DeDe | Self::EsEs => DateOrder::DayMonthYear,
            Self::JaJp => DateOrder::YearMonthDay,
        }
    }
}

/// Field order of a locale's written dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "long")]
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

/// Which date fields to show, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFields {
    #[serde(default)]
    pub year: Option<YearStyle>,
    #[serde(default)]
    pub month: Option<MonthStyle>,
    #[serde(default)]
    pub day: Option<DayStyle>,
}

impl Default for DateFields {
    fn default() -> Self {
        Self {
            year: Some(YearStyle::Numeric),
            month: Some(MonthStyle::Short),
            day: Some(DayStyle::TwoDigit),
        }
    }
}

impl DateFields {
    /// Build a strftime pattern ordered for the locale.
    fn pattern(&self, locale: DateLocale) -> String {
        let year = self.year.map(|style| match style {
            YearStyle::Numeric => "%Y",
            YearStyle::TwoDigit => "%y",
        });
        let month = self.month.map(|style| match style {
            MonthStyle::Numeric => "%-m",
            MonthStyle::TwoDigit => "%m",
            MonthStyle::Short => "%b",
            MonthStyle::Long => "%B",
        });
        let day = self.day.map(|style| match style {
            DayStyle::Numeric => "%-d",
            DayStyle::TwoDigit => "%d",
        });

        let order = locale.order();
        let textual = matches!(self.month, Some(MonthStyle::Short | MonthStyle::Long));

        if !textual {
            let ordered = match order {
                DateOrder::MonthDayYear => [month, day, year],
                DateOrder::DayMonthYear => [day, month, year],
                DateOrder::YearMonthDay => [year, month, day],
            };
            return ordered.into_iter().flatten().collect::<Vec<_>>().join("/");
        }

        match order {
            DateOrder::YearMonthDay => self.kanji_pattern(year, day),
            DateOrder::MonthDayYear | DateOrder::DayMonthYear => {
                let month_first = order == DateOrder::MonthDayYear;
                let (first, second) = if month_first { (month, day) } else { (day, month) };
                let head = [first, second]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" ");

                match year {
                    Some(year) if head.is_empty() => year.to_string(),
                    Some(year) if month_first && day.is_some() => format!("{head}, {year}"),
                    Some(year) => format!("{head} {year}"),
                    None => head,
                }
            }
        }
    }

    /// Year-first `2024年3月05日` form. Month names are not used: the
    /// localized abbreviation is space padded.
    fn kanji_pattern(&self, year: Option<&str>, day: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(year) = year {
            out.push_str(year);
            out.push('年');
        }
        if self.month.is_some() {
            out.push_str("%-m月");
        }
        if let Some(day) = day {
            out.push_str(day);
            out.push('日');
        }
        out
    }
}

/// Display format: named fields, or a raw strftime pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateFormat {
    Pattern(String),
    Fields(DateFields),
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::Fields(DateFields::default())
    }
}

/// Parse a date value into a UTC instant.
///
/// Date-only and zone-less strings are read as UTC.
pub fn parse_date(value: &DateValue) -> Option<DateTime<Utc>> {
    match value {
        DateValue::Instant(instant) => Some(*instant),
        DateValue::Millis(ms) => DateTime::from_timestamp_millis(*ms),
        DateValue::Fractional(ms) => parse_fractional(*ms),
        DateValue::Text(text) => parse_text(text.trim()),
    }
}

fn parse_fractional(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    // Saturates outside the i64 range, which from_timestamp_millis rejects.
    #[allow(clippy::cast_possible_truncation)]
    let whole = ms.trunc() as i64;
    DateTime::from_timestamp_millis(whole)
}

fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// ISO-8601 UTC instant with millisecond precision.
pub fn iso_string(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A date ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormattedDate {
    /// Machine-readable value, absent when the input could not be parsed.
    pub datetime: Option<String>,
    /// Human-readable text; empty for missing or invalid dates.
    pub display: String,
}

impl FormattedDate {
    /// Replace the display text, keeping the machine-readable value.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.display = text.into();
        self
    }
}

/// Formats dates for a locale and format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeFormatter {
    pub format: DateFormat,
    pub locale: DateLocale,
}

impl TimeFormatter {
    pub fn new(format: DateFormat, locale: DateLocale) -> Self {
        Self { format, locale }
    }

    /// Format a date. Never fails: bad input yields an empty display.
    pub fn format(&self, date: Option<&DateValue>, mount: MountState) -> FormattedDate {
        let Some(value) = date else {
            return FormattedDate::default();
        };
        let Some(instant) = parse_date(value) else {
            debug!(?value, "unparseable date rendered as empty");
            return FormattedDate::default();
        };

        let iso = iso_string(&instant);
        let display = if mount.is_mounted() {
            self.localized(&instant)
        } else {
            iso.clone()
        };

        FormattedDate {
            datetime: Some(iso),
            display,
        }
    }

    fn localized(&self, instant: &DateTime<Utc>) -> String {
        let pattern = match &self.format {
            DateFormat::Pattern(pattern) => pattern.clone(),
            DateFormat::Fields(fields) => fields.pattern(self.locale),
        };

        // An invalid user pattern surfaces as a fmt::Error here.
        let mut out = String::new();
        if write!(out, "{}", instant.format_localized(&pattern, self.locale.chrono())).is_err() {
            debug!(%pattern, "invalid date pattern rendered as empty");
            return String::new();
        }
        out
    }
}
