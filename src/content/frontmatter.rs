//! Front-matter parsing

use chrono::{DateTime, Local, NaiveDateTime};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors from parsing a front-matter block
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("front matter opened with +++ but never closed")]
    Unclosed,

    #[error("invalid TOML in front matter: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Custom deserializer that accepts both a native TOML date and a string
fn date_or_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<toml::Value>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(toml::Value::Datetime(dt)) => Ok(Some(dt.to_string())),
        Some(toml::Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a date or a string, found {}",
            other.type_str()
        ))),
    }
}

/// Front-matter data from a content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    #[serde(deserialize_with = "date_or_string", default)]
    pub date: Option<String>,
    #[serde(deserialize_with = "date_or_string", default)]
    pub updated: Option<String>,
    pub draft: bool,
    pub weight: Option<i64>,
    pub template: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub taxonomies: IndexMap<String, Vec<String>>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: IndexMap<String, toml::Value>,
}

impl FrontMatter {
    /// Delimiter line for the TOML block
    pub const DELIMITER: &'static str = "+++";

    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let trimmed = content.trim_start();

        if !trimmed.starts_with(Self::DELIMITER) {
            // No front-matter block, the whole file is body
            return Ok((FrontMatter::default(), content));
        }

        let rest = &trimmed[Self::DELIMITER.len()..];

        let Some(end_pos) = rest.find(&format!("\n{}", Self::DELIMITER)) else {
            return Err(FrontMatterError::Unclosed);
        };

        let toml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 1 + Self::DELIMITER.len()..];
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if toml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm: FrontMatter = toml::from_str(toml_content)?;
        Ok((fm, remaining))
    }

    /// Whether a content string carries a front-matter block at all
    pub fn is_present(content: &str) -> bool {
        content.trim_start().starts_with(Self::DELIMITER)
    }

    /// Parse the date string into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_ref().and_then(|s| parse_date_string(s))
    }

    /// Parse the updated date string into a DateTime
    pub fn parse_updated(&self) -> Option<DateTime<Local>> {
        self.updated.as_ref().and_then(|s| parse_date_string(s))
    }

    /// Terms of the `tags` taxonomy
    pub fn tags(&self) -> Vec<String> {
        self.taxonomies.get("tags").cloned().unwrap_or_default()
    }
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return dt.and_local_timezone(Local).earliest();
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0)?.and_local_timezone(Local).earliest();
        }
    }

    // RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}
