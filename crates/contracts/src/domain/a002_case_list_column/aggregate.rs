use crate::shared::ordering::Keyed;
use crate::shared::page::SortOrder;
use crate::shared::validation::{require, unique_key, ValidationError, ValidationResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Display type
// ============================================================================

/// How a column value is rendered in the case list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "displayTypeParameters", rename_all = "camelCase")]
pub enum DisplayType {
    Text,
    Date {
        #[serde(rename = "dateFormat", default, skip_serializing_if = "Option::is_none")]
        date_format: Option<String>,
    },
    #[serde(rename = "datetime")]
    DateTime {
        #[serde(rename = "dateFormat", default, skip_serializing_if = "Option::is_none")]
        date_format: Option<String>,
    },
    Boolean,
    Enum {
        #[serde(rename = "enum", default)]
        values: BTreeMap<String, String>,
    },
    ArrayCount,
    UnderscoreToSpace,
    Tags,
}

impl Default for DisplayType {
    fn default() -> Self {
        DisplayType::Text
    }
}

pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";
pub const DEFAULT_DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M";

impl DisplayType {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayType::Text => "Text",
            DisplayType::Date { .. } => "Date",
            DisplayType::DateTime { .. } => "Date & time",
            DisplayType::Boolean => "Yes / No",
            DisplayType::Enum { .. } => "Enum",
            DisplayType::ArrayCount => "Array count",
            DisplayType::UnderscoreToSpace => "Underscores to spaces",
            DisplayType::Tags => "Tags",
        }
    }

    /// All variants with empty parameters, for the type selector.
    pub fn variants() -> Vec<DisplayType> {
        vec![
            DisplayType::Text,
            DisplayType::Date { date_format: None },
            DisplayType::DateTime { date_format: None },
            DisplayType::Boolean,
            DisplayType::Enum {
                values: BTreeMap::new(),
            },
            DisplayType::ArrayCount,
            DisplayType::UnderscoreToSpace,
            DisplayType::Tags,
        ]
    }

    /// Renders a raw cell value. Missing values become "-".
    pub fn format(&self, value: &Value) -> String {
        if value.is_null() {
            return "-".to_string();
        }
        match self {
            DisplayType::Text => plain(value),
            DisplayType::Date { date_format } => format_temporal(
                value,
                date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT),
            ),
            DisplayType::DateTime { date_format } => format_temporal(
                value,
                date_format.as_deref().unwrap_or(DEFAULT_DATETIME_FORMAT),
            ),
            DisplayType::Boolean => match value {
                Value::Bool(true) => "Yes".to_string(),
                Value::Bool(false) => "No".to_string(),
                Value::String(s) if s.eq_ignore_ascii_case("true") => "Yes".to_string(),
                Value::String(s) if s.eq_ignore_ascii_case("false") => "No".to_string(),
                other => plain(other),
            },
            DisplayType::Enum { values } => {
                let raw = plain(value);
                values.get(&raw).cloned().unwrap_or(raw)
            }
            DisplayType::ArrayCount => match value {
                Value::Array(items) => items.len().to_string(),
                _ => "0".to_string(),
            },
            DisplayType::UnderscoreToSpace => plain(value).replace('_', " "),
            DisplayType::Tags => match value {
                Value::Array(items) => items.iter().map(plain).collect::<Vec<_>>().join(", "),
                other => plain(other),
            },
        }
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
fn format_temporal(value: &Value, pattern: &str) -> String {
    let raw = plain(value);
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return dt.with_timezone(&Utc).format(pattern).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return dt.format(pattern).to_string();
        }
    }
    raw
}

// ============================================================================
// List column
// ============================================================================

/// Column of the case list of one case definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseListColumn {
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    pub path: String,
    #[serde(default)]
    pub display_type: DisplayType,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub default_sort: Option<SortOrder>,
}

impl Keyed for CaseListColumn {
    fn key(&self) -> &str {
        &self.key
    }
}

impl CaseListColumn {
    pub fn header(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.key)
    }

    /// Presence and uniqueness checks for a new column.
    pub fn validate_new(&self, existing: &[CaseListColumn]) -> ValidationResult {
        unique_key("Key", &self.key, existing)?;
        require("Path", &self.path)?;
        if self.default_sort.is_some() && !self.sortable {
            return Err(ValidationError::Invalid(
                "Only sortable columns can have a default sort".to_string(),
            ));
        }
        if self.default_sort.is_some() && existing.iter().any(|c| c.default_sort.is_some()) {
            return Err(ValidationError::Invalid(
                "Another column already defines the default sort".to_string(),
            ));
        }
        Ok(())
    }
}

/// Column that defines the initial sort of the list, if any.
pub fn default_sort_column(columns: &[CaseListColumn]) -> Option<(&str, SortOrder)> {
    columns
        .iter()
        .find_map(|c| c.default_sort.map(|order| (c.key.as_str(), order)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn column(key: &str) -> CaseListColumn {
        CaseListColumn {
            key: key.to_string(),
            title: None,
            path: format!("doc:{key}"),
            display_type: DisplayType::Text,
            sortable: true,
            default_sort: None,
        }
    }

    #[test]
    fn test_display_type_wire_format() {
        let json = serde_json::to_value(DisplayType::Date {
            date_format: Some("%d.%m.%Y".into()),
        })
        .unwrap();
        assert_eq!(
            json,
            json!({"type": "date", "displayTypeParameters": {"dateFormat": "%d.%m.%Y"}})
        );
        let parsed: DisplayType = serde_json::from_value(json!({"type": "text"})).unwrap();
        assert_eq!(parsed, DisplayType::Text);
        let parsed: DisplayType =
            serde_json::from_value(json!({"type": "arrayCount"})).unwrap();
        assert_eq!(parsed, DisplayType::ArrayCount);
    }

    #[test]
    fn test_format_dates() {
        let d = DisplayType::Date { date_format: None };
        assert_eq!(d.format(&json!("2024-03-15T14:02:26Z")), "15-03-2024");
        assert_eq!(d.format(&json!("2024-03-15")), "15-03-2024");
        assert_eq!(d.format(&json!("not a date")), "not a date");
        let dt = DisplayType::DateTime { date_format: None };
        assert_eq!(dt.format(&json!("2024-03-15T14:02:26Z")), "15-03-2024 14:02");
    }

    #[test]
    fn test_format_misc() {
        assert_eq!(DisplayType::Text.format(&Value::Null), "-");
        assert_eq!(DisplayType::Boolean.format(&json!(true)), "Yes");
        assert_eq!(DisplayType::Boolean.format(&json!("false")), "No");
        assert_eq!(DisplayType::ArrayCount.format(&json!([1, 2, 3])), "3");
        assert_eq!(DisplayType::UnderscoreToSpace.format(&json!("in_review")), "in review");
        assert_eq!(DisplayType::Tags.format(&json!(["a", "b"])), "a, b");
        let mut values = BTreeMap::new();
        values.insert("OPEN".to_string(), "Open".to_string());
        let e = DisplayType::Enum { values };
        assert_eq!(e.format(&json!("OPEN")), "Open");
        assert_eq!(e.format(&json!("CLOSED")), "CLOSED");
        assert_eq!(DisplayType::Text.format(&json!(42)), "42");
    }

    #[test]
    fn test_validate_new_column() {
        let existing = vec![column("name")];
        assert!(column("date").validate_new(&existing).is_ok());
        assert!(column("name").validate_new(&existing).is_err());

        let mut no_path = column("x");
        no_path.path = String::new();
        assert_eq!(
            no_path.validate_new(&existing),
            Err(ValidationError::Required { field: "Path" })
        );
    }

    #[test]
    fn test_single_default_sort() {
        let mut sorted = column("name");
        sorted.default_sort = Some(SortOrder::Asc);
        let existing = vec![sorted];

        let mut another = column("date");
        another.default_sort = Some(SortOrder::Desc);
        assert!(another.validate_new(&existing).is_err());
        assert_eq!(default_sort_column(&existing), Some(("name", SortOrder::Asc)));

        let mut unsortable = column("x");
        unsortable.sortable = false;
        unsortable.default_sort = Some(SortOrder::Asc);
        assert!(unsortable.validate_new(&[]).is_err());
    }
}
