use crate::shared::ordering::Keyed;
use crate::shared::validation::{require, unique_key, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Search field configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDataType {
    Text,
    Number,
    Date,
    Datetime,
    Time,
    Boolean,
}

impl SearchDataType {
    pub const ALL: [SearchDataType; 6] = [
        SearchDataType::Text,
        SearchDataType::Number,
        SearchDataType::Date,
        SearchDataType::Datetime,
        SearchDataType::Time,
        SearchDataType::Boolean,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchDataType::Text => "text",
            SearchDataType::Number => "number",
            SearchDataType::Date => "date",
            SearchDataType::Datetime => "datetime",
            SearchDataType::Time => "time",
            SearchDataType::Boolean => "boolean",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// HTML input type used by the search panel
    pub fn input_type(self) -> &'static str {
        match self {
            SearchDataType::Text | SearchDataType::Boolean => "text",
            SearchDataType::Number => "number",
            SearchDataType::Date => "date",
            SearchDataType::Datetime => "datetime-local",
            SearchDataType::Time => "time",
        }
    }

    pub fn supports_range(self) -> bool {
        matches!(
            self,
            SearchDataType::Number | SearchDataType::Date | SearchDataType::Datetime | SearchDataType::Time
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchFieldType {
    Single,
    Range,
    SingleSelectDropdown,
    MultiSelectDropdown,
}

impl SearchFieldType {
    pub const ALL: [SearchFieldType; 4] = [
        SearchFieldType::Single,
        SearchFieldType::Range,
        SearchFieldType::SingleSelectDropdown,
        SearchFieldType::MultiSelectDropdown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchFieldType::Single => "single",
            SearchFieldType::Range => "range",
            SearchFieldType::SingleSelectDropdown => "single-select-dropdown",
            SearchFieldType::MultiSelectDropdown => "multi-select-dropdown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn is_dropdown(self) -> bool {
        matches!(
            self,
            SearchFieldType::SingleSelectDropdown | SearchFieldType::MultiSelectDropdown
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMatchType {
    Exact,
    Like,
}

/// Search field of the case list of one case definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchField {
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    pub path: String,
    pub data_type: SearchDataType,
    pub field_type: SearchFieldType,
    #[serde(default)]
    pub match_type: Option<SearchMatchType>,
    #[serde(default)]
    pub dropdown_data_provider: Option<String>,
    /// Options for dropdown fields: value -> label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropdown_values: Option<Vec<DropdownOption>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl Keyed for SearchField {
    fn key(&self) -> &str {
        &self.key
    }
}

impl SearchField {
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.key)
    }

    /// Combination rules of data type / field type, plus key uniqueness.
    pub fn validate_new(&self, existing: &[SearchField]) -> ValidationResult {
        unique_key("Key", &self.key, existing)?;
        require("Path", &self.path)?;
        self.validate_types()
    }

    pub fn validate_types(&self) -> ValidationResult {
        if self.field_type == SearchFieldType::Range && !self.data_type.supports_range() {
            return Err(ValidationError::Invalid(format!(
                "Range search is not available for {} fields",
                self.data_type.as_str()
            )));
        }
        if self.field_type.is_dropdown() {
            if self.data_type != SearchDataType::Text {
                return Err(ValidationError::Invalid(
                    "Dropdown search is only available for text fields".to_string(),
                ));
            }
            require(
                "Dropdown data provider",
                self.dropdown_data_provider.as_deref().unwrap_or(""),
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Search request
// ============================================================================

/// Value entered in the search panel for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchFieldValue {
    Single(String),
    Range { from: String, to: String },
    Multiple(Vec<String>),
}

impl SearchFieldValue {
    pub fn is_empty(&self) -> bool {
        match self {
            SearchFieldValue::Single(v) => v.trim().is_empty(),
            SearchFieldValue::Range { from, to } => from.trim().is_empty() && to.trim().is_empty(),
            SearchFieldValue::Multiple(values) => values.iter().all(|v| v.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssigneeFilter {
    #[default]
    All,
    Mine,
    Open,
}

impl AssigneeFilter {
    pub fn label(self) -> &'static str {
        match self {
            AssigneeFilter::All => "All cases",
            AssigneeFilter::Mine => "My cases",
            AssigneeFilter::Open => "Unassigned",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchOperator {
    #[default]
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    pub key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_from: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_to: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchRequest {
    pub assignee_filter: AssigneeFilter,
    pub search_operator: SearchOperator,
    pub other_filters: Vec<SearchFilter>,
}

/// Converts a raw input into the JSON type the backend expects for `data_type`.
fn typed_value(data_type: SearchDataType, raw: &str) -> serde_json::Value {
    let raw = raw.trim();
    match data_type {
        SearchDataType::Number => raw
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| serde_json::Value::String(raw.to_string())),
        SearchDataType::Boolean => match raw.to_lowercase().as_str() {
            "true" | "yes" | "1" => serde_json::Value::Bool(true),
            "false" | "no" | "0" => serde_json::Value::Bool(false),
            _ => serde_json::Value::String(raw.to_string()),
        },
        _ => serde_json::Value::String(raw.to_string()),
    }
}

fn optional(data_type: SearchDataType, raw: &str) -> Option<serde_json::Value> {
    (!raw.trim().is_empty()).then(|| typed_value(data_type, raw))
}

/// Builds the search body from entered values, in the configured field order.
/// Empty inputs and values for unknown keys are skipped.
pub fn build_search_request(
    fields: &[SearchField],
    values: &HashMap<String, SearchFieldValue>,
    assignee_filter: AssigneeFilter,
) -> AdvancedSearchRequest {
    let other_filters = fields
        .iter()
        .filter_map(|field| {
            let value = values.get(&field.key)?;
            if value.is_empty() {
                return None;
            }
            let filter = match value {
                SearchFieldValue::Single(v) => SearchFilter {
                    key: field.key.clone(),
                    values: vec![typed_value(field.data_type, v)],
                    range_from: None,
                    range_to: None,
                },
                SearchFieldValue::Range { from, to } => SearchFilter {
                    key: field.key.clone(),
                    values: Vec::new(),
                    range_from: optional(field.data_type, from),
                    range_to: optional(field.data_type, to),
                },
                SearchFieldValue::Multiple(items) => SearchFilter {
                    key: field.key.clone(),
                    values: items
                        .iter()
                        .filter(|v| !v.trim().is_empty())
                        .map(|v| typed_value(field.data_type, v))
                        .collect(),
                    range_from: None,
                    range_to: None,
                },
            };
            Some(filter)
        })
        .collect();

    AdvancedSearchRequest {
        assignee_filter,
        search_operator: SearchOperator::And,
        other_filters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(key: &str, data_type: SearchDataType, field_type: SearchFieldType) -> SearchField {
        SearchField {
            key: key.to_string(),
            title: None,
            path: format!("doc:{key}"),
            data_type,
            field_type,
            match_type: None,
            dropdown_data_provider: None,
            dropdown_values: None,
        }
    }

    #[test]
    fn test_wire_names() {
        let f = field("amount", SearchDataType::Number, SearchFieldType::MultiSelectDropdown);
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["dataType"], json!("number"));
        assert_eq!(v["fieldType"], json!("multi-select-dropdown"));
        assert_eq!(SearchFieldType::parse("range"), Some(SearchFieldType::Range));
        assert_eq!(SearchDataType::parse("datetime"), Some(SearchDataType::Datetime));
        assert_eq!(SearchDataType::parse("blob"), None);
    }

    #[test]
    fn test_range_only_for_ordered_types() {
        assert!(field("a", SearchDataType::Date, SearchFieldType::Range)
            .validate_types()
            .is_ok());
        assert!(field("a", SearchDataType::Text, SearchFieldType::Range)
            .validate_types()
            .is_err());
        assert!(field("a", SearchDataType::Boolean, SearchFieldType::Range)
            .validate_types()
            .is_err());
    }

    #[test]
    fn test_dropdown_needs_text_and_provider() {
        let mut f = field("status", SearchDataType::Text, SearchFieldType::SingleSelectDropdown);
        assert!(f.validate_types().is_err());
        f.dropdown_data_provider = Some("json".into());
        assert!(f.validate_types().is_ok());
        f.data_type = SearchDataType::Number;
        assert!(f.validate_types().is_err());
    }

    #[test]
    fn test_validate_new_rejects_duplicate_key() {
        let existing = vec![field("name", SearchDataType::Text, SearchFieldType::Single)];
        let dup = field("name", SearchDataType::Text, SearchFieldType::Single);
        assert!(matches!(
            dup.validate_new(&existing),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_build_request_skips_empty_and_types_values() {
        let fields = vec![
            field("name", SearchDataType::Text, SearchFieldType::Single),
            field("amount", SearchDataType::Number, SearchFieldType::Range),
            field("urgent", SearchDataType::Boolean, SearchFieldType::Single),
            field("city", SearchDataType::Text, SearchFieldType::MultiSelectDropdown),
            field("empty", SearchDataType::Text, SearchFieldType::Single),
        ];
        let mut values = HashMap::new();
        values.insert("name".to_string(), SearchFieldValue::Single("Ann".into()));
        values.insert(
            "amount".to_string(),
            SearchFieldValue::Range {
                from: "10".into(),
                to: String::new(),
            },
        );
        values.insert("urgent".to_string(), SearchFieldValue::Single("yes".into()));
        values.insert(
            "city".to_string(),
            SearchFieldValue::Multiple(vec!["Oslo".into(), " ".into(), "Rome".into()]),
        );
        values.insert("empty".to_string(), SearchFieldValue::Single("  ".into()));
        values.insert("unknown".to_string(), SearchFieldValue::Single("x".into()));

        let request = build_search_request(&fields, &values, AssigneeFilter::Mine);
        assert_eq!(request.assignee_filter, AssigneeFilter::Mine);
        let keys: Vec<&str> = request.other_filters.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "amount", "urgent", "city"]);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["assigneeFilter"], json!("MINE"));
        assert_eq!(body["searchOperator"], json!("AND"));
        assert_eq!(body["otherFilters"][0], json!({"key": "name", "values": ["Ann"]}));
        assert_eq!(body["otherFilters"][1], json!({"key": "amount", "rangeFrom": 10.0}));
        assert_eq!(body["otherFilters"][2]["values"], json!([true]));
        assert_eq!(body["otherFilters"][3]["values"], json!(["Oslo", "Rome"]));
    }
}
