use crate::domain::a002_case_list_column::DisplayType;
use crate::shared::ordering::Keyed;
use crate::shared::value_path::value_at;
use crate::shared::validation::{in_range, require, unique_key, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Narrowest and widest widget, in grid columns
pub const MIN_WIDGET_WIDTH: u8 = 1;
pub const MAX_WIDGET_WIDTH: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseWidgetType {
    Fields,
    Table,
    Collection,
    Custom,
    Form,
}

impl CaseWidgetType {
    pub const ALL: [CaseWidgetType; 5] = [
        CaseWidgetType::Fields,
        CaseWidgetType::Table,
        CaseWidgetType::Collection,
        CaseWidgetType::Custom,
        CaseWidgetType::Form,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CaseWidgetType::Fields => "fields",
            CaseWidgetType::Table => "table",
            CaseWidgetType::Collection => "collection",
            CaseWidgetType::Custom => "custom",
            CaseWidgetType::Form => "form",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            CaseWidgetType::Fields => "Fields",
            CaseWidgetType::Table => "Table",
            CaseWidgetType::Collection => "Collection",
            CaseWidgetType::Custom => "Custom component",
            CaseWidgetType::Form => "Form",
        }
    }
}

/// One value shown by a fields, table or collection widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetField {
    pub key: String,
    #[serde(default)]
    pub title: String,
    /// Path into the case content, e.g. `doc:customer.name`
    pub value: String,
    #[serde(default)]
    pub display_properties: Option<DisplayType>,
    /// Column span inside a collection card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
}

impl WidgetField {
    pub fn format(&self, value: &Value) -> String {
        self.display_properties
            .as_ref()
            .unwrap_or(&DisplayType::Text)
            .format(value)
    }

    /// Value in resolved widget data: by field key, then by the configured path.
    pub fn value_in<'a>(&self, data: &'a Value) -> Option<&'a Value> {
        data.get(&self.key).or_else(|| value_at(data, &self.value))
    }

    /// Formatted value in resolved widget data, empty when absent.
    pub fn render(&self, data: &Value) -> String {
        self.value_in(data).map(|v| self.format(v)).unwrap_or_default()
    }
}

/// Rows of table or collection widget data: a bare array or a page envelope.
pub fn widget_rows(data: &Value) -> &[Value] {
    match data {
        Value::Array(rows) => rows,
        Value::Object(map) => match map.get("content") {
            Some(Value::Array(rows)) => rows,
            _ => &[],
        },
        _ => &[],
    }
}

/// Widget on a widget tab of a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseWidget {
    pub key: String,
    pub title: String,
    pub width: u8,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(rename = "type")]
    pub widget_type: CaseWidgetType,
    #[serde(default)]
    pub properties: Value,
}

impl Keyed for CaseWidget {
    fn key(&self) -> &str {
        &self.key
    }
}

impl CaseWidget {
    pub fn new(key: impl Into<String>, title: impl Into<String>, widget_type: CaseWidgetType) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: MIN_WIDGET_WIDTH,
            high_contrast: false,
            widget_type,
            properties: Value::Object(Default::default()),
        }
    }

    /// Column span clamped to the supported range.
    pub fn span(&self) -> u32 {
        u32::from(self.width.clamp(MIN_WIDGET_WIDTH, MAX_WIDGET_WIDTH))
    }

    pub fn validate_new(&self, existing: &[CaseWidget]) -> ValidationResult {
        unique_key("Key", &self.key, existing)?;
        require("Title", &self.title)?;
        self.validate_width()?;
        match self.widget_type {
            CaseWidgetType::Custom => require(
                "Component",
                self.component_key().unwrap_or_default(),
            ),
            CaseWidgetType::Form => require(
                "Form definition",
                self.form_definition_name().unwrap_or_default(),
            ),
            CaseWidgetType::Table | CaseWidgetType::Collection => require(
                "Collection path",
                self.collection_path().unwrap_or_default(),
            ),
            CaseWidgetType::Fields => Ok(()),
        }
    }

    pub fn validate_width(&self) -> ValidationResult {
        in_range(
            "Width",
            i64::from(self.width),
            i64::from(MIN_WIDGET_WIDTH),
            i64::from(MAX_WIDGET_WIDTH),
        )
    }

    fn str_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(Value::as_str)
    }

    fn field_list(value: Option<&Value>) -> Vec<WidgetField> {
        value
            .and_then(|v| serde_json::from_value::<Vec<WidgetField>>(v.clone()).ok())
            .unwrap_or_default()
    }

    /// Field columns of a `fields` widget
    pub fn field_columns(&self) -> Vec<Vec<WidgetField>> {
        match self.properties.get("columns") {
            Some(Value::Array(columns)) => columns
                .iter()
                .map(|column| Self::field_list(Some(column)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Columns of a `table` widget, or the fields of a `collection` card
    pub fn table_columns(&self) -> Vec<WidgetField> {
        match self.widget_type {
            CaseWidgetType::Collection => Self::field_list(self.properties.get("fields")),
            _ => Self::field_list(self.properties.get("columns")),
        }
    }

    pub fn collection_path(&self) -> Option<&str> {
        self.str_property("collection")
    }

    pub fn default_page_size(&self) -> u32 {
        self.properties
            .get("defaultPageSize")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or(5)
    }

    pub fn component_key(&self) -> Option<&str> {
        self.str_property("componentKey")
    }

    pub fn form_definition_name(&self) -> Option<&str> {
        self.str_property("formDefinitionName")
    }

    pub fn set_property(&mut self, name: &str, value: Value) -> Result<(), ValidationError> {
        if self.properties.is_null() {
            self.properties = Value::Object(serde_json::Map::new());
        }
        let map = self.properties.as_object_mut().ok_or_else(|| {
            ValidationError::Invalid("Widget properties must be an object".to_string())
        })?;
        map.insert(name.to_string(), value);
        Ok(())
    }
}

/// Widget tab configuration of a case definition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetTab {
    pub key: String,
    #[serde(default)]
    pub widgets: Vec<CaseWidget>,
}

impl WidgetTab {
    pub fn widget(&self, key: &str) -> Option<&CaseWidget> {
        self.widgets.iter().find(|w| w.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields_widget() -> CaseWidget {
        serde_json::from_value(json!({
            "key": "customer",
            "title": "Customer",
            "width": 2,
            "type": "fields",
            "properties": {
                "columns": [
                    [{"key": "name", "title": "Name", "value": "doc:customer.name"}],
                    [{"key": "since", "title": "Since", "value": "doc:customer.since",
                      "displayProperties": {"type": "date", "displayTypeParameters": {}}}]
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_fields_columns() {
        let widget = fields_widget();
        let columns = widget.field_columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0][0].value, "doc:customer.name");
        assert_eq!(
            columns[1][0].format(&json!("2023-01-31")),
            "31-01-2023"
        );
        assert!(!widget.high_contrast);
    }

    #[test]
    fn test_typed_accessors() {
        let mut widget = CaseWidget::new("ext", "External", CaseWidgetType::Custom);
        assert_eq!(widget.component_key(), None);
        widget.set_property("componentKey", json!("map")).unwrap();
        assert_eq!(widget.component_key(), Some("map"));

        let table: CaseWidget = serde_json::from_value(json!({
            "key": "orders",
            "title": "Orders",
            "width": 4,
            "type": "table",
            "properties": {"collection": "doc:orders", "defaultPageSize": 10,
                           "columns": [{"key": "id", "value": "id"}]}
        }))
        .unwrap();
        assert_eq!(table.collection_path(), Some("doc:orders"));
        assert_eq!(table.default_page_size(), 10);
        assert_eq!(table.table_columns().len(), 1);
        assert_eq!(fields_widget().default_page_size(), 5);
    }

    #[test]
    fn test_field_values_and_rows() {
        let field = &fields_widget().field_columns()[1][0];
        let by_key = json!({"since": "2020-05-01"});
        assert_eq!(field.render(&by_key), "01-05-2020");
        let by_path = json!({"customer": {"since": "2021-12-24"}});
        assert_eq!(field.render(&by_path), "24-12-2021");
        assert_eq!(field.render(&json!({})), "");

        assert_eq!(widget_rows(&json!([{"id": 1}, {"id": 2}])).len(), 2);
        assert_eq!(widget_rows(&json!({"content": [{"id": 1}], "totalElements": 1})).len(), 1);
        assert!(widget_rows(&json!({"id": 1})).is_empty());
        assert!(widget_rows(&Value::Null).is_empty());
    }

    #[test]
    fn test_width_validation_and_span() {
        let mut widget = fields_widget();
        assert!(widget.validate_width().is_ok());
        widget.width = 0;
        assert!(widget.validate_width().is_err());
        assert_eq!(widget.span(), 1);
        widget.width = 9;
        assert_eq!(
            widget.validate_width(),
            Err(ValidationError::OutOfRange {
                field: "Width",
                min: 1,
                max: 4
            })
        );
        assert_eq!(widget.span(), 4);
    }

    #[test]
    fn test_validate_new_requires_type_properties() {
        let existing = vec![fields_widget()];
        let form = CaseWidget::new("form", "Form", CaseWidgetType::Form);
        assert_eq!(
            form.validate_new(&existing),
            Err(ValidationError::Required {
                field: "Form definition"
            })
        );
        let dup = CaseWidget::new("customer", "Again", CaseWidgetType::Fields);
        assert!(dup.validate_new(&existing).is_err());
        let ok = CaseWidget::new("notes", "Notes", CaseWidgetType::Fields);
        assert!(ok.validate_new(&existing).is_ok());
    }
}
