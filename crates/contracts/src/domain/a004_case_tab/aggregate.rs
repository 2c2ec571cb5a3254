use crate::shared::ordering::Keyed;
use crate::shared::validation::{require, unique_key, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTabType {
    Standard,
    Formio,
    Custom,
    Widgets,
}

impl CaseTabType {
    pub const ALL: [CaseTabType; 4] = [
        CaseTabType::Standard,
        CaseTabType::Formio,
        CaseTabType::Custom,
        CaseTabType::Widgets,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CaseTabType::Standard => "standard",
            CaseTabType::Formio => "formio",
            CaseTabType::Custom => "custom",
            CaseTabType::Widgets => "widgets",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            CaseTabType::Standard => "Standard",
            CaseTabType::Formio => "Form",
            CaseTabType::Custom => "Custom component",
            CaseTabType::Widgets => "Widgets",
        }
    }
}

/// Standard tab content keys
pub const STANDARD_SUMMARY: &str = "summary";
pub const STANDARD_PROGRESS: &str = "progress";
pub const STANDARD_DOCUMENTS: &str = "documents";
pub const STANDARD_NOTES: &str = "notes";

pub const STANDARD_CONTENT_KEYS: [&str; 4] = [
    STANDARD_SUMMARY,
    STANDARD_PROGRESS,
    STANDARD_DOCUMENTS,
    STANDARD_NOTES,
];

/// Tab shown on the detail page of a case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseTab {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub tab_type: CaseTabType,
    pub content_key: String,
    #[serde(default)]
    pub show_tasks: bool,
}

impl Keyed for CaseTab {
    fn key(&self) -> &str {
        &self.key
    }
}

impl CaseTab {
    fn standard(content_key: &str, name: &str) -> Self {
        Self {
            key: content_key.to_string(),
            name: Some(name.to_string()),
            tab_type: CaseTabType::Standard,
            content_key: content_key.to_string(),
            show_tasks: false,
        }
    }

    pub fn title(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.key)
    }

    pub fn content(&self) -> CaseTabContent {
        CaseTabContent::resolve(self.tab_type, &self.content_key)
    }

    pub fn validate_new(&self, existing: &[CaseTab]) -> ValidationResult {
        unique_key("Key", &self.key, existing)?;
        require("Content", &self.content_key)?;
        if self.tab_type == CaseTabType::Standard
            && !STANDARD_CONTENT_KEYS.contains(&self.content_key.as_str())
        {
            return Err(ValidationError::Invalid(format!(
                "Unknown standard tab '{}'",
                self.content_key
            )));
        }
        Ok(())
    }
}

/// What a case tab renders, resolved from its type and content key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseTabContent {
    Summary,
    Progress,
    Documents,
    Notes,
    Form(String),
    Custom(String),
    Widgets(String),
    Unknown(String),
}

impl CaseTabContent {
    pub fn resolve(tab_type: CaseTabType, content_key: &str) -> Self {
        match tab_type {
            CaseTabType::Standard => match content_key {
                STANDARD_SUMMARY => CaseTabContent::Summary,
                STANDARD_PROGRESS => CaseTabContent::Progress,
                STANDARD_DOCUMENTS => CaseTabContent::Documents,
                STANDARD_NOTES => CaseTabContent::Notes,
                other => CaseTabContent::Unknown(other.to_string()),
            },
            CaseTabType::Formio => CaseTabContent::Form(content_key.to_string()),
            CaseTabType::Custom => CaseTabContent::Custom(content_key.to_string()),
            CaseTabType::Widgets => CaseTabContent::Widgets(content_key.to_string()),
        }
    }
}

/// Tabs used when a definition has none configured.
pub fn default_tabs() -> Vec<CaseTab> {
    vec![
        CaseTab::standard(STANDARD_SUMMARY, "Summary"),
        CaseTab::standard(STANDARD_PROGRESS, "Progress"),
        CaseTab::standard(STANDARD_DOCUMENTS, "Documents"),
        CaseTab::standard(STANDARD_NOTES, "Notes"),
    ]
}

/// Configured tabs, or the defaults for an empty configuration.
pub fn effective_tabs(configured: Vec<CaseTab>) -> Vec<CaseTab> {
    if configured.is_empty() {
        default_tabs()
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tab(key: &str, tab_type: CaseTabType, content_key: &str) -> CaseTab {
        CaseTab {
            key: key.to_string(),
            name: None,
            tab_type,
            content_key: content_key.to_string(),
            show_tasks: false,
        }
    }

    #[test]
    fn test_resolve_content() {
        assert_eq!(
            tab("s", CaseTabType::Standard, "summary").content(),
            CaseTabContent::Summary
        );
        assert_eq!(
            tab("n", CaseTabType::Standard, "notes").content(),
            CaseTabContent::Notes
        );
        assert_eq!(
            tab("x", CaseTabType::Standard, "audit").content(),
            CaseTabContent::Unknown("audit".into())
        );
        assert_eq!(
            tab("f", CaseTabType::Formio, "intake-form").content(),
            CaseTabContent::Form("intake-form".into())
        );
        assert_eq!(
            tab("c", CaseTabType::Custom, "map").content(),
            CaseTabContent::Custom("map".into())
        );
        assert_eq!(
            tab("w", CaseTabType::Widgets, "overview").content(),
            CaseTabContent::Widgets("overview".into())
        );
    }

    #[test]
    fn test_default_tabs_only_when_empty() {
        let defaults = effective_tabs(Vec::new());
        let keys: Vec<&str> = defaults.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["summary", "progress", "documents", "notes"]);

        let configured = vec![tab("w", CaseTabType::Widgets, "overview")];
        assert_eq!(effective_tabs(configured.clone()), configured);
    }

    #[test]
    fn test_validate_new_tab() {
        let existing = default_tabs();
        assert!(tab("summary", CaseTabType::Custom, "x")
            .validate_new(&existing)
            .is_err());
        assert!(tab("audit", CaseTabType::Standard, "audit")
            .validate_new(&existing)
            .is_err());
        assert!(tab("form", CaseTabType::Formio, "")
            .validate_new(&existing)
            .is_err());
        assert!(tab("form", CaseTabType::Formio, "intake")
            .validate_new(&existing)
            .is_ok());
    }

    #[test]
    fn test_tab_wire_format() {
        let parsed: CaseTab = serde_json::from_value(json!({
            "key": "docs",
            "name": "Files",
            "type": "standard",
            "contentKey": "documents",
            "showTasks": true
        }))
        .unwrap();
        assert_eq!(parsed.title(), "Files");
        assert_eq!(parsed.content(), CaseTabContent::Documents);
        assert!(parsed.show_tasks);
    }
}
