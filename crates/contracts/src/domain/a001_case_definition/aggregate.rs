use crate::shared::validation::{require, ValidationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Case definition
// ============================================================================

/// Definition (schema) of a class of cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDefinition {
    pub name: String,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read_only: bool,
}

impl CaseDefinition {
    /// Human readable name: configured title or the technical name.
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.name)
    }

    pub fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self
                .title
                .as_ref()
                .map(|t| t.to_lowercase().contains(&filter))
                .unwrap_or(false)
    }
}

/// Per-definition behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSettings {
    #[serde(default)]
    pub can_have_assignee: bool,
    #[serde(default)]
    pub auto_assign_tasks: bool,
}

impl CaseSettings {
    /// Automatic task assignment only makes sense when cases have an assignee.
    pub fn normalized(self) -> Self {
        Self {
            can_have_assignee: self.can_have_assignee,
            auto_assign_tasks: self.can_have_assignee && self.auto_assign_tasks,
        }
    }
}

// ============================================================================
// Process links
// ============================================================================

/// Process definition linked to a case definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessLink {
    pub process_definition_key: String,
    #[serde(default)]
    pub process_name: Option<String>,
    #[serde(default)]
    pub can_initialize_document: bool,
    #[serde(default)]
    pub startable_by_user: bool,
}

impl ProcessLink {
    pub fn display_name(&self) -> &str {
        self.process_name
            .as_deref()
            .unwrap_or(&self.process_definition_key)
    }
}

/// DTO для создания связи с процессом
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessLinkRequest {
    pub process_definition_key: String,
    pub can_initialize_document: bool,
    pub startable_by_user: bool,
}

impl ProcessLinkRequest {
    pub fn validate(&self, existing: &[ProcessLink]) -> ValidationResult {
        require("Process", &self.process_definition_key)?;
        if existing
            .iter()
            .any(|link| link.process_definition_key == self.process_definition_key)
        {
            return Err(crate::shared::validation::ValidationError::Duplicate {
                field: "Process",
                value: self.process_definition_key.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(name: &str, title: Option<&str>) -> CaseDefinition {
        CaseDefinition {
            name: name.to_string(),
            version: 1,
            title: title.map(str::to_string),
            created_on: None,
            read_only: false,
        }
    }

    #[test]
    fn test_display_name_falls_back_to_name() {
        assert_eq!(definition("leningen", None).display_name(), "leningen");
        assert_eq!(definition("leningen", Some(" ")).display_name(), "leningen");
        assert_eq!(definition("leningen", Some("Loans")).display_name(), "Loans");
    }

    #[test]
    fn test_filter_checks_name_and_title() {
        let d = definition("bezwaar", Some("Objection"));
        assert!(d.matches_filter("BEZ"));
        assert!(d.matches_filter("object"));
        assert!(!d.matches_filter("permit"));
    }

    #[test]
    fn test_settings_normalized() {
        let s = CaseSettings {
            can_have_assignee: false,
            auto_assign_tasks: true,
        };
        assert!(!s.normalized().auto_assign_tasks);
    }

    #[test]
    fn test_definition_deserializes_with_defaults() {
        let d: CaseDefinition = serde_json::from_str(r#"{"name":"permit"}"#).unwrap();
        assert_eq!(d.version, 0);
        assert!(!d.read_only);
    }

    #[test]
    fn test_process_link_request_rejects_duplicates() {
        let existing = vec![ProcessLink {
            process_definition_key: "intake".into(),
            process_name: None,
            can_initialize_document: true,
            startable_by_user: true,
        }];
        let req = ProcessLinkRequest {
            process_definition_key: "intake".into(),
            ..Default::default()
        };
        assert!(req.validate(&existing).is_err());
        let req = ProcessLinkRequest {
            process_definition_key: "review".into(),
            ..Default::default()
        };
        assert!(req.validate(&existing).is_ok());
    }
}
