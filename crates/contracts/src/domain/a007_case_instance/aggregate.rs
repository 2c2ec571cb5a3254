use crate::shared::value_path::value_at;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ============================================================================
// Case instance
// ============================================================================

/// A single case (document) with its JSON content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseInstance {
    pub id: Uuid,
    pub definition_name: String,
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub assignee_full_name: Option<String>,
    #[serde(default)]
    pub internal_status: Option<String>,
    #[serde(default)]
    pub sequence: Option<u64>,
    #[serde(default)]
    pub content: Value,
}

impl CaseInstance {
    pub fn is_assigned(&self) -> bool {
        self.assignee_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Value at a `doc:` path inside the content, or a `case:` property of
    /// the case itself.
    pub fn lookup(&self, path: &str) -> Option<Value> {
        if let Some(property) = path.strip_prefix("case:") {
            return match property {
                "id" => Some(Value::String(self.id.to_string())),
                "createdOn" => Some(Value::String(self.created_on.to_rfc3339())),
                "createdBy" => self.created_by.clone().map(Value::String),
                "assigneeFullName" => self.assignee_full_name.clone().map(Value::String),
                "sequence" => self.sequence.map(Value::from),
                "internalStatus" => self.internal_status.clone().map(Value::String),
                _ => None,
            };
        }
        value_at(&self.content, path).cloned()
    }

    /// Short reference shown in tab titles, e.g. `permit #12`
    pub fn reference(&self) -> String {
        match self.sequence {
            Some(sequence) => format!("{} #{}", self.definition_name, sequence),
            None => {
                let id = self.id.to_string();
                format!("{} {}", self.definition_name, &id[..8])
            }
        }
    }
}

// ============================================================================
// Case list
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseListItem {
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

/// Row of the case search result: one value per configured column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseListRow {
    pub id: Uuid,
    #[serde(default)]
    pub items: Vec<CaseListItem>,
}

impl CaseListRow {
    pub fn value(&self, key: &str) -> &Value {
        self.items
            .iter()
            .find(|item| item.key == key)
            .map(|item| &item.value)
            .unwrap_or(&Value::Null)
    }
}

// ============================================================================
// Assignment
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateUser {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CandidateUser {
    pub fn full_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.email.clone().unwrap_or_else(|| self.id.clone())
        } else {
            name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeRequest {
    pub assignee_id: String,
}

// ============================================================================
// Progress
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTask {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: Option<DateTime<Utc>>,
}

impl ProcessTask {
    pub fn is_completed(&self) -> bool {
        self.completed.is_some()
    }
}

/// Process instance running for a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseProcess {
    pub id: String,
    pub process_name: String,
    pub started_on: DateTime<Utc>,
    #[serde(default)]
    pub ended_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tasks: Vec<ProcessTask>,
}

impl CaseProcess {
    pub fn is_active(&self) -> bool {
        self.ended_on.is_none()
    }

    /// Share of completed tasks, 0.0..=1.0. An ended process counts as done.
    pub fn progress(&self) -> f64 {
        if !self.is_active() {
            return 1.0;
        }
        if self.tasks.is_empty() {
            return 0.0;
        }
        let done = self.tasks.iter().filter(|t| t.is_completed()).count();
        done as f64 / self.tasks.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn instance() -> CaseInstance {
        serde_json::from_value(json!({
            "id": "6f1f7a3e-1c1a-4c7e-9b4a-2f6f0b8c9d10",
            "definitionName": "permit",
            "createdOn": "2024-05-01T08:30:00Z",
            "sequence": 12,
            "content": {"applicant": {"name": "Ann"}}
        }))
        .unwrap()
    }

    #[test]
    fn test_lookup_doc_and_case_paths() {
        let case = instance();
        assert_eq!(case.lookup("doc:applicant.name"), Some(json!("Ann")));
        assert_eq!(case.lookup("case:sequence"), Some(json!(12)));
        assert_eq!(case.lookup("case:assigneeFullName"), None);
        assert_eq!(case.lookup("doc:missing"), None);
        assert!(!case.is_assigned());
        assert_eq!(case.reference(), "permit #12");
    }

    #[test]
    fn test_reference_without_sequence() {
        let mut case = instance();
        case.sequence = None;
        assert_eq!(case.reference(), "permit 6f1f7a3e");
    }

    #[test]
    fn test_row_value() {
        let row: CaseListRow = serde_json::from_value(json!({
            "id": "6f1f7a3e-1c1a-4c7e-9b4a-2f6f0b8c9d10",
            "items": [{"key": "name", "value": "Ann"}]
        }))
        .unwrap();
        assert_eq!(row.value("name"), &json!("Ann"));
        assert!(row.value("other").is_null());
    }

    #[test]
    fn test_candidate_full_name() {
        let user = CandidateUser {
            id: "u1".into(),
            first_name: Some("Ann".into()),
            last_name: Some("Smith".into()),
            email: None,
        };
        assert_eq!(user.full_name(), "Ann Smith");
        let user = CandidateUser {
            id: "u2".into(),
            first_name: None,
            last_name: None,
            email: Some("bob@example.org".into()),
        };
        assert_eq!(user.full_name(), "bob@example.org");
    }

    #[test]
    fn test_progress() {
        let mut process: CaseProcess = serde_json::from_value(json!({
            "id": "p1",
            "processName": "Intake",
            "startedOn": "2024-05-01T08:30:00Z",
            "tasks": [
                {"id": "t1", "name": "Check", "completed": "2024-05-02T08:30:00Z"},
                {"id": "t2", "name": "Approve"}
            ]
        }))
        .unwrap();
        assert!((process.progress() - 0.5).abs() < f64::EPSILON);
        process.tasks.clear();
        assert_eq!(process.progress(), 0.0);
        process.ended_on = Some(process.started_on);
        assert_eq!(process.progress(), 1.0);
    }
}
