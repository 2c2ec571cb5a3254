use crate::shared::validation::{max_length, require, ValidationResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_NOTE_LENGTH: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseNote {
    pub id: Uuid,
    pub content: String,
    #[serde(default)]
    pub created_by_user_full_name: String,
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoteRequest {
    pub content: String,
}

impl NoteRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        require("Note", &self.content)?;
        max_length("Note", &self.content, MAX_NOTE_LENGTH)
    }
}

/// Newest notes first.
pub fn sort_newest_first(notes: &mut [CaseNote]) {
    notes.sort_by(|a, b| b.created_date.cmp(&a.created_date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::ValidationError;
    use serde_json::json;

    #[test]
    fn test_note_validation() {
        assert!(NoteRequest::new("Called the applicant").validate().is_ok());
        assert_eq!(
            NoteRequest::new("   ").validate(),
            Err(ValidationError::Required { field: "Note" })
        );
        let long = "x".repeat(MAX_NOTE_LENGTH + 1);
        assert_eq!(
            NoteRequest::new(long).validate().map_err(|e| e.to_string()),
            Err("Note must not exceed 10000 characters".to_string())
        );
        assert!(NoteRequest::new("x".repeat(MAX_NOTE_LENGTH)).validate().is_ok());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut notes: Vec<CaseNote> = serde_json::from_value(json!([
            {"id": "00000000-0000-0000-0000-000000000001", "content": "old",
             "createdByUserFullName": "Ann", "createdDate": "2024-01-01T00:00:00Z"},
            {"id": "00000000-0000-0000-0000-000000000002", "content": "new",
             "createdByUserFullName": "Bob", "createdDate": "2024-02-01T00:00:00Z"}
        ]))
        .unwrap();
        sort_newest_first(&mut notes);
        assert_eq!(notes[0].content, "new");
    }
}
