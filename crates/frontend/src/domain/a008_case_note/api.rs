use crate::shared::api_utils::{delete, get_json, post_json};
use contracts::domain::a008_case_note::{sort_newest_first, CaseNote, NoteRequest};
use uuid::Uuid;

pub async fn fetch_notes(case_id: Uuid) -> Result<Vec<CaseNote>, String> {
    let mut notes: Vec<CaseNote> = get_json(&format!("/api/v1/document/{}/note", case_id)).await?;
    sort_newest_first(&mut notes);
    Ok(notes)
}

pub async fn create_note(case_id: Uuid, request: &NoteRequest) -> Result<CaseNote, String> {
    post_json(&format!("/api/v1/document/{}/note", case_id), request).await
}

pub async fn delete_note(note_id: Uuid) -> Result<(), String> {
    delete(&format!("/api/v1/note/{}", note_id)).await
}
