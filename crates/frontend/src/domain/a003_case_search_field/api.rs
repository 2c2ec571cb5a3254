use crate::shared::api_utils::{delete, get_json, post_no_content, put_json, segment};
use contracts::domain::a003_case_search_field::SearchField;

fn base(name: &str) -> String {
    format!("/api/management/v1/document-search/{}/fields", segment(name))
}

pub async fn fetch_fields(name: &str) -> Result<Vec<SearchField>, String> {
    get_json(&base(name)).await
}

pub async fn create_field(name: &str, field: &SearchField) -> Result<(), String> {
    post_no_content(&base(name), field).await
}

pub async fn save_fields(name: &str, fields: &[SearchField]) -> Result<(), String> {
    put_json(&base(name), &fields).await
}

pub async fn delete_field(name: &str, key: &str) -> Result<(), String> {
    delete(&format!("{}/{}", base(name), segment(key))).await
}
