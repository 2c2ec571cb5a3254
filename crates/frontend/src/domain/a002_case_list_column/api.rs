use crate::shared::api_utils::{delete, get_json, post_no_content, put_json, segment};
use contracts::domain::a002_case_list_column::CaseListColumn;

fn base(name: &str) -> String {
    format!("/api/management/v1/case/{}/list-column", segment(name))
}

pub async fn fetch_columns(name: &str) -> Result<Vec<CaseListColumn>, String> {
    get_json(&base(name)).await
}

pub async fn create_column(name: &str, column: &CaseListColumn) -> Result<(), String> {
    post_no_content(&base(name), column).await
}

/// Replaces the whole column sequence; the body order is the new order.
pub async fn save_columns(name: &str, columns: &[CaseListColumn]) -> Result<(), String> {
    put_json(&base(name), &columns).await
}

pub async fn delete_column(name: &str, key: &str) -> Result<(), String> {
    delete(&format!("{}/{}", base(name), segment(key))).await
}
