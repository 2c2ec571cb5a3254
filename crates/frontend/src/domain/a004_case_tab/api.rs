use crate::shared::api_utils::{delete, get_json, post_no_content, put_json, segment};
use contracts::domain::a004_case_tab::CaseTab;

fn base(name: &str) -> String {
    format!("/api/management/v1/case-definition/{}/tab", segment(name))
}

pub async fn fetch_tabs(name: &str) -> Result<Vec<CaseTab>, String> {
    get_json(&base(name)).await
}

pub async fn create_tab(name: &str, tab: &CaseTab) -> Result<(), String> {
    post_no_content(&base(name), tab).await
}

pub async fn save_tabs(name: &str, tabs: &[CaseTab]) -> Result<(), String> {
    put_json(&base(name), &tabs).await
}

pub async fn delete_tab(name: &str, key: &str) -> Result<(), String> {
    delete(&format!("{}/{}", base(name), segment(key))).await
}
