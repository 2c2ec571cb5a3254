use crate::shared::api_utils::{delete, get_json, post_no_content, put_json, segment};
use contracts::domain::a006_case_status::InternalCaseStatus;

fn base(name: &str) -> String {
    format!("/api/management/v1/case-definition/{}/internal-status", segment(name))
}

pub async fn fetch_statuses(name: &str) -> Result<Vec<InternalCaseStatus>, String> {
    get_json(&base(name)).await
}

/// Statuses as seen by case workers (badges in the case header).
pub async fn fetch_case_statuses(name: &str) -> Result<Vec<InternalCaseStatus>, String> {
    get_json(&format!("/api/v1/case-definition/{}/internal-status", segment(name))).await
}

pub async fn create_status(name: &str, status: &InternalCaseStatus) -> Result<(), String> {
    post_no_content(&base(name), status).await
}

pub async fn save_statuses(name: &str, statuses: &[InternalCaseStatus]) -> Result<(), String> {
    put_json(&base(name), &statuses).await
}

pub async fn delete_status(name: &str, key: &str) -> Result<(), String> {
    delete(&format!("{}/{}", base(name), segment(key))).await
}
