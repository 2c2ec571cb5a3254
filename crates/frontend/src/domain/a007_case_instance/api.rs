//! REST calls of the dossier side: case search, one case, assignment and
//! progress. Configuration needed to render a case list is fetched through
//! the non-management endpoints.

use crate::shared::api_utils::{get_json, post_empty, post_json, post_no_content, segment};
use contracts::domain::a001_case_definition::CaseSettings;
use contracts::domain::a002_case_list_column::CaseListColumn;
use contracts::domain::a003_case_search_field::{AdvancedSearchRequest, SearchField};
use contracts::domain::a004_case_tab::CaseTab;
use contracts::domain::a007_case_instance::{
    AssigneeRequest, CandidateUser, CaseInstance, CaseListRow, CaseProcess,
};
use contracts::shared::page::{Page, PageRequest, SortState};
use uuid::Uuid;

pub async fn search_cases(
    name: &str,
    request: &AdvancedSearchRequest,
    page: PageRequest,
    sort: Option<&SortState>,
) -> Result<Page<CaseListRow>, String> {
    post_json(
        &format!(
            "/api/v1/search/list-column/{}?{}",
            segment(name),
            page.to_query(sort)
        ),
        request,
    )
    .await
}

pub async fn fetch_list_columns(name: &str) -> Result<Vec<CaseListColumn>, String> {
    get_json(&format!("/api/v1/case/{}/list-column", segment(name))).await
}

pub async fn fetch_search_fields(name: &str) -> Result<Vec<SearchField>, String> {
    get_json(&format!("/api/v1/document-search/{}/fields", segment(name))).await
}

pub async fn fetch_case_tabs(name: &str) -> Result<Vec<CaseTab>, String> {
    get_json(&format!("/api/v1/case-definition/{}/tab", segment(name))).await
}

pub async fn fetch_case_settings(name: &str) -> Result<CaseSettings, String> {
    let settings: CaseSettings =
        get_json(&format!("/api/v1/case/{}/settings", segment(name))).await?;
    Ok(settings.normalized())
}

pub async fn fetch_case(id: Uuid) -> Result<CaseInstance, String> {
    get_json(&format!("/api/v1/document/{}", id)).await
}

pub async fn fetch_candidate_users(id: Uuid) -> Result<Vec<CandidateUser>, String> {
    get_json(&format!("/api/v1/document/{}/candidate-user", id)).await
}

pub async fn assign(id: Uuid, assignee_id: &str) -> Result<(), String> {
    let request = AssigneeRequest {
        assignee_id: assignee_id.to_string(),
    };
    post_no_content(&format!("/api/v1/document/{}/assign", id), &request).await
}

pub async fn unassign(id: Uuid) -> Result<(), String> {
    post_empty(&format!("/api/v1/document/{}/unassign", id)).await
}

pub async fn fetch_processes(id: Uuid) -> Result<Vec<CaseProcess>, String> {
    get_json(&format!("/api/v1/document/{}/process", id)).await
}
