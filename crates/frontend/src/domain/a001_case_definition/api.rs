//! REST calls for case definitions, their settings and process links.

use crate::shared::api_utils::{delete, get_json, patch_json, post_json, segment};
use contracts::domain::a001_case_definition::{
    CaseDefinition, CaseSettings, ProcessLink, ProcessLinkRequest,
};

const MANAGEMENT: &str = "/api/management/v1";

pub async fn fetch_definitions() -> Result<Vec<CaseDefinition>, String> {
    get_json(&format!("{}/case-definition", MANAGEMENT)).await
}

pub async fn fetch_definition(name: &str) -> Result<CaseDefinition, String> {
    get_json(&format!("{}/case-definition/{}", MANAGEMENT, segment(name))).await
}

pub async fn fetch_settings(name: &str) -> Result<CaseSettings, String> {
    let settings: CaseSettings =
        get_json(&format!("{}/case/{}/settings", MANAGEMENT, segment(name))).await?;
    Ok(settings.normalized())
}

pub async fn update_settings(name: &str, settings: &CaseSettings) -> Result<(), String> {
    patch_json(
        &format!("{}/case/{}/settings", MANAGEMENT, segment(name)),
        &settings.normalized(),
    )
    .await
}

pub async fn fetch_process_links(name: &str) -> Result<Vec<ProcessLink>, String> {
    get_json(&format!(
        "{}/case-definition/{}/process-link",
        MANAGEMENT,
        segment(name)
    ))
    .await
}

pub async fn create_process_link(
    name: &str,
    request: &ProcessLinkRequest,
) -> Result<ProcessLink, String> {
    post_json(
        &format!("{}/case-definition/{}/process-link", MANAGEMENT, segment(name)),
        request,
    )
    .await
}

pub async fn delete_process_link(name: &str, process_definition_key: &str) -> Result<(), String> {
    delete(&format!(
        "{}/case-definition/{}/process-link/{}",
        MANAGEMENT,
        segment(name),
        segment(process_definition_key)
    ))
    .await
}
