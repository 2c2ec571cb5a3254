use crate::shared::api_utils::{get_json, put_json, segment};
use contracts::domain::a005_case_widget::WidgetTab;
use serde_json::Value;
use uuid::Uuid;

fn management(name: &str, tab_key: &str) -> String {
    format!(
        "/api/management/v1/case-definition/{}/widget-tab/{}",
        segment(name),
        segment(tab_key)
    )
}

pub async fn fetch_widget_tab(name: &str, tab_key: &str) -> Result<WidgetTab, String> {
    get_json(&management(name, tab_key)).await
}

/// Stores the widget tab as a whole; widget order is the array order.
pub async fn save_widget_tab(name: &str, tab: &WidgetTab) -> Result<(), String> {
    put_json(&management(name, &tab.key), tab).await
}

pub async fn fetch_case_widget_tab(id: Uuid, tab_key: &str) -> Result<WidgetTab, String> {
    get_json(&format!("/api/v1/document/{}/widget-tab/{}", id, segment(tab_key))).await
}

/// Resolved data of one widget for one case.
pub async fn fetch_widget_data(id: Uuid, tab_key: &str, widget_key: &str) -> Result<Value, String> {
    get_json(&format!(
        "/api/v1/document/{}/widget-tab/{}/widget/{}",
        id,
        segment(tab_key),
        segment(widget_key)
    ))
    .await
}
