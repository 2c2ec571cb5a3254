//! Tab labels - заголовки табов по ключу.
//!
//! Заголовки detail-табов уточняются после загрузки данных
//! через `AppGlobalContext::update_tab_title`.

use super::route::TabRoute;

pub const DEFINITIONS_LABEL: &str = "Case definitions";

/// Заголовок таба до загрузки данных. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    match TabRoute::parse(key) {
        TabRoute::DefinitionList => DEFINITIONS_LABEL.to_string(),
        TabRoute::DefinitionDetail(name) => detail_tab_label("Definition", &name),
        TabRoute::CaseList(name) => detail_tab_label("Cases", &name),
        TabRoute::CaseDetail { definition, id } => {
            let short = id.simple().to_string();
            detail_tab_label(&definition, &short[..8])
        }
        TabRoute::Unknown(key) => key,
    }
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_case_definition"), "Case definitions");
        assert_eq!(tab_label_for_key("a007_case_list_permit"), "Cases · permit");
        assert_eq!(
            tab_label_for_key("a007_case_detail_permit_6f1c1c9e-2a33-4d8e-9a57-4b1f0b7c2d11"),
            "permit · 6f1c1c9e"
        );
        assert_eq!(tab_label_for_key("nope"), "nope");
    }
}
