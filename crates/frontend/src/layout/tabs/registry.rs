//! Tab content registry - маппинг ключа таба → View.
//!
//! Ключ разбирается в `TabRoute`, дальше обычный `match`.

use super::route::TabRoute;
use crate::domain::a001_case_definition::ui::details::CaseDefinitionDetails;
use crate::domain::a001_case_definition::ui::list::CaseDefinitionList;
use crate::domain::a007_case_instance::ui::details::CaseDetails;
use crate::domain::a007_case_instance::ui::list::CaseList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// `tabs_store` нужен detail-views: они обновляют заголовок таба и
/// помечают его как изменённый.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let tab_key = key.to_string();

    match TabRoute::parse(key) {
        TabRoute::DefinitionList => view! { <CaseDefinitionList /> }.into_any(),
        TabRoute::DefinitionDetail(name) => view! {
            <CaseDefinitionDetails name=name tab_key=tab_key tabs_store=tabs_store />
        }
        .into_any(),
        TabRoute::CaseList(definition_name) => view! {
            <CaseList definition_name=definition_name />
        }
        .into_any(),
        TabRoute::CaseDetail { definition, id } => view! {
            <CaseDetails definition_name=definition id=id tab_key=tab_key tabs_store=tabs_store />
        }
        .into_any(),
        TabRoute::Unknown(key) => {
            log::warn!("Unknown tab key: {}", key);
            view! { <div class="placeholder">{format!("Nothing to show for '{}'", key)}</div> }
                .into_any()
        }
    }
}
