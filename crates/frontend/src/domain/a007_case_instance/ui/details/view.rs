use super::custom::render_custom_component;
use super::header::CaseHeader;
use super::tabs::{CaseProgress, CaseSummary, OpenTasks};
use super::view_model::CaseDetailsViewModel;
use crate::domain::a005_case_widget::ui::CaseWidgetTab;
use crate::domain::a008_case_note::ui::CaseNotes;
use crate::domain::a009_case_document::ui::CaseDocuments;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ErrorBox;
use contracts::domain::a004_case_tab::{CaseTab, CaseTabContent};
use leptos::prelude::*;
use uuid::Uuid;

fn render_tab(tab: &CaseTab, vm: CaseDetailsViewModel) -> AnyView {
    let id = vm.id;
    match tab.content() {
        CaseTabContent::Summary => view! { <CaseSummary case=vm.case /> }.into_any(),
        CaseTabContent::Progress => view! { <CaseProgress case_id=id /> }.into_any(),
        CaseTabContent::Documents => view! { <CaseDocuments case_id=id /> }.into_any(),
        CaseTabContent::Notes => view! { <CaseNotes case_id=id /> }.into_any(),
        CaseTabContent::Widgets(tab_key) => view! { <CaseWidgetTab case_id=id tab_key=tab_key /> }.into_any(),
        CaseTabContent::Custom(key) => render_custom_component(&key, id),
        CaseTabContent::Form(form) => view! {
            <div class="placeholder">
                {format!("Form '{}' is displayed by the form viewer", form)}
            </div>
        }
        .into_any(),
        CaseTabContent::Unknown(key) => {
            log::warn!("Case tab '{}' has unknown content '{}'", tab.key, key);
            view! { <div class="placeholder">{format!("Unknown tab content '{}'", key)}</div> }
                .into_any()
        }
    }
}

#[component]
pub fn CaseDetails(
    definition_name: String,
    id: Uuid,
    tab_key: String,
    tabs_store: AppGlobalContext,
) -> impl IntoView {
    let vm = CaseDetailsViewModel::new(definition_name, id, tab_key, tabs_store);
    vm.load();

    view! {
        <div class="page case-details">
            <CaseHeader vm=vm />
            <ErrorBox error=vm.error />

            <div class="section-nav">
                <For
                    each=move || vm.tabs.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        let key = tab.key.clone();
                        let active_key = tab.key.clone();
                        view! {
                            <button
                                class="section-nav__item"
                                class:section-nav__item--active=move || vm.active_tab.get().as_deref() == Some(active_key.as_str())
                                on:click=move |_| vm.active_tab.set(Some(key.clone()))
                            >
                                {tab.title().to_string()}
                            </button>
                        }
                    }
                />
            </div>

            {move || vm.active().map(|tab| {
                let show_tasks = tab.show_tasks;
                view! {
                    <div class="case-tab" class:case-tab--with-tasks=show_tasks>
                        <div class="case-tab__content">{render_tab(&tab, vm)}</div>
                        {show_tasks.then(|| view! { <OpenTasks case_id=id /> })}
                    </div>
                }
            })}
        </div>
    }
}
