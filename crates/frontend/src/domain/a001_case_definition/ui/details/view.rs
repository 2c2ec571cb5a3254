use super::general::GeneralSection;
use super::view_model::{CaseDefinitionDetailsViewModel, DefinitionSection};
use crate::domain::a002_case_list_column::ui::ColumnsEditor;
use crate::domain::a003_case_search_field::ui::SearchFieldsEditor;
use crate::domain::a004_case_tab::ui::CaseTabsEditor;
use crate::domain::a005_case_widget::ui::WidgetsEditor;
use crate::domain::a006_case_status::ui::StatusesEditor;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabRoute;
use crate::shared::components::{ErrorBox, PageHeader};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use leptos::prelude::*;

#[component]
pub fn CaseDefinitionDetails(
    name: String,
    tab_key: String,
    tabs_store: AppGlobalContext,
) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let vm = CaseDefinitionDetailsViewModel::new(name.clone(), tab_key, tabs_store);
    vm.load();

    let on_dirty_change = Callback::new(move |dirty: bool| vm.set_dirty(dirty));
    let definition_name = StoredValue::new(name);

    let title = Signal::derive(move || {
        vm.definition
            .get()
            .map(|d| d.display_name().to_string())
            .unwrap_or_else(|| definition_name.get_value())
    });
    let subtitle = Signal::derive(move || {
        vm.definition
            .get()
            .map(|d| format!("{} · version {}", d.name, d.version))
    });

    let open_cases = move |_| {
        let key = TabRoute::CaseList(definition_name.get_value()).key();
        tabs_store.open_tab(&key, &title.get_untracked());
    };

    view! {
        <div class="page definition-details">
            <PageHeader title=title subtitle=subtitle>
                {move || vm.definition.get().filter(|d| d.read_only).map(|_| view! {
                    <span class="badge badge--gray">"read-only"</span>
                })}
                <button class="button button--secondary" on:click=open_cases>
                    {icon("briefcase")}
                    "Open cases"
                </button>
            </PageHeader>

            <ErrorBox error=vm.error />

            <div class="section-nav">
                {DefinitionSection::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class="section-nav__item"
                                class:section-nav__item--active=move || vm.section.get() == section
                                on:click=move |_| vm.request_section(section, modal_stack)
                            >
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="section-content">
                {move || {
                    let name = definition_name.get_value();
                    match vm.section.get() {
                        DefinitionSection::General => view! {
                            <GeneralSection definition_name=name on_dirty_change=on_dirty_change />
                        }
                        .into_any(),
                        DefinitionSection::Columns => view! {
                            <ColumnsEditor definition_name=name on_dirty_change=on_dirty_change />
                        }
                        .into_any(),
                        DefinitionSection::SearchFields => view! {
                            <SearchFieldsEditor definition_name=name on_dirty_change=on_dirty_change />
                        }
                        .into_any(),
                        DefinitionSection::Tabs => view! {
                            <CaseTabsEditor definition_name=name on_dirty_change=on_dirty_change />
                        }
                        .into_any(),
                        DefinitionSection::Statuses => view! {
                            <StatusesEditor definition_name=name on_dirty_change=on_dirty_change />
                        }
                        .into_any(),
                        DefinitionSection::Widgets => view! {
                            <WidgetsEditor definition_name=name on_dirty_change=on_dirty_change />
                        }
                        .into_any(),
                    }
                }}
            </div>
        </div>
    }
}
