use crate::domain::a001_case_definition::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, TabRoute};
use crate::shared::components::{ErrorBox, PageHeader};
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput};
use contracts::domain::a001_case_definition::CaseDefinition;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CaseDefinitionList() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (items, set_items) = signal::<Vec<CaseDefinition>>(Vec::new());
    let (filter, set_filter) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_definitions().await {
                Ok(v) => {
                    log::debug!("Loaded {} case definitions", v.len());
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let visible = Memo::new(move |_| items.with(|all| filter_list(all, &filter.get())));

    let open_details = move |definition: &CaseDefinition| {
        let key = TabRoute::DefinitionDetail(definition.name.clone()).key();
        tabs_store.open_tab(&key, &detail_tab_label("Definition", definition.display_name()));
    };
    let open_cases = move |definition: &CaseDefinition| {
        let key = TabRoute::CaseList(definition.name.clone()).key();
        tabs_store.open_tab(&key, definition.display_name());
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Case definitions".to_string()>
                <SearchInput
                    on_change=Callback::new(move |value: String| set_filter.set(value))
                    placeholder="Filter by name or title".to_string()
                />
                <button class="button button--secondary" on:click=move |_| fetch() disabled=move || loading.get()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBox error=error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"Version"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible.get();
                            if rows.is_empty() && !loading.get() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="5">
                                            "No case definitions"
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            rows.into_iter().map(|row| {
                                let row_for_click = row.clone();
                                let row_for_cases = row.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open_details(&row_for_click)>
                                        <td class="table__cell">{row.name.clone()}</td>
                                        <td class="table__cell">{row.title.clone().unwrap_or_default()}</td>
                                        <td class="table__cell">{row.version}</td>
                                        <td class="table__cell">{format_optional(row.created_on.as_ref())}</td>
                                        <td class="table__cell">
                                            {row.read_only.then(|| view! { <span class="badge badge--gray">"read-only"</span> })}
                                            <button
                                                class="button button--ghost button--smallall"
                                                title="Open cases"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    open_cases(&row_for_cases);
                                                }
                                            >
                                                {icon("briefcase")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
