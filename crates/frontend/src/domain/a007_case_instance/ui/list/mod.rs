mod search_panel;
pub mod state;

use crate::domain::a007_case_instance::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, TabRoute};
use crate::shared::components::{ErrorBox, FilterPanel, FilterTag, PageHeader, PaginationControls};
use crate::shared::config::config;
use crate::shared::icons::icon;
use contracts::domain::a001_case_definition::CaseSettings;
use contracts::domain::a002_case_list_column::CaseListColumn;
use contracts::domain::a003_case_search_field::{
    build_search_request, AssigneeFilter, SearchField, SearchFieldValue,
};
use contracts::domain::a007_case_instance::CaseListRow;
use contracts::shared::page::{SortOrder, SortState};
use leptos::prelude::*;
use search_panel::SearchFieldInput;
use state::{create_state, filter_label};
use std::collections::HashMap;
use std::sync::Arc;

/// Cases of one definition with the configured columns and search fields.
#[component]
pub fn CaseList(definition_name: String) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let list_config = config().case_list;
    let name = StoredValue::new(definition_name);

    let state = create_state(list_config.page_size);
    let columns = RwSignal::new(Vec::<CaseListColumn>::new());
    let fields = RwSignal::new(Vec::<SearchField>::new());
    let settings = RwSignal::new(CaseSettings::default());
    let rows = RwSignal::new(Vec::<CaseListRow>::new());
    let draft = RwSignal::new(HashMap::<String, SearchFieldValue>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let is_filter_expanded = RwSignal::new(false);

    let load = move || {
        let (request, page, sort) = state.with_untracked(|s| {
            let request = fields.with_untracked(|f| build_search_request(f, &s.values, s.assignee_filter));
            (request, s.page_request(), s.sort.clone())
        });
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::search_cases(&name.get_value(), &request, page, sort.as_ref()).await {
                Ok(result) => {
                    log::debug!(
                        "Case search '{}': {} of {}",
                        name.get_value(),
                        result.content.len(),
                        result.total_elements
                    );
                    state.update(|s| {
                        s.total_count = result.total_elements;
                        s.total_pages = result.total_pages;
                        s.is_loaded = true;
                    });
                    rows.set(result.content);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };

    wasm_bindgen_futures::spawn_local(async move {
        let definition = name.get_value();
        match api::fetch_list_columns(&definition).await {
            Ok(loaded) => {
                state.update(|s| s.apply_default_sort(&loaded));
                columns.set(loaded);
            }
            Err(e) => {
                error.set(Some(e));
                return;
            }
        }
        match api::fetch_search_fields(&definition).await {
            Ok(loaded) => fields.set(loaded),
            Err(e) => log::warn!("Search fields of '{}' unavailable: {}", definition, e),
        }
        match api::fetch_case_settings(&definition).await {
            Ok(loaded) => settings.set(loaded),
            Err(e) => log::warn!("Settings of '{}' unavailable: {}", definition, e),
        }
        load();
    });

    let apply_search = move || {
        let values = draft.get_untracked();
        state.update(|s| {
            s.values = values;
            s.page = 0;
        });
        load();
    };
    let clear_search = move || {
        draft.set(HashMap::new());
        state.update(|s| {
            s.values.clear();
            s.assignee_filter = AssigneeFilter::All;
            s.page = 0;
        });
        load();
    };
    let remove_value = move |key: String| {
        draft.update(|d| {
            d.remove(&key);
        });
        state.update(|s| {
            s.values.remove(&key);
            s.page = 0;
        });
        load();
    };
    let set_assignee = move |filter: AssigneeFilter| {
        state.update(|s| {
            s.assignee_filter = filter;
            s.page = 0;
        });
        load();
    };
    let toggle_sort = move |key: String| {
        state.update(|s| {
            s.sort = Some(SortState::toggle(s.sort.as_ref(), &key));
            s.page = 0;
        });
        load();
    };

    let open_case = move |row: &CaseListRow| {
        let key = TabRoute::CaseDetail {
            definition: name.get_value(),
            id: row.id,
        }
        .key();
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let active_filters = Signal::derive(move || state.with(|s| s.active_filters()));
    let title = Signal::derive(move || format!("Cases · {}", name.get_value()));
    let page_size_options = list_config.page_size_options.clone();

    let pagination: ChildrenFn = Arc::new(move || {
        view! {
            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page| {
                    state.update(|s| s.page = page);
                    load();
                })
                on_page_size_change=Callback::new(move |size| {
                    state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    });
                    load();
                })
                page_size_options=page_size_options.clone()
            />
        }
        .into_any()
    });

    let filter_content: ChildrenFn = Arc::new(move || {
        view! {
            <div class="search-panel">
                <Show when=move || settings.get().can_have_assignee>
                    <div class="form-group search-field">
                        <label>"Assignee"</label>
                        <select on:change=move |ev| {
                            let filter = match event_target_value(&ev).as_str() {
                                "MINE" => AssigneeFilter::Mine,
                                "OPEN" => AssigneeFilter::Open,
                                _ => AssigneeFilter::All,
                            };
                            set_assignee(filter);
                        }>
                            {[AssigneeFilter::All, AssigneeFilter::Mine, AssigneeFilter::Open]
                                .into_iter()
                                .map(|f| {
                                    let value = match f {
                                        AssigneeFilter::All => "ALL",
                                        AssigneeFilter::Mine => "MINE",
                                        AssigneeFilter::Open => "OPEN",
                                    };
                                    view! {
                                        <option value=value selected=move || state.with(|s| s.assignee_filter == f)>
                                            {f.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </Show>
                <For
                    each=move || fields.get()
                    key=|field| field.key.clone()
                    children=move |field| view! { <SearchFieldInput field=field draft=draft /> }
                />
                <div class="search-panel__actions">
                    <button class="button button--primary" on:click=move |_| apply_search()>
                        {icon("search")}
                        "Search"
                    </button>
                    <button class="button button--secondary" on:click=move |_| clear_search()>
                        "Clear"
                    </button>
                </div>
            </div>
        }
        .into_any()
    });

    let filter_tags: ChildrenFn = Arc::new(move || {
        view! {
            {move || {
                let applied = state.with(|s| s.values.clone());
                fields
                    .get()
                    .into_iter()
                    .filter_map(|field| {
                        let value = applied.get(&field.key).filter(|v| !v.is_empty())?;
                        let label = filter_label(&field, value);
                        let key = field.key.clone();
                        Some(view! {
                            <FilterTag label=label on_remove=Callback::new(move |_| remove_value(key.clone())) />
                        })
                    })
                    .collect_view()
            }}
        }
        .into_any()
    });

    let sort_indicator = move |key: &str| {
        state.with(|s| match &s.sort {
            Some(sort) if sort.key == key => match sort.order {
                SortOrder::Asc => " ▲",
                SortOrder::Desc => " ▼",
            },
            _ => "",
        })
    };

    view! {
        <div class="page case-list">
            <PageHeader title=title>
                <button class="button button--secondary" on:click=move |_| load() disabled=move || loading.get()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=active_filters
                pagination_controls=pagination
                filter_content=filter_content
                filter_tags=filter_tags
            />

            <ErrorBox error=error />

            <table class="table case-list__table">
                <thead>
                    <tr>
                        {move || columns.get().into_iter().map(|column| {
                            let key = column.key.clone();
                            let indicator_key = column.key.clone();
                            let header = column.header().to_string();
                            if column.sortable {
                                view! {
                                    <th
                                        class="table__header-cell table__header-cell--sortable"
                                        on:click=move |_| toggle_sort(key.clone())
                                    >
                                        {header}
                                        {move || sort_indicator(&indicator_key)}
                                    </th>
                                }
                                .into_any()
                            } else {
                                view! { <th class="table__header-cell">{header}</th> }.into_any()
                            }
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let visible = rows.get();
                        if visible.is_empty() && state.with(|s| s.is_loaded) {
                            let span = columns.with(|c| c.len().max(1)).to_string();
                            return view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan=span>"No cases found"</td>
                                </tr>
                            }
                            .into_any();
                        }
                        let cols = columns.get();
                        visible
                            .into_iter()
                            .map(|row| {
                                let cells = cols
                                    .iter()
                                    .map(|column| {
                                        let text = column.display_type.format(row.value(&column.key));
                                        view! { <td class="table__cell">{text}</td> }
                                    })
                                    .collect_view();
                                view! {
                                    <tr class="table__row table__row--clickable" on:click=move |_| open_case(&row)>
                                        {cells}
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
