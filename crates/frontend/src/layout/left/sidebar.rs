//! Sidebar component with collapsible menu groups.
//!
//! "Management" is static; "Dossiers" lists the case definitions fetched
//! from the backend, each item opens the case list of that definition.

use crate::domain::a001_case_definition::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, TabRoute};
use crate::layout::tabs::route::DEFINITION_LIST;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: String,
    label: String,
    icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn management_group() -> MenuGroup {
    MenuGroup {
        id: "management",
        label: "Management",
        icon: "settings",
        items: vec![MenuItem {
            key: DEFINITION_LIST.to_string(),
            label: tab_label_for_key(DEFINITION_LIST),
            icon: "layers",
        }],
    }
}

fn dossier_group(items: Vec<MenuItem>) -> MenuGroup {
    MenuGroup {
        id: "dossiers",
        label: "Dossiers",
        icon: "briefcase",
        items,
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["management".to_string(), "dossiers".to_string()]);
    let dossier_items = RwSignal::new(Vec::<MenuItem>::new());
    let load_error = RwSignal::new(None::<String>);

    let reload = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_definitions().await {
                Ok(definitions) => {
                    let items = definitions
                        .iter()
                        .map(|d| MenuItem {
                            key: TabRoute::CaseList(d.name.clone()).key(),
                            label: d.display_name().to_string(),
                            icon: "folder",
                        })
                        .collect();
                    dossier_items.set(items);
                    load_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load case definitions for the sidebar: {}", e);
                    load_error.set(Some(e));
                }
            }
        });
    };
    reload();

    let groups = move || vec![management_group(), dossier_group(dossier_items.get())];

    view! {
        <div class="app-sidebar__content">
            {move || groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let gid_click = group_id.clone();
                let gid_exp = group_id.clone();
                let gid_show = group_id.clone();
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &gid) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|ids| ids.contains(&gid_exp))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|ids| ids.contains(&gid_show))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|item| {
                                    let item_key = StoredValue::new(item.key.clone());
                                    let label = item.label.clone();
                                    let label_for_click = item.label.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(item_key.get_value().as_str()))
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(&item_key.get_value(), &label_for_click)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(item.icon)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}

            {move || load_error.get().map(|_| view! {
                <div class="app-sidebar__error">
                    <span>"Dossiers unavailable"</span>
                    <button class="button button--ghost button--small" on:click=move |_| reload()>
                        {icon("refresh")}
                    </button>
                </div>
            })}
        </div>
    }
}
