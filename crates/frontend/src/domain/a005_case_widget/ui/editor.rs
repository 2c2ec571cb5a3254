//! Widget tabs of a definition: order, width and contrast of each widget,
//! with a live preview of the packed grid.

use super::form::WidgetForm;
use crate::domain::a004_case_tab;
use crate::domain::a005_case_widget::api;
use crate::shared::components::{ErrorBox, OrderedColumn, OrderedTable, WidgetGrid};
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::ordered_list::OrderedListModel;
use contracts::domain::a004_case_tab::CaseTabType;
use contracts::domain::a005_case_widget::{CaseWidget, WidgetTab, MAX_WIDGET_WIDTH, MIN_WIDGET_WIDTH};
use leptos::prelude::*;

/// Widget tab shown once the user picked `requested`. Unsaved edits keep
/// the current tab unless discarding them is confirmed.
fn picked_tab(
    current: Option<String>,
    requested: String,
    dirty: bool,
    confirm_discard: impl FnOnce() -> bool,
) -> Option<String> {
    if dirty && current.as_deref() != Some(requested.as_str()) && !confirm_discard() {
        current
    } else {
        Some(requested)
    }
}

#[component]
pub fn WidgetsEditor(definition_name: String, on_dirty_change: Callback<bool>) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let name = StoredValue::new(definition_name);
    let grid = config().widgets;

    // (tab key, title) of every widgets-type case tab
    let widget_tabs = RwSignal::new(Vec::<(String, String)>::new());
    let tabs_error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<String>);
    let model = OrderedListModel::<CaseWidget>::new();

    wasm_bindgen_futures::spawn_local(async move {
        match a004_case_tab::api::fetch_tabs(&name.get_value()).await {
            Ok(tabs) => {
                let found: Vec<(String, String)> = tabs
                    .iter()
                    .filter(|t| t.tab_type == CaseTabType::Widgets)
                    .map(|t| (t.content_key.clone(), t.title().to_string()))
                    .collect();
                selected.set(found.first().map(|(key, _)| key.clone()));
                widget_tabs.set(found);
            }
            Err(e) => tabs_error.set(Some(e)),
        }
    });

    Effect::new(move |_| {
        if let Some(tab_key) = selected.get() {
            model.load(move || async move {
                api::fetch_widget_tab(&name.get_value(), &tab_key)
                    .await
                    .map(|tab| tab.widgets)
            });
        }
    });

    let is_changed = Memo::new(move |_| model.is_changed());
    Effect::new(move |_| on_dirty_change.run(is_changed.get()));

    let select_tab = move |ev: leptos::ev::Event| {
        let select = event_target::<web_sys::HtmlSelectElement>(&ev);
        let current = selected.get_untracked();
        let shown = picked_tab(current.clone(), select.value(), is_changed.get_untracked(), || {
            web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Widget changes are not saved. Discard them?")
                        .unwrap_or(false)
                })
                .unwrap_or(false)
        });
        if shown == current {
            // the element already shows the rejected pick
            select.set_value(current.as_deref().unwrap_or_default());
            return;
        }
        model.revert();
        selected.set(shown);
    };

    // The whole tab is stored at once; `widgets` decides what the backend keeps.
    let put_tab = move |widgets: Vec<CaseWidget>| async move {
        let Some(key) = selected.get_untracked() else {
            return Err("No widget tab selected".to_string());
        };
        api::save_widget_tab(&name.get_value(), &WidgetTab { key, widgets }).await
    };

    let on_save = move |_| model.save_order(put_tab);
    let on_delete = Callback::new(move |key: String| {
        model.delete_confirmed(key, "widget", move |key| async move {
            let rest: Vec<CaseWidget> = model
                .saved
                .get_untracked()
                .into_iter()
                .filter(|w| w.key != key)
                .collect();
            put_tab(rest).await
        })
    });

    let open_add = move |_| {
        let Some(tab_key) = selected.get_untracked() else {
            return;
        };
        modal_stack.push_with_style(Some("max-width: 600px;".to_string()), move |handle| {
            let handle_created = handle.clone();
            let handle_cancel = handle.clone();
            view! {
                <WidgetForm
                    definition_name=name.get_value()
                    tab_key=tab_key.clone()
                    existing=model.saved.get_untracked()
                    on_created=Callback::new(move |widget: CaseWidget| {
                        model.push_saved(widget);
                        handle_created.close();
                    })
                    on_cancel=Callback::new(move |_| handle_cancel.close())
                />
            }
            .into_any()
        });
    };

    let columns = vec![
        OrderedColumn::text("Title", |w: &CaseWidget| w.title.clone()),
        OrderedColumn::text("Key", |w: &CaseWidget| w.key.clone()),
        OrderedColumn::text("Type", |w: &CaseWidget| w.widget_type.label().to_string()),
        OrderedColumn::new("Width", move |w: &CaseWidget| {
            let key = w.key.clone();
            let width = w.width;
            view! {
                <select on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                        model.update_item(&key, |w| w.width = value);
                    }
                }>
                    {(MIN_WIDGET_WIDTH..=MAX_WIDGET_WIDTH).map(|n| view! {
                        <option value={n.to_string()} selected={n == width}>{n}</option>
                    }).collect_view()}
                </select>
            }
            .into_any()
        }),
        OrderedColumn::new("High contrast", move |w: &CaseWidget| {
            let key = w.key.clone();
            view! {
                <input
                    type="checkbox"
                    prop:checked={w.high_contrast}
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        model.update_item(&key, |w| w.high_contrast = checked);
                    }
                />
            }
            .into_any()
        }),
    ];

    let preview_items = Signal::derive(move || {
        model
            .items
            .get()
            .iter()
            .map(|w| (w.key.clone(), w.span()))
            .collect::<Vec<_>>()
    });
    let render_preview = Callback::new(move |key: String| {
        let widget = Memo::new(move |_| {
            model.items.with(|items| items.iter().find(|w| w.key == key).cloned())
        });
        view! {
            <div
                class="widget-card widget-card--preview"
                class:widget-card--contrast=move || widget.get().is_some_and(|w| w.high_contrast)
            >
                <div class="widget-card__title">{move || widget.get().map(|w| w.title).unwrap_or_default()}</div>
                <div class="widget-card__body">
                    {move || widget.get().map(|w| format!("{} · {} col", w.widget_type.label(), w.span()))}
                </div>
            </div>
        }
        .into_any()
    });

    view! {
        <div class="ordered-editor widgets-editor">
            <ErrorBox error=tabs_error />
            <Show
                when=move || !widget_tabs.with(|t| t.is_empty())
                fallback=|| view! {
                    <p class="form-hint">"Add a tab of type Widgets first."</p>
                }
            >
                <div class="ordered-editor__toolbar">
                    <h3>"Widgets"</h3>
                    <select on:change=select_tab>
                        {move || widget_tabs.get().into_iter().map(|(key, title)| {
                            let option_key = key.clone();
                            view! {
                                <option value=key selected=move || selected.get().as_deref() == Some(option_key.as_str())>
                                    {title}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <button class="button button--secondary" on:click=open_add>
                        {icon("plus")}
                        "Add widget"
                    </button>
                </div>
                <ErrorBox error=model.error />
                <OrderedTable
                    model=model
                    columns=columns.clone()
                    on_delete=on_delete
                    empty_text="No widgets on this tab"
                />
                <div class="order-actions">
                    <Show when=move || is_changed.get()>
                        <span class="order-actions__hint">"Changes not saved"</span>
                    </Show>
                    <button
                        class="button button--secondary"
                        disabled=move || !is_changed.get() || model.saving.get()
                        on:click=move |_| model.revert()
                    >
                        "Revert"
                    </button>
                    <button
                        class="button button--primary"
                        disabled=move || !is_changed.get() || model.saving.get()
                        on:click=on_save
                    >
                        {move || if model.saving.get() { "Saving..." } else { "Save widgets" }}
                    </button>
                </div>
                <h4>"Preview"</h4>
                <WidgetGrid
                    widgets=preview_items
                    columns=grid.columns
                    gap=grid.gap
                    render=render_preview
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picked_tab_without_changes_switches() {
        let shown = picked_tab(Some("main".into()), "extra".into(), false, || {
            panic!("no confirmation expected")
        });
        assert_eq!(shown.as_deref(), Some("extra"));
    }

    #[test]
    fn test_picked_tab_keeps_current_when_discard_declined() {
        let shown = picked_tab(Some("main".into()), "extra".into(), true, || false);
        assert_eq!(shown.as_deref(), Some("main"));
    }

    #[test]
    fn test_picked_tab_switches_when_discard_confirmed() {
        let shown = picked_tab(Some("main".into()), "extra".into(), true, || true);
        assert_eq!(shown.as_deref(), Some("extra"));
    }
}
