use crate::shared::icons::icon;
use crate::shared::ordered_list::OrderedListModel;
use contracts::shared::ordering::{Keyed, MoveDirection};
use leptos::prelude::*;
use std::sync::Arc;

/// Column of an `OrderedTable`
pub struct OrderedColumn<T> {
    pub title: &'static str,
    render: Arc<dyn Fn(&T) -> AnyView + Send + Sync>,
}

impl<T> Clone for OrderedColumn<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            render: Arc::clone(&self.render),
        }
    }
}

impl<T: 'static> OrderedColumn<T> {
    pub fn new(title: &'static str, render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        Self {
            title,
            render: Arc::new(render),
        }
    }

    pub fn text(title: &'static str, text: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self::new(title, move |item| text(item).into_any())
    }
}

/// Table of an ordered configuration list with move up/down and delete
/// buttons per row. Moves only change the working copy in `model`.
#[component]
pub fn OrderedTable<T>(
    model: OrderedListModel<T>,
    columns: Vec<OrderedColumn<T>>,
    /// Called with the key of the row to delete
    #[prop(optional)]
    on_delete: Option<Callback<String>>,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    let columns = StoredValue::new(columns);
    let empty_text = empty_text.unwrap_or_else(|| "Nothing configured yet".to_string());
    let column_count = columns.with_value(|c| c.len()) + 1;

    view! {
        <table class="table ordered-table">
            <thead>
                <tr>
                    {columns
                        .with_value(|cols| {
                            cols.iter()
                                .map(|c| view! { <th class="table__header-cell">{c.title}</th> })
                                .collect_view()
                        })}
                    <th class="table__header-cell ordered-table__actions">"Order"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = model.items.get();
                    if rows.is_empty() {
                        return view! {
                            <tr>
                                <td class="table__cell table__cell--empty" colspan={column_count.to_string()}>
                                    {empty_text.clone()}
                                </td>
                            </tr>
                        }
                        .into_any();
                    }
                    let last = rows.len() - 1;
                    rows.into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let key = item.key().to_string();
                            let key_up = key.clone();
                            let key_down = key.clone();
                            let key_delete = key.clone();
                            let cells = columns
                                .with_value(|cols| {
                                    cols.iter()
                                        .map(|c| view! { <td class="table__cell">{(c.render)(&item)}</td> })
                                        .collect_view()
                                });
                            view! {
                                <tr class="table__row" data-key=key>
                                    {cells}
                                    <td class="table__cell ordered-table__actions">
                                        <button
                                            class="button button--ghost button--smallall"
                                            title="Move up"
                                            disabled={index == 0}
                                            on:click=move |_| model.move_item(&key_up, MoveDirection::Up)
                                        >
                                            {icon("arrow-up")}
                                        </button>
                                        <button
                                            class="button button--ghost button--smallall"
                                            title="Move down"
                                            disabled={index == last}
                                            on:click=move |_| model.move_item(&key_down, MoveDirection::Down)
                                        >
                                            {icon("arrow-down")}
                                        </button>
                                        {on_delete.map(|on_delete| view! {
                                            <button
                                                class="button button--ghost button--smallall"
                                                title="Delete"
                                                on:click=move |_| on_delete.run(key_delete.clone())
                                            >
                                                {icon("trash")}
                                            </button>
                                        })}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}

/// Save / revert bar shown under an ordered table.
#[component]
pub fn OrderActions<T>(
    model: OrderedListModel<T>,
    on_save: Callback<()>,
) -> impl IntoView
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    view! {
        <div class="order-actions">
            <Show when=move || model.is_dirty()>
                <span class="order-actions__hint">"Order changed, not saved"</span>
            </Show>
            <button
                class="button button--secondary"
                disabled=move || !model.is_dirty() || model.saving.get()
                on:click=move |_| model.revert()
            >
                "Revert"
            </button>
            <button
                class="button button--primary"
                disabled=move || !model.is_dirty() || model.saving.get()
                on:click=move |_| on_save.run(())
            >
                {move || if model.saving.get() { "Saving..." } else { "Save order" }}
            </button>
        </div>
    }
}
