use super::form::ColumnForm;
use crate::domain::a002_case_list_column::api;
use crate::shared::components::{ErrorBox, OrderActions, OrderedColumn, OrderedTable};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::ordered_list::OrderedListModel;
use contracts::domain::a002_case_list_column::CaseListColumn;
use leptos::prelude::*;

/// Columns of the case list of one definition.
#[component]
pub fn ColumnsEditor(definition_name: String, on_dirty_change: Callback<bool>) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let name = StoredValue::new(definition_name);
    let model = OrderedListModel::<CaseListColumn>::new();

    model.load(move || async move { api::fetch_columns(&name.get_value()).await });
    model.report_dirty(on_dirty_change);

    let on_save = Callback::new(move |_| {
        model.save_order(move |order| async move { api::save_columns(&name.get_value(), &order).await })
    });
    let on_delete = Callback::new(move |key: String| {
        model.delete_confirmed(key, "column", move |key| async move {
            api::delete_column(&name.get_value(), &key).await
        })
    });

    let open_add = move |_| {
        modal_stack.push_with_style(Some("max-width: 560px;".to_string()), move |handle| {
            let handle_created = handle.clone();
            let handle_cancel = handle.clone();
            view! {
                <ColumnForm
                    definition_name=name.get_value()
                    existing=model.saved.get_untracked()
                    on_created=Callback::new(move |column: CaseListColumn| {
                        model.push_saved(column);
                        handle_created.close();
                    })
                    on_cancel=Callback::new(move |_| handle_cancel.close())
                />
            }
            .into_any()
        });
    };

    let columns = vec![
        OrderedColumn::text("Key", |c: &CaseListColumn| c.key.clone()),
        OrderedColumn::text("Title", |c: &CaseListColumn| c.header().to_string()),
        OrderedColumn::text("Path", |c: &CaseListColumn| c.path.clone()),
        OrderedColumn::text("Display", |c: &CaseListColumn| c.display_type.label().to_string()),
        OrderedColumn::text("Sortable", |c: &CaseListColumn| {
            if c.sortable { "yes" } else { "no" }.to_string()
        }),
        OrderedColumn::text("Default sort", |c: &CaseListColumn| {
            c.default_sort.map(|o| o.as_param().to_string()).unwrap_or_default()
        }),
    ];

    view! {
        <div class="ordered-editor">
            <div class="ordered-editor__toolbar">
                <h3>"List columns"</h3>
                <button class="button button--secondary" on:click=open_add>
                    {icon("plus")}
                    "Add column"
                </button>
            </div>
            <ErrorBox error=model.error />
            <OrderedTable
                model=model
                columns=columns
                on_delete=on_delete
                empty_text="No columns configured"
            />
            <OrderActions model=model on_save=on_save />
        </div>
    }
}
