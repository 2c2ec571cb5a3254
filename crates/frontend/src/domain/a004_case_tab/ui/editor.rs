use super::form::CaseTabForm;
use crate::domain::a004_case_tab::api;
use crate::shared::components::{ErrorBox, OrderActions, OrderedColumn, OrderedTable};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::ordered_list::OrderedListModel;
use contracts::domain::a004_case_tab::CaseTab;
use leptos::prelude::*;

/// Tabs of the case detail page of one definition.
#[component]
pub fn CaseTabsEditor(definition_name: String, on_dirty_change: Callback<bool>) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let name = StoredValue::new(definition_name);
    let model = OrderedListModel::<CaseTab>::new();

    model.load(move || async move { api::fetch_tabs(&name.get_value()).await });
    model.report_dirty(on_dirty_change);

    let on_save = Callback::new(move |_| {
        model.save_order(move |order| async move { api::save_tabs(&name.get_value(), &order).await })
    });
    let on_delete = Callback::new(move |key: String| {
        model.delete_confirmed(key, "tab", move |key| async move {
            api::delete_tab(&name.get_value(), &key).await
        })
    });

    let open_add = move |_| {
        modal_stack.push_with_style(Some("max-width: 520px;".to_string()), move |handle| {
            let handle_created = handle.clone();
            let handle_cancel = handle.clone();
            view! {
                <CaseTabForm
                    definition_name=name.get_value()
                    existing=model.saved.get_untracked()
                    on_created=Callback::new(move |tab: CaseTab| {
                        model.push_saved(tab);
                        handle_created.close();
                    })
                    on_cancel=Callback::new(move |_| handle_cancel.close())
                />
            }
            .into_any()
        });
    };

    let columns = vec![
        OrderedColumn::text("Key", |t: &CaseTab| t.key.clone()),
        OrderedColumn::text("Name", |t: &CaseTab| t.title().to_string()),
        OrderedColumn::text("Type", |t: &CaseTab| t.tab_type.label().to_string()),
        OrderedColumn::text("Content", |t: &CaseTab| t.content_key.clone()),
        OrderedColumn::text("Tasks", |t: &CaseTab| {
            if t.show_tasks { "shown" } else { "" }.to_string()
        }),
    ];

    view! {
        <div class="ordered-editor">
            <div class="ordered-editor__toolbar">
                <h3>"Case tabs"</h3>
                <button class="button button--secondary" on:click=open_add>
                    {icon("plus")}
                    "Add tab"
                </button>
            </div>
            <p class="form-hint">"Cases of a definition without tabs show Summary, Progress, Documents and Notes."</p>
            <ErrorBox error=model.error />
            <OrderedTable
                model=model
                columns=columns
                on_delete=on_delete
                empty_text="No tabs configured"
            />
            <OrderActions model=model on_save=on_save />
        </div>
    }
}
