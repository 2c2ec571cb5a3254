use super::form::StatusForm;
use crate::domain::a006_case_status::api;
use crate::shared::components::{ErrorBox, OrderActions, OrderedColumn, OrderedTable};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::ordered_list::OrderedListModel;
use contracts::domain::a006_case_status::InternalCaseStatus;
use leptos::prelude::*;

#[component]
pub fn StatusesEditor(definition_name: String, on_dirty_change: Callback<bool>) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let name = StoredValue::new(definition_name);
    let model = OrderedListModel::<InternalCaseStatus>::new();

    model.load(move || async move { api::fetch_statuses(&name.get_value()).await });
    model.report_dirty(on_dirty_change);

    let on_save = Callback::new(move |_| {
        model.save_order(move |order| async move {
            api::save_statuses(&name.get_value(), &order).await
        })
    });
    let on_delete = Callback::new(move |key: String| {
        model.delete_confirmed(key, "status", move |key| async move {
            api::delete_status(&name.get_value(), &key).await
        })
    });

    let open_add = move |_| {
        modal_stack.push_with_style(Some("max-width: 480px;".to_string()), move |handle| {
            let handle_created = handle.clone();
            let handle_cancel = handle.clone();
            view! {
                <StatusForm
                    definition_name=name.get_value()
                    existing=model.saved.get_untracked()
                    on_created=Callback::new(move |status: InternalCaseStatus| {
                        model.push_saved(status);
                        handle_created.close();
                    })
                    on_cancel=Callback::new(move |_| handle_cancel.close())
                />
            }
            .into_any()
        });
    };

    let columns = vec![
        OrderedColumn::new("Status", |s: &InternalCaseStatus| {
            view! { <span class={s.color.badge_class()}>{s.title.clone()}</span> }.into_any()
        }),
        OrderedColumn::text("Key", |s: &InternalCaseStatus| s.key.clone()),
        OrderedColumn::text("In case list", |s: &InternalCaseStatus| {
            if s.visible_in_case_list_by_default { "visible" } else { "hidden" }.to_string()
        }),
    ];

    view! {
        <div class="ordered-editor">
            <div class="ordered-editor__toolbar">
                <h3>"Internal statuses"</h3>
                <button class="button button--secondary" on:click=open_add>
                    {icon("plus")}
                    "Add status"
                </button>
            </div>
            <ErrorBox error=model.error />
            <OrderedTable
                model=model
                columns=columns
                on_delete=on_delete
                empty_text="No statuses configured"
            />
            <OrderActions model=model on_save=on_save />
        </div>
    }
}
