use super::form::SearchFieldForm;
use crate::domain::a003_case_search_field::api;
use crate::shared::components::{ErrorBox, OrderActions, OrderedColumn, OrderedTable};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::ordered_list::OrderedListModel;
use contracts::domain::a003_case_search_field::{SearchField, SearchMatchType};
use leptos::prelude::*;

/// Search fields shown above the case list of one definition.
#[component]
pub fn SearchFieldsEditor(
    definition_name: String,
    on_dirty_change: Callback<bool>,
) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let name = StoredValue::new(definition_name);
    let model = OrderedListModel::<SearchField>::new();

    model.load(move || async move { api::fetch_fields(&name.get_value()).await });
    model.report_dirty(on_dirty_change);

    let on_save = Callback::new(move |_| {
        model.save_order(move |order| async move { api::save_fields(&name.get_value(), &order).await })
    });
    let on_delete = Callback::new(move |key: String| {
        model.delete_confirmed(key, "search field", move |key| async move {
            api::delete_field(&name.get_value(), &key).await
        })
    });

    let open_add = move |_| {
        modal_stack.push_with_style(Some("max-width: 560px;".to_string()), move |handle| {
            let handle_created = handle.clone();
            let handle_cancel = handle.clone();
            view! {
                <SearchFieldForm
                    definition_name=name.get_value()
                    existing=model.saved.get_untracked()
                    on_created=Callback::new(move |field: SearchField| {
                        model.push_saved(field);
                        handle_created.close();
                    })
                    on_cancel=Callback::new(move |_| handle_cancel.close())
                />
            }
            .into_any()
        });
    };

    let columns = vec![
        OrderedColumn::text("Key", |f: &SearchField| f.key.clone()),
        OrderedColumn::text("Title", |f: &SearchField| f.label().to_string()),
        OrderedColumn::text("Path", |f: &SearchField| f.path.clone()),
        OrderedColumn::text("Data type", |f: &SearchField| f.data_type.as_str().to_string()),
        OrderedColumn::text("Field type", |f: &SearchField| f.field_type.as_str().to_string()),
        OrderedColumn::text("Match", |f: &SearchField| {
            match f.match_type {
                Some(SearchMatchType::Exact) => "exact",
                Some(SearchMatchType::Like) => "like",
                None => "",
            }
            .to_string()
        }),
    ];

    view! {
        <div class="ordered-editor">
            <div class="ordered-editor__toolbar">
                <h3>"Search fields"</h3>
                <button class="button button--secondary" on:click=open_add>
                    {icon("plus")}
                    "Add search field"
                </button>
            </div>
            <ErrorBox error=model.error />
            <OrderedTable
                model=model
                columns=columns
                on_delete=on_delete
                empty_text="No search fields configured"
            />
            <OrderActions model=model on_save=on_save />
        </div>
    }
}
