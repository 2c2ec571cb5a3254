use crate::domain::a005_case_widget::api;
use crate::shared::components::ErrorBox;
use contracts::domain::a005_case_widget::{
    CaseWidget, CaseWidgetType, WidgetTab, MAX_WIDGET_WIDTH, MIN_WIDGET_WIDTH,
};
use leptos::prelude::*;
use serde_json::Value;

/// Property that must be set for a widget type, with its input label.
pub fn required_property(widget_type: CaseWidgetType) -> Option<(&'static str, &'static str)> {
    match widget_type {
        CaseWidgetType::Fields => None,
        CaseWidgetType::Table | CaseWidgetType::Collection => Some(("collection", "Collection path")),
        CaseWidgetType::Custom => Some(("componentKey", "Component")),
        CaseWidgetType::Form => Some(("formDefinitionName", "Form definition")),
    }
}

/// Builds the widget from the form inputs. `properties_json` may be empty.
pub fn widget_from_form(
    key: &str,
    title: &str,
    widget_type: CaseWidgetType,
    width: u8,
    properties_json: &str,
    main_property: &str,
) -> Result<CaseWidget, String> {
    let mut widget = CaseWidget::new(key.trim(), title.trim(), widget_type);
    widget.width = width;
    if !properties_json.trim().is_empty() {
        widget.properties = serde_json::from_str(properties_json)
            .map_err(|e| format!("Properties are not valid JSON: {}", e))?;
    }
    if let Some((name, _)) = required_property(widget_type) {
        let value = main_property.trim();
        if !value.is_empty() {
            widget
                .set_property(name, Value::String(value.to_string()))
                .map_err(|e| e.to_string())?;
        }
    }
    Ok(widget)
}

#[component]
pub fn WidgetForm(
    definition_name: String,
    tab_key: String,
    existing: Vec<CaseWidget>,
    on_created: Callback<CaseWidget>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = StoredValue::new(definition_name);
    let tab_key = StoredValue::new(tab_key);
    let existing = StoredValue::new(existing);

    let key = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let widget_type = RwSignal::new(CaseWidgetType::Fields);
    let width = RwSignal::new(MIN_WIDGET_WIDTH);
    let main_property = RwSignal::new(String::new());
    let properties = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move |_| {
        let built = widget_from_form(
            &key.get_untracked(),
            &title.get_untracked(),
            widget_type.get_untracked(),
            width.get_untracked(),
            &properties.get_untracked(),
            &main_property.get_untracked(),
        );
        let widget = match built {
            Ok(widget) => widget,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        if let Err(e) = existing.with_value(|existing| widget.validate_new(existing)) {
            error.set(Some(e.to_string()));
            return;
        }
        let mut widgets = existing.get_value();
        widgets.push(widget.clone());
        let tab = WidgetTab {
            key: tab_key.get_value(),
            widgets,
        };
        submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_widget_tab(&name.get_value(), &tab).await {
                Ok(()) => on_created.run(widget),
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New widget"</h3>
            </div>
            <ErrorBox error=error />
            <div class="details-form">
                <div class="form-group">
                    <label>"Key"</label>
                    <input type="text" prop:value=move || key.get()
                        on:input=move |ev| key.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label>"Title"</label>
                    <input type="text" prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label>"Type"</label>
                    <select on:change=move |ev| {
                        if let Some(t) = CaseWidgetType::parse(&event_target_value(&ev)) {
                            widget_type.set(t);
                            main_property.set(String::new());
                        }
                    }>
                        {CaseWidgetType::ALL.into_iter().map(|t| view! {
                            <option value={t.as_str()} selected=move || widget_type.get() == t>{t.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Width (columns)"</label>
                    <select on:change=move |ev| {
                        width.set(event_target_value(&ev).parse().unwrap_or(MIN_WIDGET_WIDTH))
                    }>
                        {(MIN_WIDGET_WIDTH..=MAX_WIDGET_WIDTH).map(|n| view! {
                            <option value={n.to_string()} selected=move || width.get() == n>{n}</option>
                        }).collect_view()}
                    </select>
                </div>
                {move || required_property(widget_type.get()).map(|(_, label)| view! {
                    <div class="form-group">
                        <label>{label}</label>
                        <input type="text" prop:value=move || main_property.get()
                            on:input=move |ev| main_property.set(event_target_value(&ev)) />
                    </div>
                })}
                <div class="form-group">
                    <label>"Properties (JSON)"</label>
                    <textarea rows="6" placeholder=r#"{"columns": [[{"key": "name", "title": "Name", "value": "doc:name"}]]}"#
                        prop:value=move || properties.get()
                        on:input=move |ev| properties.set(event_target_value(&ev)) />
                </div>
            </div>
            <div class="details-actions">
                <button class="button button--primary" on:click=submit disabled=move || submitting.get()>
                    "Add"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_from_form_sets_type_property() {
        let widget =
            widget_from_form(" orders ", "Orders", CaseWidgetType::Table, 3, "", "doc:orders").unwrap();
        assert_eq!(widget.key, "orders");
        assert_eq!(widget.width, 3);
        assert_eq!(widget.collection_path(), Some("doc:orders"));
    }

    #[test]
    fn test_widget_from_form_keeps_json_properties() {
        let widget = widget_from_form(
            "ext",
            "External",
            CaseWidgetType::Custom,
            1,
            r#"{"height": 200}"#,
            "map",
        )
        .unwrap();
        assert_eq!(widget.component_key(), Some("map"));
        assert_eq!(widget.properties["height"], 200);
    }

    #[test]
    fn test_widget_from_form_rejects_bad_json() {
        let result = widget_from_form("k", "T", CaseWidgetType::Fields, 1, "{oops", "");
        assert!(result.unwrap_err().starts_with("Properties are not valid JSON"));
        let array = widget_from_form("k", "T", CaseWidgetType::Form, 1, "[]", "form");
        assert!(array.is_err());
    }
}
