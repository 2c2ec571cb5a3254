use crate::domain::a002_case_list_column::api;
use crate::shared::components::ErrorBox;
use contracts::domain::a002_case_list_column::{CaseListColumn, DisplayType};
use contracts::shared::page::SortOrder;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// `value=label` per line; a line without `=` uses the value as label.
pub fn parse_enum_values(text: &str) -> BTreeMap<String, String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('=') {
            Some((value, label)) => (value.trim().to_string(), label.trim().to_string()),
            None => (line.to_string(), line.to_string()),
        })
        .collect()
}

/// Display type chosen in the form, with its parameters filled in.
pub fn display_type_from_form(index: usize, date_format: &str, enum_text: &str) -> DisplayType {
    let format = Some(date_format.trim().to_string()).filter(|f| !f.is_empty());
    match DisplayType::variants().into_iter().nth(index) {
        Some(DisplayType::Date { .. }) => DisplayType::Date { date_format: format },
        Some(DisplayType::DateTime { .. }) => DisplayType::DateTime { date_format: format },
        Some(DisplayType::Enum { .. }) => DisplayType::Enum {
            values: parse_enum_values(enum_text),
        },
        Some(other) => other,
        None => DisplayType::Text,
    }
}

#[component]
pub fn ColumnForm(
    definition_name: String,
    existing: Vec<CaseListColumn>,
    on_created: Callback<CaseListColumn>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = StoredValue::new(definition_name);
    let existing = StoredValue::new(existing);

    let key = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let path = RwSignal::new(String::new());
    let display_index = RwSignal::new(0usize);
    let date_format = RwSignal::new(String::new());
    let enum_text = RwSignal::new(String::new());
    let sortable = RwSignal::new(false);
    let default_sort = RwSignal::new(None::<SortOrder>);
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let selected_type = Memo::new(move |_| {
        display_type_from_form(display_index.get(), &date_format.get(), &enum_text.get())
    });

    let submit = move |_| {
        let column = CaseListColumn {
            key: key.get_untracked().trim().to_string(),
            title: Some(title.get_untracked().trim().to_string()).filter(|t| !t.is_empty()),
            path: path.get_untracked().trim().to_string(),
            display_type: selected_type.get_untracked(),
            sortable: sortable.get_untracked(),
            default_sort: default_sort.get_untracked(),
        };
        if let Err(e) = existing.with_value(|existing| column.validate_new(existing)) {
            error.set(Some(e.to_string()));
            return;
        }
        submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_column(&name.get_value(), &column).await {
                Ok(()) => on_created.run(column),
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New list column"</h3>
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
                    <label>"Path"</label>
                    <input type="text" placeholder="doc:customer.name or case:createdOn"
                        prop:value=move || path.get()
                        on:input=move |ev| path.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label>"Display type"</label>
                    <select on:change=move |ev| {
                        display_index.set(event_target_value(&ev).parse().unwrap_or(0))
                    }>
                        {DisplayType::variants()
                            .into_iter()
                            .enumerate()
                            .map(|(index, variant)| view! {
                                <option value={index.to_string()} selected=move || display_index.get() == index>
                                    {variant.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <Show when=move || matches!(selected_type.get(), DisplayType::Date { .. } | DisplayType::DateTime { .. })>
                    <div class="form-group">
                        <label>"Date format"</label>
                        <input type="text" placeholder="%d-%m-%Y"
                            prop:value=move || date_format.get()
                            on:input=move |ev| date_format.set(event_target_value(&ev)) />
                    </div>
                </Show>
                <Show when=move || matches!(selected_type.get(), DisplayType::Enum { .. })>
                    <div class="form-group">
                        <label>"Values (value=label per line)"</label>
                        <textarea rows="4"
                            prop:value=move || enum_text.get()
                            on:input=move |ev| enum_text.set(event_target_value(&ev)) />
                    </div>
                </Show>
                <label class="form-check">
                    <input type="checkbox" prop:checked=move || sortable.get()
                        on:change=move |ev| sortable.set(event_target_checked(&ev)) />
                    "Sortable"
                </label>
                <div class="form-group">
                    <label>"Default sort"</label>
                    <select on:change=move |ev| {
                        default_sort.set(match event_target_value(&ev).as_str() {
                            "ASC" => Some(SortOrder::Asc),
                            "DESC" => Some(SortOrder::Desc),
                            _ => None,
                        })
                    }>
                        <option value="">"None"</option>
                        <option value="ASC">"Ascending"</option>
                        <option value="DESC">"Descending"</option>
                    </select>
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
    fn test_parse_enum_values() {
        let values = parse_enum_values("open = Open\n\n closed=Closed\npending");
        assert_eq!(values.get("open").map(String::as_str), Some("Open"));
        assert_eq!(values.get("closed").map(String::as_str), Some("Closed"));
        assert_eq!(values.get("pending").map(String::as_str), Some("pending"));
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_display_type_from_form() {
        assert_eq!(display_type_from_form(0, "", ""), DisplayType::Text);
        assert_eq!(
            display_type_from_form(1, " %Y ", ""),
            DisplayType::Date {
                date_format: Some("%Y".into())
            }
        );
        assert_eq!(
            display_type_from_form(2, "  ", ""),
            DisplayType::DateTime { date_format: None }
        );
        assert_eq!(display_type_from_form(99, "", ""), DisplayType::Text);
    }
}
