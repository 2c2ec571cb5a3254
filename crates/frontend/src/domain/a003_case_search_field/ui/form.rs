use crate::domain::a003_case_search_field::api;
use crate::shared::components::ErrorBox;
use contracts::domain::a003_case_search_field::{
    DropdownOption, SearchDataType, SearchField, SearchFieldType, SearchMatchType,
};
use leptos::prelude::*;

/// `value=label` per line, order kept.
pub fn parse_dropdown_options(text: &str) -> Vec<DropdownOption> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (value, label) = line.split_once('=').unwrap_or((line, line));
            DropdownOption {
                value: value.trim().to_string(),
                label: label.trim().to_string(),
            }
        })
        .collect()
}

#[component]
pub fn SearchFieldForm(
    definition_name: String,
    existing: Vec<SearchField>,
    on_created: Callback<SearchField>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = StoredValue::new(definition_name);
    let existing = StoredValue::new(existing);

    let key = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let path = RwSignal::new(String::new());
    let data_type = RwSignal::new(SearchDataType::Text);
    let field_type = RwSignal::new(SearchFieldType::Single);
    let match_type = RwSignal::new(None::<SearchMatchType>);
    let provider = RwSignal::new(String::new());
    let options_text = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Type combination errors show up while the user picks
    let build = move || SearchField {
        key: key.get().trim().to_string(),
        title: Some(title.get().trim().to_string()).filter(|t| !t.is_empty()),
        path: path.get().trim().to_string(),
        data_type: data_type.get(),
        field_type: field_type.get(),
        match_type: match_type.get(),
        dropdown_data_provider: Some(provider.get().trim().to_string()).filter(|p| !p.is_empty()),
        dropdown_values: Some(parse_dropdown_options(&options_text.get()))
            .filter(|options| field_type.get().is_dropdown() && !options.is_empty()),
    };
    let type_error = Memo::new(move |_| build().validate_types().err().map(|e| e.to_string()));

    let submit = move |_| {
        let field = untrack(build);
        if let Err(e) = existing.with_value(|existing| field.validate_new(existing)) {
            error.set(Some(e.to_string()));
            return;
        }
        submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_field(&name.get_value(), &field).await {
                Ok(()) => on_created.run(field),
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New search field"</h3>
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
                    <input type="text" placeholder="doc:customer.name"
                        prop:value=move || path.get()
                        on:input=move |ev| path.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label>"Data type"</label>
                    <select on:change=move |ev| {
                        if let Some(t) = SearchDataType::parse(&event_target_value(&ev)) {
                            data_type.set(t);
                        }
                    }>
                        {SearchDataType::ALL.into_iter().map(|t| view! {
                            <option value={t.as_str()} selected=move || data_type.get() == t>{t.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Field type"</label>
                    <select on:change=move |ev| {
                        if let Some(t) = SearchFieldType::parse(&event_target_value(&ev)) {
                            field_type.set(t);
                        }
                    }>
                        {SearchFieldType::ALL.into_iter().map(|t| view! {
                            <option value={t.as_str()} selected=move || field_type.get() == t>{t.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Match type"</label>
                    <select on:change=move |ev| {
                        match_type.set(match event_target_value(&ev).as_str() {
                            "exact" => Some(SearchMatchType::Exact),
                            "like" => Some(SearchMatchType::Like),
                            _ => None,
                        })
                    }>
                        <option value="">"Default"</option>
                        <option value="exact">"Exact"</option>
                        <option value="like">"Like"</option>
                    </select>
                </div>
                <Show when=move || field_type.get().is_dropdown()>
                    <div class="form-group">
                        <label>"Dropdown data provider"</label>
                        <input type="text" prop:value=move || provider.get()
                            on:input=move |ev| provider.set(event_target_value(&ev)) />
                    </div>
                    <div class="form-group">
                        <label>"Options (value=label per line)"</label>
                        <textarea rows="4" prop:value=move || options_text.get()
                            on:input=move |ev| options_text.set(event_target_value(&ev)) />
                    </div>
                </Show>
                {move || type_error.get().map(|e| view! { <div class="form-hint form-hint--error">{e}</div> })}
            </div>
            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=submit
                    disabled=move || submitting.get() || type_error.get().is_some()
                >
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
    fn test_parse_dropdown_options_keeps_order() {
        let options = parse_dropdown_options("b=Bravo\n a \n\nc = Charlie");
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["b", "a", "c"]);
        assert_eq!(options[1].label, "a");
        assert_eq!(options[2].label, "Charlie");
    }
}
