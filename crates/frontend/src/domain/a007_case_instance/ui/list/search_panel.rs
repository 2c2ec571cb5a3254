use contracts::domain::a003_case_search_field::{SearchField, SearchFieldType, SearchFieldValue};
use leptos::prelude::*;
use std::collections::HashMap;

type Draft = RwSignal<HashMap<String, SearchFieldValue>>;

fn single(draft: Draft, key: &str) -> String {
    draft.with(|d| match d.get(key) {
        Some(SearchFieldValue::Single(v)) => v.clone(),
        _ => String::new(),
    })
}

fn range_part(draft: Draft, key: &str, upper: bool) -> String {
    draft.with(|d| match d.get(key) {
        Some(SearchFieldValue::Range { from, to }) => (if upper { to } else { from }).clone(),
        _ => String::new(),
    })
}

fn set_range_part(draft: Draft, key: &str, upper: bool, value: String) {
    draft.update(|d| {
        let entry = d.entry(key.to_string()).or_insert(SearchFieldValue::Range {
            from: String::new(),
            to: String::new(),
        });
        match entry {
            SearchFieldValue::Range { from, to } => *(if upper { to } else { from }) = value,
            other => {
                *other = if upper {
                    SearchFieldValue::Range { from: String::new(), to: value }
                } else {
                    SearchFieldValue::Range { from: value, to: String::new() }
                }
            }
        }
    });
}

fn toggle_multiple(draft: Draft, key: &str, option: String, checked: bool) {
    draft.update(|d| {
        let entry = d
            .entry(key.to_string())
            .or_insert_with(|| SearchFieldValue::Multiple(Vec::new()));
        if !matches!(entry, SearchFieldValue::Multiple(_)) {
            *entry = SearchFieldValue::Multiple(Vec::new());
        }
        if let SearchFieldValue::Multiple(values) = entry {
            values.retain(|v| *v != option);
            if checked {
                values.push(option);
            }
        }
    });
}

/// Input for one configured search field, writing into `draft`.
#[component]
pub fn SearchFieldInput(field: SearchField, draft: Draft) -> impl IntoView {
    let key = StoredValue::new(field.key.clone());
    let label = field.label().to_string();
    let input_type = field.data_type.input_type();
    let options = field.dropdown_values.clone().unwrap_or_default();

    let control = match field.field_type {
        SearchFieldType::Single => view! {
            <input
                type=input_type
                prop:value=move || single(draft, &key.get_value())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| {
                        d.insert(key.get_value(), SearchFieldValue::Single(value));
                    });
                }
            />
        }
        .into_any(),
        SearchFieldType::Range => view! {
            <div class="search-range">
                <input
                    type=input_type
                    placeholder="from"
                    prop:value=move || range_part(draft, &key.get_value(), false)
                    on:input=move |ev| set_range_part(draft, &key.get_value(), false, event_target_value(&ev))
                />
                <input
                    type=input_type
                    placeholder="to"
                    prop:value=move || range_part(draft, &key.get_value(), true)
                    on:input=move |ev| set_range_part(draft, &key.get_value(), true, event_target_value(&ev))
                />
            </div>
        }
        .into_any(),
        SearchFieldType::SingleSelectDropdown => view! {
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                draft.update(|d| {
                    d.insert(key.get_value(), SearchFieldValue::Single(value));
                });
            }>
                <option value="" selected=move || single(draft, &key.get_value()).is_empty()>"-"</option>
                {options.into_iter().map(|o| {
                    let value = o.value.clone();
                    view! {
                        <option
                            value=o.value
                            selected=move || single(draft, &key.get_value()) == value
                        >
                            {o.label}
                        </option>
                    }
                }).collect_view()}
            </select>
        }
        .into_any(),
        SearchFieldType::MultiSelectDropdown => view! {
            <div class="search-multi">
                {options.into_iter().map(|o| {
                    let value = o.value.clone();
                    let checked_value = o.value.clone();
                    view! {
                        <label class="form-check">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| matches!(
                                    d.get(&key.get_value()),
                                    Some(SearchFieldValue::Multiple(v)) if v.contains(&checked_value)
                                ))
                                on:change=move |ev| toggle_multiple(
                                    draft,
                                    &key.get_value(),
                                    value.clone(),
                                    event_target_checked(&ev),
                                )
                            />
                            {o.label}
                        </label>
                    }
                }).collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="form-group search-field">
            <label>{label}</label>
            {control}
        </div>
    }
}
