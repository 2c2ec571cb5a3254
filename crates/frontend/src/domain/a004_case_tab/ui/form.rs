use crate::domain::a004_case_tab::api;
use crate::shared::components::ErrorBox;
use contracts::domain::a004_case_tab::{CaseTab, CaseTabType, STANDARD_CONTENT_KEYS};
use leptos::prelude::*;

#[component]
pub fn CaseTabForm(
    definition_name: String,
    existing: Vec<CaseTab>,
    on_created: Callback<CaseTab>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = StoredValue::new(definition_name);
    let existing = StoredValue::new(existing);

    let key = RwSignal::new(String::new());
    let tab_name = RwSignal::new(String::new());
    let tab_type = RwSignal::new(CaseTabType::Standard);
    let content_key = RwSignal::new(STANDARD_CONTENT_KEYS[0].to_string());
    let show_tasks = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_type_change = move |value: String| {
        if let Some(t) = CaseTabType::parse(&value) {
            tab_type.set(t);
            content_key.set(if t == CaseTabType::Standard {
                STANDARD_CONTENT_KEYS[0].to_string()
            } else {
                String::new()
            });
        }
    };

    let submit = move |_| {
        let tab = CaseTab {
            key: key.get_untracked().trim().to_string(),
            name: Some(tab_name.get_untracked().trim().to_string()).filter(|n| !n.is_empty()),
            tab_type: tab_type.get_untracked(),
            content_key: content_key.get_untracked().trim().to_string(),
            show_tasks: show_tasks.get_untracked(),
        };
        if let Err(e) = existing.with_value(|existing| tab.validate_new(existing)) {
            error.set(Some(e.to_string()));
            return;
        }
        submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_tab(&name.get_value(), &tab).await {
                Ok(()) => on_created.run(tab),
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    let content_hint = move || match tab_type.get() {
        CaseTabType::Standard => "",
        CaseTabType::Formio => "Form definition name",
        CaseTabType::Custom => "Custom component key",
        CaseTabType::Widgets => "Widget tab key",
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New case tab"</h3>
            </div>
            <ErrorBox error=error />
            <div class="details-form">
                <div class="form-group">
                    <label>"Key"</label>
                    <input type="text" prop:value=move || key.get()
                        on:input=move |ev| key.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label>"Name"</label>
                    <input type="text" prop:value=move || tab_name.get()
                        on:input=move |ev| tab_name.set(event_target_value(&ev)) />
                </div>
                <div class="form-group">
                    <label>"Type"</label>
                    <select on:change=move |ev| on_type_change(event_target_value(&ev))>
                        {CaseTabType::ALL.into_iter().map(|t| view! {
                            <option value={t.as_str()} selected=move || tab_type.get() == t>{t.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Content"</label>
                    {move || if tab_type.get() == CaseTabType::Standard {
                        view! {
                            <select on:change=move |ev| content_key.set(event_target_value(&ev))>
                                {STANDARD_CONTENT_KEYS.into_iter().map(|k| view! {
                                    <option value=k selected=move || content_key.get() == k>{k}</option>
                                }).collect_view()}
                            </select>
                        }
                        .into_any()
                    } else {
                        view! {
                            <input type="text" placeholder=content_hint
                                prop:value=move || content_key.get()
                                on:input=move |ev| content_key.set(event_target_value(&ev)) />
                        }
                        .into_any()
                    }}
                </div>
                <label class="form-check">
                    <input type="checkbox" prop:checked=move || show_tasks.get()
                        on:change=move |ev| show_tasks.set(event_target_checked(&ev)) />
                    "Show open tasks next to the tab"
                </label>
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
