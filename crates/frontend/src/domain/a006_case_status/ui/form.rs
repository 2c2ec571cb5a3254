use crate::domain::a006_case_status::api;
use crate::shared::components::ErrorBox;
use contracts::domain::a006_case_status::{InternalCaseStatus, StatusColor};
use leptos::prelude::*;

#[component]
pub fn StatusForm(
    definition_name: String,
    existing: Vec<InternalCaseStatus>,
    on_created: Callback<InternalCaseStatus>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let name = StoredValue::new(definition_name);
    let existing = StoredValue::new(existing);

    let key = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let color = RwSignal::new(StatusColor::default());
    let visible = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move |_| {
        let status = InternalCaseStatus {
            key: key.get_untracked().trim().to_string(),
            title: title.get_untracked().trim().to_string(),
            visible_in_case_list_by_default: visible.get_untracked(),
            color: color.get_untracked(),
        };
        if let Err(e) = existing.with_value(|existing| status.validate_new(existing)) {
            error.set(Some(e.to_string()));
            return;
        }
        submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_status(&name.get_value(), &status).await {
                Ok(()) => on_created.run(status),
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>"New status"</h3>
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
                    <label>"Color"</label>
                    <select on:change=move |ev| {
                        if let Some(c) = StatusColor::parse(&event_target_value(&ev)) {
                            color.set(c);
                        }
                    }>
                        {StatusColor::ALL.into_iter().map(|c| view! {
                            <option value={c.as_str()} selected=move || color.get() == c>{c.as_str()}</option>
                        }).collect_view()}
                    </select>
                    <span class=move || color.get().badge_class()>
                        {move || {
                            let t = title.get();
                            if t.trim().is_empty() { "Preview".to_string() } else { t }
                        }}
                    </span>
                </div>
                <label class="form-check">
                    <input type="checkbox" prop:checked=move || visible.get()
                        on:change=move |ev| visible.set(event_target_checked(&ev)) />
                    "Visible in the case list by default"
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
