use crate::domain::a001_case_definition::api;
use crate::shared::components::ErrorBox;
use crate::shared::icons::icon;
use contracts::domain::a001_case_definition::{CaseSettings, ProcessLink, ProcessLinkRequest};
use leptos::prelude::*;

/// Settings of the definition and the processes linked to it.
#[component]
pub fn GeneralSection(definition_name: String, on_dirty_change: Callback<bool>) -> impl IntoView {
    let name = StoredValue::new(definition_name);

    let saved_settings = RwSignal::new(CaseSettings::default());
    let settings = RwSignal::new(CaseSettings::default());
    let settings_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let links = RwSignal::new(Vec::<ProcessLink>::new());
    let links_error = RwSignal::new(None::<String>);
    let new_link = RwSignal::new(ProcessLinkRequest::default());

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_settings(&name.get_value()).await {
            Ok(s) => {
                saved_settings.set(s);
                settings.set(s);
            }
            Err(e) => settings_error.set(Some(e)),
        }
    });
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_process_links(&name.get_value()).await {
            Ok(v) => links.set(v),
            Err(e) => links_error.set(Some(e)),
        }
    });

    let is_dirty = Memo::new(move |_| settings.get() != saved_settings.get());
    Effect::new(move |_| on_dirty_change.run(is_dirty.get()));

    let save_settings = move |_| {
        let current = settings.get_untracked().normalized();
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_settings(&name.get_value(), &current).await {
                Ok(()) => {
                    log::info!("Settings of '{}' saved", name.get_value());
                    saved_settings.set(current);
                    settings.set(current);
                    settings_error.set(None);
                }
                Err(e) => settings_error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    let add_link = move |_| {
        let request = new_link.get_untracked();
        if let Err(e) = links.with_untracked(|existing| request.validate(existing)) {
            links_error.set(Some(e.to_string()));
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_process_link(&name.get_value(), &request).await {
                Ok(link) => {
                    links.update(|v| v.push(link));
                    new_link.set(ProcessLinkRequest::default());
                    links_error.set(None);
                }
                Err(e) => links_error.set(Some(e)),
            }
        });
    };

    let delete_link = move |key: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Unlink process '{}'?", key))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_process_link(&name.get_value(), &key).await {
                Ok(()) => links.update(|v| v.retain(|l| l.process_definition_key != key)),
                Err(e) => links_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="general-section">
            <h3>"Settings"</h3>
            <ErrorBox error=settings_error />
            <div class="details-form">
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || settings.get().can_have_assignee
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            settings.update(|s| *s = CaseSettings { can_have_assignee: checked, ..*s }.normalized());
                        }
                    />
                    "Cases can have an assignee"
                </label>
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || settings.get().auto_assign_tasks
                        disabled=move || !settings.get().can_have_assignee
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            settings.update(|s| s.auto_assign_tasks = checked);
                        }
                    />
                    "Assign tasks to the case assignee automatically"
                </label>
                <div class="details-actions">
                    <button
                        class="button button--primary"
                        disabled=move || !is_dirty.get() || saving.get()
                        on:click=save_settings
                    >
                        {move || if saving.get() { "Saving..." } else { "Save settings" }}
                    </button>
                </div>
            </div>

            <h3>"Process links"</h3>
            <ErrorBox error=links_error />
            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header-cell">"Process"</th>
                        <th class="table__header-cell">"Key"</th>
                        <th class="table__header-cell">"Creates case"</th>
                        <th class="table__header-cell">"Startable by user"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || links.get().into_iter().map(|link| {
                        let key = link.process_definition_key.clone();
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{link.display_name().to_string()}</td>
                                <td class="table__cell">{link.process_definition_key.clone()}</td>
                                <td class="table__cell">{if link.can_initialize_document { "yes" } else { "no" }}</td>
                                <td class="table__cell">{if link.startable_by_user { "yes" } else { "no" }}</td>
                                <td class="table__cell">
                                    <button
                                        class="button button--ghost button--smallall"
                                        title="Unlink"
                                        on:click=move |_| delete_link(key.clone())
                                    >
                                        {icon("trash")}
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <div class="inline-form">
                <input
                    type="text"
                    placeholder="Process definition key"
                    prop:value=move || new_link.get().process_definition_key
                    on:input=move |ev| new_link.update(|r| r.process_definition_key = event_target_value(&ev))
                />
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || new_link.get().can_initialize_document
                        on:change=move |ev| new_link.update(|r| r.can_initialize_document = event_target_checked(&ev))
                    />
                    "Creates case"
                </label>
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || new_link.get().startable_by_user
                        on:change=move |ev| new_link.update(|r| r.startable_by_user = event_target_checked(&ev))
                    />
                    "Startable by user"
                </label>
                <button class="button button--secondary" on:click=add_link>
                    {icon("plus")}
                    "Link process"
                </button>
            </div>
        </div>
    }
}
