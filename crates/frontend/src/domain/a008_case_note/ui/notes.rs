use crate::domain::a008_case_note::api;
use crate::shared::components::ErrorBox;
use crate::shared::date_utils::format_local;
use crate::shared::icons::icon;
use contracts::domain::a008_case_note::{CaseNote, NoteRequest, MAX_NOTE_LENGTH};
use leptos::prelude::*;
use uuid::Uuid;

/// Notes of a case, newest first.
#[component]
pub fn CaseNotes(case_id: Uuid) -> impl IntoView {
    let notes = RwSignal::new(Vec::<CaseNote>::new());
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_notes(case_id).await {
            Ok(v) => notes.set(v),
            Err(e) => error.set(Some(e)),
        }
    });

    let add = move |_| {
        let request = NoteRequest::new(draft.get_untracked());
        if let Err(e) = request.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_note(case_id, &request).await {
                Ok(note) => {
                    notes.update(|v| v.insert(0, note));
                    draft.set(String::new());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    let remove = move |note_id: Uuid| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this note?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_note(note_id).await {
                Ok(()) => notes.update(|v| v.retain(|n| n.id != note_id)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="case-notes">
            <ErrorBox error=error />
            <div class="case-notes__editor">
                <textarea
                    rows="3"
                    placeholder="Add a note"
                    maxlength={MAX_NOTE_LENGTH.to_string()}
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || draft.with(|d| d.trim().is_empty())
                    on:click=add
                >
                    {icon("plus")}
                    "Add note"
                </button>
            </div>
            <Show
                when=move || !notes.with(|n| n.is_empty())
                fallback=|| view! { <p class="form-hint">"No notes yet"</p> }
            >
                <ul class="case-notes__list">
                    <For
                        each=move || notes.get()
                        key=|note| note.id
                        children=move |note| {
                            let id = note.id;
                            view! {
                                <li class="case-note">
                                    <div class="case-note__meta">
                                        <span class="case-note__author">{note.created_by_user_full_name.clone()}</span>
                                        <span class="case-note__date">{format_local(&note.created_date)}</span>
                                        <button
                                            class="button button--ghost button--smallall"
                                            title="Delete"
                                            on:click=move |_| remove(id)
                                        >
                                            {icon("trash")}
                                        </button>
                                    </div>
                                    <p class="case-note__content">{note.content.clone()}</p>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
