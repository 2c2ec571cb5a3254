use crate::domain::a009_case_document::api;
use crate::shared::components::ErrorBox;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::download_bytes;
use crate::shared::icons::icon;
use contracts::domain::a009_case_document::RelatedFile;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen::JsCast;

/// Files attached to a case.
#[component]
pub fn CaseDocuments(case_id: Uuid) -> impl IntoView {
    let files = RwSignal::new(Vec::<RelatedFile>::new());
    let error = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);

    let reload = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_files(case_id).await {
                Ok(v) => {
                    files.set(v);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    reload();

    let on_file_selected = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        input.set_value("");
        uploading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::upload(case_id, &file).await {
                Ok(()) => {
                    log::info!("Uploaded '{}'", file.name());
                    reload();
                }
                Err(e) => error.set(Some(e)),
            }
            uploading.set(false);
        });
    };

    let download = move |file: RelatedFile| {
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::download(file.file_id)
                .await
                .and_then(|bytes| download_bytes(&bytes, &file.file_name));
            if let Err(e) = result {
                error.set(Some(e));
            }
        });
    };

    let remove = move |file: RelatedFile| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete '{}'?", file.file_name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_file(case_id, file.file_id).await {
                Ok(()) => files.update(|v| v.retain(|f| f.file_id != file.file_id)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="case-documents">
            <ErrorBox error=error />
            <div class="case-documents__toolbar">
                <label class="button button--secondary" class:button--disabled=move || uploading.get()>
                    {icon("upload")}
                    {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    <input
                        type="file"
                        style="display: none;"
                        disabled=move || uploading.get()
                        on:change=on_file_selected
                    />
                </label>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell">"Size"</th>
                        <th class="table__header-cell">"Uploaded"</th>
                        <th class="table__header-cell">"By"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || files.get()
                        key=|file| file.file_id
                        children=move |file| {
                            let for_download = file.clone();
                            let for_delete = file.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{icon("file-text")} {file.file_name.clone()}</td>
                                    <td class="table__cell">{file.size_label()}</td>
                                    <td class="table__cell">{format_datetime(&file.created_on)}</td>
                                    <td class="table__cell">{file.created_by.clone().unwrap_or_default()}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--ghost button--smallall"
                                            title="Download"
                                            on:click=move |_| download(for_download.clone())
                                        >
                                            {icon("download")}
                                        </button>
                                        <button
                                            class="button button--ghost button--smallall"
                                            title="Delete"
                                            on:click=move |_| remove(for_delete.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
