use crate::domain::a007_case_instance::api;
use crate::shared::components::ErrorBox;
use crate::shared::date_utils::{format_datetime, format_optional};
use contracts::domain::a007_case_instance::{CaseProcess, ProcessTask};
use leptos::prelude::*;
use uuid::Uuid;

fn load_processes(case_id: Uuid, processes: RwSignal<Vec<CaseProcess>>, error: RwSignal<Option<String>>) {
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_processes(case_id).await {
            Ok(v) => processes.set(v),
            Err(e) => error.set(Some(e)),
        }
    });
}

/// Processes of the case with their tasks and completion.
#[component]
pub fn CaseProgress(case_id: Uuid) -> impl IntoView {
    let processes = RwSignal::new(Vec::<CaseProcess>::new());
    let error = RwSignal::new(None::<String>);
    load_processes(case_id, processes, error);

    view! {
        <div class="case-progress">
            <ErrorBox error=error />
            <For
                each=move || processes.get()
                key=|p| p.id.clone()
                children=move |process| {
                    let percent = (process.progress() * 100.0).round();
                    view! {
                        <div class="process-card">
                            <div class="process-card__header">
                                <h4>{process.process_name.clone()}</h4>
                                {if process.is_active() {
                                    view! { <span class="badge badge--blue">"active"</span> }.into_any()
                                } else {
                                    view! { <span class="badge badge--green">"completed"</span> }.into_any()
                                }}
                            </div>
                            <div class="process-card__dates">
                                {format!(
                                    "{} → {}",
                                    format_datetime(&process.started_on),
                                    format_optional(process.ended_on.as_ref())
                                )}
                            </div>
                            <div class="progress-bar">
                                <div class="progress-bar__fill" style={format!("width: {}%;", percent)}></div>
                            </div>
                            <ul class="process-card__tasks">
                                {process.tasks.iter().map(task_row).collect_view()}
                            </ul>
                        </div>
                    }
                }
            />
        </div>
    }
}

fn task_row(task: &ProcessTask) -> impl IntoView {
    view! {
        <li class="process-task" class:process-task--done={task.is_completed()}>
            <span>{task.name.clone()}</span>
            <span class="process-task__assignee">{task.assignee.clone().unwrap_or_default()}</span>
        </li>
    }
}

/// Compact list of the tasks still open, shown next to tabs that ask for it.
#[component]
pub fn OpenTasks(case_id: Uuid) -> impl IntoView {
    let processes = RwSignal::new(Vec::<CaseProcess>::new());
    let error = RwSignal::new(None::<String>);
    load_processes(case_id, processes, error);

    let open = Memo::new(move |_| {
        processes.with(|all| {
            all.iter()
                .filter(|p| p.is_active())
                .flat_map(|p| p.tasks.iter().filter(|t| !t.is_completed()).cloned())
                .collect::<Vec<_>>()
        })
    });

    view! {
        <aside class="open-tasks">
            <h4>"Open tasks"</h4>
            <ErrorBox error=error />
            <Show
                when=move || !open.with(|t| t.is_empty())
                fallback=|| view! { <p class="form-hint">"Nothing to do"</p> }
            >
                <ul>{move || open.get().iter().map(task_row).collect_view()}</ul>
            </Show>
        </aside>
    }
}
