use super::view_model::CaseDetailsViewModel;
use crate::domain::a007_case_instance::api;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::a006_case_status::find_status;
use contracts::domain::a007_case_instance::CandidateUser;
use leptos::prelude::*;

/// Reference, status badge and assignment of the open case.
#[component]
pub fn CaseHeader(vm: CaseDetailsViewModel) -> impl IntoView {
    let candidates = RwSignal::new(None::<Vec<CandidateUser>>);
    let selected_user = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let status_badge = move || {
        let key = vm.case.with(|c| c.as_ref().and_then(|c| c.internal_status.clone()))?;
        let (class, title) = vm.statuses.with(|all| match find_status(all, &key) {
            Some(status) => (status.color.badge_class(), status.title.clone()),
            None => ("badge badge--gray", key.clone()),
        });
        Some(view! { <span class=class>{title}</span> })
    };

    let load_candidates = move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_candidate_users(vm.id).await {
                Ok(users) => {
                    selected_user.set(users.first().map(|u| u.id.clone()).unwrap_or_default());
                    candidates.set(Some(users));
                }
                Err(e) => vm.error.set(Some(e)),
            }
        });
    };

    let assign = move |_| {
        let user = selected_user.get_untracked();
        if user.is_empty() {
            return;
        }
        busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::assign(vm.id, &user).await {
                Ok(()) => {
                    log::info!("Case {} assigned to {}", vm.id, user);
                    candidates.set(None);
                    vm.reload_case();
                }
                Err(e) => vm.error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    let unassign = move |_| {
        busy.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::unassign(vm.id).await {
                Ok(()) => vm.reload_case(),
                Err(e) => vm.error.set(Some(e)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="case-header">
            <div class="case-header__title">
                <h1>{move || vm.case.with(|c| c.as_ref().map(|c| c.reference()).unwrap_or_default())}</h1>
                {status_badge}
            </div>
            <div class="case-header__meta">
                {move || vm.case.get().map(|c| view! {
                    <span>{format!("Created {}", format_date(&c.created_on))}</span>
                    <span>{c.created_by.clone().map(|by| format!("by {}", by)).unwrap_or_default()}</span>
                })}
            </div>
            <Show when=move || vm.settings.get().can_have_assignee>
                <div class="case-header__assignment">
                    {icon("user")}
                    {move || {
                        let case = vm.case.get();
                        match case.filter(|c| c.is_assigned()) {
                            Some(c) => view! {
                                <span>{c.assignee_full_name.clone().unwrap_or_default()}</span>
                                <button class="button button--secondary" disabled=move || busy.get() on:click=unassign>
                                    "Unassign"
                                </button>
                            }
                            .into_any(),
                            None => match candidates.get() {
                                None => view! {
                                    <span class="form-hint">"Unassigned"</span>
                                    <button class="button button--secondary" on:click=load_candidates>
                                        "Assign..."
                                    </button>
                                }
                                .into_any(),
                                Some(users) => view! {
                                    <select on:change=move |ev| selected_user.set(event_target_value(&ev))>
                                        {users.into_iter().map(|u| {
                                            let id = u.id.clone();
                                            view! {
                                                <option value={u.id.clone()} selected=move || selected_user.get() == id>
                                                    {u.full_name()}
                                                </option>
                                            }
                                        }).collect_view()}
                                    </select>
                                    <button class="button button--primary" disabled=move || busy.get() on:click=assign>
                                        "Assign"
                                    </button>
                                    <button class="button button--ghost" on:click=move |_| candidates.set(None)>
                                        "Cancel"
                                    </button>
                                }
                                .into_any(),
                            },
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
