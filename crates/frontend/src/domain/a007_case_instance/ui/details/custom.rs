//! Custom case components, looked up by the key configured on a custom tab
//! or a custom widget.

use super::tabs::{CaseProgress, OpenTasks};
use crate::domain::a007_case_instance::api;
use crate::shared::components::ErrorBox;
use leptos::prelude::*;
use uuid::Uuid;

type CustomFactory = fn(Uuid) -> AnyView;

const CUSTOM_COMPONENTS: &[(&str, CustomFactory)] = &[
    ("case-json", case_json),
    ("open-tasks", open_tasks),
    ("process-progress", process_progress),
];

fn case_json(case_id: Uuid) -> AnyView {
    view! { <CaseJson case_id=case_id /> }.into_any()
}

fn open_tasks(case_id: Uuid) -> AnyView {
    view! { <OpenTasks case_id=case_id /> }.into_any()
}

fn process_progress(case_id: Uuid) -> AnyView {
    view! { <CaseProgress case_id=case_id /> }.into_any()
}

pub fn find_custom_component(key: &str) -> Option<CustomFactory> {
    CUSTOM_COMPONENTS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, factory)| *factory)
}

pub fn render_custom_component(key: &str, case_id: Uuid) -> AnyView {
    match find_custom_component(key) {
        Some(factory) => factory(case_id),
        None => {
            log::warn!("No custom component registered under '{}'", key);
            let message = format!("Component '{}' is not available", key);
            view! { <p class="form-hint form-hint--error">{message}</p> }.into_any()
        }
    }
}

/// Raw content of the case, pretty printed.
#[component]
fn CaseJson(case_id: Uuid) -> impl IntoView {
    let content = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_case(case_id).await {
            Ok(case) => content.set(serde_json::to_string_pretty(&case.content).ok()),
            Err(e) => error.set(Some(e)),
        }
    });
    view! {
        <ErrorBox error=error />
        <pre class="case-json">{move || content.get().unwrap_or_default()}</pre>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_keys_are_unique() {
        let keys: HashSet<&str> = CUSTOM_COMPONENTS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), CUSTOM_COMPONENTS.len());
    }

    #[test]
    fn test_find_custom_component() {
        assert!(find_custom_component("case-json").is_some());
        assert!(find_custom_component("open-tasks").is_some());
        assert!(find_custom_component("missing").is_none());
    }
}
