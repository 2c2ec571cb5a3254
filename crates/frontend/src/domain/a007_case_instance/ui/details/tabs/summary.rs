use contracts::domain::a007_case_instance::CaseInstance;
use contracts::shared::value_path::flatten;
use leptos::prelude::*;

/// Case content as a flat list of paths and values.
#[component]
pub fn CaseSummary(#[prop(into)] case: Signal<Option<CaseInstance>>) -> impl IntoView {
    let entries = Memo::new(move |_| {
        case.with(|c| c.as_ref().map(|c| flatten(&c.content)).unwrap_or_default())
    });

    view! {
        <Show
            when=move || !entries.with(|e| e.is_empty())
            fallback=|| view! { <p class="form-hint">"The case has no content"</p> }
        >
            <dl class="case-summary">
                {move || entries.get().into_iter().map(|(path, value)| view! {
                    <div class="case-summary__row">
                        <dt>{path}</dt>
                        <dd>{value}</dd>
                    </div>
                }).collect_view()}
            </dl>
        </Show>
    }
}
