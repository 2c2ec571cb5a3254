use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible search panel of the case list. Pagination stays visible in
/// the header while the fields collapse.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    /// Number of non-empty search values (badge)
    #[prop(into)]
    active_filters_count: Signal<usize>,
    pagination_controls: ChildrenFn,
    filter_content: ChildrenFn,
    /// Chips of the applied values
    #[prop(optional)]
    filter_tags: Option<ChildrenFn>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("search")}
                    <span class="filter-panel__title">"Search"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls()}
                </div>
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">
                    {filter_content()}
                    {filter_tags.as_ref().map(|tags| view! {
                        <div class="filter-panel__tags">{tags()}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Chip of one applied search value.
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                class="filter-tag__remove"
                title="Remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
