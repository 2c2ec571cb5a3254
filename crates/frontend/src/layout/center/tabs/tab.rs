use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let key = StoredValue::new(tab.key.clone());
    let is_active =
        Memo::new(move |_| tabs_store.active.with(|a| a.as_deref() == Some(key.get_value().as_str())));
    // заголовок и dirty берём из стора: For не перерисовывает таб при их смене
    let current = Memo::new(move |_| {
        tabs_store.opened.with(|tabs| {
            tabs.iter()
                .find(|t| t.key == key.get_value())
                .map(|t| (t.title.clone(), t.dirty))
        })
    });

    let on_click = move |_| tabs_store.activate_tab(&key.get_value());
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.request_close(&key.get_value());
    };

    view! {
        <div class="app-tab" class:app-tab--active=is_active on:click=on_click>
            <span class="app-tab__title">
                {move || current.get().map(|(title, _)| title).unwrap_or_default()}
            </span>
            <Show when=move || current.get().map(|(_, dirty)| dirty).unwrap_or(false)>
                <span class="app-tab__dirty" title="Unsaved changes">"*"</span>
            </Show>
            <button class="app-tab__close" on:click=on_close title="Close">
                {icon("x")}
            </button>
        </div>
    }
}
