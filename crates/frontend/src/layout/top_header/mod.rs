//! TopHeader component - верхняя панель приложения.
//!
//! Содержит переключатель навигации, заголовок и число открытых табов
//! с несохранёнными изменениями.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();
    let dirty_count = move || ctx.opened.with(|tabs| tabs.iter().filter(|t| t.dirty).count());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Dossier"</span>
            </div>

            <div class="top-header__actions">
                <Show when=move || { dirty_count() > 0 }>
                    <span class="top-header__badge" title="Tabs with unsaved changes">
                        {move || format!("{} unsaved", dirty_count())}
                    </span>
                </Show>
            </div>
        </div>
    }
}
