use super::renderers::render_widget;
use crate::domain::a005_case_widget::api;
use crate::shared::components::{ErrorBox, WidgetGrid};
use crate::shared::config::config;
use contracts::domain::a005_case_widget::WidgetTab;
use leptos::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Widget tab of one case: configuration first, then the data of every
/// widget fetched independently.
#[component]
pub fn CaseWidgetTab(case_id: Uuid, tab_key: String) -> impl IntoView {
    let grid = config().widgets;
    let tab_key = StoredValue::new(tab_key);
    let tab = RwSignal::new(None::<WidgetTab>);
    let data = RwSignal::new(HashMap::<String, Result<Value, String>>::new());
    let error = RwSignal::new(None::<String>);

    wasm_bindgen_futures::spawn_local(async move {
        let key = tab_key.get_value();
        match api::fetch_case_widget_tab(case_id, &key).await {
            Ok(loaded) => {
                for widget in &loaded.widgets {
                    let tab_key = key.clone();
                    let widget_key = widget.key.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = api::fetch_widget_data(case_id, &tab_key, &widget_key).await;
                        if let Err(e) = &result {
                            log::warn!("Widget '{}' failed to load: {}", widget_key, e);
                        }
                        data.update(|d| {
                            d.insert(widget_key, result);
                        });
                    });
                }
                tab.set(Some(loaded));
            }
            Err(e) => error.set(Some(e)),
        }
    });

    let widgets = Signal::derive(move || {
        tab.with(|t| {
            t.as_ref()
                .map(|t| t.widgets.iter().map(|w| (w.key.clone(), w.span())).collect())
                .unwrap_or_default()
        })
    });
    let loaded_count = Signal::derive(move || data.with(|d| d.len() as u32));

    let render = Callback::new(move |key: String| {
        let Some(widget) = tab.with_untracked(|t| t.as_ref().and_then(|t| t.widget(&key).cloned()))
        else {
            return ().into_any();
        };
        let title = widget.title.clone();
        let high_contrast = widget.high_contrast;
        let widget = StoredValue::new(widget);
        view! {
            <div class="widget-card" class:widget-card--contrast=high_contrast>
                <div class="widget-card__title">{title}</div>
                <div class="widget-card__body">
                    {move || match data.with(|d| d.get(&key).cloned()) {
                        None => view! { <span class="form-hint">"Loading..."</span> }.into_any(),
                        Some(Err(e)) => view! { <span class="form-hint form-hint--error">{e}</span> }.into_any(),
                        Some(Ok(value)) => widget.with_value(|w| render_widget(w, &value, case_id)),
                    }}
                </div>
            </div>
        }
        .into_any()
    });

    view! {
        <div class="case-widgets">
            <ErrorBox error=error />
            <WidgetGrid
                widgets=widgets
                columns=grid.columns
                gap=grid.gap
                render=render
                remeasure=loaded_count
            />
        </div>
    }
}
