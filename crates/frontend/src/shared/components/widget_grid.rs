//! Grid of case widgets positioned by the bin packer.
//!
//! Widget bodies are rendered once; only their absolute position changes.
//! Heights are measured from the DOM after every layout pass and on window
//! resize, which feeds the next pass until the sizes settle.

use contracts::shared::packing::{layout_widgets, GridSpec, WidgetBox, WidgetLayout};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Height used until a widget has been measured
const ESTIMATED_HEIGHT: u32 = 160;

#[component]
pub fn WidgetGrid(
    /// (key, column span) per widget, in configured order
    #[prop(into)]
    widgets: Signal<Vec<(String, u32)>>,
    columns: u32,
    gap: u32,
    /// Renders the body of the widget with the given key
    render: Callback<String, AnyView>,
    /// Changes whenever widget content may have changed size
    #[prop(optional, into)]
    remeasure: Option<Signal<u32>>,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let container_width = RwSignal::new(0u32);
    let heights = RwSignal::new(HashMap::<String, u32>::new());

    let layout = Memo::new(move |_| {
        // not measured yet
        if container_width.get() == 0 {
            return WidgetLayout::default();
        }
        let grid = GridSpec {
            container_width: container_width.get(),
            columns,
            gap,
        };
        let boxes: Vec<WidgetBox> = widgets.with(|ws| {
            heights.with(|measured| {
                ws.iter()
                    .map(|(key, span)| WidgetBox {
                        key: key.clone(),
                        span: *span,
                        height: measured.get(key).copied().unwrap_or(ESTIMATED_HEIGHT),
                    })
                    .collect()
            })
        });
        layout_widgets(&boxes, &grid)
    });

    let measure = move || {
        let Some(el) = container.get_untracked() else {
            return;
        };
        let width = el.client_width().max(0) as u32;
        if width != container_width.get_untracked() {
            container_width.set(width);
        }
        let Ok(nodes) = el.query_selector_all("[data-widget-key]") else {
            return;
        };
        let mut measured = HashMap::new();
        for index in 0..nodes.length() {
            let Some(item) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                continue;
            };
            if let Some(key) = item.get_attribute("data-widget-key") {
                measured.insert(key, item.offset_height().max(0) as u32);
            }
        }
        if heights.with_untracked(|current| *current != measured) {
            log::debug!("widget grid: re-measured {} widgets", measured.len());
            heights.set(measured);
        }
    };

    let schedule_measure = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            measure();
        });
    };

    Effect::new(move |_| {
        layout.track();
        if let Some(remeasure) = remeasure {
            remeasure.track();
        }
        schedule_measure();
    });

    let resize = window_event_listener(leptos::ev::resize, move |_| schedule_measure());
    on_cleanup(move || resize.remove());

    let position = move |key: &str| {
        layout.with(|l: &WidgetLayout| {
            l.get(key)
                .map(|p| {
                    format!(
                        "position: absolute; left: {}px; top: {}px; width: {}px;",
                        p.left, p.top, p.width
                    )
                })
                .unwrap_or_else(|| "position: absolute; visibility: hidden;".to_string())
        })
    };

    view! {
        <div
            class="widget-grid"
            node_ref=container
            style=move || format!("position: relative; height: {}px;", layout.with(|l| l.height))
        >
            <For
                each=move || widgets.get()
                key=|(key, _)| key.clone()
                children=move |(key, _)| {
                    let key_for_style = key.clone();
                    let body = render.run(key.clone());
                    view! {
                        <div
                            class="widget-grid__item"
                            data-widget-key=key
                            style=move || position(&key_for_style)
                        >
                            {body}
                        </div>
                    }
                }
            />
        </div>
    }
}
