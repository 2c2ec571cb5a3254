use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    modal_style: Option<String>,
}

/// A handle returned by `ModalStackService::push`.
///
/// Can be cloned and used inside event handlers to close the modal.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open modals (add forms, confirmations).
///
/// Escape closes only the topmost modal (handled by `ModalHost`).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Next tick: the modal may be removed while its own click is dispatched.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        !self.stack.get().is_empty()
    }

    /// Push a new modal onto the stack.
    ///
    /// `builder` receives a `ModalHandle` so the modal can close itself.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_style(None, builder)
    }

    /// Same as `push`, with an extra style for the modal surface.
    pub fn push_with_style<F>(&self, modal_style: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                modal_style,
            });
        });

        ModalHandle { id, svc: *self }
    }

    /// Yes/no confirmation. Closing by Escape or overlay counts as "no".
    pub fn confirm(
        &self,
        title: &str,
        message: &str,
        confirm_label: &str,
        on_confirm: Callback<()>,
        on_cancel: Callback<()>,
    ) {
        let title = title.to_string();
        let message = message.to_string();
        let confirm_label = confirm_label.to_string();
        self.push_with_style(Some("max-width: 420px;".to_string()), move |handle| {
            let answered = Arc::new(AtomicBool::new(false));
            let answered_on_cleanup = Arc::clone(&answered);
            on_cleanup(move || {
                if !answered_on_cleanup.load(Ordering::Relaxed) {
                    on_cancel.run(());
                }
            });
            let answered_no = Arc::clone(&answered);
            let handle_yes = handle.clone();
            let handle_no = handle.clone();
            view! {
                <div class="modal-confirm">
                    <h3 class="modal-confirm__title">{title.clone()}</h3>
                    <p class="modal-confirm__message">{message.clone()}</p>
                    <div class="modal-confirm__actions">
                        <button
                            class="button button--secondary"
                            on:click=move |_| {
                                answered_no.store(true, Ordering::Relaxed);
                                on_cancel.run(());
                                handle_no.close();
                            }
                        >
                            "Cancel"
                        </button>
                        <button
                            class="button button--primary"
                            on:click=move |_| {
                                answered.store(true, Ordering::Relaxed);
                                on_confirm.run(());
                                handle_yes.close();
                            }
                        >
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            }
            .into_any()
        });
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| {
            s.retain(|e| e.id != id);
        });
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop(&self) {
        self.stack.update(|s| {
            s.pop();
        });
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| svc.pop());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the modal stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    // Global Escape handler: closes only the topmost modal.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty()) {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // Mounted once for the whole app lifetime
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, ModalEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let z_index = 1000 + idx as i32;
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let view = (entry.builder)(ModalHandle { id, svc });
                    let modal_style = entry.modal_style.clone().unwrap_or_default();

                    view! {
                        <ModalFrame z_index=z_index on_close=on_close modal_style=modal_style>
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
