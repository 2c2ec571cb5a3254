//! Reactive state of an editable ordered configuration list.
//!
//! `saved` mirrors what the backend last confirmed, `items` is the working
//! copy the arrows reorder. Saving PUTs the working copy; a rejected save
//! rolls the working copy back to `saved`.

use contracts::shared::ordering::{is_reordered, move_item, Keyed, MoveDirection};
use leptos::prelude::*;
use std::future::Future;

/// Identifies one `load` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Counts `load` calls so that only the latest response is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    pub fn start(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    /// False once a newer load has started.
    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        self.latest == ticket.0
    }
}

pub struct OrderedListModel<T: Send + Sync + 'static> {
    pub saved: RwSignal<Vec<T>>,
    pub items: RwSignal<Vec<T>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    loads: RwSignal<LoadSequence>,
}

impl<T: Send + Sync + 'static> Clone for OrderedListModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for OrderedListModel<T> {}

impl<T> OrderedListModel<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            saved: RwSignal::new(Vec::new()),
            items: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            loads: RwSignal::new(LoadSequence::default()),
        }
    }

    /// Replaces both copies with freshly fetched data.
    pub fn set_loaded(&self, items: Vec<T>) {
        self.saved.set(items.clone());
        self.items.set(items);
    }

    /// Runs `fetch` and stores its result. A response that arrives after a
    /// newer `load` started is dropped.
    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, String>> + 'static,
    {
        let this = *self;
        let ticket = this.loads.try_update(LoadSequence::start).unwrap_or_default();
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch().await;
            if !this.loads.with_untracked(|loads| loads.is_latest(ticket)) {
                log::debug!("Dropping stale list response");
                return;
            }
            match result {
                Ok(items) => {
                    this.set_loaded(items);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load list: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn move_item(&self, key: &str, direction: MoveDirection) {
        let next = self.items.with_untracked(|items| move_item(items, key, direction));
        self.items.set(next);
    }

    /// Tracked: true while the working order differs from the saved one.
    pub fn is_dirty(&self) -> bool {
        self.saved
            .with(|saved| self.items.with(|items| is_reordered(saved, items)))
    }

    /// Item accepted by the backend; it goes last in both copies.
    pub fn push_saved(&self, item: T) {
        self.saved.update(|saved| saved.push(item.clone()));
        self.items.update(|items| items.push(item));
    }

    /// Item deleted on the backend. The working order of the rest is kept.
    pub fn remove_saved(&self, key: &str) {
        self.saved.update(|saved| saved.retain(|i| i.key() != key));
        self.items.update(|items| items.retain(|i| i.key() != key));
    }

    /// Deletes `key` on the backend after a browser confirmation.
    pub fn delete_confirmed<F, Fut>(&self, key: String, what: &str, delete: F)
    where
        F: FnOnce(String) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Delete {} '{}'?", what, key))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match delete(key.clone()).await {
                Ok(()) => {
                    log::info!("Deleted '{}'", key);
                    this.remove_saved(&key);
                    this.error.set(None);
                }
                Err(e) => this.error.set(Some(e)),
            }
        });
    }

    /// Forwards the dirty flag to the owner of the screen.
    pub fn report_dirty(&self, on_dirty_change: Callback<bool>) {
        let this = *self;
        Effect::new(move |_| on_dirty_change.run(this.is_dirty()));
    }

    pub fn revert(&self) {
        self.items.set(self.saved.get_untracked());
    }

    /// Sends the working order; rolls back on failure.
    pub fn save_order<F, Fut>(&self, put: F)
    where
        F: FnOnce(Vec<T>) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let this = *self;
        let order = self.items.get_untracked();
        this.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match put(order.clone()).await {
                Ok(()) => {
                    log::info!("Order saved ({} items)", order.len());
                    this.saved.set(order);
                    this.error.set(None);
                }
                Err(e) => {
                    log::warn!("Saving order failed, rolling back: {}", e);
                    this.revert();
                    this.error.set(Some(e));
                }
            }
            this.saving.set(false);
        });
    }
}

impl<T> OrderedListModel<T>
where
    T: Keyed + Clone + PartialEq + Send + Sync + 'static,
{
    /// Edits one item of the working copy in place.
    pub fn update_item(&self, key: &str, edit: impl FnOnce(&mut T)) {
        self.items.update(|items| {
            if let Some(item) = items.iter_mut().find(|i| i.key() == key) {
                edit(item);
            }
        });
    }

    /// Tracked: true while the working copy differs from the saved one in
    /// order or in content.
    pub fn is_changed(&self) -> bool {
        self.saved.with(|saved| self.items.with(|items| saved != items))
    }
}

impl<T> Default for OrderedListModel<T>
where
    T: Keyed + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_load_is_applied() {
        let mut loads = LoadSequence::default();
        let first_tab = loads.start();
        let second_tab = loads.start();
        // second response arrives first, then the first one
        assert!(loads.is_latest(second_tab));
        assert!(!loads.is_latest(first_tab));
    }

    #[test]
    fn test_single_load_is_latest() {
        let mut loads = LoadSequence::default();
        let ticket = loads.start();
        assert!(loads.is_latest(ticket));
        assert!(!loads.is_latest(LoadTicket::default()));
    }
}
