/// Утилиты для списков: фильтр по тексту и поле поиска с debounce
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Задержка перед применением фильтра, мс
const DEBOUNCE_MS: u32 = 300;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

impl Searchable for contracts::domain::a001_case_definition::CaseDefinition {
    fn matches_filter(&self, filter: &str) -> bool {
        contracts::domain::a001_case_definition::CaseDefinition::matches_filter(self, filter)
    }
}

/// Фильтрует список по поисковому запросу (пустой запрос пропускает всё)
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Поле поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Search...".to_string());
    let (input_value, set_input_value) = signal(String::new());
    // Only the latest keystroke fires after the delay
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.try_get_value() == Some(current) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !input_value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str);

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.contains(filter)
        }
    }

    #[test]
    fn test_filter_list() {
        let items = vec![Item("permit"), Item("objection")];
        assert_eq!(filter_list(&items, "  "), items);
        assert_eq!(filter_list(&items, "obj"), vec![Item("objection")]);
        assert!(filter_list(&items, "zzz").is_empty());
    }
}
