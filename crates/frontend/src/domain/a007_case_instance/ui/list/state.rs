use contracts::domain::a002_case_list_column::{default_sort_column, CaseListColumn};
use contracts::domain::a003_case_search_field::{AssigneeFilter, SearchField, SearchFieldValue};
use contracts::shared::page::{PageRequest, SortState};
use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct CaseListState {
    // Поиск
    pub values: HashMap<String, SearchFieldValue>,
    pub assignee_filter: AssigneeFilter,

    // Сортировка
    pub sort: Option<SortState>,

    pub is_loaded: bool,

    // Серверная пагинация
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

impl CaseListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            values: HashMap::new(),
            assignee_filter: AssigneeFilter::All,
            sort: None,
            is_loaded: false,
            page: 0,
            page_size,
            total_count: 0,
            total_pages: 0,
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            size: self.page_size,
        }
    }

    /// Initial sort from the column configuration; an explicit choice wins.
    pub fn apply_default_sort(&mut self, columns: &[CaseListColumn]) {
        if self.sort.is_none() {
            self.sort = default_sort_column(columns).map(|(key, order)| SortState {
                key: key.to_string(),
                order,
            });
        }
    }

    /// Number of non-empty search values, plus the assignee filter when set.
    pub fn active_filters(&self) -> usize {
        let values = self.values.values().filter(|v| !v.is_empty()).count();
        values + usize::from(self.assignee_filter != AssigneeFilter::All)
    }
}

pub fn create_state(page_size: u32) -> RwSignal<CaseListState> {
    RwSignal::new(CaseListState::new(page_size))
}

/// Chip text of an entered search value, e.g. `Amount: 10 – 20`.
pub fn filter_label(field: &SearchField, value: &SearchFieldValue) -> String {
    let text = match value {
        SearchFieldValue::Single(v) => field
            .dropdown_values
            .as_ref()
            .and_then(|options| options.iter().find(|o| &o.value == v))
            .map(|o| o.label.clone())
            .unwrap_or_else(|| v.clone()),
        SearchFieldValue::Range { from, to } => match (from.trim(), to.trim()) {
            ("", to) => format!("≤ {}", to),
            (from, "") => format!("≥ {}", from),
            (from, to) => format!("{} – {}", from, to),
        },
        SearchFieldValue::Multiple(values) => values.join(", "),
    };
    format!("{}: {}", field.label(), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_case_search_field::{DropdownOption, SearchDataType, SearchFieldType};
    use contracts::shared::page::SortOrder;

    fn field(key: &str, field_type: SearchFieldType) -> SearchField {
        SearchField {
            key: key.to_string(),
            title: Some(key.to_uppercase()),
            path: format!("doc:{key}"),
            data_type: SearchDataType::Number,
            field_type,
            match_type: None,
            dropdown_data_provider: None,
            dropdown_values: None,
        }
    }

    #[test]
    fn test_filter_label() {
        let range = field("amount", SearchFieldType::Range);
        let value = SearchFieldValue::Range {
            from: "10".into(),
            to: String::new(),
        };
        assert_eq!(filter_label(&range, &value), "AMOUNT: ≥ 10");

        let mut dropdown = field("kind", SearchFieldType::SingleSelectDropdown);
        dropdown.dropdown_values = Some(vec![DropdownOption {
            value: "a".into(),
            label: "Alpha".into(),
        }]);
        assert_eq!(
            filter_label(&dropdown, &SearchFieldValue::Single("a".into())),
            "KIND: Alpha"
        );
    }

    #[test]
    fn test_active_filters_and_default_sort() {
        let mut state = CaseListState::new(10);
        state.values.insert("a".into(), SearchFieldValue::Single(" ".into()));
        state.values.insert("b".into(), SearchFieldValue::Single("x".into()));
        state.assignee_filter = AssigneeFilter::Mine;
        assert_eq!(state.active_filters(), 2);

        let columns: Vec<CaseListColumn> = serde_json::from_value(serde_json::json!([
            {"key": "name", "path": "doc:name", "sortable": true, "defaultSort": "DESC"}
        ]))
        .unwrap();
        state.apply_default_sort(&columns);
        assert_eq!(
            state.sort,
            Some(SortState {
                key: "name".into(),
                order: SortOrder::Desc
            })
        );
    }
}
