use serde::{Deserialize, Serialize};

/// Spring-style page envelope returned by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    /// Zero-based page index
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Current sort of a list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub order: SortOrder,
}

impl SortState {
    /// Clicking the active column flips the order, any other column starts ascending.
    pub fn toggle(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(state) if state.key == key => SortState {
                key: key.to_string(),
                order: state.order.toggled(),
            },
            _ => SortState {
                key: key.to_string(),
                order: SortOrder::Asc,
            },
        }
    }

    /// `sort=` query parameter value, e.g. `customer.name,ASC`
    pub fn to_query(&self) -> String {
        format!("{},{}", self.key, self.order.as_param())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn first(size: u32) -> Self {
        Self { page: 0, size }
    }

    pub fn to_query(&self, sort: Option<&SortState>) -> String {
        let mut query = format!("page={}&size={}", self.page, self.size);
        if let Some(sort) = sort {
            query.push_str("&sort=");
            query.push_str(&urlencode_sort(&sort.to_query()));
        }
        query
    }
}

fn urlencode_sort(value: &str) -> String {
    value.replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort() {
        let first = SortState::toggle(None, "name");
        assert_eq!(first.order, SortOrder::Asc);
        let second = SortState::toggle(Some(&first), "name");
        assert_eq!(second.order, SortOrder::Desc);
        let other = SortState::toggle(Some(&second), "date");
        assert_eq!(other, SortState { key: "date".into(), order: SortOrder::Asc });
    }

    #[test]
    fn test_page_query() {
        let sort = SortState { key: "createdOn".into(), order: SortOrder::Desc };
        assert_eq!(
            PageRequest { page: 2, size: 10 }.to_query(Some(&sort)),
            "page=2&size=10&sort=createdOn%2CDESC"
        );
        assert_eq!(PageRequest::first(25).to_query(None), "page=0&size=25");
    }

    #[test]
    fn test_page_defaults_when_fields_missing() {
        let page: Page<u32> = serde_json::from_str(r#"{"content":[1,2]}"#).unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.total_pages, 0);
    }
}
