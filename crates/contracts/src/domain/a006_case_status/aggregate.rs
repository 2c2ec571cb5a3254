use crate::shared::ordering::Keyed;
use crate::shared::validation::{max_length, require, unique_key, ValidationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusColor {
    #[default]
    Gray,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
}

impl StatusColor {
    pub const ALL: [StatusColor; 7] = [
        StatusColor::Gray,
        StatusColor::Blue,
        StatusColor::Green,
        StatusColor::Yellow,
        StatusColor::Orange,
        StatusColor::Red,
        StatusColor::Purple,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusColor::Gray => "GRAY",
            StatusColor::Blue => "BLUE",
            StatusColor::Green => "GREEN",
            StatusColor::Yellow => "YELLOW",
            StatusColor::Orange => "ORANGE",
            StatusColor::Red => "RED",
            StatusColor::Purple => "PURPLE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
    }

    /// CSS class of the status badge
    pub fn badge_class(self) -> &'static str {
        match self {
            StatusColor::Gray => "badge badge--gray",
            StatusColor::Blue => "badge badge--blue",
            StatusColor::Green => "badge badge--green",
            StatusColor::Yellow => "badge badge--yellow",
            StatusColor::Orange => "badge badge--orange",
            StatusColor::Red => "badge badge--red",
            StatusColor::Purple => "badge badge--purple",
        }
    }
}

/// Internal status a case can be in, configured per definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalCaseStatus {
    pub key: String,
    pub title: String,
    #[serde(default = "visible_by_default")]
    pub visible_in_case_list_by_default: bool,
    #[serde(default)]
    pub color: StatusColor,
}

fn visible_by_default() -> bool {
    true
}

impl Keyed for InternalCaseStatus {
    fn key(&self) -> &str {
        &self.key
    }
}

impl InternalCaseStatus {
    pub fn validate_new(&self, existing: &[InternalCaseStatus]) -> ValidationResult {
        unique_key("Key", &self.key, existing)?;
        require("Title", &self.title)?;
        max_length("Title", &self.title, 255)
    }
}

/// Status by key, for badges in the case list and header.
pub fn find_status<'a>(statuses: &'a [InternalCaseStatus], key: &str) -> Option<&'a InternalCaseStatus> {
    statuses.iter().find(|s| s.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::ValidationError;
    use serde_json::json;

    fn status(key: &str, title: &str) -> InternalCaseStatus {
        InternalCaseStatus {
            key: key.to_string(),
            title: title.to_string(),
            visible_in_case_list_by_default: true,
            color: StatusColor::Blue,
        }
    }

    #[test]
    fn test_defaults_on_deserialize() {
        let parsed: InternalCaseStatus =
            serde_json::from_value(json!({"key": "new", "title": "New"})).unwrap();
        assert!(parsed.visible_in_case_list_by_default);
        assert_eq!(parsed.color, StatusColor::Gray);
        let parsed: InternalCaseStatus =
            serde_json::from_value(json!({"key": "done", "title": "Done", "color": "GREEN"}))
                .unwrap();
        assert_eq!(parsed.color.badge_class(), "badge badge--green");
    }

    #[test]
    fn test_validate_new_status() {
        let existing = vec![status("new", "New")];
        assert!(status("closed", "Closed").validate_new(&existing).is_ok());
        assert_eq!(
            status("new", "Again").validate_new(&existing),
            Err(ValidationError::Duplicate {
                field: "Key",
                value: "new".into()
            })
        );
        assert_eq!(
            status("x", " ").validate_new(&existing),
            Err(ValidationError::Required { field: "Title" })
        );
    }

    #[test]
    fn test_color_parse_and_lookup() {
        assert_eq!(StatusColor::parse("red"), Some(StatusColor::Red));
        assert_eq!(StatusColor::parse("teal"), None);
        let statuses = vec![status("new", "New")];
        assert_eq!(find_status(&statuses, "new").map(|s| s.title.as_str()), Some("New"));
        assert!(find_status(&statuses, "gone").is_none());
    }
}
