//! Разбор ключей табов приложения.
//!
//! Ключ таба одновременно попадает в `?active=` и в `<For key>`, поэтому
//! он строится и разбирается только здесь.

use uuid::Uuid;

pub const DEFINITION_LIST: &str = "a001_case_definition";
const DEFINITION_DETAIL_PREFIX: &str = "a001_case_definition_detail_";
const CASE_LIST_PREFIX: &str = "a007_case_list_";
const CASE_DETAIL_PREFIX: &str = "a007_case_detail_";

/// Что показывает таб приложения.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRoute {
    DefinitionList,
    DefinitionDetail(String),
    CaseList(String),
    CaseDetail { definition: String, id: Uuid },
    Unknown(String),
}

impl TabRoute {
    pub fn parse(key: &str) -> Self {
        if key == DEFINITION_LIST {
            return TabRoute::DefinitionList;
        }
        if let Some(name) = non_empty(key.strip_prefix(DEFINITION_DETAIL_PREFIX)) {
            return TabRoute::DefinitionDetail(name.to_string());
        }
        if let Some(name) = non_empty(key.strip_prefix(CASE_LIST_PREFIX)) {
            return TabRoute::CaseList(name.to_string());
        }
        if let Some(rest) = key.strip_prefix(CASE_DETAIL_PREFIX) {
            // имя определения может содержать '_', id - нет
            if let Some((definition, id)) = rest.rsplit_once('_') {
                if let (false, Ok(id)) = (definition.is_empty(), Uuid::parse_str(id)) {
                    return TabRoute::CaseDetail {
                        definition: definition.to_string(),
                        id,
                    };
                }
            }
        }
        TabRoute::Unknown(key.to_string())
    }

    pub fn key(&self) -> String {
        match self {
            TabRoute::DefinitionList => DEFINITION_LIST.to_string(),
            TabRoute::DefinitionDetail(name) => format!("{}{}", DEFINITION_DETAIL_PREFIX, name),
            TabRoute::CaseList(name) => format!("{}{}", CASE_LIST_PREFIX, name),
            TabRoute::CaseDetail { definition, id } => {
                format!("{}{}_{}", CASE_DETAIL_PREFIX, definition, id)
            }
            TabRoute::Unknown(key) => key.clone(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_keys() {
        assert_eq!(TabRoute::parse("a001_case_definition"), TabRoute::DefinitionList);
        assert_eq!(
            TabRoute::parse("a001_case_definition_detail_permit"),
            TabRoute::DefinitionDetail("permit".into())
        );
        assert_eq!(
            TabRoute::parse("a007_case_list_building_permit"),
            TabRoute::CaseList("building_permit".into())
        );
    }

    #[test]
    fn test_parse_case_detail_with_underscored_definition() {
        let id = Uuid::parse_str("6f1c1c9e-2a33-4d8e-9a57-4b1f0b7c2d11").unwrap();
        let key = format!("a007_case_detail_building_permit_{}", id);
        assert_eq!(
            TabRoute::parse(&key),
            TabRoute::CaseDetail {
                definition: "building_permit".into(),
                id
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert_eq!(
            TabRoute::parse("a007_case_detail_permit_not-a-uuid"),
            TabRoute::Unknown("a007_case_detail_permit_not-a-uuid".into())
        );
        assert_eq!(
            TabRoute::parse("a007_case_list_"),
            TabRoute::Unknown("a007_case_list_".into())
        );
        assert_eq!(TabRoute::parse("whatever"), TabRoute::Unknown("whatever".into()));
    }

    #[test]
    fn test_key_parses_back() {
        let routes = [
            TabRoute::DefinitionList,
            TabRoute::DefinitionDetail("permit".into()),
            TabRoute::CaseList("permit".into()),
            TabRoute::CaseDetail {
                definition: "a_b".into(),
                id: Uuid::nil(),
            },
        ];
        for route in routes {
            assert_eq!(TabRoute::parse(&route.key()), route);
        }
    }
}
