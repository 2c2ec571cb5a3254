//! Конфигурация приложения.
//!
//! Встроенный TOML по умолчанию + необязательное переопределение (JSON) в
//! localStorage под ключом `dossier.config`. Переопределение частичное:
//! указанные поля заменяют значения по умолчанию, остальные сохраняются.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

pub const STORAGE_KEY: &str = "dossier.config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
backend_port = 8080

[logging]
level = "info"

[case_list]
page_size = 10
page_size_options = [10, 25, 50, 100]

[widgets]
columns = 4
gap = 16
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub case_list: CaseListConfig,
    pub widgets: WidgetGridConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Full backend origin, e.g. `https://dossier.example.org`. Empty means
    /// "same host as the page, on `backend_port`".
    pub base_url: String,
    pub backend_port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseListConfig {
    pub page_size: u32,
    pub page_size_options: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetGridConfig {
    pub columns: u32,
    pub gap: u32,
}

impl AppConfig {
    /// Embedded defaults. The document is part of the bundle, a parse failure
    /// is a build defect and is caught by the tests below.
    pub fn embedded() -> Result<Self, String> {
        toml::from_str(DEFAULT_CONFIG).map_err(|e| format!("Invalid embedded config: {}", e))
    }

    /// Defaults merged with an optional JSON override.
    ///
    /// An override that is not valid JSON, or that produces an invalid
    /// configuration, is ignored with a warning.
    pub fn from_sources(override_json: Option<&str>) -> Result<Self, String> {
        let defaults = Self::embedded()?;
        let Some(raw) = override_json.filter(|raw| !raw.trim().is_empty()) else {
            return Ok(defaults);
        };

        let patch: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Ignoring config override, not valid JSON: {}", e);
                return Ok(defaults);
            }
        };

        let mut merged = serde_json::to_value(&defaults).map_err(|e| e.to_string())?;
        merge_json(&mut merged, patch);
        match serde_json::from_value::<AppConfig>(merged) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Ignoring config override: {}", e);
                Ok(defaults)
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level '{}', using info", self.logging.level);
            log::Level::Info
        })
    }
}

/// Recursively overlays `patch` onto `base`. Objects merge key by key, every
/// other value replaces the base value.
fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, value) in patch_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn read_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
}

/// Loads the configuration once; later calls return the same instance.
pub fn load_config() -> Result<&'static AppConfig, String> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = AppConfig::from_sources(read_override().as_deref())?;
    Ok(CONFIG.get_or_init(|| config))
}

/// Active configuration. Falls back to the built-in defaults if loading
/// failed at start-up.
pub fn config() -> AppConfig {
    match load_config() {
        Ok(config) => config.clone(),
        Err(e) => {
            log::error!("{}", e);
            AppConfig::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                backend_port: 8080,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            case_list: CaseListConfig {
                page_size: 10,
                page_size_options: vec![10, 25, 50, 100],
            },
            widgets: WidgetGridConfig { columns: 4, gap: 16 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::embedded().unwrap();
        assert_eq!(config.api.backend_port, 8080);
        assert!(config.api.base_url.is_empty());
        assert_eq!(config.case_list.page_size, 10);
        assert_eq!(config.widgets.columns, 4);
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_embedded_matches_default() {
        assert_eq!(AppConfig::embedded().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_sources(Some(
            r#"{"logging": {"level": "debug"}, "widgets": {"gap": 8}}"#,
        ))
        .unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.widgets.gap, 8);
        assert_eq!(config.widgets.columns, 4);
        assert_eq!(config.case_list.page_size, 10);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let defaults = AppConfig::embedded().unwrap();
        assert_eq!(AppConfig::from_sources(Some("{not json")).unwrap(), defaults);
        assert_eq!(
            AppConfig::from_sources(Some(r#"{"widgets": {"columns": "four"}}"#)).unwrap(),
            defaults
        );
        assert_eq!(AppConfig::from_sources(Some("  ")).unwrap(), defaults);
    }

    #[test]
    fn test_unknown_level_defaults_to_info() {
        let mut config = AppConfig::embedded().unwrap();
        config.logging.level = "loud".into();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
