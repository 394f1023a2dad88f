use serde::Deserialize;

/// Настройки админки
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Явный адрес API; если пуст, берётся хост текущей страницы и `port`
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    /// Минимальный интервал между записями фильтров в URL
    pub filter_debounce_ms: u32,
    pub page_size: usize,
}

/// Конфигурация по умолчанию, встроенная в бандл
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[table]
filter_debounce_ms = 200
page_size = 50
"#;

impl AppConfig {
    /// Загрузить конфигурацию
    ///
    /// В браузере нет файловой системы, поэтому источник один:
    /// встроенный TOML; при ошибке разбора возвращаются жёсткие значения.
    pub fn load() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid embedded config: {}", e);
                Self::fallback()
            }
        }
    }

    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: 3000,
            },
            table: TableConfig {
                filter_debounce_ms: 200,
                page_size: 50,
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert!(config.api.base_url.is_empty());
        assert_eq!(config.table.filter_debounce_ms, 200);
        assert_eq!(config, AppConfig::fallback());
    }

    #[test]
    fn test_explicit_base_url() {
        let config = AppConfig::from_toml(
            r#"
            [api]
            base_url = "https://admin.example.com"
            port = 443
            [table]
            filter_debounce_ms = 300
            page_size = 100
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://admin.example.com");
        assert_eq!(config.table.page_size, 100);
    }
}
