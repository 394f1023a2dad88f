//! Адрес API админки
//!
//! Базовый адрес берётся из [`AppConfig`].

use crate::shared::config::AppConfig;

/// Базовый адрес API
///
/// `api.base_url` из конфигурации, если он задан; иначе протокол и хост
/// текущей страницы с портом `api.port`. Без `window` пустая строка.
pub fn api_base() -> String {
    let config = leptos::prelude::use_context::<AppConfig>().unwrap_or_default();
    resolve_base(&config, window_origin())
}

/// Полный адрес API по пути
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/admin/publication");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn window_origin() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    Some((protocol, hostname))
}

fn resolve_base(config: &AppConfig, origin: Option<(String, String)>) -> String {
    if !config.api.base_url.is_empty() {
        return config.api.base_url.trim_end_matches('/').to_string();
    }
    match origin {
        Some((protocol, hostname)) => format!("{}//{}:{}", protocol, hostname, config.api.port),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_window_location() {
        let config = AppConfig::from_toml(
            "[api]\nport = 3000\n[table]\nfilter_debounce_ms = 200\npage_size = 50\n",
        )
        .unwrap();
        let origin = Some(("https:".to_string(), "shop.local".to_string()));
        assert_eq!(resolve_base(&config, origin), "https://shop.local:3000");
        assert_eq!(resolve_base(&config, None), "");
    }

    #[test]
    fn test_explicit_base_wins() {
        let mut config = AppConfig::from_toml(
            "[api]\nport = 3000\n[table]\nfilter_debounce_ms = 200\npage_size = 50\n",
        )
        .unwrap();
        config.api.base_url = "https://api.shop.local/".to_string();
        let origin = Some(("http:".to_string(), "ignored".to_string()));
        assert_eq!(resolve_base(&config, origin), "https://api.shop.local");
    }
}
