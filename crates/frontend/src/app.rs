use crate::routes::routes::AppRoutes;
use crate::shared::cache::ApiCache;
use crate::shared::config::AppConfig;
use crate::shared::notification::Notifications;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Конфигурация, кэш API и уведомления доступны всем страницам через контекст
    provide_context(AppConfig::load());
    ApiCache::provide();
    Notifications::provide();

    view! {
        <AppRoutes />
    }
}
