use std::collections::HashMap;

use contracts::shared::api::CreateResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::query_cache::{Invalidation, QueryCache, QueryKey, TagIndex};
use super::tag::CacheTag;
use crate::shared::api::{decode_response, execute, fetch_json, ApiError, Endpoint};
use crate::shared::notification::Notifications;

/// Описание запроса: эндпоинт и теги, которые даёт его результат
pub struct QueryDef<T> {
    pub endpoint: Endpoint,
    provides: Box<dyn Fn(&T) -> Vec<CacheTag>>,
}

impl<T> QueryDef<T> {
    pub fn new(endpoint: Endpoint, provides: impl Fn(&T) -> Vec<CacheTag> + 'static) -> Self {
        Self {
            endpoint,
            provides: Box::new(provides),
        }
    }

    /// Запрос, который не предоставляет тегов
    pub fn untagged(endpoint: Endpoint) -> Self {
        Self::new(endpoint, |_| Vec::new())
    }

    pub fn provided_tags(&self, data: &T) -> Vec<CacheTag> {
        (self.provides)(data)
    }
}

/// Описание мутации: эндпоинт и теги, которые она инвалидирует
#[derive(Debug, Clone, PartialEq)]
pub struct MutationDef {
    pub endpoint: Endpoint,
    pub invalidates: Vec<CacheTag>,
}

impl MutationDef {
    pub fn new(endpoint: Endpoint, invalidates: Vec<CacheTag>) -> Self {
        Self {
            endpoint,
            invalidates,
        }
    }
}

/// Состояние запроса для UI
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

/// Состояние мутации для UI
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationState {
    pub loading: bool,
    pub error: Option<ApiError>,
}

/// Сервис кэша API
///
/// Создаётся один раз при старте приложения и раздаётся через контекст.
#[derive(Clone, Copy)]
pub struct ApiCache {
    cache: StoredValue<QueryCache<serde_json::Value>>,
    generations: RwSignal<HashMap<QueryKey, u64>>,
}

impl ApiCache {
    pub fn new(index: TagIndex) -> Self {
        Self {
            cache: StoredValue::new(QueryCache::new(index)),
            generations: RwSignal::new(HashMap::new()),
        }
    }

    /// Создать сервис и положить его в контекст
    pub fn provide() -> Self {
        let service = Self::new(TagIndex::new());
        provide_context(service);
        service
    }

    pub fn use_cache() -> Self {
        use_context::<ApiCache>().expect("ApiCache not provided")
    }

    /// Поколение запроса; чтение подписывает текущий эффект
    fn generation(&self, key: &str) -> u64 {
        self.generations
            .with(|g| g.get(key).copied().unwrap_or_default())
    }

    fn bump(&self, keys: &[QueryKey]) {
        if keys.is_empty() {
            return;
        }
        self.generations.update(|g| {
            for key in keys {
                *g.entry(key.clone()).or_default() += 1;
            }
        });
    }

    fn mount<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cached = self
            .cache
            .try_update_value(|c| c.mount(key))
            .flatten()?;
        serde_json::from_value(cached).ok()
    }

    fn unmount(&self, key: &str) {
        self.cache.try_update_value(|c| c.unmount(key));
    }

    fn store<T: Serialize>(&self, key: &str, data: &T, tags: Vec<CacheTag>) {
        match serde_json::to_value(data) {
            Ok(value) => {
                self.cache.try_update_value(|c| c.store(key, value, tags));
            }
            Err(e) => log::warn!("{}: failed to cache response: {}", key, e),
        }
    }

    /// Инвалидировать теги: смонтированные запросы перезапрашиваются,
    /// остальные помечаются устаревшими
    pub fn invalidate(&self, tags: &[CacheTag]) -> Invalidation {
        if tags.is_empty() {
            return Invalidation::default();
        }
        let result = self
            .cache
            .try_update_value(|c| c.invalidate(tags))
            .unwrap_or_default();
        let names: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        log::debug!(
            "invalidate [{}]: refetch {:?}, stale {:?}",
            names.join(", "),
            result.refetch,
            result.stale
        );
        self.bump(&result.refetch);
        result
    }

    /// Выполнить мутацию; при успехе инвалидировать её теги
    pub async fn mutate(&self, def: MutationDef) -> Result<String, ApiError> {
        let body = execute(&def.endpoint).await?;
        self.invalidate(&def.invalidates);
        Ok(body)
    }
}

/// Результат запроса с ручным перезапросом
pub struct QueryHandle<T: Send + Sync + 'static> {
    pub state: RwSignal<QueryState<T>>,
    key: StoredValue<Option<QueryKey>>,
    cache: ApiCache,
}

impl<T: Send + Sync + 'static> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for QueryHandle<T> {}

impl<T: Send + Sync + 'static> QueryHandle<T> {
    pub fn data(&self) -> Option<T>
    where
        T: Clone,
    {
        self.state.with(|s| s.data.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state
            .with(|s| s.error.as_ref().map(|e| e.to_string()))
    }

    pub fn refetch(&self) {
        if let Some(key) = self.key.try_get_value().flatten() {
            self.cache.bump(&[key]);
        }
    }
}

/// Подписать компонент на запрос
///
/// `make` может читать сигналы (например, параметры маршрута): при их
/// изменении запрос пересобирается. Пока компонент жив, запрос считается
/// смонтированным и перезапрашивается при инвалидации его тегов.
pub fn use_query<T, F>(make: F) -> QueryHandle<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fn() -> Result<QueryDef<T>, ApiError> + 'static,
{
    let cache = ApiCache::use_cache();
    let state = RwSignal::new(QueryState::<T>::default());
    let current = StoredValue::new(None::<QueryKey>);

    Effect::new(move |prev: Option<(QueryKey, u64)>| {
        let def = match make() {
            Ok(def) => def,
            Err(e) => {
                log::warn!("query could not be built: {}", e);
                state.update(|s| {
                    s.loading = false;
                    s.error = Some(e);
                });
                return prev.unwrap_or_default();
            }
        };
        let key = def.endpoint.cache_key();
        let generation = cache.generation(&key);

        match &prev {
            Some((k, g)) if *k == key && *g == generation => return (key, generation),
            Some((k, _)) if *k == key => {}
            other => {
                if let Some((old, _)) = other {
                    cache.unmount(old);
                }
                current.set_value(Some(key.clone()));
                if let Some(data) = cache.mount::<T>(&key) {
                    state.set(QueryState {
                        data: Some(data),
                        loading: false,
                        error: None,
                    });
                    return (key, generation);
                }
            }
        }

        run_fetch(cache, def, key.clone(), state, current);
        (key, generation)
    });

    on_cleanup(move || {
        if let Some(key) = current.try_get_value().flatten() {
            cache.unmount(&key);
        }
    });

    QueryHandle {
        state,
        key: current,
        cache,
    }
}

fn run_fetch<T>(
    cache: ApiCache,
    def: QueryDef<T>,
    key: QueryKey,
    state: RwSignal<QueryState<T>>,
    current: StoredValue<Option<QueryKey>>,
) where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    state.update(|s| {
        s.loading = true;
        s.error = None;
    });
    spawn_local(async move {
        let result = fetch_json::<T>(&def.endpoint).await;
        if current.try_get_value().flatten().as_deref() != Some(key.as_str()) {
            log::debug!("{}: result discarded, query no longer mounted", key);
            return;
        }
        match result {
            Ok(data) => {
                cache.store(&key, &data, def.provided_tags(&data));
                state.try_update(|s| {
                    s.data = Some(data);
                    s.loading = false;
                    s.error = None;
                });
            }
            Err(e) => {
                state.try_update(|s| {
                    s.loading = false;
                    s.error = Some(e);
                });
            }
        }
    });
}

/// Разбор тела успешной мутации
pub trait MutationOutput: Sized {
    fn from_body(name: &str, body: &str) -> Result<Self, ApiError>;
}

impl MutationOutput for () {
    fn from_body(_name: &str, _body: &str) -> Result<Self, ApiError> {
        Ok(())
    }
}

impl MutationOutput for CreateResponse {
    fn from_body(name: &str, body: &str) -> Result<Self, ApiError> {
        decode_response(name, body)
    }
}

/// Исполнитель мутаций с флагом загрузки
#[derive(Clone, Copy)]
pub struct MutationHandle {
    pub state: RwSignal<MutationState>,
    cache: ApiCache,
    /// Текст уведомления при ошибке вместо текста `ApiError`
    failure_message: Option<&'static str>,
}

pub fn use_mutation() -> MutationHandle {
    MutationHandle {
        state: RwSignal::new(MutationState::default()),
        cache: ApiCache::use_cache(),
        failure_message: None,
    }
}

/// Мутация с собственным сообщением об ошибке
pub fn use_mutation_with_message(failure_message: &'static str) -> MutationHandle {
    MutationHandle {
        failure_message: Some(failure_message),
        ..use_mutation()
    }
}

impl MutationHandle {
    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Запустить мутацию
    ///
    /// Ошибка показывается одноразовым уведомлением; `on_success`
    /// вызывается только при успехе.
    pub fn run<R, F>(&self, def: Result<MutationDef, ApiError>, on_success: F)
    where
        R: MutationOutput + 'static,
        F: FnOnce(R) + 'static,
    {
        let state = self.state;
        let cache = self.cache;
        let failure_message = self.failure_message;
        let notifications = use_context::<Notifications>();

        let def = match def {
            Ok(def) => def,
            Err(e) => {
                report_failure(state, notifications, failure_message, e);
                return;
            }
        };

        state.set(MutationState {
            loading: true,
            error: None,
        });
        spawn_local(async move {
            let name = def.endpoint.name;
            let result = cache
                .mutate(def)
                .await
                .and_then(|body| R::from_body(name, &body));
            match result {
                Ok(output) => {
                    state.try_set(MutationState::default());
                    on_success(output);
                }
                Err(e) => {
                    log::warn!("{} failed: {}", name, e);
                    report_failure(state, notifications, failure_message, e);
                }
            }
        });
    }
}

fn report_failure(
    state: RwSignal<MutationState>,
    notifications: Option<Notifications>,
    failure_message: Option<&'static str>,
    error: ApiError,
) {
    if let Some(notifications) = notifications {
        match failure_message {
            Some(message) => notifications.error(message),
            None => notifications.error(error.to_string()),
        }
    }
    state.try_set(MutationState {
        loading: false,
        error: Some(error),
    });
}
