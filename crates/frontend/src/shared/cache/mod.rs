//! Кэш ответов API с инвалидацией по тегам
//!
//! Запросы объявляют теги, которые они *предоставляют*, мутации объявляют
//! теги, которые они *инвалидируют*. Чистая часть ([`QueryCache`]) не
//! зависит от браузера; [`ApiCache`] связывает её с реактивностью Leptos.

pub mod query_cache;
pub mod service;
pub mod tag;

pub use query_cache::{Invalidation, QueryCache, TagIndex};
pub use service::{
    use_mutation, use_mutation_with_message, use_query, ApiCache, MutationDef, MutationHandle,
    MutationState, QueryDef, QueryHandle, QueryState,
};
pub use tag::{list_tags, CacheTag, TagKind};
