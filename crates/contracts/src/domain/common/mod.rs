//! Общие типы для всех агрегатов

pub mod aggregate_id;
pub mod admin_meta;

// Re-exports
pub use admin_meta::AdminMeta;
pub use aggregate_id::AggregateId;
