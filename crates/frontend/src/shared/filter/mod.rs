//! Фильтры таблиц: кодирование в URL, применение к строкам, синхронизация

pub mod codec;
pub mod debounce;
pub mod operator;
pub mod url_sync;

pub use codec::{decode, encode, FilterCodecError, FilterPredicate, QueryParams, FILTER_PARAM};
pub use debounce::{DebounceGate, Debouncer};
pub use operator::{apply_filters, FilterOperator, FilterableRow};
