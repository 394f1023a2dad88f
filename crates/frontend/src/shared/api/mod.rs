//! Типизированный доступ к JSON API админки
//!
//! Каждый запрос описывается значением [`Endpoint`]; ответ проходит
//! десериализацию в ожидаемый DTO до того, как попадёт в UI.

pub mod client;
pub mod endpoint;
pub mod error;

pub use client::{decode_response, execute, fetch_json};
pub use endpoint::{Endpoint, HttpMethod, IdParams};
pub use error::ApiError;
