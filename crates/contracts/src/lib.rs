//! Контракты административного API магазина.
//!
//! Общие для фронтенда и сервера типы: DTO запросов и ответов,
//! перечисления предметной области, чистые правила расчёта и валидации.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
