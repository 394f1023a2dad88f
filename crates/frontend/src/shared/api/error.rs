use thiserror::Error;

/// Ошибка обращения к API
///
/// Все ошибки локальны для вызова: предыдущее состояние UI не трогается.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Не удалось сформировать запрос (сериализация тела или параметров)
    #[error("Не удалось сформировать запрос: {0}")]
    Request(String),

    /// Запрос не дошёл до сервера
    #[error("Сервер недоступен: {0}")]
    Transport(String),

    /// Сервер ответил ошибкой
    #[error("Ошибка сервера {status}: {body}")]
    Status { status: u16, body: String },

    /// Ответ не прошёл проверку схемы; частичные данные не принимаются
    #[error("Некорректный ответ сервера: {0}")]
    Schema(String),
}

