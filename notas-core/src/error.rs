use thiserror::Error;

/// Ошибки доменных операций над постами.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Поле формы не прошло валидацию (пустое после trim).
    #[error("validation failed for '{field}': {message}")]
    Validation {
        /// Имя поля, не прошедшего валидацию.
        field: &'static str,
        /// Причина отказа.
        message: &'static str,
    },

    /// Пост с указанным id отсутствует в хранилище.
    #[error("post not found: id {0}")]
    NotFound(i64),
}
