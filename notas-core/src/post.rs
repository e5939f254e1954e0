use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// `user_id`, проставляемый всем постам: многопользовательского режима нет.
pub const DEFAULT_USER_ID: i64 = 1;

/// Пост — единица хранения.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Уникальный в пределах хранилища id; назначается хранилищем.
    pub id: i64,
    /// Заголовок, непустой после trim.
    pub title: String,
    /// Текст, непустой после trim.
    pub body: String,
    /// Автор; всегда [`DEFAULT_USER_ID`].
    pub user_id: i64,
}

pub(crate) fn normalize_title(title: &str) -> Result<String, DomainError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::Validation {
            field: "title",
            message: "must not be empty",
        });
    }
    Ok(title.to_string())
}

pub(crate) fn normalize_body(body: &str) -> Result<String, DomainError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(DomainError::Validation {
            field: "body",
            message: "must not be empty",
        });
    }
    Ok(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::{DomainError, Post, normalize_body, normalize_title};

    #[test]
    fn normalize_title_trims_value() {
        let title = normalize_title("  Hola  ").expect("title must be accepted");
        assert_eq!(title, "Hola");
    }

    #[test]
    fn normalize_title_rejects_blank_value() {
        let err = normalize_title("   ").expect_err("blank title must be rejected");
        assert_validation_field(err, "title");
    }

    #[test]
    fn normalize_body_trims_value() {
        let body = normalize_body("  Mundo  ").expect("body must be accepted");
        assert_eq!(body, "Mundo");
    }

    #[test]
    fn normalize_body_rejects_empty_value() {
        let err = normalize_body("").expect_err("empty body must be rejected");
        assert_validation_field(err, "body");
    }

    #[test]
    fn post_parses_from_json() {
        let raw = r#"{"id":1,"title":"Hola","body":"Mundo","user_id":1}"#;
        let post: Post = serde_json::from_str(raw).expect("post should parse");
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Hola");
        assert_eq!(post.body, "Mundo");
        assert_eq!(post.user_id, 1);
    }

    fn assert_validation_field(err: DomainError, expected_field: &'static str) {
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, expected_field),
            _ => panic!("expected DomainError::Validation"),
        }
    }
}
