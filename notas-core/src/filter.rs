//! Поиск постов по свободной строке запроса.
//!
//! Чистые функции без состояния: фильтр пересчитывается целиком на каждый
//! вызов, инкрементального индекса нет — объёмы данных этого не требуют.

use crate::post::Post;

/// Возвращает посты, подходящие под запрос, в исходном порядке.
///
/// Пустой (после trim) запрос возвращает весь список. Иначе запрос
/// обрезается и приводится к нижнему регистру один раз, и пост подходит,
/// если его id в десятичной записи, заголовок или текст содержат запрос
/// как подстроку (заголовок и текст — без учёта регистра).
pub fn apply(posts: &[Post], query: &str) -> Vec<Post> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return posts.to_vec();
    }

    posts
        .iter()
        .filter(|post| matches(post, &needle))
        .cloned()
        .collect()
}

/// Проверяет один пост против уже обрезанного запроса в нижнем регистре.
pub fn matches(post: &Post, needle: &str) -> bool {
    post.id.to_string().contains(needle)
        || post.title.to_lowercase().contains(needle)
        || post.body.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{Post, apply, matches};
    use crate::post::DEFAULT_USER_ID;

    #[test]
    fn empty_query_returns_all_posts_in_order() {
        let posts = sample_posts();

        let filtered = apply(&posts, "");

        assert_eq!(filtered, posts);
    }

    #[test]
    fn whitespace_query_returns_all_posts() {
        let posts = sample_posts();

        let filtered = apply(&posts, "   ");

        assert_eq!(filtered, posts);
    }

    #[test]
    fn query_matches_id_as_decimal_substring() {
        let posts = vec![
            sample_post(1, "primero", "uno"),
            sample_post(2, "abc", "dos"),
            sample_post(12, "xyz", "doce"),
        ];

        let filtered = apply(&posts, "2");

        let ids: Vec<i64> = filtered.iter().map(|post| post.id).collect();
        assert_eq!(ids, [2, 12]);
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let posts = vec![
            sample_post(1, "Receta de cocina", "pasta"),
            sample_post(2, "otro", "tema"),
        ];

        let filtered = apply(&posts, "RECETA");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn query_matches_body_case_insensitively() {
        let posts = vec![
            sample_post(1, "primero", "Hola Mundo"),
            sample_post(2, "segundo", "nada"),
        ];

        let filtered = apply(&posts, "  mundo ");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn filtered_subsequence_preserves_order() {
        let posts = vec![
            sample_post(3, "nota uno", "x"),
            sample_post(2, "otra", "y"),
            sample_post(1, "nota dos", "z"),
        ];

        let filtered = apply(&posts, "nota");

        let ids: Vec<i64> = filtered.iter().map(|post| post.id).collect();
        assert_eq!(ids, [3, 1]);
    }

    #[test]
    fn matches_expects_prepared_needle() {
        let post = sample_post(5, "Hola", "Mundo");

        assert!(matches(&post, "hola"));
        assert!(matches(&post, "5"));
        assert!(!matches(&post, "Hola"));
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            sample_post(2, "segundo", "dos"),
            sample_post(1, "primero", "uno"),
        ]
    }

    fn sample_post(id: i64, title: &str, body: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            body: body.to_string(),
            user_id: DEFAULT_USER_ID,
        }
    }
}
