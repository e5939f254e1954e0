use crate::error::DomainError;
use crate::post::{DEFAULT_USER_ID, Post, normalize_body, normalize_title};

/// Упорядоченное in-memory хранилище постов.
///
/// Новые посты встают в начало списка; `update` позицию не меняет.
/// Инвариант: на каждый `id` — не больше одного поста.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Создаёт пустое хранилище.
    pub fn new() -> Self {
        Self::default()
    }

    /// Создаёт хранилище с готовым списком постов (затравка, тесты).
    ///
    /// Переданным id доверяет: уникальность обеспечивает вызывающий.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Валидирует и добавляет новый пост в начало списка.
    ///
    /// Id назначается как `max(существующих) + 1`, либо `1` для пустого
    /// хранилища; id удалённого поста может быть переиспользован.
    pub fn insert(&mut self, title: &str, body: &str) -> Result<Post, DomainError> {
        let title = normalize_title(title)?;
        let body = normalize_body(body)?;

        let created = Post {
            id: self.next_id(),
            title,
            body,
            user_id: DEFAULT_USER_ID,
        };
        self.posts.insert(0, created.clone());
        Ok(created)
    }

    /// Валидирует и перезаписывает `title`/`body` существующего поста.
    ///
    /// Позиция поста в списке и его `user_id` сохраняются.
    pub fn update(&mut self, id: i64, title: &str, body: &str) -> Result<Post, DomainError> {
        let title = normalize_title(title)?;
        let body = normalize_body(body)?;

        let existing = self
            .posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(DomainError::NotFound(id))?;
        existing.title = title;
        existing.body = body;
        Ok(existing.clone())
    }

    /// Удаляет пост, если он есть; возвращает `true`, если что-то удалено.
    ///
    /// Отсутствующий id — не ошибка: delete гарантирует отсутствие.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.posts.len();
        self.posts.retain(|post| post.id != id);
        self.posts.len() != before
    }

    /// Текущий список постов, новые в начале.
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    /// Пост по id, если он есть.
    pub fn get(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Количество постов в хранилище.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// `true`, если хранилище пустое.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn next_id(&self) -> i64 {
        self.posts
            .iter()
            .map(|post| post.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}
