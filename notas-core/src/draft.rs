use crate::error::DomainError;
use crate::post::Post;
use crate::store::PostStore;

/// Черновик формы: поля одного создаваемого или редактируемого поста.
///
/// Черновик держит копии значений и никогда не ссылается на пост в
/// хранилище: пока `submit` не прошёл, хранилище не меняется.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    id: Option<i64>,
    title: String,
    body: String,
}

impl Draft {
    /// Пустой черновик в режиме создания.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id редактируемого поста; `None` в режиме создания.
    pub fn post_id(&self) -> Option<i64> {
        self.id
    }

    /// Текущее содержимое поля заголовка, как его набрал пользователь.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Текущее содержимое поля текста, как его набрал пользователь.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// `true`, если черновик редактирует существующий пост.
    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// Сбрасывает черновик в режим создания нового поста.
    pub fn start_create(&mut self) {
        *self = Self::default();
    }

    /// Переводит черновик в режим редактирования, копируя поля поста.
    pub fn start_edit(&mut self, post: &Post) {
        self.id = Some(post.id);
        self.title = post.title.clone();
        self.body = post.body.clone();
    }

    /// Перезаписывает заголовок как есть, без trim и валидации.
    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    /// Перезаписывает текст как есть, без trim и валидации.
    pub fn set_body(&mut self, text: impl Into<String>) {
        self.body = text.into();
    }

    /// Отменяет текущую операцию; эквивалент [`Draft::start_create`].
    pub fn cancel(&mut self) {
        self.start_create();
    }

    /// Фиксирует черновик в хранилище: update в режиме редактирования,
    /// insert в режиме создания.
    ///
    /// При успехе черновик сбрасывается. При любой ошибке черновик и
    /// хранилище остаются нетронутыми — форма сохраняет введённое.
    pub fn submit(&mut self, store: &mut PostStore) -> Result<Post, DomainError> {
        let submitted = match self.id {
            Some(id) => store.update(id, &self.title, &self.body)?,
            None => store.insert(&self.title, &self.body)?,
        };
        self.start_create();
        Ok(submitted)
    }
}
