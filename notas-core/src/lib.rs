//! Логика CRUD-приложения заметок: хранилище постов, черновик формы и поиск.
//!
//! Крейт не делает I/O и не знает про UI: всё состояние живёт в памяти,
//! все операции синхронные. Поверх него работает frontend `notas-wasm`.
//!
//! Три составляющие:
//! - [`PostStore`] — упорядоченное хранилище постов (новые сверху);
//! - [`Draft`] — черновик формы создания/редактирования одного поста;
//! - [`filter`] — чистый поиск по id, заголовку и тексту.
#![warn(missing_docs)]

mod draft;
mod error;
pub mod filter;
mod post;
mod store;

pub use draft::Draft;
pub use error::DomainError;
pub use post::{DEFAULT_USER_ID, Post};
pub use store::PostStore;
