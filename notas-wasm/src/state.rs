use leptos::prelude::*;

use notas_core::{Draft, PostStore};

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) store: RwSignal<PostStore>,
    pub(crate) draft: RwSignal<Draft>,
    pub(crate) query: RwSignal<String>,
}

impl AppState {
    pub(crate) fn new(store: PostStore) -> Self {
        Self {
            store: RwSignal::new(store),
            draft: RwSignal::new(Draft::new()),
            query: RwSignal::new(String::new()),
        }
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.draft.get().is_editing()
    }
}
