use leptos::prelude::*;

use notas_core::{DEFAULT_USER_ID, Post, PostStore, filter};

use crate::components::post_form::PostForm;
use crate::components::post_list::PostList;
use crate::state::AppState;

fn seed_posts() -> Vec<Post> {
    vec![Post {
        id: 0,
        title: "¡Bienvenido a tu nuevo CRUD!".to_string(),
        body: "¡Felicidades! Tu aplicación está lista para crear, editar y eliminar notas."
            .to_string(),
        user_id: DEFAULT_USER_ID,
    }]
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(PostStore::with_posts(seed_posts()));

    let filtered = Memo::new({
        let state = state.clone();
        move |_| filter::apply(state.store.get().list(), state.query.get().as_str())
    });

    view! {
        <div class="container">
            <header>
                <h1>"YOICHI - LEPTOS"</h1>
            </header>

            <section class="card">
                <PostForm state=state.clone() />
                <PostList state=state.clone() filtered=filtered />
            </section>
        </div>
    }
}
