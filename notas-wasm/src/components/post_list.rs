use leptos::prelude::*;

use notas_core::Post;

use crate::dialog;
use crate::state::AppState;

fn confirm_delete_message(id: i64) -> String {
    format!("Eliminar post #{id}?")
}

fn results_label(count: usize) -> String {
    format!("{count} resultados")
}

#[component]
pub(crate) fn PostList(state: AppState, filtered: Memo<Vec<Post>>) -> impl IntoView {
    let on_edit = Callback::new({
        let state = state.clone();
        move |post_id: i64| {
            let post = state
                .store
                .with_untracked(|store| store.get(post_id).cloned());
            let Some(post) = post else {
                return;
            };
            state.draft.update(|draft| draft.start_edit(&post));
        }
    });

    let on_delete = Callback::new({
        let state = state.clone();
        move |post_id: i64| {
            if !dialog::confirm(&confirm_delete_message(post_id)) {
                return;
            }

            let removed = state
                .store
                .try_update(|store| store.delete(post_id))
                .unwrap_or(false);

            // Если удалили пост, открытый в форме, форму надо сбросить.
            if removed && state.draft.get_untracked().post_id() == Some(post_id) {
                state.draft.update(|draft| draft.cancel());
            }
        }
    });

    let state_for_query = state.clone();
    let state_for_query_input = state.clone();

    view! {
        <input
            type="search"
            placeholder="Buscar por id, título o contenido..."
            prop:value=move || state_for_query.query.get()
            on:input=move |ev| state_for_query_input.query.set(event_target_value(&ev))
        />

        <span class="count">{move || results_label(filtered.get().len())}</span>

        <section class="grid">
            <Show when=move || filtered.get().is_empty()>
                <p>"No hay posts."</p>
            </Show>

            <For
                each=move || filtered.get()
                key=|post| (post.id, post.title.clone(), post.body.clone())
                children=move |post| {
                    let on_edit = on_edit.clone();
                    let on_delete = on_delete.clone();
                    let post_id = post.id;
                    view! {
                        <article class="card item">
                            <section class="item-head">
                                <h3>{post.id}</h3>
                                <h3>{post.title.clone()}</h3>
                                <div class="item-actions">
                                    <button class="ghost" on:click=move |_| on_edit.run(post_id)>
                                        "Editar"
                                    </button>
                                    <button class="danger" on:click=move |_| on_delete.run(post_id)>
                                        "Eliminar"
                                    </button>
                                </div>
                            </section>
                            <p>{post.body.clone()}</p>
                        </article>
                    }
                }
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::{confirm_delete_message, results_label};

    #[test]
    fn confirm_message_names_post_id() {
        assert_eq!(confirm_delete_message(7), "Eliminar post #7?");
    }

    #[test]
    fn results_label_counts_matches() {
        assert_eq!(results_label(0), "0 resultados");
        assert_eq!(results_label(3), "3 resultados");
    }
}
