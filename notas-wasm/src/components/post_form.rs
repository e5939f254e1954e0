use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use notas_core::DomainError;

use crate::dialog;
use crate::state::AppState;

fn form_heading(editing: bool) -> &'static str {
    if editing { "Editar post" } else { "Crear nuevo post" }
}

fn submit_label(editing: bool) -> &'static str {
    if editing { "Guardar cambios" } else { "Crear" }
}

#[component]
pub(crate) fn PostForm(state: AppState) -> impl IntoView {
    let on_submit = Callback::new({
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let mut draft = state.draft.get_untracked();
            let Some(result) = state.store.try_update(|store| draft.submit(store)) else {
                return;
            };

            match result {
                // Успешный submit уже сбросил локальную копию черновика.
                Ok(_) => state.draft.set(draft),
                // Сигнал черновика не трогаем: введённое остаётся в форме.
                Err(DomainError::Validation { .. }) => {
                    dialog::alert("Completa título y contenido.");
                }
                Err(err) => dialog::alert(&err.to_string()),
            }
        }
    });

    let on_cancel = Callback::new({
        let state = state.clone();
        move |_: ()| state.draft.update(|draft| draft.cancel())
    });

    let state_for_heading = state.clone();
    let state_for_title = state.clone();
    let state_for_title_input = state.clone();
    let state_for_body = state.clone();
    let state_for_body_input = state.clone();
    let state_for_submit_label = state.clone();

    view! {
        <h2>{move || form_heading(state_for_heading.is_editing())}</h2>

        <form class="form" on:submit=move |ev| on_submit.run(ev)>
            <div class="field">
                <label for="title">"Título"</label>
                <input
                    id="title"
                    type="text"
                    placeholder="Ej. Mi primer post"
                    prop:value=move || state_for_title.draft.get().title().to_string()
                    on:input=move |ev| {
                        state_for_title_input
                            .draft
                            .update(|draft| draft.set_title(event_target_value(&ev)))
                    }
                />
            </div>

            <div class="field">
                <label for="body">"Contenido"</label>
                <textarea
                    id="body"
                    rows="4"
                    placeholder="Escribe aquí..."
                    prop:value=move || state_for_body.draft.get().body().to_string()
                    on:input=move |ev| {
                        state_for_body_input
                            .draft
                            .update(|draft| draft.set_body(event_target_value(&ev)))
                    }
                />
            </div>

            <div class="actions">
                <button type="submit" class="primary">
                    {move || submit_label(state_for_submit_label.is_editing())}
                </button>

                <Show when=move || state.is_editing()>
                    <button
                        type="button"
                        class="ghost"
                        on:click={
                            let on_cancel = on_cancel.clone();
                            move |_| on_cancel.run(())
                        }
                    >
                        "Cancelar"
                    </button>
                </Show>
            </div>
        </form>
    }
}
