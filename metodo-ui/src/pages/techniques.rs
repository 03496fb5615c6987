//! Techniques Page
//!
//! The full technique catalog with descriptions and assistant examples.

use leptos::*;

use metodo::form::{Technique, TechniqueField, View};

use crate::components::Loading;
use crate::state::global::{log_error, scroll_to};
use crate::state::use_global_state;

#[component]
pub fn Techniques() -> impl IntoView {
    view! {
        <div class="techniques">
            {TechniqueField::ALL
                .into_iter()
                .map(|field| view! {
                    <section class="card">
                        <h2 class="card-title">{field.label()}</h2>
                        <div class="technique-grid">
                            {field
                                .catalog()
                                .iter()
                                .map(|technique| view! { <TechniqueCard field=field technique=*technique /> })
                                .collect_view()}
                        </div>
                    </section>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TechniqueCard(field: TechniqueField, technique: Technique) -> impl IntoView {
    let state = use_global_state();
    let examples = create_rw_signal::<Option<Option<String>>>(None);
    let (open, set_open) = create_signal(false);

    let use_it = {
        let state = state.clone();
        move |_| {
            state.form.update(|f| {
                f.selector_mut(field).select(technique.slug);
            });
            state.select_view(View::Analyze.id());
            scroll_to(field.panel_id());
        }
    };

    let show_examples = move |_| {
        set_open.update(|o| *o = !*o);
        if examples.with_untracked(Option::is_some) {
            return;
        }
        let store = state.store.clone();
        spawn_local(async move {
            match store.examples(Some(technique.slug), None).await {
                Ok(text) => examples.set(Some(Some(text))),
                Err(e) => {
                    log_error(&format!("Error loading examples for {}: {}", technique.slug, e));
                    examples.set(Some(None));
                }
            }
        });
    };

    view! {
        <div class="technique-card">
            <div class="technique-name">{technique.name()}</div>
            <div class="technique-desc">{technique.description}</div>
            <div class="technique-actions">
                <button class="btn btn-primary btn-sm" on:click=use_it>"Usar"</button>
                <button class="btn btn-ghost btn-sm" on:click=show_examples>"Ejemplos"</button>
            </div>
            <Show when=move || open.get()>
                {move || match examples.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(Some(text)) => view! { <pre class="technique-examples">{text}</pre> }.into_view(),
                    Some(None) => view! {
                        <div class="placeholder placeholder-error">"Error al cargar"</div>
                    }.into_view(),
                }}
            </Show>
        </div>
    }
}
