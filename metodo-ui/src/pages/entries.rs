//! Entries Page
//!
//! Saved analyses, search, and the detail view of one entry.

use leptos::*;

use metodo::client::{Entry, EntryCard, EntryListing, EntryResult, ERROR_PLACEHOLDER};

use crate::components::{EntryList, Loading};
use crate::state::global::{alert, log_error};
use crate::state::use_global_state;

#[component]
pub fn Entries() -> impl IntoView {
    let state = use_global_state();
    let selected = state.selected_entry;

    move || match selected.get() {
        Some(id) => view! { <EntryDetail id=id /> }.into_view(),
        None => view! { <EntryBrowser /> }.into_view(),
    }
}

/// List of saved analyses with a search box on top
#[component]
fn EntryBrowser() -> impl IntoView {
    let state = use_global_state();
    let entries = state.entries;
    let results = create_rw_signal::<Option<EntryListing>>(None);
    let (query, set_query) = create_signal(String::new());
    let searching = move || !query.get().trim().is_empty();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        if !q.trim().is_empty() {
            state.search(q.trim().to_string(), results);
        }
    };

    view! {
        <div class="entries">
            <form class="search-bar" on:submit=on_submit>
                <input
                    type="search"
                    class="input"
                    placeholder="Buscar en tus análisis..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-secondary">"Buscar"</button>
            </form>

            {move || if searching() && results.with(Option::is_some) {
                view! { <EntryList listing=results /> }.into_view()
            } else {
                view! { <EntryList listing=entries /> }.into_view()
            }}
        </div>
    }
}

/// One entry with its rendered content
#[component]
fn EntryDetail(id: String) -> impl IntoView {
    let state = use_global_state();
    let entry = create_rw_signal::<Option<EntryResult<Entry>>>(None);

    {
        let store = state.store.clone();
        let id = id.clone();
        spawn_local(async move {
            let result = store.get_entry(&id).await;
            if let Err(e) = &result {
                log_error(&format!("Error loading entry {}: {}", id, e));
            }
            entry.set(Some(result));
        });
    }

    let back = {
        let selected = state.selected_entry;
        move |_| selected.set(None)
    };

    let archive = {
        let state = state.clone();
        move |_| {
            let state = state.clone();
            let id = id.clone();
            spawn_local(async move {
                match state.store.archive_entry(&id).await {
                    Ok(_) => {
                        state.selected_entry.set(None);
                        state.reload_entries();
                    }
                    Err(e) => {
                        log_error(&format!("Error archiving entry {}: {}", id, e));
                        alert("Error al archivar");
                    }
                }
            });
        }
    };

    view! {
        <div class="entry-detail">
            <div class="entry-detail-actions">
                <button class="btn btn-ghost" on:click=back>"← Volver"</button>
                <button class="btn btn-danger" on:click=archive>"Archivar"</button>
            </div>

            {move || match entry.get() {
                None => view! { <Loading /> }.into_view(),
                Some(Err(_)) => view! {
                    <div class="placeholder placeholder-error">{ERROR_PLACEHOLDER}</div>
                }.into_view(),
                Some(Ok(entry)) => {
                    let card = EntryCard::from_entry(&entry);
                    view! {
                        <article class="card">
                            <h2 class="card-title">{card.title}</h2>
                            <div class="entry-meta">
                                <span>{card.kind}</span>
                                <span>{card.date}</span>
                            </div>
                            <div class="entry-tags">
                                {card.tags.into_iter().map(|t| view! { <span class="entry-tag">{t}</span> }).collect_view()}
                            </div>
                            <pre class="entry-content">{entry.contenido.unwrap_or_default()}</pre>
                        </article>
                    }.into_view()
                }
            }}
        </div>
    }
}
