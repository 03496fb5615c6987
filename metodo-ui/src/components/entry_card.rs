//! Entry Cards
//!
//! Saved entries as clickable cards, and a list that shows the loading,
//! empty and error placeholders.

use leptos::*;

use metodo::client::{EntryCard, EntryListing};

use super::Loading;
use crate::state::use_global_state;

/// Render a listing; `None` means still loading
#[component]
pub fn EntryList(#[prop(into)] listing: Signal<Option<EntryListing>>) -> impl IntoView {
    move || match listing.get() {
        None => view! { <Loading /> }.into_view(),
        Some(EntryListing::Entries(cards)) => view! {
            <div class="entries-list">
                {cards.into_iter().map(|card| view! { <EntryCardView card=card /> }).collect_view()}
            </div>
        }
        .into_view(),
        Some(other) => {
            let class = if other == EntryListing::Failed {
                "placeholder placeholder-error"
            } else {
                "placeholder"
            };
            view! { <div class=class>{other.placeholder()}</div> }.into_view()
        }
    }
}

/// Single entry card; opens the detail view on click
#[component]
pub fn EntryCardView(card: EntryCard) -> impl IntoView {
    let state = use_global_state();
    let id = card.id.clone();
    let has_tags = card.has_tags();

    view! {
        <div
            class="entry-card"
            on:click=move |_| {
                state.select_view(metodo::form::View::Entries.id());
                state.selected_entry.set(Some(id.clone()));
            }
        >
            <div class="entry-title">{card.title}</div>
            <div class="entry-meta">
                <span>{card.kind}</span>
                <span>{card.date}</span>
            </div>
            {has_tags.then(|| view! {
                <div class="entry-tags">
                    {card.tags.into_iter().map(|t| view! { <span class="entry-tag">{t}</span> }).collect_view()}
                </div>
            })}
        </div>
    }
}
