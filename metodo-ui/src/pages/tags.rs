//! Tags Page
//!
//! Tag catalog per section; picking a tag searches the saved entries.

use leptos::*;

use metodo::client::EntryListing;
use metodo::form::Section;

use crate::components::EntryList;
use crate::state::use_global_state;

#[component]
pub fn Tags() -> impl IntoView {
    let state = use_global_state();
    let (active, set_active) = create_signal::<Option<&'static str>>(None);
    let results = create_rw_signal::<Option<EntryListing>>(None);

    let pick = move |tag: &'static str| {
        set_active.set(Some(tag));
        state.search(tag.to_string(), results);
    };

    view! {
        <div class="tags-page">
            {Section::ALL
                .into_iter()
                .map(|section| {
                    let pick = pick.clone();
                    view! {
                        <section class="card">
                            <h2 class="card-title">{section.label()}</h2>
                            <div class="tags-container">
                                {section
                                    .default_tags()
                                    .iter()
                                    .copied()
                                    .map(|tag| {
                                        let pick = pick.clone();
                                        view! {
                                            <span
                                                class="tag"
                                                class:selected=move || active.get() == Some(tag)
                                                on:click=move |_| pick(tag)
                                            >
                                                {tag}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}

            <Show when=move || active.get().is_some()>
                <h3 class="section-title">{move || format!("Análisis con «{}»", active.get().unwrap_or_default())}</h3>
                <EntryList listing=results />
            </Show>
        </div>
    }
}
