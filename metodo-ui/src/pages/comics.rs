//! Comics Page
//!
//! Find saved analyses by comedian.

use leptos::*;

use metodo::client::EntryListing;

use crate::components::EntryList;
use crate::state::use_global_state;

#[component]
pub fn Comics() -> impl IntoView {
    let state = use_global_state();
    let (name, set_name) = create_signal(String::new());
    let (searched, set_searched) = create_signal(false);
    let results = create_rw_signal::<Option<EntryListing>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let comic = name.get_untracked().trim().to_string();
        if comic.is_empty() {
            return;
        }
        set_searched.set(true);
        state.search(comic, results);
    };

    view! {
        <div class="comics">
            <form class="search-bar" on:submit=on_submit>
                <input
                    type="search"
                    class="input"
                    placeholder="Nombre del cómico..."
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-secondary">"Buscar"</button>
            </form>

            <Show when=move || searched.get()>
                <EntryList listing=results />
            </Show>
        </div>
    }
}
