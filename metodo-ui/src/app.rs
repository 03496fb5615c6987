//! App Root Component
//!
//! Layout shell: sidebar navigation, header, the active view, and the
//! technique catalog beside the analysis form.

use leptos::*;

use metodo::form::View;

use crate::components::{CatalogPanel, Nav};
use crate::pages::{Analyze, Comics, Entries, Tags, Techniques, Write};
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_global_state();
    state.reload_entries();
    let form = state.form;

    // Memoized: keystrokes in the form must not remount the active page
    let active = create_memo(move |_| form.with(|f| f.view.active));
    let title = create_memo(move |_| form.with(|f| f.view.title.clone()));
    let catalog_visible = create_memo(move |_| form.with(|f| f.view.catalog_visible));

    view! {
        <div class="app">
            <Nav />

            <main class="main">
                <header class="header">
                    <h1 class="header-title">{title}</h1>
                </header>

                <div class="content">
                    <div class="view-container">
                        {move || active.get().map(render_view)}
                    </div>

                    <Show when=move || catalog_visible.get()>
                        <CatalogPanel />
                    </Show>
                </div>
            </main>
        </div>
    }
}

fn render_view(active: View) -> leptos::View {
    let panel = match active {
        View::Analyze => view! { <Analyze /> }.into_view(),
        View::Entries => view! { <Entries /> }.into_view(),
        View::Write => view! { <Write /> }.into_view(),
        View::Tags => view! { <Tags /> }.into_view(),
        View::Techniques => view! { <Techniques /> }.into_view(),
        View::Comics => view! { <Comics /> }.into_view(),
    };

    view! {
        <section id=format!("view-{}", active.id()) class="view active">
            {panel}
        </section>
    }
    .into_view()
}
