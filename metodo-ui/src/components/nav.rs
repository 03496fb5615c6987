//! Navigation Component
//!
//! Sidebar with one item per top-level view.

use leptos::*;

use metodo::form::View;

use crate::state::use_global_state;

/// Navigation sidebar component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="logo">
                <span class="logo-mark">"M"</span>
                <span class="logo-text">"Método"</span>
            </div>

            <div class="nav-items">
                {View::ALL
                    .into_iter()
                    .map(|view| view! { <NavItem view=view /> })
                    .collect_view()}
            </div>
        </nav>
    }
}

/// Individual navigation item
#[component]
fn NavItem(view: View) -> impl IntoView {
    let state = use_global_state();
    let form = state.form;
    let is_active = move || form.with(|f| f.view.nav_id == view.id());

    view! {
        <button
            class="nav-item"
            class:active=is_active
            on:click=move |_| state.select_view(view.id())
        >
            {nav_label(view)}
        </button>
    }
}

fn nav_label(view: View) -> &'static str {
    match view {
        View::Analyze => "Analizar",
        View::Entries => "Mis Análisis",
        View::Write => "Escribir",
        View::Tags => "Etiquetas",
        View::Techniques => "Técnicas",
        View::Comics => "Cómicos",
    }
}
