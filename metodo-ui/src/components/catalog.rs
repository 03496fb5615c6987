//! Catalog Panel
//!
//! Side panel listing every technique. Clicking one selects it in the form
//! and scrolls to the panel that holds its selector.

use leptos::*;

use metodo::form::TechniqueField;

use crate::state::global::scroll_to;
use crate::state::use_global_state;

#[component]
pub fn CatalogPanel() -> impl IntoView {
    let form = use_global_state().form;

    let pick = move |slug: &'static str| {
        if let Some(field) = form.try_update(|f| f.select_from_catalog(slug)).flatten() {
            scroll_to(field.panel_id());
        }
    };

    view! {
        <aside class="catalog-panel">
            <h3 class="catalog-title">"Catálogo"</h3>
            {TechniqueField::ALL
                .into_iter()
                .map(|field| view! {
                    <div class="catalog-section">
                        <h4 class="catalog-section-title">{field.label()}</h4>
                        {field
                            .catalog()
                            .iter()
                            .map(|technique| {
                                let slug = technique.slug;
                                view! {
                                    <div class="catalog-item" on:click=move |_| pick(slug)>
                                        <span class="catalog-item-name">{technique.name()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                })
                .collect_view()}
        </aside>
    }
}
