//! Technique Selector
//!
//! Single-choice picker over one field's technique catalog.

use leptos::*;

use metodo::form::TechniqueField;

use crate::state::use_global_state;

#[component]
pub fn TechniqueSelectorView(field: TechniqueField) -> impl IntoView {
    let form = use_global_state().form;

    view! {
        <div class="form-group">
            <label class="label">{field.label()}</label>
            <div class="technique-selector">
                {field
                    .catalog()
                    .iter()
                    .map(|technique| {
                        let slug = technique.slug;
                        view! {
                            <div
                                class="technique-option"
                                class:selected=move || form.with(|f| f.selector(field).is_selected(slug))
                                on:click=move |_| { form.update(|f| { f.selector_mut(field).select(slug); }); }
                            >
                                <div class="technique-name">{technique.name()}</div>
                                <div class="technique-desc">{technique.description}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
