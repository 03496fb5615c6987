//! Tag Chips
//!
//! Per-panel tag toggles plus the add-tag affordance.

use leptos::*;

use metodo::form::Section;

use crate::state::use_global_state;

#[component]
pub fn TagChips(section: Section) -> impl IntoView {
    let form = use_global_state().form;
    let (draft, set_draft) = create_signal(String::new());
    let (adding, set_adding) = create_signal(false);

    let commit = move || {
        let label = draft.get_untracked();
        form.update(|f| {
            f.tags_mut(section).add_tag(label);
        });
        set_draft.set(String::new());
        set_adding.set(false);
    };

    view! {
        <div class="tags-container">
            {move || {
                form.with(|f| f.tags(section).chips().to_vec())
                    .into_iter()
                    .map(|chip| {
                        let label = chip.label.clone();
                        view! {
                            <span
                                class="tag"
                                class:selected=chip.selected
                                on:click=move |_| { form.update(|f| { f.toggle_tag(section, &label); }); }
                            >
                                {chip.label}
                            </span>
                        }
                    })
                    .collect_view()
            }}

            {move || if adding.get() {
                view! {
                    <input
                        type="text"
                        class="input input-sm tag-input"
                        placeholder="Nueva etiqueta"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                commit();
                            }
                        }
                        on:blur=move |_| commit()
                    />
                }.into_view()
            } else {
                view! {
                    <span class="tag add-tag" on:click=move |_| set_adding.set(true)>"+ Añadir"</span>
                }.into_view()
            }}
        </div>
    }
}
