//! Step Wizard Components
//!
//! Progress indicator and prev/next controls for the four analysis steps.

use leptos::*;

use crate::state::global::scroll_to;
use crate::state::use_global_state;

/// Step indicator strip
#[component]
pub fn StepIndicators() -> impl IntoView {
    let form = use_global_state().form;

    view! {
        <div class="steps">
            {move || {
                form.with(|f| f.wizard.indicators())
                    .into_iter()
                    .map(|step| view! {
                        <div class=format!("step {}", step.status.class())>
                            <span class="step-num">{step.marker}</span>
                            <span class="step-label">{step.label}</span>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Back / forward buttons under the form
#[component]
pub fn WizardControls() -> impl IntoView {
    let form = use_global_state().form;

    let go = move |forward: bool| {
        let moved = form
            .try_update(|f| if forward { f.wizard.next() } else { f.wizard.prev() })
            .unwrap_or(false);
        if moved {
            scroll_to(form.with_untracked(|f| f.wizard.panel_id()));
        }
    };

    view! {
        <div class="step-controls">
            <button
                class="btn btn-secondary"
                style:visibility=move || {
                    if form.with(|f| f.wizard.show_prev()) { "visible" } else { "hidden" }
                }
                on:click=move |_| go(false)
            >
                "← Anterior"
            </button>
            <button class="btn btn-primary" on:click=move |_| go(true)>
                {move || form.with(|f| f.wizard.forward_label())}
            </button>
        </div>
    }
}
