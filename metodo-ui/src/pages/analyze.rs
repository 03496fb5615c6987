//! Analyze Page
//!
//! The four-step analysis form.

use leptos::*;

use metodo::form::{FormState, Section, TechniqueField};

use crate::components::{
    DissectionList, InlineLoading, SituationList, StepIndicators, TagChips, TechniqueSelectorView,
    WizardControls,
};
use crate::state::use_global_state;

#[component]
pub fn Analyze() -> impl IntoView {
    let state = use_global_state();
    let saving = state.saving;

    view! {
        <div class="analyze">
            <StepIndicators />

            <JokeCard />
            <PremisaCard />
            <RupturaCard />
            <RemateCard />

            <WizardControls />

            <button
                class="btn btn-primary btn-save"
                disabled=move || saving.get()
                on:click=move |_| state.save()
            >
                {move || if saving.get() {
                    view! { <InlineLoading /> <span>"Guardando..."</span> }.into_view()
                } else {
                    view! { <span>"Guardar análisis"</span> }.into_view()
                }}
            </button>
        </div>
    }
}

/// Text input bound to one string field of the form
#[component]
fn TextField(
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] multiline: bool,
    get: fn(&FormState) -> &String,
    set: fn(&mut FormState) -> &mut String,
) -> impl IntoView {
    let form = use_global_state().form;
    let value = move || form.with(|f| get(f).clone());
    let on_input = move |text: String| form.update(|f| *set(f) = text);

    view! {
        <div class="form-group">
            <label class="label">{label}</label>
            {if multiline {
                view! {
                    <textarea
                        class="input textarea"
                        placeholder=placeholder
                        prop:value=value
                        on:input=move |ev| on_input(event_target_value(&ev))
                    />
                }.into_view()
            } else {
                view! {
                    <input
                        type="text"
                        class="input"
                        placeholder=placeholder
                        prop:value=value
                        on:input=move |ev| on_input(event_target_value(&ev))
                    />
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn JokeCard() -> impl IntoView {
    view! {
        <section id="card-joke" class="card">
            <h2 class="card-title">"1. Chiste"</h2>
            <TextField
                label="Texto del chiste"
                placeholder="Escribe o pega el chiste..."
                multiline=true
                get=|f| &f.joke.text
                set=|f| &mut f.joke.text
            />
            <div class="form-row">
                <TextField label="Cómico" get=|f| &f.joke.comic set=|f| &mut f.joke.comic />
                <TextField label="Especial" get=|f| &f.joke.show set=|f| &mut f.joke.show />
                <TextField label="Año" get=|f| &f.joke.year set=|f| &mut f.joke.year />
            </div>
        </section>
    }
}

#[component]
fn PremisaCard() -> impl IntoView {
    view! {
        <section id="card-premisa" class="card">
            <h2 class="card-title">"2. Premisa"</h2>
            <TextField
                label="Concepto"
                placeholder="¿De qué habla el chiste?"
                get=|f| &f.concepto
                set=|f| &mut f.concepto
            />
            <div class="form-group">
                <label class="label">"Disección"</label>
                <DissectionList />
            </div>
            <TextField
                label="Elemento mecánico"
                placeholder="La característica que se va a romper"
                get=|f| &f.elemento_mecanico
                set=|f| &mut f.elemento_mecanico
            />
            <TechniqueSelectorView field=TechniqueField::Estructura />
            <TagChips section=Section::Premisa />
        </section>
    }
}

#[component]
fn RupturaCard() -> impl IntoView {
    view! {
        <section id="card-ruptura" class="card">
            <h2 class="card-title">"3. Ruptura"</h2>
            <TechniqueSelectorView field=TechniqueField::Ruptura />
            <TextField
                label="Característica alterada"
                get=|f| &f.caracteristica
                set=|f| &mut f.caracteristica
            />
            <TagChips section=Section::Ruptura />
        </section>
    }
}

#[component]
fn RemateCard() -> impl IntoView {
    view! {
        <section id="card-remate" class="card">
            <h2 class="card-title">"4. Remate"</h2>
            <TechniqueSelectorView field=TechniqueField::Remate />
            <div class="form-group">
                <label class="label">"Situaciones"</label>
                <SituationList />
            </div>
            <TagChips section=Section::Remate />
        </section>
    }
}
