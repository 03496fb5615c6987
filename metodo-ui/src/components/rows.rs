//! Dynamic Row Lists
//!
//! Dissection key/value rows and numbered punchline situations. Rows are
//! keyed by their stable id so removing one never re-renders the others'
//! inputs; situation numbers are read back from the list on every render.

use leptos::*;

use metodo::form::{situation_placeholder, RowId};

use crate::state::use_global_state;

#[component]
pub fn DissectionList() -> impl IntoView {
    let form = use_global_state().form;

    view! {
        <div class="diseccion-items">
            <For
                each=move || form.with(|f| f.diseccion.ids())
                key=|id| *id
                children=move |id| view! { <DissectionRowView id=id /> }
            />
        </div>
        <button class="btn btn-ghost" on:click=move |_| { form.update(|f| { f.add_dissection_row(); }); }>
            "+ Añadir característica"
        </button>
    }
}

#[component]
fn DissectionRowView(id: RowId) -> impl IntoView {
    let form = use_global_state().form;
    let row = move || form.with(|f| f.diseccion.get(id).cloned().unwrap_or_default());

    view! {
        <div class="diseccion-item">
            <input
                type="text"
                class="input input-sm"
                placeholder="Característica"
                prop:value=move || row().key
                on:input=move |ev| form.update(|f| {
                    if let Some(row) = f.diseccion.get_mut(id) {
                        row.key = event_target_value(&ev);
                    }
                })
            />
            <input
                type="text"
                class="input"
                placeholder="Valor"
                prop:value=move || row().value
                on:input=move |ev| form.update(|f| {
                    if let Some(row) = f.diseccion.get_mut(id) {
                        row.value = event_target_value(&ev);
                    }
                })
            />
            <button class="btn-icon btn-remove" on:click=move |_| { form.update(|f| { f.remove_dissection_row(id); }); }>
                "×"
            </button>
        </div>
    }
}

#[component]
pub fn SituationList() -> impl IntoView {
    let form = use_global_state().form;

    view! {
        <div class="situations-list">
            <For
                each=move || form.with(|f| f.situaciones.ids())
                key=|id| *id
                children=move |id| view! { <SituationRowView id=id /> }
            />
        </div>
        <button class="btn btn-ghost" on:click=move |_| { form.update(|f| { f.add_situation(); }); }>
            "+ Añadir situación"
        </button>
    }
}

#[component]
fn SituationRowView(id: RowId) -> impl IntoView {
    let form = use_global_state().form;
    let number = move || form.with(|f| f.situaciones.number_of(id).unwrap_or_default());

    view! {
        <div class="situation-item">
            <span class="situation-num">{number}</span>
            <input
                type="text"
                class="input"
                placeholder=move || situation_placeholder(number())
                prop:value=move || form.with(|f| f.situaciones.get(id).cloned().unwrap_or_default())
                on:input=move |ev| form.update(|f| {
                    if let Some(text) = f.situaciones.get_mut(id) {
                        *text = event_target_value(&ev);
                    }
                })
            />
            <button class="btn-icon btn-remove" on:click=move |_| { form.update(|f| { f.remove_situation(id); }); }>
                "×"
            </button>
        </div>
    }
}
