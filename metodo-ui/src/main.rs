//! Método
//!
//! Comedy-analysis form built with Leptos (WASM).
//!
//! # Features
//!
//! - Four-step analysis wizard (chiste, premisa, ruptura, remate)
//! - Technique catalog that fills the form's selectors
//! - Saved analyses with detail view, search and archive
//! - Writing assistant backed by the agent endpoints
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. All form logic lives in
//! the `metodo` crate's `FormState`; this crate only renders it and talks to
//! the entries API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
