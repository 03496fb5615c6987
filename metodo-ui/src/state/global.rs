//! Global Application State
//!
//! The analysis form lives in one signal holding a `FormState`; components
//! read slices of it and mutate it through its own operations.

use leptos::*;

use metodo::client::EntryListing;
use metodo::form::FormState;
use metodo::session::{load_listing, save_notice, submit_analysis, Notice};

use crate::api::{resolve_endpoint, BrowserStore};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Entries API, resolved once from the page location
    pub store: BrowserStore,
    /// The analysis form
    pub form: RwSignal<FormState>,
    /// Saved analyses; `None` while the first load is in flight
    pub entries: RwSignal<Option<EntryListing>>,
    /// Entry opened in the detail view
    pub selected_entry: RwSignal<Option<String>>,
    /// A save request is in flight
    pub saving: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        store: BrowserStore::new(resolve_endpoint()),
        form: create_rw_signal(FormState::new()),
        entries: create_rw_signal(None),
        selected_entry: create_rw_signal(None),
        saving: create_rw_signal(false),
    };

    provide_context(state);
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Switch the visible panel
    pub fn select_view(&self, view_id: &str) {
        self.form.update(|form| form.select_view(view_id));
        self.selected_entry.set(None);
    }

    /// Reload the saved-analyses list
    pub fn reload_entries(&self) {
        let store = self.store.clone();
        let entries = self.entries;
        spawn_local(async move {
            entries.set(Some(load_listing(&store).await));
        });
    }

    /// Save the current form.
    ///
    /// The form is left as it is either way; a success reloads the list.
    pub fn save(&self) {
        if self.saving.get_untracked() {
            return;
        }
        self.saving.set(true);

        let analysis = self.form.with_untracked(FormState::collect);
        let state = self.clone();
        spawn_local(async move {
            let result = submit_analysis(&state.store, &analysis).await;
            let notice = save_notice(&result);

            if let Err(e) = &result {
                log_error(&format!("Error saving: {}", e));
            }
            alert(notice.message());

            if notice == Notice::Saved {
                state.reload_entries();
            }
            state.saving.set(false);
        });
    }

    /// Run a search and publish the results into `target`
    pub fn search(&self, query: String, target: RwSignal<Option<EntryListing>>) {
        let store = self.store.clone();
        target.set(None);
        spawn_local(async move {
            target.set(Some(EntryListing::from_result(store.search(&query).await)));
        });
    }
}

/// Blocking browser alert
pub fn alert(message: &str) {
    let _ = window().alert_with_message(message);
}

pub fn log_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

/// Smoothly bring an element into view
pub fn scroll_to(element_id: &str) {
    if let Some(element) = document().get_element_by_id(element_id) {
        let mut options = web_sys::ScrollIntoViewOptions::new();
        options.behavior(web_sys::ScrollBehavior::Smooth);
        options.block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
