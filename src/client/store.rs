//! Entry store seam
//!
//! The save and load flows only need these two calls. The CLI implements
//! them with reqwest, the browser build with gloo-net.

use async_trait::async_trait;

use super::dto::{CreatedEntry, Entry, EntryFilter, NewEntry};
use super::error::EntryResult;

/// Somewhere analyses can be saved to and listed from
#[async_trait(?Send)]
pub trait EntryStore {
    /// Persist one entry
    async fn create_entry(&self, entry: &NewEntry) -> EntryResult<CreatedEntry>;

    /// List entries matching the filter
    async fn list_entries(&self, filter: &EntryFilter) -> EntryResult<Vec<Entry>>;
}
