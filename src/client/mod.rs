//! Entry Client
//!
//! Talks to the external entry-storage API.
//!
//! ## Architecture
//!
//! - **dto**: wire types for entries and the writing assistant
//! - **store**: the [`EntryStore`] seam used by the save/load flows
//! - **listing**: projection of a load result onto the entries panel
//! - **http** / **agent**: reqwest clients (feature `client`)
//!
//! ## Endpoints
//!
//! - `POST /entries` - Create an entry
//! - `GET /entries?tipo=` - List entries of a type
//! - `GET /entries/{id}` - Entry with content
//! - `DELETE /entries/{id}` - Archive an entry
//! - `GET /search?q=` - Search entries
//! - `POST /agent/{chat,develop,absurd,analyze}`, `GET /agent/examples`

mod dto;
mod error;
mod listing;
mod store;

#[cfg(feature = "client")]
mod agent;
#[cfg(feature = "client")]
mod http;

pub use dto::{
    entry_path, examples_path, search_path, AbsurdRequest, AbsurdResponse, AnalyzeResponse,
    ArchivedEntry, ChatRequest, ChatResponse, ConceptRequest, CreatedEntry, DevelopResponse,
    Entry, EntryFilter, ListEntriesResponse, NewEntry, SearchResponse, ServiceStatus,
    ANALYSIS_KIND,
};
pub use error::{EntryError, EntryResult};
pub use listing::{format_date, format_date_in, EntryCard, EntryListing, EMPTY_PLACEHOLDER, ERROR_PLACEHOLDER, UNTITLED};
pub use store::EntryStore;

#[cfg(feature = "client")]
pub use agent::AgentClient;
#[cfg(feature = "client")]
pub use http::EntryClient;
