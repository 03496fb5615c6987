//! # Método
//!
//! Structured comedy-writing analysis: break a joke into premise, rupture
//! and punchline, then save the result as a Markdown entry in an external
//! entry-storage API.
//!
//! ## Modules
//!
//! - [`analysis`]: the analysis record, its Markdown rendering, tags and title
//! - [`form`]: form state (views, step wizard, rows, tag chips, technique selectors)
//! - [`endpoint`]: API base-URL resolution
//! - [`client`]: entry and writing-assistant clients
//! - [`session`]: save and load flows with user notices
//! - [`config`]: TOML configuration for the CLI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use metodo::client::EntryClient;
//! use metodo::endpoint::ApiEndpoint;
//! use metodo::form::FormState;
//! use metodo::session::AnalysisSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EntryClient::new(ApiEndpoint::Local, None)?;
//!
//!     let mut form = FormState::new();
//!     form.joke.text = "Mi cámara de seguridad está en el techo".to_string();
//!     form.tecnica_ruptura.select("personificacion");
//!
//!     let mut session = AnalysisSession::with_form(client, form);
//!     let notice = session.save().await;
//!     println!("{}", notice);
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod client;
#[cfg(feature = "cli")]
pub mod config;
pub mod endpoint;
pub mod form;
pub mod session;

pub use analysis::{build_tags, entry_title, render_content, Analysis};
pub use client::{EntryError, EntryResult, EntryStore};
pub use endpoint::{ApiEndpoint, PageLocation};
pub use form::FormState;
pub use session::{AnalysisSession, Notice};
