//! Analysis Model
//!
//! The assembled record of a joke analysis and the routines that turn it
//! into the text and tags sent to the entry store.
//!
//! ## Structure
//!
//! A joke is dissected in three stages:
//!
//! 1. **Premisa**: the concept, its dissection and the mechanical element
//! 2. **Ruptura**: the technique that alters reality
//! 3. **Remate**: how the absurd reality is represented
//!
//! [`Analysis`] is only built at save time, from the form state.

mod render;
mod tags;
mod types;

pub use render::{humanize_technique, render_content};
pub use tags::{build_tags, entry_title, TITLE_PREFIX, TITLE_TEXT_CHARS};
pub use types::{Analysis, DissectionItem, Joke, Premisa, Remate, Ruptura};
