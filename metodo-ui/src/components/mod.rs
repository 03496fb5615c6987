//! UI Components
//!
//! Reusable Leptos components for the analysis form and entry lists.

pub mod catalog;
pub mod entry_card;
pub mod loading;
pub mod nav;
pub mod rows;
pub mod tag_chips;
pub mod technique_selector;
pub mod wizard;

pub use catalog::CatalogPanel;
pub use entry_card::{EntryCardView, EntryList};
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use rows::{DissectionList, SituationList};
pub use tag_chips::TagChips;
pub use technique_selector::TechniqueSelectorView;
pub use wizard::{StepIndicators, WizardControls};
