//! Application Pages
//!
//! One page per top-level view.

pub mod analyze;
pub mod comics;
pub mod entries;
pub mod tags;
pub mod techniques;
pub mod write;

pub use analyze::Analyze;
pub use comics::Comics;
pub use entries::Entries;
pub use tags::Tags;
pub use techniques::Techniques;
pub use write::Write;
