//! Browser Command Wrappers
//!
//! Everything that talks to the browser outside the Leptos view tree,
//! organized by concern.

mod dialog;
mod files;
mod sidebar;
mod submit;

// Re-export all public items
pub use dialog::*;
pub use files::*;
pub use sidebar::*;
pub use submit::*;
