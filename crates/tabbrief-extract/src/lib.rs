//! # tabbrief Extract
//!
//! The extraction relay. Resolves the tab that is active in the focused
//! window, refuses pages the host forbids scripting on, and injects one of
//! two pure expressions to read the page's visible text or the user's
//! current selection.

mod relay;
pub mod scripts;

pub use relay::ExtractionRelay;
