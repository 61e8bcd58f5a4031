//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Covers the auth provider bridge, `window.confirm` prompts, `localStorage` preferences, and
//! the presentation switch. On non-wasm targets every adapter compiles to an inert fallback so
//! the workspace still builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Build-target host-strategy selection and the host bundle factory.
pub mod adapters;
mod bridge;
pub mod confirm;
pub mod presentation;
pub mod session;
pub mod storage;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use confirm::WebConfirmService;
pub use presentation::WebPresentationService;
pub use session::WebSessionService;
pub use storage::local_prefs::WebPrefsStore;
