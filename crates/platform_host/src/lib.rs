//! Typed host capability contracts consumed by the desktop shell.
//!
//! The shell never reaches for a process-wide backend handle. Everything it needs from the
//! outside world (the signed-in session, confirmation prompts, the presentation switch, and
//! lightweight preferences) is expressed here as an object-safe trait and handed to the runtime
//! inside a [`HostServices`] bundle. Browser adapters live in `platform_host_web`; the in-memory
//! implementations in this crate back tests and non-browser builds.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod confirm;
pub mod host;
pub mod prefs;
pub mod presentation;
pub mod session;

pub use confirm::{ConfirmService, FixedConfirmService, RecordingConfirmService};
pub use host::{HostServices, HostStrategy};
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use presentation::{
    MemoryPresentationService, PresentationFuture, PresentationMode, PresentationService,
    PRESENTATION_PREF_KEY,
};
pub use session::{
    AuthListener, MemorySessionService, NoopSessionService, SessionFuture, SessionService,
    SessionUser, SessionWatch,
};
