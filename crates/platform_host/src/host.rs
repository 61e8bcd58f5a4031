//! Host-bundle model shared by the browser and in-memory runtime compositions.

use std::rc::Rc;

use crate::{
    ConfirmService, FixedConfirmService, MemoryPrefsStore, MemoryPresentationService,
    MemorySessionService, PrefsStore, PresentationService, SessionService, SessionUser,
};

/// Host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition.
    Browser,
    /// In-memory composition used by tests and non-browser builds.
    InMemory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::InMemory => "in-memory",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// Service selection happens before this bundle crosses into `desktop_runtime`, which keeps the
/// window manager decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Authentication provider.
    pub session: Rc<dyn SessionService>,
    /// Yes/no prompt used by the sign-out gate.
    pub confirm: Rc<dyn ConfirmService>,
    /// Presentation-mode switch.
    pub presentation: Rc<dyn PresentationService>,
    /// Lightweight typed preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// In-memory bundle with `user` signed in and every confirmation answered with `confirm`.
    pub fn in_memory(user: SessionUser, confirm: bool) -> Self {
        Self {
            session: Rc::new(MemorySessionService::signed_in(user)),
            confirm: Rc::new(FixedConfirmService(confirm)),
            presentation: Rc::new(MemoryPresentationService::default()),
            prefs: Rc::new(MemoryPrefsStore::default()),
            host_strategy: HostStrategy::InMemory,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .field("signed_in", &self.session.current_user().is_some())
            .field("presentation", &self.presentation.current())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_bundle_starts_signed_in_and_classic() {
        let host = HostServices::in_memory(SessionUser::new("camper"), true);
        assert_eq!(host.host_strategy.as_str(), "in-memory");
        assert!(host.session.current_user().is_some());
        assert!(host.confirm.confirm("Are you sure you want to sign out?"));
        assert_eq!(
            host.presentation.current(),
            crate::PresentationMode::Classic
        );
    }
}
