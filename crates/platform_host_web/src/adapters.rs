use std::rc::Rc;

use platform_host::{
    FixedConfirmService, HostServices, HostStrategy, MemoryPresentationService, NoopPrefsStore,
    NoopSessionService,
};

use crate::{WebConfirmService, WebPrefsStore, WebPresentationService, WebSessionService};

/// Returns the host strategy selected for the active build target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::InMemory
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the host service bundle for the selected strategy.
///
/// Non-browser builds get a bundle where nobody is signed in and every prompt is declined.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            session: Rc::new(WebSessionService),
            confirm: Rc::new(WebConfirmService),
            presentation: Rc::new(WebPresentationService),
            prefs: Rc::new(WebPrefsStore),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::InMemory => HostServices {
            session: Rc::new(NoopSessionService),
            confirm: Rc::new(FixedConfirmService(false)),
            presentation: Rc::new(MemoryPresentationService::default()),
            prefs: Rc::new(NoopPrefsStore),
            host_strategy: HostStrategy::InMemory,
        },
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use platform_host::PresentationMode;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_builds_select_the_in_memory_bundle() {
        assert_eq!(host_strategy_name(), "in-memory");
        let host = build_host_services();
        assert_eq!(host.host_strategy, HostStrategy::InMemory);
        assert!(host.session.current_user().is_none());
        assert!(!host.confirm.confirm("Are you sure you want to sign out?"));
        assert_eq!(host.presentation.current(), PresentationMode::Classic);
    }
}
