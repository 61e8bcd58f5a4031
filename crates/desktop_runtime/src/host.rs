//! Host-side runtime helpers for executing reducer effects and querying the browser viewport.
//!
//! Effects run against the injected [`HostServices`] bundle, so the same code path is exercised
//! by the in-memory fakes in tests.

mod host_ui;

use std::rc::Rc;

use leptos::{logging, spawn_local};
use platform_host::{HostServices, PrefsStore, PresentationMode, SessionService, SessionUser};

use crate::{config::WindowMetrics, model::SurfaceSize, reducer::RuntimeEffect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What executing a [`RuntimeEffect`] ended up doing.
pub enum EffectOutcome {
    SignedOut,
    SignOutDeclined,
    PresentationSwitched,
}

#[derive(Clone)]
/// Host service bundle plus the shell settings effects need.
pub struct DesktopHostContext {
    services: HostServices,
    sign_out_prompt: String,
}

impl DesktopHostContext {
    pub fn new(services: HostServices, sign_out_prompt: impl Into<String>) -> Self {
        Self {
            services,
            sign_out_prompt: sign_out_prompt.into(),
        }
    }

    pub fn set_sign_out_prompt(&mut self, prompt: String) {
        self.sign_out_prompt = prompt;
    }

    pub fn session(&self) -> Rc<dyn SessionService> {
        self.services.session.clone()
    }

    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Signed-in user, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.services.session.current_user()
    }

    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Presentation mode the start menu offers to switch to.
    pub fn alternate_presentation(&self) -> PresentationMode {
        self.services.presentation.current().toggled()
    }

    /// Size of the surface windows may occupy.
    ///
    /// `measured` is the desktop element's client size, when it is mounted.
    pub fn desktop_surface_size(
        &self,
        metrics: &WindowMetrics,
        measured: Option<(i32, i32)>,
    ) -> SurfaceSize {
        host_ui::desktop_surface_size(metrics, measured)
    }

    /// Executes one effect to completion.
    ///
    /// # Errors
    ///
    /// Returns the host service's error when sign-out or the presentation switch fails.
    pub async fn execute_effect(&self, effect: RuntimeEffect) -> Result<EffectOutcome, String> {
        match effect {
            RuntimeEffect::ConfirmSignOut => {
                if !self.services.confirm.confirm(&self.sign_out_prompt) {
                    return Ok(EffectOutcome::SignOutDeclined);
                }
                self.services.session.sign_out().await?;
                Ok(EffectOutcome::SignedOut)
            }
            RuntimeEffect::SwitchPresentation(mode) => {
                self.services.presentation.switch_to(mode).await?;
                Ok(EffectOutcome::PresentationSwitched)
            }
        }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer in the background.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        let host = self.clone();
        spawn_local(async move {
            let label = match effect {
                RuntimeEffect::ConfirmSignOut => "sign-out",
                RuntimeEffect::SwitchPresentation(_) => "presentation switch",
            };
            if let Err(err) = host.execute_effect(effect).await {
                logging::warn!("{label} failed: {err}");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{
        HostStrategy, MemoryPrefsStore, MemoryPresentationService, MemorySessionService,
        PresentationService, RecordingConfirmService,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    const PROMPT: &str = "Are you sure you want to sign out?";

    struct Fixture {
        host: DesktopHostContext,
        session: MemorySessionService,
        confirm: RecordingConfirmService,
        presentation: MemoryPresentationService,
    }

    fn fixture(accept: bool) -> Fixture {
        let session = MemorySessionService::signed_in(SessionUser::new("camper"));
        let confirm = RecordingConfirmService::new(accept);
        let presentation = MemoryPresentationService::default();
        let services = HostServices {
            session: Rc::new(session.clone()),
            confirm: Rc::new(confirm.clone()),
            presentation: Rc::new(presentation.clone()),
            prefs: Rc::new(MemoryPrefsStore::default()),
            host_strategy: HostStrategy::InMemory,
        };
        Fixture {
            host: DesktopHostContext::new(services, PROMPT),
            session,
            confirm,
            presentation,
        }
    }

    #[test]
    fn declined_sign_out_leaves_session_alone() {
        let fx = fixture(false);
        let outcome = block_on(fx.host.execute_effect(RuntimeEffect::ConfirmSignOut));
        assert_eq!(outcome, Ok(EffectOutcome::SignOutDeclined));
        assert_eq!(fx.confirm.prompts(), vec![PROMPT.to_string()]);
        assert_eq!(fx.session.sign_out_count(), 0);
        assert!(fx.host.current_user().is_some());
    }

    #[test]
    fn accepted_sign_out_delegates_to_session() {
        let fx = fixture(true);
        let outcome = block_on(fx.host.execute_effect(RuntimeEffect::ConfirmSignOut));
        assert_eq!(outcome, Ok(EffectOutcome::SignedOut));
        assert_eq!(fx.session.sign_out_count(), 1);
        assert_eq!(fx.host.current_user(), None);
    }

    #[test]
    fn presentation_switch_goes_through_host() {
        let fx = fixture(true);
        assert_eq!(fx.host.alternate_presentation(), PresentationMode::Modern);
        let outcome = block_on(
            fx.host
                .execute_effect(RuntimeEffect::SwitchPresentation(PresentationMode::Modern)),
        );
        assert_eq!(outcome, Ok(EffectOutcome::PresentationSwitched));
        assert_eq!(fx.presentation.current(), PresentationMode::Modern);
        assert_eq!(fx.host.alternate_presentation(), PresentationMode::Classic);
    }

    #[test]
    fn surface_size_prefers_the_measured_element() {
        let fx = fixture(true);
        let metrics = WindowMetrics::default();
        assert_eq!(
            fx.host.desktop_surface_size(&metrics, Some((1280, 700))),
            SurfaceSize::new(1280, 652)
        );
    }

    #[test]
    fn unmeasured_surface_falls_back_to_the_viewport() {
        let fx = fixture(true);
        let metrics = WindowMetrics::default();
        assert_eq!(fx.host.host_strategy_name(), "in-memory");
        assert_eq!(
            fx.host.desktop_surface_size(&metrics, None),
            SurfaceSize::new(1024, 720)
        );
        assert_eq!(
            fx.host.desktop_surface_size(&metrics, Some((0, 0))),
            SurfaceSize::new(1024, 720)
        );
    }
}
