//! Presentation switch that persists the choice and reloads the page.

use platform_host::{
    save_pref_with, PresentationFuture, PresentationMode, PresentationService,
    PRESENTATION_PREF_KEY,
};

use crate::{bridge, WebPrefsStore};

#[derive(Debug, Clone, Copy, Default)]
/// Browser presentation service.
///
/// The mode is read from `localStorage` once per page load; switching writes the new mode and
/// reloads so the site mounts the other layout from scratch.
pub struct WebPresentationService;

impl PresentationService for WebPresentationService {
    fn current(&self) -> PresentationMode {
        WebPrefsStore
            .load_typed(PRESENTATION_PREF_KEY)
            .unwrap_or_default()
    }

    fn switch_to<'a>(
        &'a self,
        mode: PresentationMode,
    ) -> PresentationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            save_pref_with(&WebPrefsStore, PRESENTATION_PREF_KEY, &mode).await?;
            bridge::reload_page()
        })
    }
}
