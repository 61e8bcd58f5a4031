//! Presentation-mode switching between the retro desktop and the modern layout.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Preference key holding the persisted [`PresentationMode`].
pub const PRESENTATION_PREF_KEY: &str = "group_planner.presentation";

/// Object-safe boxed future used by [`PresentationService`].
pub type PresentationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Top-level presentation chosen by the user.
pub enum PresentationMode {
    /// Multi-window retro desktop shell.
    #[default]
    Classic,
    /// Single-page modern layout.
    Modern,
}

impl PresentationMode {
    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Classic => Self::Modern,
            Self::Modern => Self::Classic,
        }
    }

    /// Start-menu label for switching away from this mode.
    pub const fn switch_label(self) -> &'static str {
        match self {
            Self::Classic => "Change to modern experience",
            Self::Modern => "Change to classic experience",
        }
    }
}

/// Host service that applies a presentation switch.
pub trait PresentationService {
    /// Mode currently applied.
    fn current(&self) -> PresentationMode;

    /// Applies `mode`, persisting it when the host supports it.
    fn switch_to<'a>(&'a self, mode: PresentationMode)
        -> PresentationFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Default)]
/// In-memory presentation service for tests and previews.
pub struct MemoryPresentationService {
    mode: Rc<Cell<PresentationMode>>,
}

impl PresentationService for MemoryPresentationService {
    fn current(&self) -> PresentationMode {
        self.mode.get()
    }

    fn switch_to<'a>(
        &'a self,
        mode: PresentationMode,
    ) -> PresentationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.mode.set(mode);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn modes_toggle_and_serialize_as_snake_case() {
        assert_eq!(PresentationMode::Classic.toggled(), PresentationMode::Modern);
        assert_eq!(
            serde_json::to_string(&PresentationMode::Modern).expect("encode"),
            "\"modern\""
        );
    }

    #[test]
    fn memory_service_applies_switch() {
        let service = MemoryPresentationService::default();
        assert_eq!(service.current(), PresentationMode::Classic);
        block_on(service.switch_to(PresentationMode::Modern)).expect("switch");
        assert_eq!(service.current(), PresentationMode::Modern);
    }
}
