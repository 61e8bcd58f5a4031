//! Reducer actions, side-effect intents, and the dispatch entry point for the window manager.

use leptos::logging;
use platform_host::PresentationMode;
use thiserror::Error;

use crate::{
    apps::WindowRegistry,
    config::WindowMetrics,
    model::{DesktopState, WindowId},
    window_manager::{self, Transition},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`].
pub enum DesktopAction {
    /// Open, restore, or raise a registered window.
    Activate {
        /// Window to activate.
        window_id: WindowId,
    },
    /// Close an open window.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize an open window.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Focus an open window.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Ask the user to confirm signing out.
    RequestSignOut,
    /// Switch to another presentation mode.
    SwitchPresentation {
        /// Mode to switch to.
        mode: PresentationMode,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by the reducer and executed by the host layer.
pub enum RuntimeEffect {
    /// Show the sign-out prompt and sign out when accepted.
    ConfirmSignOut,
    /// Apply a presentation switch through the host.
    SwitchPresentation(PresentationMode),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned by [`reduce_desktop`].
pub enum ReducerError {
    /// The id is not in the window registry.
    #[error("no window registered with id `{0}`")]
    UnknownWindow(WindowId),
}

/// Applies a [`DesktopAction`] and returns the side effects to run.
///
/// Sign-out and presentation requests never touch `state`; they only emit effects.
///
/// # Errors
///
/// Returns [`ReducerError::UnknownWindow`] when activating an id absent from `registry`. The
/// state is left untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    registry: &WindowRegistry,
    metrics: &WindowMetrics,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Activate { window_id } => {
            if !registry.contains(&window_id) {
                return Err(ReducerError::UnknownWindow(window_id));
            }
            let transition = window_manager::activate(state, &window_id, metrics);
            log_transition(&window_id, &transition);
        }
        DesktopAction::Close { window_id } => {
            let transition = window_manager::close(state, &window_id);
            log_transition(&window_id, &transition);
        }
        DesktopAction::Minimize { window_id } => {
            window_manager::minimize(state, &window_id);
        }
        DesktopAction::Focus { window_id } => {
            window_manager::focus(state, &window_id);
        }
        DesktopAction::RequestSignOut => effects.push(RuntimeEffect::ConfirmSignOut),
        DesktopAction::SwitchPresentation { mode } => {
            effects.push(RuntimeEffect::SwitchPresentation(mode));
        }
    }
    Ok(effects)
}

fn log_transition(window_id: &WindowId, transition: &Transition) {
    match transition {
        Transition::Opened { initial_position } => {
            logging::log!("opened `{window_id}` at {initial_position:?}");
        }
        Transition::Closed {
            refocused: Some(next),
        } => logging::log!("closed `{window_id}`, focus moved to `{next}`"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::apps::test_registry;

    fn dispatch(
        state: &mut DesktopState,
        registry: &WindowRegistry,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, registry, &WindowMetrics::default(), action).expect("dispatch")
    }

    fn activate(window_id: &str) -> DesktopAction {
        DesktopAction::Activate {
            window_id: window_id.into(),
        }
    }

    #[test]
    fn activating_unregistered_window_is_rejected_without_mutation() {
        let registry = test_registry();
        let mut state = DesktopState::default();
        dispatch(&mut state, &registry, activate("packing"));
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            &registry,
            &WindowMetrics::default(),
            activate("minesweeper"),
        )
        .expect_err("unknown id");

        assert_eq!(err, ReducerError::UnknownWindow("minesweeper".into()));
        assert_eq!(state, before);
    }

    #[test]
    fn lifecycle_actions_emit_no_effects() {
        let registry = test_registry();
        let mut state = DesktopState::default();

        assert!(dispatch(&mut state, &registry, activate("packing")).is_empty());
        assert!(dispatch(&mut state, &registry, activate("food")).is_empty());
        assert!(dispatch(
            &mut state,
            &registry,
            DesktopAction::Minimize {
                window_id: "food".into()
            }
        )
        .is_empty());

        assert_eq!(
            state.open_ids,
            vec![WindowId::from("packing"), WindowId::from("food")]
        );
        assert_eq!(state.focused_id, None);
        assert!(state.is_minimized(&"food".into()));
    }

    #[test]
    fn close_and_focus_on_unopened_registered_ids_are_no_ops() {
        let registry = test_registry();
        let mut state = DesktopState::default();
        dispatch(&mut state, &registry, activate("packing"));
        let before = state.clone();

        dispatch(
            &mut state,
            &registry,
            DesktopAction::Close {
                window_id: "photos".into(),
            },
        );
        dispatch(
            &mut state,
            &registry,
            DesktopAction::Focus {
                window_id: "photos".into(),
            },
        );

        assert_eq!(state, before);
    }

    #[test]
    fn sign_out_request_only_emits_confirmation() {
        let registry = test_registry();
        let mut state = DesktopState::default();
        dispatch(&mut state, &registry, activate("photos"));
        let before = state.clone();

        let effects = dispatch(&mut state, &registry, DesktopAction::RequestSignOut);

        assert_eq!(effects, vec![RuntimeEffect::ConfirmSignOut]);
        assert_eq!(state, before);
    }

    #[test]
    fn presentation_switch_is_forwarded_as_effect() {
        let registry = test_registry();
        let mut state = DesktopState::default();
        let effects = dispatch(
            &mut state,
            &registry,
            DesktopAction::SwitchPresentation {
                mode: PresentationMode::Modern,
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::SwitchPresentation(PresentationMode::Modern)]
        );
    }
}
