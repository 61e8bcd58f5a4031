//! Window-manager transitions over [`DesktopState`].
//!
//! Each operation is a synchronous, atomic update. Ids that are not open are no-ops reported as
//! [`Transition::Unchanged`]; the registry check for unknown ids lives in the reducer.

use crate::model::{DesktopState, Position, WindowId};
use crate::config::WindowMetrics;

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a manager operation did.
pub enum Transition {
    /// A new window was appended and focused at its cascade position.
    Opened { initial_position: Position },
    /// A minimized window was shown again and focused.
    Restored,
    /// An already visible window received focus without reordering.
    Raised,
    /// A window was removed. `refocused` is the new focus when the closed window had it.
    Closed { refocused: Option<WindowId> },
    Minimized,
    Focused,
    Unchanged,
}

/// Opens, restores, or raises `id`.
pub fn activate(state: &mut DesktopState, id: &WindowId, metrics: &WindowMetrics) -> Transition {
    if state.minimized_ids.remove(id) {
        state.focused_id = Some(id.clone());
        return Transition::Restored;
    }
    if !state.is_open(id) {
        let initial_position = metrics.cascade_position(state.open_ids.len());
        state.open_ids.push(id.clone());
        state.focused_id = Some(id.clone());
        return Transition::Opened { initial_position };
    }
    if state.is_focused(id) {
        return Transition::Unchanged;
    }
    state.focused_id = Some(id.clone());
    Transition::Raised
}

/// Closes `id`, moving focus to a neighbour when the closed window had it.
///
/// The new focus is the nearest visible window before `id` in open order, then the nearest
/// visible one after it. Minimized windows are skipped so focus never lands on one.
pub fn close(state: &mut DesktopState, id: &WindowId) -> Transition {
    let Some(index) = state.open_index(id) else {
        return Transition::Unchanged;
    };
    state.open_ids.remove(index);
    state.minimized_ids.remove(id);

    if !state.is_focused(id) {
        return Transition::Closed { refocused: None };
    }

    let visible = |candidate: &&WindowId| !state.minimized_ids.contains(*candidate);
    let refocused = state.open_ids[..index]
        .iter()
        .rev()
        .find(visible)
        .or_else(|| state.open_ids[index..].iter().find(visible))
        .cloned();
    state.focused_id = refocused.clone();
    Transition::Closed { refocused }
}

/// Hides `id` without closing it. Focus is cleared if `id` had it and is not reassigned.
pub fn minimize(state: &mut DesktopState, id: &WindowId) -> Transition {
    if !state.is_open(id) || !state.minimized_ids.insert(id.clone()) {
        return Transition::Unchanged;
    }
    if state.is_focused(id) {
        state.focused_id = None;
    }
    Transition::Minimized
}

/// Gives focus to an open window, un-minimizing it if needed.
pub fn focus(state: &mut DesktopState, id: &WindowId) -> Transition {
    if !state.is_open(id) || (state.is_focused(id) && !state.is_minimized(id)) {
        return Transition::Unchanged;
    }
    state.minimized_ids.remove(id);
    state.focused_id = Some(id.clone());
    Transition::Focused
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    fn open_all(state: &mut DesktopState, ids: &[&str]) {
        let metrics = WindowMetrics::default();
        for raw in ids {
            activate(state, &id(raw), &metrics);
        }
    }

    #[test]
    fn activate_opens_with_cascade_offsets() {
        let mut state = DesktopState::default();
        let metrics = WindowMetrics::default();
        let transitions: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|raw| activate(&mut state, &id(raw), &metrics))
            .collect();

        assert_eq!(
            transitions,
            vec![
                Transition::Opened {
                    initial_position: Position::new(20, 20)
                },
                Transition::Opened {
                    initial_position: Position::new(50, 50)
                },
                Transition::Opened {
                    initial_position: Position::new(80, 80)
                },
            ]
        );
        assert_eq!(state.focused_id, Some(id("c")));
    }

    #[test]
    fn activate_twice_keeps_one_entry() {
        let mut state = DesktopState::default();
        let metrics = WindowMetrics::default();
        activate(&mut state, &id("a"), &metrics);
        assert_eq!(activate(&mut state, &id("a"), &metrics), Transition::Unchanged);
        assert_eq!(state.open_ids, vec![id("a")]);
        assert_eq!(state.focused_id, Some(id("a")));
    }

    #[test]
    fn activate_raises_without_reordering() {
        let mut state = DesktopState::default();
        open_all(&mut state, &["a", "b"]);
        assert_eq!(
            activate(&mut state, &id("a"), &WindowMetrics::default()),
            Transition::Raised
        );
        assert_eq!(state.open_ids, vec![id("a"), id("b")]);
        assert_eq!(state.focused_id, Some(id("a")));
    }

    #[test]
    fn activate_restores_minimized_window() {
        let mut state = DesktopState::default();
        open_all(&mut state, &["a"]);
        minimize(&mut state, &id("a"));
        assert_eq!(
            activate(&mut state, &id("a"), &WindowMetrics::default()),
            Transition::Restored
        );
        assert!(!state.is_minimized(&id("a")));
        assert_eq!(state.focused_id, Some(id("a")));
    }

    #[test]
    fn closing_focused_window_focuses_predecessor() {
        let mut state = DesktopState::default();
        open_all(&mut state, &["a", "b", "c"]);
        assert_eq!(
            close(&mut state, &id("c")),
            Transition::Closed {
                refocused: Some(id("b"))
            }
        );
        assert_eq!(state.open_ids, vec![id("a"), id("b")]);
    }

    #[test]
    fn closing_first_window_focuses_successor() {
        let mut state = DesktopState::default();
        open_all(&mut state, &["a", "b"]);
        focus(&mut state, &id("a"));
        assert_eq!(
            close(&mut state, &id("a")),
            Transition::Closed {
                refocused: Some(id("b"))
            }
        );
    }

    #[test]
    fn closing_skips_minimized_neighbours() {
        let mut state = DesktopState::default();
        open_all(&mut state, &["a", "b", "c"]);
        minimize(&mut state, &id("b"));
        focus(&mut state, &id("c"));
        close(&mut state, &id("c"));
        assert_eq!(state.focused_id, Some(id("a")));

        minimize(&mut state, &id("a"));
        focus(&mut state, &id("b"));
        close(&mut state, &id("b"));
        assert_eq!(state.focused_id, None);
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn closing_only_window_clears_focus() {
        let mut state = DesktopState::default();
        open_all(&mut state, &["a"]);
        close(&mut state, &id("a"));
        assert_eq!(state, DesktopState::default());
    }

    #[test]
    fn closing_unfocused_window_keeps_focus() {
        let mut state = DesktopState::default();
        open_all(&mut state, &["a", "b"]);
        assert_eq!(
            close(&mut state, &id("a")),
            Transition::Closed { refocused: None }
        );
        assert_eq!(state.focused_id, Some(id("b")));
    }

    #[test]
    fn minimize_clears_focus_without_reassigning() {
        let mut state = DesktopState::default();
        open_all(&mut state, &["a", "b"]);
        assert_eq!(minimize(&mut state, &id("b")), Transition::Minimized);
        assert_eq!(state.focused_id, None);
        assert!(state.is_open(&id("b")));
        assert_eq!(minimize(&mut state, &id("b")), Transition::Unchanged);
    }

    #[test]
    fn focus_unminimizes_and_ignores_closed_ids() {
        let mut state = DesktopState::default();
        open_all(&mut state, &["a", "b"]);
        minimize(&mut state, &id("a"));
        assert_eq!(focus(&mut state, &id("a")), Transition::Focused);
        assert!(!state.is_minimized(&id("a")));
        assert_eq!(focus(&mut state, &id("a")), Transition::Unchanged);
        assert_eq!(focus(&mut state, &id("zzz")), Transition::Unchanged);
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn operations_on_closed_ids_are_no_ops() {
        let mut state = DesktopState::default();
        open_all(&mut state, &["a"]);
        let before = state.clone();
        assert_eq!(close(&mut state, &id("b")), Transition::Unchanged);
        assert_eq!(minimize(&mut state, &id("b")), Transition::Unchanged);
        assert_eq!(state, before);
    }
}
