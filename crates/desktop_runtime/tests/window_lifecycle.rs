use desktop_runtime::{
    reduce_desktop, DesktopAction, DesktopState, Position, WindowDescriptor, WindowId,
    WindowMetrics, WindowRegistry,
};
use leptos::IntoView;
use pretty_assertions::assert_eq;
use system_ui::IconName;

const IDS: [&str; 4] = ["packing", "food", "photos", "schedule"];

fn registry() -> WindowRegistry {
    WindowRegistry::new(IDS.iter().map(|id| {
        WindowDescriptor::new(*id, id.to_uppercase(), IconName::Folder, || ().into_view())
    }))
    .expect("unique ids")
}

/// Small deterministic generator so failures replay exactly.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[(self.next() % items.len() as u64) as usize]
    }
}

fn apply(state: &mut DesktopState, registry: &WindowRegistry, action: DesktopAction) {
    let effects = reduce_desktop(state, registry, &WindowMetrics::default(), action.clone())
        .unwrap_or_else(|err| panic!("{action:?} rejected: {err}"));
    assert!(effects.is_empty(), "{action:?} emitted {effects:?}");
}

fn action(kind: u64, window_id: &str) -> DesktopAction {
    let window_id = WindowId::from(window_id);
    match kind % 4 {
        0 => DesktopAction::Activate { window_id },
        1 => DesktopAction::Close { window_id },
        2 => DesktopAction::Minimize { window_id },
        _ => DesktopAction::Focus { window_id },
    }
}

fn check_step(before: &DesktopState, after: &DesktopState, action: &DesktopAction) {
    after
        .check_invariants()
        .unwrap_or_else(|err| panic!("after {action:?}: {err}"));

    match action {
        DesktopAction::Activate { window_id } => {
            assert!(after.is_focused(window_id), "{action:?} did not focus");
            assert!(!after.is_minimized(window_id));
            let grew = usize::from(!before.is_open(window_id));
            assert_eq!(after.open_ids.len(), before.open_ids.len() + grew);
            if before.is_open(window_id) {
                assert_eq!(after.open_index(window_id), before.open_index(window_id));
            }
        }
        DesktopAction::Close { window_id } => {
            assert!(!after.is_open(window_id));
            if before.is_focused(window_id) && after.open_ids.is_empty() {
                assert_eq!(after.focused_id, None);
            }
        }
        DesktopAction::Minimize { window_id } => {
            if before.is_open(window_id) {
                assert!(after.is_minimized(window_id));
                assert!(after.is_open(window_id));
                assert!(!after.is_focused(window_id));
            }
            if before.is_focused(window_id) {
                assert_eq!(after.focused_id, None);
            }
        }
        DesktopAction::Focus { window_id } => {
            if before.is_open(window_id) {
                assert!(after.is_focused(window_id));
            } else {
                assert_eq!(after, before);
            }
        }
        DesktopAction::RequestSignOut | DesktopAction::SwitchPresentation { .. } => {
            assert_eq!(after, before);
        }
    }
}

#[test]
fn random_walks_preserve_window_invariants() {
    let registry = registry();
    for seed in 1..=24 {
        let mut rng = Lcg(seed);
        let mut state = DesktopState::default();
        for _ in 0..200 {
            let kind = rng.next();
            let next = action(kind, rng.pick(&IDS));
            let before = state.clone();
            apply(&mut state, &registry, next.clone());
            check_step(&before, &state, &next);
        }
    }
}

#[test]
fn scripted_session_matches_expected_layout() {
    let registry = registry();
    let metrics = WindowMetrics::default();
    let mut state = DesktopState::default();

    for id in ["packing", "food", "photos"] {
        apply(&mut state, &registry, action(0, id));
    }
    let cascade: Vec<_> = state
        .open_ids
        .iter()
        .filter_map(|id| state.initial_position(id, &metrics))
        .collect();
    assert_eq!(
        cascade,
        vec![
            Position::new(20, 20),
            Position::new(50, 50),
            Position::new(80, 80)
        ]
    );

    apply(&mut state, &registry, action(0, "photos"));
    assert_eq!(state.open_ids.len(), 3);
    assert_eq!(state.focused_id, Some(WindowId::from("photos")));

    apply(&mut state, &registry, action(1, "photos"));
    assert_eq!(state.focused_id, Some(WindowId::from("food")));

    apply(&mut state, &registry, action(2, "food"));
    assert_eq!(state.focused_id, None);
    assert!(state.is_open(&"food".into()));

    apply(&mut state, &registry, action(0, "food"));
    assert_eq!(state.focused_id, Some(WindowId::from("food")));
    assert!(state.minimized_ids.is_empty());
    // Restoring keeps the open slot, so the cascade origin a remount would use is unchanged.
    // The mounted frame is only hidden by minimize and keeps its own position.
    assert_eq!(
        state.initial_position(&"food".into(), &metrics),
        Some(Position::new(50, 50))
    );

    apply(&mut state, &registry, action(1, "packing"));
    apply(&mut state, &registry, action(1, "food"));
    assert!(state.open_ids.is_empty());
    assert_eq!(state.focused_id, None);
}
