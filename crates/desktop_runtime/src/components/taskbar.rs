use std::time::Duration;

use leptos::{leptos_dom::helpers::IntervalHandle, *};
use system_ui::{IconName, Taskbar as TaskbarView, TaskbarButton, TaskbarClock, TaskbarSection};

use super::{a11y::focus_first_menu_item, start_menu::StartMenu, use_desktop_runtime};
use crate::{
    config::ShellConfig,
    model::WindowId,
    reducer::DesktopAction,
    taskbar::{format_clock_time, ClockSnapshot, TaskbarEntry},
};

pub(super) const START_MENU_ID: &str = "desktop-start-menu";

fn taskbar_height(config: RwSignal<ShellConfig>) -> Signal<u32> {
    Signal::derive(move || config.with(|config| config.metrics.taskbar_height_px()))
}

fn clock_tick(config: RwSignal<ShellConfig>) -> Memo<Duration> {
    create_memo(move |_| config.with(ShellConfig::clock_tick))
}

/// Live `data-ui-state` token and pressed flag for the button of `window_id`.
fn entry_flags(
    entries: Memo<Vec<TaskbarEntry>>,
    window_id: WindowId,
) -> (Signal<&'static str>, Signal<bool>) {
    let pressed_id = window_id.clone();
    let ui_state = Signal::derive(move || {
        entries.with(|entries| {
            entries
                .iter()
                .find(|entry| entry.id == window_id)
                .map_or("idle", TaskbarEntry::state_token)
        })
    });
    let pressed = Signal::derive(move || {
        entries.with(|entries| {
            entries
                .iter()
                .any(|entry| entry.id == pressed_id && entry.focused)
        })
    });
    (ui_state, pressed)
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let start_menu_open = create_rw_signal(false);
    let clock_now = create_rw_signal(ClockSnapshot::now());

    // The stored config override can land after mount.
    let tick = clock_tick(runtime.config);
    let interval = store_value(None::<IntervalHandle>);
    create_effect(move |_| {
        let period = tick.get();
        if let Some(previous) = interval.get_value() {
            previous.clear();
        }
        let next = set_interval_with_handle(
            move || {
                let now = ClockSnapshot::now();
                if clock_now.get_untracked() != now {
                    clock_now.set(now);
                }
            },
            period,
        );
        match next {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(err) => {
                interval.set_value(None);
                logging::warn!("taskbar clock could not start: {err:?}");
            }
        }
    });
    on_cleanup(move || {
        if let Some(handle) = interval.try_get_value().flatten() {
            handle.clear();
        }
    });

    let outside_pointer_listener = window_event_listener(ev::pointerdown, move |_| {
        if start_menu_open.get_untracked() {
            start_menu_open.set(false);
        }
    });
    on_cleanup(move || outside_pointer_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && start_menu_open.get_untracked() {
            ev.prevent_default();
            start_menu_open.set(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    create_effect(move |was_open: Option<bool>| {
        let is_open = start_menu_open.get();
        if is_open && was_open != Some(true) {
            let _ = focus_first_menu_item(START_MENU_ID);
        }
        is_open
    });

    let entries = create_memo(move |_| {
        state.with(|desktop| {
            runtime
                .registry
                .with_value(|registry| desktop.taskbar_entries(registry))
        })
    });

    view! {
        <TaskbarView aria_label="Desktop taskbar" height_px=taskbar_height(runtime.config)>
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    icon=IconName::Launcher
                    ui_slot="start-button"
                    ui_state=Signal::derive(move || if start_menu_open.get() { "open" } else { "idle" })
                    aria_label="Start"
                    aria_controls=START_MENU_ID
                    aria_haspopup="menu"
                    aria_expanded=Signal::derive(move || start_menu_open.get())
                    on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| ev.stop_propagation())
                    on_click=Callback::new(move |_| start_menu_open.update(|open| *open = !*open))
                >
                    <span>"Start"</span>
                </TaskbarButton>
                <Show when=move || start_menu_open.get() fallback=|| ()>
                    <StartMenu open=start_menu_open />
                </Show>
            </TaskbarSection>
            <TaskbarSection ui_slot="windows" aria_label="Open windows">
                // Keyed by id alone so a button keeps keyboard focus across state changes.
                <For each=move || entries.get() key=|entry| entry.id.clone() let:entry>
                    {{
                        let window_id = entry.id.clone();
                        let (ui_state, pressed) = entry_flags(entries, window_id.clone());
                        let title = entry.title.clone();
                        let label = title.clone();
                        let tooltip = title.clone();
                        view! {
                            <TaskbarButton
                                icon=entry.icon
                                ui_state=ui_state
                                aria_label=label
                                aria_pressed=pressed
                                title=tooltip
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::Activate {
                                        window_id: window_id.clone(),
                                    });
                                })
                            >
                                <span>{title}</span>
                            </TaskbarButton>
                        }
                    }}
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="tray">
                <TaskbarClock text=Signal::derive(move || format_clock_time(clock_now.get())) />
            </TaskbarSection>
        </TaskbarView>
    }
}
