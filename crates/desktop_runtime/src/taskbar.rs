//! Taskbar view model: one entry per open window, and the clock readout.

use platform_host::SessionUser;
use system_ui::IconName;

use crate::{
    apps::WindowRegistry,
    model::{DesktopState, WindowId},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A taskbar button.
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub icon: IconName,
    pub focused: bool,
    pub minimized: bool,
}

impl TaskbarEntry {
    /// `data-ui-state` token for the button.
    pub fn state_token(&self) -> &'static str {
        if self.focused {
            "focused"
        } else if self.minimized {
            "minimized"
        } else {
            "idle"
        }
    }
}

/// Taskbar entries for every open window, in open order.
///
/// Open ids missing from `registry` are skipped.
pub fn taskbar_entries(state: &DesktopState, registry: &WindowRegistry) -> Vec<TaskbarEntry> {
    state
        .open_ids
        .iter()
        .filter_map(|id| {
            let descriptor = registry.get(id)?;
            Some(TaskbarEntry {
                id: id.clone(),
                title: descriptor.title.clone(),
                icon: descriptor.icon,
                focused: state.is_focused(id),
                minimized: state.is_minimized(id),
            })
        })
        .collect()
}

impl DesktopState {
    /// See [`taskbar_entries`].
    pub fn taskbar_entries(&self, registry: &WindowRegistry) -> Vec<TaskbarEntry> {
        taskbar_entries(self, registry)
    }
}

/// Start-menu header text for the signed-in user.
pub fn start_menu_user_label(user: Option<&SessionUser>) -> String {
    user.map_or("User", SessionUser::label).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local wall-clock reading.
pub struct ClockSnapshot {
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }
}

/// Two-digit 12-hour time, e.g. `09:05 PM`.
pub fn format_clock_time(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{:02}:{:02} {}", hour, snapshot.minute, suffix)
}
