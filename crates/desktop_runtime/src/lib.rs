//! Windowing core of the group planner's retro desktop.
//!
//! [`reduce_desktop`] owns which windows are open, focused, and minimized. Each mounted window
//! keeps its own [`window_frame::WindowFrame`] for position and maximize state. The Leptos
//! components in [`components`] wire both to the DOM through [`DesktopProvider`].

pub mod apps;
pub mod components;
pub mod config;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod taskbar;
pub mod window_frame;
mod window_manager;

pub use apps::{RegistryError, WindowDescriptor, WindowRegistry};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{load_shell_config, ConfigError, ShellConfig, WindowMetrics, SHELL_CONFIG_PREF_KEY};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use taskbar::{format_clock_time, ClockSnapshot, TaskbarEntry};
