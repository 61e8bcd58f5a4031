//! Shell configuration: window metrics, clock cadence, prompts, and the optional banner.
//!
//! Defaults reproduce the classic desktop exactly. A JSON override may be stored in the host
//! preference store under [`SHELL_CONFIG_PREF_KEY`]; partial documents are filled from defaults.

use std::time::Duration;

use leptos::logging;
use platform_host::{load_pref_with, PrefsStore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Position, SurfaceSize};

/// Preference key holding an optional [`ShellConfig`] override.
pub const SHELL_CONFIG_PREF_KEY: &str = "group_planner.shell_config";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Pixel metrics shared by the window manager and every window frame.
pub struct WindowMetrics {
    pub nominal_width: i32,
    pub nominal_height: i32,
    /// Reserved at the bottom of the desktop surface for the taskbar.
    pub taskbar_height: i32,
    pub title_bar_height: i32,
    /// Vertical padding inside the window body.
    pub content_padding: i32,
    pub cascade_base: i32,
    pub cascade_step: i32,
    /// Distance from a surface edge within which a released window snaps to it.
    pub snap_threshold: i32,
}

impl Default for WindowMetrics {
    fn default() -> Self {
        Self {
            nominal_width: 800,
            nominal_height: 600,
            taskbar_height: 48,
            title_bar_height: 32,
            content_padding: 16,
            cascade_base: 20,
            cascade_step: 30,
            snap_threshold: 20,
        }
    }
}

impl WindowMetrics {
    /// Height the taskbar is drawn at.
    pub fn taskbar_height_px(&self) -> u32 {
        u32::try_from(self.taskbar_height).unwrap_or_default()
    }

    pub fn nominal_size(&self) -> SurfaceSize {
        SurfaceSize::new(self.nominal_width, self.nominal_height)
    }

    /// Cascade offset for the `index`-th open window.
    pub fn cascade_position(&self, index: usize) -> Position {
        let index = i32::try_from(index).unwrap_or(i32::MAX);
        let offset = self
            .cascade_base
            .saturating_add(self.cascade_step.saturating_mul(index));
        Position::new(offset, offset)
    }

    /// Desktop surface size available to windows, given the containing element's client size.
    pub fn parent_size(&self, client_width: i32, client_height: i32) -> SurfaceSize {
        SurfaceSize::new(
            client_width.max(0),
            (client_height - self.taskbar_height).max(0),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Top-level shell configuration.
pub struct ShellConfig {
    pub metrics: WindowMetrics,
    /// Taskbar clock refresh period.
    pub clock_tick_ms: u64,
    /// Text of the sign-out confirmation prompt.
    pub sign_out_prompt: String,
    /// Notice drawn above the desktop icons. `None` hides the banner.
    pub banner: Option<String>,
    /// Snap released windows to nearby surface edges.
    pub snap_on_release: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            metrics: WindowMetrics::default(),
            clock_tick_ms: 1_000,
            sign_out_prompt: "Are you sure you want to sign out?".to_string(),
            banner: Some("NEXT GOCHUCON: JANUARY 17-19".to_string()),
            snap_on_release: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejected shell configuration values.
pub enum ConfigError {
    #[error("nominal window size must be positive, got {width}x{height}")]
    NonPositiveNominalSize { width: i32, height: i32 },
    #[error("`{field}` must not be negative, got {value}")]
    NegativeMetric { field: &'static str, value: i32 },
    #[error("clock tick must be at least 1ms")]
    ZeroClockTick,
}

impl ShellConfig {
    /// Taskbar clock refresh period.
    pub fn clock_tick(&self) -> Duration {
        Duration::from_millis(self.clock_tick_ms)
    }

    /// Checks metric ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let metrics = &self.metrics;
        if metrics.nominal_width <= 0 || metrics.nominal_height <= 0 {
            return Err(ConfigError::NonPositiveNominalSize {
                width: metrics.nominal_width,
                height: metrics.nominal_height,
            });
        }
        for (field, value) in [
            ("taskbar_height", metrics.taskbar_height),
            ("title_bar_height", metrics.title_bar_height),
            ("content_padding", metrics.content_padding),
            ("cascade_base", metrics.cascade_base),
            ("cascade_step", metrics.cascade_step),
            ("snap_threshold", metrics.snap_threshold),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeMetric { field, value });
            }
        }
        if self.clock_tick_ms == 0 {
            return Err(ConfigError::ZeroClockTick);
        }
        Ok(())
    }
}

/// Loads the shell configuration override from `prefs`, falling back to defaults.
///
/// Store failures, malformed JSON, and invalid values are logged and ignored.
pub async fn load_shell_config<S: PrefsStore + ?Sized>(prefs: &S) -> ShellConfig {
    match load_pref_with::<_, ShellConfig>(prefs, SHELL_CONFIG_PREF_KEY).await {
        Ok(Some(config)) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                logging::warn!("ignoring shell config override: {err}");
                ShellConfig::default()
            }
        },
        Ok(None) => ShellConfig::default(),
        Err(err) => {
            logging::warn!("shell config load failed: {err}");
            ShellConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_the_classic_desktop() {
        let config = ShellConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.metrics.nominal_size(), SurfaceSize::new(800, 600));
        assert_eq!(config.clock_tick_ms, 1_000);
        assert!(!config.snap_on_release);
    }

    #[test]
    fn parent_size_reserves_the_taskbar() {
        let metrics = WindowMetrics::default();
        assert_eq!(metrics.parent_size(1280, 768), SurfaceSize::new(1280, 720));
        assert_eq!(metrics.parent_size(300, 20), SurfaceSize::new(300, 0));
    }

    #[test]
    fn validate_rejects_bad_metrics() {
        let mut config = ShellConfig::default();
        config.metrics.nominal_width = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveNominalSize {
                width: 0,
                height: 600
            })
        );

        let mut config = ShellConfig::default();
        config.metrics.cascade_step = -5;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeMetric {
                field: "cascade_step",
                value: -5
            })
        );

        let config = ShellConfig {
            clock_tick_ms: 0,
            ..ShellConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroClockTick));
    }

    #[test]
    fn partial_override_fills_from_defaults() {
        let prefs = MemoryPrefsStore::seeded(
            SHELL_CONFIG_PREF_KEY,
            r#"{"snap_on_release":true,"metrics":{"cascade_step":40},"banner":null}"#,
        );
        let config = block_on(load_shell_config(&prefs));
        assert!(config.snap_on_release);
        assert_eq!(config.banner, None);
        assert_eq!(config.metrics.cascade_step, 40);
        assert_eq!(config.metrics.nominal_width, 800);
    }

    #[test]
    fn taskbar_override_changes_height_and_tick() {
        let prefs = MemoryPrefsStore::seeded(
            SHELL_CONFIG_PREF_KEY,
            r#"{"metrics":{"taskbar_height":64},"clock_tick_ms":250}"#,
        );
        let config = block_on(load_shell_config(&prefs));
        assert_eq!(config.metrics.taskbar_height_px(), 64);
        assert_eq!(config.clock_tick(), Duration::from_millis(250));
        assert_eq!(
            config.metrics.parent_size(1280, 768),
            SurfaceSize::new(1280, 704)
        );
    }

    #[test]
    fn invalid_or_malformed_override_falls_back_to_defaults() {
        let prefs = MemoryPrefsStore::seeded(SHELL_CONFIG_PREF_KEY, r#"{"clock_tick_ms":0}"#);
        assert_eq!(block_on(load_shell_config(&prefs)), ShellConfig::default());

        let prefs = MemoryPrefsStore::seeded(SHELL_CONFIG_PREF_KEY, "not json");
        assert_eq!(block_on(load_shell_config(&prefs)), ShellConfig::default());
    }
}
