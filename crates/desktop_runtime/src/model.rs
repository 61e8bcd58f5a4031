//! Authoritative window-manager state and the small geometry types shared with window frames.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::WindowMetrics;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable identifier of a registered content window (`"packing"`, `"food"`, ...).
pub struct WindowId(pub String);

impl WindowId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrowed string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Top-left corner of a window in pixels, relative to the desktop surface.
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Width and height in pixels.
pub struct SurfaceSize {
    pub width: i32,
    pub height: i32,
}

impl SurfaceSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Per-axis minimum of two sizes.
    pub fn min(self, other: Self) -> Self {
        Self {
            width: self.width.min(other.width),
            height: self.height.min(other.height),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Which windows are open, which one has focus, and which are minimized.
///
/// `open_ids` keeps insertion order, which doubles as the cascade index for new windows.
/// Mutation goes through [`crate::window_manager`] so the invariants checked by
/// [`DesktopState::check_invariants`] hold after every transition.
pub struct DesktopState {
    pub open_ids: Vec<WindowId>,
    pub focused_id: Option<WindowId>,
    pub minimized_ids: HashSet<WindowId>,
}

impl DesktopState {
    pub fn is_open(&self, id: &WindowId) -> bool {
        self.open_ids.contains(id)
    }

    pub fn is_minimized(&self, id: &WindowId) -> bool {
        self.minimized_ids.contains(id)
    }

    pub fn is_focused(&self, id: &WindowId) -> bool {
        self.focused_id.as_ref() == Some(id)
    }

    /// Position of `id` in open order.
    pub fn open_index(&self, id: &WindowId) -> Option<usize> {
        self.open_ids.iter().position(|open| open == id)
    }

    /// Cascade position assigned to `id` from its open index.
    ///
    /// A window opened while `n` others were open sits at `base + step * n` on both axes.
    pub fn initial_position(&self, id: &WindowId, metrics: &WindowMetrics) -> Option<Position> {
        self.open_index(id)
            .map(|index| metrics.cascade_position(index))
    }

    /// Open windows that are currently drawn (not minimized), in open order.
    pub fn visible_ids(&self) -> impl Iterator<Item = &WindowId> {
        self.open_ids
            .iter()
            .filter(|id| !self.minimized_ids.contains(*id))
    }

    /// Paint order of `id`: open order, with the focused window above all others.
    pub fn stack_order(&self, id: &WindowId) -> usize {
        if self.is_focused(id) {
            return self.open_ids.len() + 1;
        }
        self.open_index(id).map_or(0, |index| index + 1)
    }

    /// Returns a description of the first broken invariant, if any.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for id in &self.open_ids {
            if !seen.insert(id) {
                return Err(format!("window `{id}` is open more than once"));
            }
        }
        if let Some(stray) = self.minimized_ids.iter().find(|id| !seen.contains(id)) {
            return Err(format!("minimized window `{stray}` is not open"));
        }
        if let Some(focused) = &self.focused_id {
            if !seen.contains(focused) {
                return Err(format!("focused window `{focused}` is not open"));
            }
            if self.minimized_ids.contains(focused) {
                return Err(format!("focused window `{focused}` is minimized"));
            }
        }
        Ok(())
    }
}
