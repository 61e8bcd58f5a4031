//! Per-window geometry: position, drag gesture, and maximize state.
//!
//! Each mounted window owns one [`WindowFrame`]. The window manager never reads it, and it is
//! dropped with the window when the window closes.

use crate::config::WindowMetrics;
use crate::model::{Position, SurfaceSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interaction mode of a window frame.
pub enum FrameMode {
    Floating,
    /// A titlebar drag is in progress. Offsets are measured from where it started.
    Dragging {
        pointer_origin: Position,
        position_origin: Position,
    },
    Maximized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Geometry state machine for one window.
pub struct WindowFrame {
    pub mode: FrameMode,
    pub position: Position,
    /// Desktop surface size the window is bounded by (taskbar already excluded).
    pub parent: SurfaceSize,
    pub metrics: WindowMetrics,
}

impl WindowFrame {
    /// Creates a floating frame at `initial_position`, clamped into `parent`.
    pub fn new(initial_position: Position, parent: SurfaceSize, metrics: WindowMetrics) -> Self {
        let mut frame = Self {
            mode: FrameMode::Floating,
            position: initial_position,
            parent,
            metrics,
        };
        frame.position = frame.clamp(initial_position);
        frame
    }

    pub fn is_maximized(&self) -> bool {
        matches!(self.mode, FrameMode::Maximized)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, FrameMode::Dragging { .. })
    }

    /// Rendered size: the whole surface when maximized, else the nominal size capped by it.
    pub fn visual_size(&self) -> SurfaceSize {
        if self.is_maximized() {
            self.parent
        } else {
            self.metrics.nominal_size().min(self.parent)
        }
    }

    /// Height left for content below the titlebar.
    pub fn body_height(&self) -> i32 {
        (self.visual_size().height - self.metrics.title_bar_height - self.metrics.content_padding)
            .max(0)
    }

    /// Starts a titlebar drag. Returns `false` (and does nothing) while maximized.
    pub fn begin_drag(&mut self, pointer: Position) -> bool {
        if self.is_maximized() {
            return false;
        }
        self.mode = FrameMode::Dragging {
            pointer_origin: pointer,
            position_origin: self.position,
        };
        true
    }

    /// Moves the window by the pointer's total travel since [`Self::begin_drag`].
    ///
    /// Returns whether the position changed.
    pub fn drag_to(&mut self, pointer: Position) -> bool {
        let FrameMode::Dragging {
            pointer_origin,
            position_origin,
        } = self.mode
        else {
            return false;
        };
        let next = self.clamp(Position::new(
            position_origin.x + (pointer.x - pointer_origin.x),
            position_origin.y + (pointer.y - pointer_origin.y),
        ));
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    /// Finishes a drag, optionally snapping to a nearby surface edge.
    pub fn end_drag(&mut self, snap_on_release: bool) {
        if !self.is_dragging() {
            return;
        }
        self.mode = FrameMode::Floating;
        if snap_on_release {
            self.position = self.clamp(snap_position(
                self.position,
                self.visual_size(),
                self.parent,
                self.metrics.snap_threshold,
            ));
        }
    }

    /// Flips between floating and maximized. Both directions leave the window at the origin.
    pub fn toggle_maximize(&mut self) {
        self.mode = if self.is_maximized() {
            FrameMode::Floating
        } else {
            FrameMode::Maximized
        };
        self.position = Position::ORIGIN;
    }

    /// Records a new surface size and pulls a floating window back inside it.
    pub fn set_parent_size(&mut self, parent: SurfaceSize) {
        self.parent = parent;
        if !self.is_maximized() {
            self.position = self.clamp(self.position);
        }
    }

    fn clamp(&self, position: Position) -> Position {
        let size = self.visual_size();
        let max_x = (self.parent.width - size.width).max(0);
        let max_y = (self.parent.height - size.height).max(0);
        Position::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y))
    }

    /// Inline CSS placing the frame on the desktop surface.
    pub fn style(&self) -> String {
        let size = self.visual_size();
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;",
            self.position.x, self.position.y, size.width, size.height
        )
    }
}

/// Edge snapping for a released window. Left wins over right, right over top.
pub fn snap_position(
    position: Position,
    size: SurfaceSize,
    parent: SurfaceSize,
    threshold: i32,
) -> Position {
    if position.x < threshold {
        Position::ORIGIN
    } else if position.x + size.width > parent.width - threshold {
        Position::new(parent.width - size.width, 0)
    } else if position.y < threshold {
        Position::new(position.x, 0)
    } else {
        position
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DESKTOP: SurfaceSize = SurfaceSize::new(1280, 720);

    fn frame_at(x: i32, y: i32) -> WindowFrame {
        WindowFrame::new(Position::new(x, y), DESKTOP, WindowMetrics::default())
    }

    #[test]
    fn drag_applies_total_pointer_travel() {
        let mut frame = frame_at(20, 20);
        assert!(frame.begin_drag(Position::new(100, 30)));
        frame.drag_to(Position::new(110, 35));
        frame.drag_to(Position::new(150, 60));
        assert_eq!(frame.position, Position::new(70, 50));
        frame.end_drag(false);
        assert_eq!(frame.mode, FrameMode::Floating);
        assert_eq!(frame.position, Position::new(70, 50));
    }

    #[test]
    fn drag_is_clamped_to_the_surface() {
        let mut frame = frame_at(20, 20);
        frame.begin_drag(Position::new(0, 0));
        frame.drag_to(Position::new(-500, -500));
        assert_eq!(frame.position, Position::ORIGIN);
        frame.drag_to(Position::new(5_000, 5_000));
        assert_eq!(frame.position, Position::new(1280 - 800, 720 - 600));
    }

    #[test]
    fn dragging_while_maximized_does_nothing() {
        let mut frame = frame_at(50, 50);
        frame.toggle_maximize();
        assert!(!frame.begin_drag(Position::new(10, 10)));
        assert!(!frame.drag_to(Position::new(200, 200)));
        assert_eq!(frame.position, Position::ORIGIN);
        assert!(frame.is_maximized());
    }

    #[test]
    fn maximize_twice_returns_to_nominal_size_at_origin() {
        let mut frame = frame_at(80, 80);
        frame.toggle_maximize();
        assert_eq!(frame.visual_size(), DESKTOP);
        assert_eq!(frame.position, Position::ORIGIN);

        frame.toggle_maximize();
        assert_eq!(frame.mode, FrameMode::Floating);
        assert_eq!(frame.visual_size(), SurfaceSize::new(800, 600));
        assert_eq!(frame.position, Position::ORIGIN);
    }

    #[test]
    fn small_surfaces_shrink_the_window_and_pin_it() {
        let mut frame = frame_at(80, 80);
        frame.set_parent_size(SurfaceSize::new(640, 400));
        assert_eq!(frame.visual_size(), SurfaceSize::new(640, 400));
        assert_eq!(frame.position, Position::ORIGIN);
        assert_eq!(frame.body_height(), 400 - 32 - 16);
    }

    #[test]
    fn resize_reclamps_floating_position() {
        let mut frame = frame_at(400, 100);
        frame.set_parent_size(SurfaceSize::new(1000, 720));
        assert_eq!(frame.position, Position::new(200, 100));
    }

    #[test]
    fn snap_prefers_left_then_right_then_top() {
        let size = SurfaceSize::new(800, 600);
        assert_eq!(
            snap_position(Position::new(10, 5), size, DESKTOP, 20),
            Position::ORIGIN
        );
        assert_eq!(
            snap_position(Position::new(470, 5), size, DESKTOP, 20),
            Position::new(480, 0)
        );
        assert_eq!(
            snap_position(Position::new(200, 10), size, DESKTOP, 20),
            Position::new(200, 0)
        );
        assert_eq!(
            snap_position(Position::new(200, 50), size, DESKTOP, 20),
            Position::new(200, 50)
        );
    }

    #[test]
    fn end_drag_snaps_only_when_enabled() {
        let mut frame = frame_at(100, 100);
        frame.begin_drag(Position::new(100, 100));
        frame.drag_to(Position::new(195, 15));
        frame.end_drag(false);
        assert_eq!(frame.position, Position::new(195, 15));

        frame.begin_drag(Position::new(0, 0));
        frame.end_drag(true);
        assert_eq!(frame.position, Position::new(195, 0));
    }

    #[test]
    fn style_reflects_geometry() {
        assert_eq!(
            frame_at(20, 50).style(),
            "left:20px;top:50px;width:800px;height:600px;"
        );
    }
}
