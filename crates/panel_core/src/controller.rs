//! Mode state machine and pointer interaction handling for the panel.

use std::rc::Rc;

use crate::capture::{CaptureGuard, PointerCaptureRegistry};
use crate::geometry::{Point, Size, Viewport};

/// Diameter of the collapsed circular launcher.
pub const LAUNCHER_SIZE: Size = Size::new(56.0, 56.0);
/// Inset from the viewport edges for the resting bottom-right anchors.
pub const VIEWPORT_MARGIN: f32 = 24.0;
pub const DEFAULT_PANEL_SIZE: Size = Size::new(384.0, 520.0);
pub const MIN_PANEL_WIDTH: f32 = 320.0;
pub const MIN_PANEL_HEIGHT: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    Collapsed,
    Open,
    Fullscreen,
}

/// Where a pointer-down landed. The host hit-tests its own rectangles
/// and reports the region; the resize handle must win over the header
/// when both could claim the same press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabRegion {
    Launcher,
    Header,
    ResizeHandle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Idle,
    Dragging,
    Resizing,
}

/// Active pointer interaction. The anchors and the capture guard live
/// inside the variants, so a drag and a resize can never be active at
/// the same time and ending an interaction always releases the capture.
#[derive(Debug)]
enum Interaction {
    Idle,
    Dragging {
        /// Pointer-to-panel offset captured at pointer-down.
        anchor: Point,
        last_pointer: Point,
        _capture: CaptureGuard,
    },
    Resizing {
        /// Pointer position at pointer-down.
        origin: Point,
        /// Panel size at pointer-down.
        start_size: Size,
        last_pointer: Point,
        _capture: CaptureGuard,
    },
}

enum PointerEffect {
    Drag { anchor: Point },
    Resize { origin: Point, start_size: Size },
}

/// State machine for the floating assistant panel.
///
/// Owns the panel's mode, position, and size for the lifetime of the
/// widget. `position` is live state while Collapsed (the launcher is
/// draggable) and Open; each mode transition recomputes it. Fullscreen
/// ignores it entirely. Nothing here is persisted.
///
/// The host forwards raw pointer samples; while an interaction is
/// active it must keep forwarding them from window-level input even
/// when the cursor leaves the panel's rectangle, and must report the
/// matching pointer-up exactly once.
#[derive(Debug)]
pub struct FloatingPanelController {
    mode: PanelMode,
    position: Point,
    size: Size,
    interaction: Interaction,
    moved_since_down: bool,
    registry: Rc<PointerCaptureRegistry>,
}

impl FloatingPanelController {
    pub fn new(registry: Rc<PointerCaptureRegistry>, viewport: Viewport) -> Self {
        Self {
            mode: PanelMode::Collapsed,
            position: viewport.bottom_right_anchor(LAUNCHER_SIZE, VIEWPORT_MARGIN),
            size: DEFAULT_PANEL_SIZE,
            interaction: Interaction::Idle,
            moved_since_down: false,
            registry,
        }
    }

    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    /// Top-left corner of the launcher (Collapsed) or panel (Open).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current Open-mode dimensions. Retained across Collapsed and
    /// Fullscreen excursions.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn interaction(&self) -> InteractionKind {
        match self.interaction {
            Interaction::Idle => InteractionKind::Idle,
            Interaction::Dragging { .. } => InteractionKind::Dragging,
            Interaction::Resizing { .. } => InteractionKind::Resizing,
        }
    }

    /// True once the pointer has actually moved since the last
    /// pointer-down. A pointer-up with this unset is a click.
    pub fn has_moved_since_down(&self) -> bool {
        self.moved_since_down
    }

    /// Rectangle the host should draw for the current mode.
    pub fn placement(&self, viewport: Viewport) -> (Point, Size) {
        match self.mode {
            PanelMode::Collapsed => (self.position, LAUNCHER_SIZE),
            PanelMode::Open => (self.position, self.size),
            PanelMode::Fullscreen => (
                Point::new(0.0, 0.0),
                Size::new(viewport.width, viewport.height),
            ),
        }
    }

    /// Starts a drag or resize. Ignored while another interaction is in
    /// flight, and ignored for regions that do not exist in the current
    /// mode (everything in Fullscreen, the header/handle while
    /// Collapsed, the launcher while Open).
    pub fn pointer_down(&mut self, region: GrabRegion, pointer: Point) {
        if !matches!(self.interaction, Interaction::Idle) {
            return;
        }
        let region_active = match region {
            GrabRegion::Launcher => self.mode == PanelMode::Collapsed,
            GrabRegion::Header | GrabRegion::ResizeHandle => self.mode == PanelMode::Open,
        };
        if !region_active {
            return;
        }

        self.moved_since_down = false;
        self.interaction = match region {
            GrabRegion::Launcher | GrabRegion::Header => Interaction::Dragging {
                anchor: pointer.offset_from(self.position),
                last_pointer: pointer,
                _capture: self.registry.acquire(),
            },
            GrabRegion::ResizeHandle => Interaction::Resizing {
                origin: pointer,
                start_size: self.size,
                last_pointer: pointer,
                _capture: self.registry.acquire(),
            },
        };
        tracing::debug!(?region, "pointer interaction started");
    }

    /// Feeds one pointer sample. Samples identical to the previous one
    /// are dropped so a frame-based host can call this every frame
    /// without turning a motionless press into a drag.
    ///
    /// Dragging clamps the panel fully inside the viewport; resizing
    /// floors at the minimum size but deliberately never clamps growth
    /// against the viewport edge.
    pub fn pointer_move(&mut self, pointer: Point, viewport: Viewport) {
        let effect = match &mut self.interaction {
            Interaction::Idle => return,
            Interaction::Dragging {
                anchor,
                last_pointer,
                ..
            } => {
                if pointer == *last_pointer {
                    return;
                }
                *last_pointer = pointer;
                PointerEffect::Drag { anchor: *anchor }
            }
            Interaction::Resizing {
                origin,
                start_size,
                last_pointer,
                ..
            } => {
                if pointer == *last_pointer {
                    return;
                }
                *last_pointer = pointer;
                PointerEffect::Resize {
                    origin: *origin,
                    start_size: *start_size,
                }
            }
        };

        self.moved_since_down = true;
        match effect {
            PointerEffect::Drag { anchor } => {
                let target = pointer.offset_from(anchor);
                self.position = viewport.clamp_top_left(target, self.drag_extent());
            }
            PointerEffect::Resize { origin, start_size } => {
                let delta = pointer.offset_from(origin);
                self.size = Size::new(
                    (start_size.width + delta.x).max(MIN_PANEL_WIDTH),
                    (start_size.height + delta.y).max(MIN_PANEL_HEIGHT),
                );
            }
        }
    }

    /// Ends the active interaction and releases the capture. Returns
    /// true when the gesture was a launcher click (pressed and released
    /// with no movement in between), in which case the panel has already
    /// transitioned to Open and the host should sync its chat store.
    /// Any movement suppresses the click.
    pub fn pointer_up(&mut self, viewport: Viewport) -> bool {
        let finished = std::mem::replace(&mut self.interaction, Interaction::Idle);
        let launcher_click = matches!(finished, Interaction::Dragging { .. })
            && self.mode == PanelMode::Collapsed
            && !self.moved_since_down;
        if launcher_click {
            self.open(viewport);
        }
        launcher_click
    }

    /// Collapsed -> Open. Keeps the last-known size and anchors the
    /// panel to the bottom-right corner. Ignored in other modes or
    /// while an interaction is in flight.
    pub fn open(&mut self, viewport: Viewport) {
        if self.mode != PanelMode::Collapsed || !matches!(self.interaction, Interaction::Idle) {
            return;
        }
        self.position = viewport.bottom_right_anchor(self.size, VIEWPORT_MARGIN);
        self.set_mode(PanelMode::Open);
    }

    /// Open/Fullscreen -> Collapsed. Resets the position to the
    /// launcher's bottom-right anchor. Ignored while an interaction is
    /// in flight.
    pub fn close(&mut self, viewport: Viewport) {
        if self.mode == PanelMode::Collapsed || !matches!(self.interaction, Interaction::Idle) {
            return;
        }
        self.position = viewport.bottom_right_anchor(LAUNCHER_SIZE, VIEWPORT_MARGIN);
        self.set_mode(PanelMode::Collapsed);
    }

    /// Open <-> Fullscreen. Position and size are untouched so leaving
    /// Fullscreen restores the previous frame. Entering Fullscreen is
    /// the one transition allowed mid-interaction: it cancels the drag
    /// or resize and releases the capture.
    pub fn toggle_fullscreen(&mut self) {
        match self.mode {
            PanelMode::Collapsed => {}
            PanelMode::Open => {
                if !matches!(self.interaction, Interaction::Idle) {
                    self.interaction = Interaction::Idle;
                    tracing::debug!("interaction cancelled by fullscreen entry");
                }
                self.set_mode(PanelMode::Fullscreen);
            }
            PanelMode::Fullscreen => self.set_mode(PanelMode::Open),
        }
    }

    fn set_mode(&mut self, next: PanelMode) {
        let prev = self.mode;
        self.mode = next;
        tracing::debug!(from = ?prev, to = ?next, "panel mode change");
    }

    fn drag_extent(&self) -> Size {
        match self.mode {
            PanelMode::Collapsed => LAUNCHER_SIZE,
            _ => self.size,
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
