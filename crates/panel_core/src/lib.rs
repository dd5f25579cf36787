//! Interaction engine for the floating assistant panel.
//!
//! The panel lives in one of three modes: collapsed into a circular
//! launcher, open as a draggable/resizable chat window, or stretched to
//! fill the viewport. This crate owns the mode state machine, the drag
//! and resize arithmetic, and the click-versus-drag discrimination for
//! the launcher. It performs no I/O and knows nothing about any UI
//! toolkit; the host feeds it pointer samples and viewport dimensions
//! and reads back where to draw.
//!
//! Window-scoped pointer tracking is modeled by [`PointerCaptureRegistry`]:
//! the controller holds a capture guard exactly while a drag or resize is
//! active, and the guard's drop releases the registration on every exit
//! path, including cancellation and controller drop.

pub mod capture;
pub mod controller;
pub mod geometry;

pub use capture::{CaptureGuard, PointerCaptureRegistry};
pub use controller::{
    FloatingPanelController, GrabRegion, InteractionKind, PanelMode, DEFAULT_PANEL_SIZE,
    LAUNCHER_SIZE, MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH, VIEWPORT_MARGIN,
};
pub use geometry::{Point, Size, Viewport};
