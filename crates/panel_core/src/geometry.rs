//! Pixel-space primitives for panel placement.

/// A point in viewport coordinates, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise offset of `self` from `origin`.
    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Window dimensions sampled by the host at each transition or pointer
/// move. Never cached by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamps a candidate top-left corner so a panel of `extent` stays
    /// fully visible. When the panel is larger than the viewport the
    /// valid range inverts; the axis then pins to the origin instead of
    /// panicking.
    pub fn clamp_top_left(&self, target: Point, extent: Size) -> Point {
        Point::new(
            clamp_axis(target.x, extent.width, self.width),
            clamp_axis(target.y, extent.height, self.height),
        )
    }

    /// Bottom-right resting position for a panel of `extent`, inset by
    /// `margin` on both axes.
    pub fn bottom_right_anchor(&self, extent: Size, margin: f32) -> Point {
        Point::new(
            self.width - extent.width - margin,
            self.height - extent.height - margin,
        )
    }
}

fn clamp_axis(value: f32, span: f32, limit: f32) -> f32 {
    value.clamp(0.0, (limit - span).max(0.0))
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
