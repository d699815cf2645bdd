//! NDC to pixel-space mapping.

use nalgebra::Vector2;

/// A projected vertex in pixel space.
///
/// `depth` is the view-space depth carried through for the rasterizer's
/// occlusion test, not the post-projection z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32, depth: f32) -> Self {
        Self { x, y, depth }
    }

    #[inline]
    pub(crate) fn xy(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }
}

/// Map an NDC x/y pair onto a `width` x `height` pixel grid, flipping Y so
/// that +Y in NDC points up while pixel rows grow downward.
///
/// Only the upper bound is clamped; coordinates below -1 map to negative
/// pixel positions and are left for the rasterizer's bounding-box
/// intersection to cut off.
pub fn to_screen(ndc: Vector2<f32>, depth: f32, width: u32, height: u32) -> ScreenPoint {
    let x = ((ndc.x + 1.0) * 0.5 * width as f32).min((width - 1) as f32);
    let y = ((1.0 - (ndc.y + 1.0) * 0.5) * height as f32).min((height - 1) as f32);
    ScreenPoint::new(x, y, depth)
}
