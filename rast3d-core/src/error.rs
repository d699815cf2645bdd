//! Pipeline error kinds.

use thiserror::Error;

/// Errors surfaced by the rendering pipeline.
///
/// `DimensionMismatch` indicates a caller bug and is returned eagerly. The
/// per-primitive kinds make one malformed primitive drop out of the frame
/// instead of pushing NaN or infinity into the depth buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Surface extents disagree with the render context's buffers.
    #[error("surface is {surface_width}x{surface_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        surface_width: u32,
        surface_height: u32,
        expected_width: u32,
        expected_height: u32,
    },
    /// Zero screen-space area; rasterizing would divide by zero.
    #[error("triangle is degenerate (zero signed area)")]
    DegenerateTriangle,
    /// Homogeneous `w` of zero after projection.
    #[error("projected point lies at infinity (w = 0)")]
    PointAtInfinity,
}
