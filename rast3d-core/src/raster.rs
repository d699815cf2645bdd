//! Triangle scan conversion and line drawing.

use nalgebra::Vector2;

use crate::depth::DepthBuffer;
use crate::error::RenderError;
use crate::math::edge_function;
use crate::surface::{Color, Surface};
use crate::viewport::ScreenPoint;

/// Scan-convert one triangle into `surface`, resolving occlusion against
/// `depth`.
///
/// Vertices are pixel-space positions with the view-space depth attached.
/// The inside test at pixel centers is inclusive of edges, so a pixel that
/// sits exactly on an edge shared by two triangles may be drawn by both;
/// which color survives there is decided by the depth test alone.
pub fn fill_triangle<S: Surface>(
    surface: &mut S,
    depth: &mut DepthBuffer,
    points: [ScreenPoint; 3],
    color: Color,
) -> Result<(), RenderError> {
    let v0 = points[0];
    // Normalize the winding to counter-clockwise under the Y-down screen
    // layout, so the signed area and all three edge weights of interior
    // pixels come out non-negative.
    let area = edge_function(points[0].xy(), points[1].xy(), points[2].xy());
    let (v1, v2) = if area > 0.0 {
        (points[1], points[2])
    } else if area < 0.0 {
        (points[2], points[1])
    } else {
        return Err(RenderError::DegenerateTriangle);
    };
    let area = area.abs();

    let left = (v0.x.min(v1.x).min(v2.x).floor() as i64).max(0);
    let right = (v0.x.max(v1.x).max(v2.x).floor() as i64).min(surface.width() as i64 - 1);
    let top = (v0.y.min(v1.y).min(v2.y).floor() as i64).max(0);
    let bottom = (v0.y.max(v1.y).max(v2.y).floor() as i64).min(surface.height() as i64 - 1);

    for y in top..=bottom {
        for x in left..=right {
            let p = Vector2::new(x as f32 + 0.5, y as f32 + 0.5);
            let w0 = edge_function(v1.xy(), v2.xy(), p) / area;
            let w1 = edge_function(v2.xy(), v0.xy(), p) / area;
            let w2 = edge_function(v0.xy(), v1.xy(), p) / area;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }

            // Perspective-correct depth: interpolate the per-vertex
            // reciprocals -1/z, not the depths themselves. Nearer surfaces
            // come out numerically smaller.
            let z = -(w0 / v0.depth + w1 / v1.depth + w2 / v2.depth);
            if !z.is_finite() {
                continue;
            }

            let (px, py) = (x as u32, y as u32);
            if depth.test(px, py, z) {
                depth.commit(px, py, z);
                surface.set_pixel(px, py, color);
            }
        }
    }

    Ok(())
}

/// Bresenham line from `a` to `b`, stroked as a gradient between the two
/// endpoint colors.
///
/// Lines ignore the depth buffer: the wireframe path resolves overlap by
/// submission order, painter style.
pub fn draw_line<S: Surface>(surface: &mut S, a: ScreenPoint, b: ScreenPoint, colors: [Color; 2]) {
    let (mut x, mut y) = (a.x.round() as i64, a.y.round() as i64);
    let (x1, y1) = (b.x.round() as i64, b.y.round() as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut error = dx + dy;

    let steps = dx.max(-dy) as f32;
    let mut step = 0.0;

    loop {
        let t = if steps == 0.0 { 0.0 } else { step / steps };
        if x >= 0 && y >= 0 && x < surface.width() as i64 && y < surface.height() as i64 {
            surface.set_pixel(x as u32, y as u32, Color::blend(colors[1], colors[0], t));
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * error;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            error += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            error += dx;
            y += sy;
        }
        step += 1.0;
    }
}
