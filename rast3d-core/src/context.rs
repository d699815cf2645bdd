//! Frame-level pipeline state and the per-primitive draw path.

use nalgebra::Vector3;
use tracing::debug;

use crate::depth::DepthBuffer;
use crate::error::RenderError;
use crate::projection::{self, Camera};
use crate::raster;
use crate::scene::{Edge, Mesh, Triangle, Wireframe};
use crate::surface::{Color, Surface};
use crate::transform::Transform;
use crate::viewport::{self, ScreenPoint};

/// Distance-fog parameters for wireframe rendering: an endpoint's gray
/// channel is `255 * max(0, threshold + depth / scale)`.
#[derive(Debug, Clone, Copy)]
pub struct DepthFade {
    pub threshold: f32,
    pub scale: f32,
}

impl DepthFade {
    pub fn channel(&self, depth: f32) -> u8 {
        (255.0 * (self.threshold + depth / self.scale).max(0.0)) as u8
    }

    fn color(&self, depth: f32) -> Color {
        let v = self.channel(depth);
        Color::new(v, v, v)
    }
}

/// Owns the state that outlives a single primitive: the camera's constant
/// perspective matrix and the depth buffer's backing storage. The pixel
/// surface stays externally owned and is borrowed per draw call.
///
/// Lifecycle per frame: [`begin_frame`](Self::begin_frame), any number of
/// draw calls, then the caller presents its surface however it likes.
pub struct RenderContext {
    camera: Camera,
    depth: DepthBuffer,
    width: u32,
    height: u32,
}

impl RenderContext {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_camera(width, height, Camera::default())
    }

    pub fn with_camera(width: u32, height: u32, camera: Camera) -> Self {
        Self {
            camera,
            depth: DepthBuffer::new(width, height),
            width,
            height,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Start a frame: every depth cell goes back to the sentinel. Must run
    /// before the first draw call of each frame.
    pub fn begin_frame(&mut self) {
        self.depth.reset(self.width, self.height);
    }

    fn check_surface<S: Surface>(&self, surface: &S) -> Result<(), RenderError> {
        if surface.width() != self.width || surface.height() != self.height {
            return Err(RenderError::DimensionMismatch {
                surface_width: surface.width(),
                surface_height: surface.height(),
                expected_width: self.width,
                expected_height: self.height,
            });
        }
        Ok(())
    }

    /// Transform, project, and rasterize every triangle of `mesh`.
    ///
    /// Malformed triangles (degenerate, or with a vertex projecting to
    /// infinity) are dropped from the frame; only a surface whose extents
    /// disagree with the context aborts the whole call.
    pub fn draw_mesh<S: Surface>(
        &mut self,
        surface: &mut S,
        mesh: &Mesh,
        transform: &Transform,
    ) -> Result<(), RenderError> {
        self.check_surface(surface)?;
        for triangle in &mesh.triangles {
            if let Err(err) = self.draw_triangle(surface, triangle, transform) {
                debug!(%err, "dropping triangle");
            }
        }
        Ok(())
    }

    fn draw_triangle<S: Surface>(
        &mut self,
        surface: &mut S,
        triangle: &Triangle,
        transform: &Transform,
    ) -> Result<(), RenderError> {
        let mut ndc = [Vector3::zeros(); 3];
        let mut view_depth = [0.0f32; 3];
        for (i, vertex) in triangle.vertices.iter().enumerate() {
            let view = transform.apply(vertex);
            ndc[i] = self.camera.project(&view)?;
            view_depth[i] = view.z;
        }

        // Keep the triangle unless every vertex is off-screen; a partially
        // visible one is bounded by the rasterizer, not clipped here.
        if ndc.iter().all(|p| !projection::on_screen(p)) {
            return Ok(());
        }

        let mut points = [ScreenPoint::new(0.0, 0.0, 0.0); 3];
        for i in 0..3 {
            points[i] = viewport::to_screen(ndc[i].xy(), view_depth[i], self.width, self.height);
        }
        raster::fill_triangle(surface, &mut self.depth, points, triangle.color)
    }

    /// Project and stroke every edge of `wireframe` as a gradient line,
    /// optionally depth-faded.
    ///
    /// Edges are not depth-buffered; they land in submission order. Frames
    /// should use either this path or [`draw_mesh`](Self::draw_mesh), not
    /// both, since the two do not reconcile their occlusion.
    pub fn draw_wireframe<S: Surface>(
        &self,
        surface: &mut S,
        wireframe: &Wireframe,
        transform: &Transform,
        fade: Option<DepthFade>,
    ) -> Result<(), RenderError> {
        self.check_surface(surface)?;
        for edge in &wireframe.edges {
            if let Err(err) = self.draw_edge(surface, edge, transform, fade) {
                debug!(%err, "dropping edge");
            }
        }
        Ok(())
    }

    fn draw_edge<S: Surface>(
        &self,
        surface: &mut S,
        edge: &Edge,
        transform: &Transform,
        fade: Option<DepthFade>,
    ) -> Result<(), RenderError> {
        let mut ndc = [Vector3::zeros(); 2];
        let mut view_depth = [0.0f32; 2];
        for (i, endpoint) in edge.endpoints.iter().enumerate() {
            let view = transform.apply(endpoint);
            ndc[i] = self.camera.project(&view)?;
            view_depth[i] = view.z;
        }

        // An edge with one endpoint on screen can still cross it; cull only
        // when both ends are out.
        if !projection::on_screen(&ndc[0]) && !projection::on_screen(&ndc[1]) {
            return Ok(());
        }

        let a = viewport::to_screen(ndc[0].xy(), view_depth[0], self.width, self.height);
        let b = viewport::to_screen(ndc[1].xy(), view_depth[1], self.width, self.height);
        let colors = match fade {
            Some(fade) => [fade.color(view_depth[0]), fade.color(view_depth[1])],
            None => edge.colors,
        };
        raster::draw_line(surface, a, b, colors);
        Ok(())
    }
}
