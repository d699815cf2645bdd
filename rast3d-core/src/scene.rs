//! Triangle and edge scene data, plus the demo polyhedra.

use nalgebra::{Point3, Vector3};

use crate::surface::Color;

const RED: Color = Color::new(255, 0, 0);
const GREEN: Color = Color::new(0, 255, 0);
const BLUE: Color = Color::new(0, 0, 255);
const YELLOW: Color = Color::new(255, 255, 0);
const CYAN: Color = Color::new(0, 255, 255);
const MAGENTA: Color = Color::new(255, 0, 255);

/// A filled triangle: three object-space vertices and one flat color.
///
/// Vertex order defines a winding but no consistency is assumed across a
/// mesh; the rasterizer normalizes it per triangle.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Point3<f32>; 3],
    pub color: Color,
}

impl Triangle {
    pub fn new(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>, color: Color) -> Self {
        Self {
            vertices: [a, b, c],
            color,
        }
    }

    /// Face normal via the cross product of two edges. Not normalized.
    pub fn normal(&self) -> Vector3<f32> {
        let [a, b, c] = self.vertices;
        (b - a).cross(&(c - a))
    }
}

/// A wireframe edge: two endpoints, each with its own color so a line can
/// be stroked as a gradient.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub endpoints: [Point3<f32>; 2],
    pub colors: [Color; 2],
}

impl Edge {
    pub fn new(a: Point3<f32>, b: Point3<f32>, color: Color) -> Self {
        Self {
            endpoints: [a, b],
            colors: [color, color],
        }
    }

    pub fn gradient(a: Point3<f32>, b: Point3<f32>, colors: [Color; 2]) -> Self {
        Self {
            endpoints: [a, b],
            colors,
        }
    }
}

/// A mesh of filled triangles.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

/// An edge list for the wireframe pipeline variant.
#[derive(Debug, Clone, Default)]
pub struct Wireframe {
    pub edges: Vec<Edge>,
}

// 12 triangles, 2 per face: top, bottom, front, back, left, right.
#[rustfmt::skip]
const CUBE_FACES: [[[f32; 3]; 3]; 12] = [
    [[-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0]],
    [[ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0]],
    [[-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0]],
    [[ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0]],
    [[-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0]],
    [[ 1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0]],
    [[-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0]],
    [[ 1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0]],
    [[-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [-1.0, -1.0,  1.0]],
    [[-1.0, -1.0,  1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0]],
    [[ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0]],
    [[ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0]],
];

const CUBE_COLORS: [Color; 12] = [
    RED, RED, GREEN, GREEN, BLUE, BLUE, YELLOW, YELLOW, CYAN, CYAN, MAGENTA, MAGENTA,
];

#[rustfmt::skip]
const TETRAHEDRON_FACES: [[[f32; 3]; 3]; 4] = [
    [[ 1.0,  0.0, -0.71], [-1.0,  0.0, -0.71], [ 0.0,  1.0,  0.71]],
    [[ 0.0,  1.0,  0.71], [ 0.0, -1.0,  0.71], [ 1.0,  0.0, -0.71]],
    [[ 0.0, -1.0,  0.71], [-1.0,  0.0, -0.71], [ 0.0,  1.0,  0.71]],
    [[ 0.0, -1.0,  0.71], [-1.0,  0.0, -0.71], [ 1.0,  0.0, -0.71]],
];

const TETRAHEDRON_COLORS: [Color; 4] = [YELLOW, RED, GREEN, BLUE];

// 4 edges around the top face, 4 around the bottom, 4 verticals.
#[rustfmt::skip]
const CUBE_EDGES: [[[f32; 3]; 2]; 12] = [
    [[-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0]],
    [[ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0]],
    [[ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0]],
    [[-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0]],
    [[-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0]],
    [[ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0]],
    [[ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0]],
    [[-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0]],
    [[-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0]],
    [[ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0]],
    [[ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0]],
    [[-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0]],
];

#[rustfmt::skip]
const TETRAHEDRON_EDGES: [[[f32; 3]; 2]; 6] = [
    [[ 0.0,  0.0,  1.0], [-1.0,  0.0, -1.0]],
    [[-1.0,  0.0, -1.0], [ 1.0,  0.0, -1.0]],
    [[ 1.0,  0.0, -1.0], [ 0.0,  0.0,  1.0]],
    [[ 0.0,  0.0,  1.0], [ 0.0,  1.0,  0.0]],
    [[-1.0,  0.0, -1.0], [ 0.0,  1.0,  0.0]],
    [[ 1.0,  0.0, -1.0], [ 0.0,  1.0,  0.0]],
];

fn scaled(p: [f32; 3], half: f32) -> Point3<f32> {
    Point3::new(p[0] * half, p[1] * half, p[2] * half)
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Axis-aligned cube of the given edge length, two triangles per face,
    /// one color per face.
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let triangles = CUBE_FACES
            .iter()
            .zip(CUBE_COLORS)
            .map(|(face, color)| {
                Triangle::new(
                    scaled(face[0], half),
                    scaled(face[1], half),
                    scaled(face[2], half),
                    color,
                )
            })
            .collect();
        Self { triangles }
    }

    /// Tetrahedron with unit-ish extents and one color per face.
    pub fn tetrahedron() -> Self {
        let triangles = TETRAHEDRON_FACES
            .iter()
            .zip(TETRAHEDRON_COLORS)
            .map(|(face, color)| {
                Triangle::new(
                    scaled(face[0], 1.0),
                    scaled(face[1], 1.0),
                    scaled(face[2], 1.0),
                    color,
                )
            })
            .collect();
        Self { triangles }
    }
}

impl Wireframe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// The 12 edges of an axis-aligned cube of the given edge length.
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let edges = CUBE_EDGES
            .iter()
            .map(|edge| Edge::new(scaled(edge[0], half), scaled(edge[1], half), Color::WHITE))
            .collect();
        Self { edges }
    }

    /// The 6 edges of a tetrahedron.
    pub fn tetrahedron() -> Self {
        let edges = TETRAHEDRON_EDGES
            .iter()
            .map(|edge| Edge::new(scaled(edge[0], 1.0), scaled(edge[1], 1.0), Color::WHITE))
            .collect();
        Self { edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_two_triangles_per_face() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.triangles.len(), 12);
        // edge length 2 means every coordinate is +-1
        for triangle in &cube.triangles {
            for vertex in &triangle.vertices {
                assert!(vertex.iter().all(|c| c.abs() == 1.0));
            }
        }
    }

    #[test]
    fn test_tetrahedron_face_count() {
        assert_eq!(Mesh::tetrahedron().triangles.len(), 4);
        assert_eq!(Wireframe::tetrahedron().edges.len(), 6);
    }

    #[test]
    fn test_cube_wireframe_edge_count() {
        assert_eq!(Wireframe::cube(1.0).edges.len(), 12);
    }

    #[test]
    fn test_face_normal_is_the_edge_cross_product() {
        let triangle = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Color::WHITE,
        );
        assert_eq!(triangle.normal(), Vector3::new(0.0, 0.0, 1.0));
    }
}
