//! Rotating wireframe solids with depth-cued edges.

use std::f64::consts::{PI, TAU};

use glam::{DMat3, DVec3};
use kurbo::{BezPath, Point};

use super::{PaintCx, Renderer};
use crate::foundation::core::Canvas;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::{WireShape, Wireframe3dParams};

/// Camera distance from the model origin, in model units.
const CAMERA_DISTANCE: f64 = 4.0;
const GLOW_RADIUS: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct WireframeState {
    /// Accumulated rotation angles about x, y and z, in radians.
    pub rotation: [f64; 3],
}

/// Unit-sized vertices plus index pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<DVec3>,
    pub edges: Vec<(usize, usize)>,
}

impl Mesh {
    pub fn for_shape(shape: WireShape) -> Self {
        match shape {
            WireShape::Cube => cube(),
            WireShape::Pyramid => pyramid(),
            WireShape::Torus => torus(12, 12),
            WireShape::Sphere => sphere(10, 12),
        }
    }
}

fn cube() -> Mesh {
    let vertices = [
        (-1.0, -1.0, -1.0),
        (1.0, -1.0, -1.0),
        (1.0, 1.0, -1.0),
        (-1.0, 1.0, -1.0),
        (-1.0, -1.0, 1.0),
        (1.0, -1.0, 1.0),
        (1.0, 1.0, 1.0),
        (-1.0, 1.0, 1.0),
    ]
    .map(|(x, y, z)| DVec3::new(x, y, z))
    .to_vec();
    let edges = vec![
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    Mesh { vertices, edges }
}

fn pyramid() -> Mesh {
    let vertices = [
        (0.0, -1.0, 0.0),
        (-1.0, 1.0, -1.0),
        (1.0, 1.0, -1.0),
        (1.0, 1.0, 1.0),
        (-1.0, 1.0, 1.0),
    ]
    .map(|(x, y, z)| DVec3::new(x, y, z))
    .to_vec();
    let edges = vec![
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 1),
    ];
    Mesh { vertices, edges }
}

fn torus(rings: usize, segments: usize) -> Mesh {
    const MAJOR: f64 = 1.0;
    const MINOR: f64 = 0.4;
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(rings * segments),
        edges: Vec::with_capacity(rings * segments * 2),
    };
    for i in 0..rings {
        let theta = i as f64 / rings as f64 * TAU;
        for j in 0..segments {
            let phi = j as f64 / segments as f64 * TAU;
            let r = MAJOR + MINOR * phi.cos();
            mesh.vertices
                .push(DVec3::new(r * theta.cos(), MINOR * phi.sin(), r * theta.sin()));
            let current = i * segments + j;
            mesh.edges.push((current, ((i + 1) % rings) * segments + j));
            mesh.edges.push((current, i * segments + (j + 1) % segments));
        }
    }
    mesh
}

fn sphere(rings: usize, segments: usize) -> Mesh {
    let mut mesh = Mesh {
        vertices: Vec::with_capacity((rings + 1) * segments),
        edges: Vec::new(),
    };
    for i in 0..=rings {
        let theta = i as f64 / rings as f64 * PI;
        for j in 0..segments {
            let phi = j as f64 / segments as f64 * TAU;
            mesh.vertices.push(DVec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            ));
            if i < rings {
                let current = i * segments + j;
                mesh.edges.push((current, (i + 1) * segments + j));
                // Poles collapse to a point; no latitude ring there.
                if i > 0 {
                    mesh.edges.push((current, i * segments + (j + 1) % segments));
                }
            }
        }
    }
    mesh
}

/// Rotation about x, then y, then z. The y turn runs clockwise seen from +y.
pub(crate) fn rotation(angles: [f64; 3]) -> DMat3 {
    DMat3::from_rotation_z(angles[2])
        * DMat3::from_rotation_y(-angles[1])
        * DMat3::from_rotation_x(angles[0])
}

/// Perspective projection onto the surface, centred.
pub(crate) fn project(p: DVec3, scale: f64, canvas: Canvas) -> Point {
    let s = scale / (p.z + CAMERA_DISTANCE);
    Point::new(canvas.w() / 2.0 + p.x * s, canvas.h() / 2.0 + p.y * s)
}

/// Maps model depth in `[-2, 2]` to `[0, 1]`.
fn depth_cue(z: f64) -> f64 {
    (z + 2.0) / 4.0
}

pub(crate) struct Wireframe;

impl Renderer for Wireframe {
    type Params = Wireframe3dParams;
    type State = WireframeState;

    fn reseed(_params: &Wireframe3dParams, _canvas: Canvas, _rng: &mut FrameRng) -> WireframeState {
        WireframeState {
            rotation: [0.0; 3],
        }
    }

    fn step(
        mut state: WireframeState,
        params: &Wireframe3dParams,
        _canvas: Canvas,
        dt: f64,
        _rng: &mut FrameRng,
    ) -> WireframeState {
        state.rotation[0] += params.rotation_speed_x * 0.02 * dt;
        state.rotation[1] += params.rotation_speed_y * 0.02 * dt;
        state.rotation[2] += params.rotation_speed_z * 0.02 * dt;
        state
    }

    fn paint(
        state: &mut WireframeState,
        params: &Wireframe3dParams,
        layer: &mut Layer<'_>,
        _cx: &mut PaintCx<'_>,
    ) {
        layer.clear();
        let canvas = layer.canvas();
        let mesh = Mesh::for_shape(params.shape);
        let m = rotation(state.rotation);
        let world: Vec<DVec3> = mesh.vertices.iter().map(|&v| m * v).collect();
        let screen: Vec<Point> = world.iter().map(|&v| project(v, params.scale, canvas)).collect();

        let mut outline = BezPath::new();
        for &(a, b) in &mesh.edges {
            outline.move_to(screen[a]);
            outline.line_to(screen[b]);
        }
        layer.glow_path(&outline, GLOW_RADIUS / 3.0 + params.line_width, params.color);

        for &(a, b) in &mesh.edges {
            let alpha = 0.3 + 0.7 * depth_cue((world[a].z + world[b].z) / 2.0);
            layer.stroke_line(
                screen[a],
                screen[b],
                params.line_width,
                params.color.fade(alpha.clamp(0.0, 1.0)),
            );
        }

        for (p, v) in screen.iter().zip(&world) {
            layer.fill_circle(*p, 2.0 + 2.0 * depth_cue(v.z), params.color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/wireframe.rs"]
mod tests;
