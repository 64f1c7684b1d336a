//! Renderer-facing scene description
//!
//! A [`Scene`] is a flat list of primitives in plot coordinates. Building one
//! is pure; drawing it is the renderer's business.

use serde::Serialize;

use crate::configuration::config::ViewConfig;
use crate::simulation::banked::ForceDecomposition;
use crate::simulation::kinematics::centripetal_acceleration;
use crate::simulation::params::{BankedParameters, SimulationParameters};
use crate::simulation::states::{BankedCornerState, NVec2, SimulationState, TrailFrame};

const PATH_COLOR: &str = "#f0ff0f";
const PATH_WIDTH: f64 = 10.0;
const OBJECT_EDGE: &str = "#008000";
const OBJECT_FACE: &str = "#ffffff";
const OBJECT_LINE_WIDTH: f64 = 5.0;
const ARROW_COLOR: &str = "#000000";
const LABEL_SIZE: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Bounds {
    pub fn symmetric(half_width: f64, half_height: f64) -> Self {
        Self {
            x: [-half_width, half_width],
            y: [-half_height, half_height],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<NVec2>,
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub centre: NVec2,
    pub radius: f64,
    pub line_width: f64,
    pub face: String,
    pub edge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrow {
    pub origin: NVec2,
    pub delta: NVec2,
    pub width: f64,
    pub head_width: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub at: NVec2,
    pub text: String,
    pub size: f64,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub title: String,
    pub bounds: Bounds,
    pub polylines: Vec<Polyline>,
    pub markers: Vec<Marker>,
    pub arrows: Vec<Arrow>,
    pub labels: Vec<Label>,
}

impl Scene {
    fn new(title: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            title: title.into(),
            bounds,
            polylines: Vec::new(),
            markers: Vec::new(),
            arrows: Vec::new(),
            labels: Vec::new(),
        }
    }
}

pub fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Closed circle of radius `r`: upper arc left to right, then the lower arc
/// right to left, `2 * samples` points
pub fn path_polyline(r: f64, samples: usize) -> Vec<NVec2> {
    let xs: Vec<f64> = match samples {
        0 => Vec::new(),
        1 => vec![-r],
        n => (0..n).map(|i| -r + 2.0 * r * i as f64 / (n - 1) as f64).collect(),
    };
    let upper = xs.iter().map(|&x| NVec2::new(x, (r * r - x * x).max(0.0).sqrt()));
    let lower = xs.iter().rev().map(|&x| NVec2::new(x, -(r * r - x * x).max(0.0).sqrt()));
    upper.chain(lower).collect()
}

fn label(at: NVec2, text: impl Into<String>) -> Label {
    Label {
        at,
        text: text.into(),
        size: LABEL_SIZE,
        bold: true,
    }
}

/// Scene for one circular-motion frame: path, fading trail, object, and the
/// velocity and acceleration arrows
pub fn circular_scene(
    params: &SimulationParameters,
    view: &ViewConfig,
    state: &SimulationState,
    trail: &[TrailFrame],
) -> Scene {
    let mut scene = Scene::new("Centripetal force", Bounds::symmetric(view.half_width, view.half_height));
    let thin_head = view.half_width / 50.0;
    let wide_head = view.half_width / 30.0;

    scene.polylines.push(Polyline {
        points: path_polyline(params.radius, view.path_samples),
        width: PATH_WIDTH,
        color: PATH_COLOR.to_string(),
    });

    for frame in trail {
        let tint = hex(frame.tint);
        scene.markers.push(Marker {
            centre: frame.position,
            radius: view.object_radius,
            line_width: OBJECT_LINE_WIDTH,
            face: OBJECT_FACE.to_string(),
            edge: tint.clone(),
        });
        scene.arrows.push(Arrow {
            origin: frame.position,
            delta: frame.velocity,
            width: 2.0,
            head_width: thin_head,
            color: tint,
        });
    }

    let p = state.position;
    let v = state.velocity;

    scene.markers.push(Marker {
        centre: p,
        radius: view.object_radius,
        line_width: OBJECT_LINE_WIDTH,
        face: OBJECT_FACE.to_string(),
        edge: OBJECT_EDGE.to_string(),
    });

    scene.arrows.push(Arrow {
        origin: p,
        delta: v,
        width: 2.0,
        head_width: thin_head,
        color: ARROW_COLOR.to_string(),
    });
    scene.labels.push(label((p + v) / 0.9, "v"));

    // drawn to the centre, not to scale with the true acceleration
    scene.arrows.push(Arrow {
        origin: p,
        delta: -p,
        width: 3.0,
        head_width: wide_head,
        color: ARROW_COLOR.to_string(),
    });
    scene.labels.push(label((p + v / 2.0) * 0.5, "a"));

    let a = centripetal_acceleration(params.radius, params.angular_velocity, state.time);
    scene.labels.push(Label {
        at: NVec2::new(-view.half_width * 0.95, view.half_height * 0.9),
        text: format!("t = {:.1}  |v| = {:.1}  |a| = {:.1}", state.time, v.norm(), a.norm()),
        size: LABEL_SIZE,
        bold: false,
    });

    scene
}

/// Scene for the banked corner: incline through the anchor at the origin and
/// one labelled arrow per force
pub fn banked_scene(params: &BankedParameters, inputs: &BankedCornerState, forces: &ForceDecomposition) -> Scene {
    let extent = 1.5 * params.dy_std;
    let mut scene = Scene::new("Banked corner", Bounds::symmetric(extent, extent));
    let head = extent / 30.0;

    let (sin, cos) = inputs.angle_degrees.to_radians().sin_cos();
    let along = NVec2::new(cos, sin) * extent;
    scene.polylines.push(Polyline {
        points: vec![-along, along],
        width: 3.0,
        color: "#808080".to_string(),
    });

    let mut push = |delta: NVec2, color: &str, name: &str| {
        scene.arrows.push(Arrow {
            origin: NVec2::zeros(),
            delta,
            width: 2.0,
            head_width: head,
            color: color.to_string(),
        });
        scene.labels.push(label(delta * 1.1, format!("{name} {:.1} N", delta.norm())));
    };

    push(forces.weight, "#000000", "W");
    push(forces.normal, "#0000ff", "N");
    push(forces.friction, "#ff0000", "F");
    if inputs.angle_degrees > 0.0 {
        push(forces.normal_horizontal, "#8080ff", "Nx");
        push(forces.friction_horizontal, "#ff8080", "Fx");
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_closed_loop_on_circle() {
        let pts = path_polyline(80.0, 100);
        assert_eq!(pts.len(), 200);
        assert!(pts.iter().all(|p| (p.norm() - 80.0).abs() < 1e-9));
        assert_eq!(pts[0], NVec2::new(-80.0, 0.0));
        assert_eq!(pts[199].x, -80.0);
    }

    #[test]
    fn hex_formats_lowercase() {
        assert_eq!(hex([0x88, 0x99, 0xff]), "#8899ff");
    }
}
