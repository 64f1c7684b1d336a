//! Force decomposition for an object on a banked corner
//!
//! The incline rises away from the centre of the turn, which lies in the -x
//! direction. Vectors are relative to the object's anchor point and scaled so
//! the weight arrow has length `dy_std`.

use serde::Serialize;

use crate::error::Result;

use super::params::{validate_banked_inputs, BankedParameters};
use super::states::{BankedCornerState, NVec2};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForceDecomposition {
    pub weight: NVec2, // straight down, |w| = dy_std
    pub normal: NVec2, // perpendicular to the incline
    pub friction: NVec2, // along the incline, down-slope
    pub normal_horizontal: NVec2, // zero when the road is flat
    pub friction_horizontal: NVec2, // zero when the road is flat
    pub net_horizontal: NVec2, // centripetal contribution
}

/// Decompose the forces for a bank angle in degrees and a friction coefficient
///
/// Angles outside `[0, 60]` and coefficients outside `[0, 1]` are rejected.
pub fn banked_forces(params: &BankedParameters, angle_degrees: f64, mu: f64) -> Result<ForceDecomposition> {
    validate_banked_inputs(angle_degrees, mu)?;

    let theta = angle_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    let scale = params.dy_std * cos * cos;

    let weight = NVec2::new(0.0, -params.dy_std);
    let normal = scale * NVec2::new(-sin, cos);
    let friction = mu * scale * NVec2::new(-cos, -sin);

    let (normal_horizontal, friction_horizontal) = if angle_degrees > 0.0 {
        (NVec2::new(normal.x, 0.0), NVec2::new(friction.x, 0.0))
    } else {
        (NVec2::zeros(), NVec2::zeros())
    };

    Ok(ForceDecomposition {
        weight,
        normal,
        friction,
        normal_horizontal,
        friction_horizontal,
        net_horizontal: normal_horizontal + friction_horizontal,
    })
}

impl BankedCornerState {
    pub fn forces(&self, params: &BankedParameters) -> Result<ForceDecomposition> {
        banked_forces(params, self.angle_degrees, self.friction_coefficient)
    }
}
