//! Closed-form kinematics of uniform circular motion
//!
//! The object sits at angle `ω·t` on a circle of radius `r` centred on the
//! origin. All functions are pure.

use super::states::NVec2;

/// Position on the path: `(r cos ωt, r sin ωt)`
pub fn position(r: f64, omega: f64, t: f64) -> NVec2 {
    let phase = omega * t;
    NVec2::new(r * phase.cos(), r * phase.sin())
}

/// Time derivative of [`position`]: `(-ω r sin ωt, ω r cos ωt)`
pub fn velocity(r: f64, omega: f64, t: f64) -> NVec2 {
    let phase = omega * t;
    NVec2::new(-omega * r * phase.sin(), omega * r * phase.cos())
}

/// Second derivative, always pointing at the centre: `-ω² · position`
pub fn centripetal_acceleration(r: f64, omega: f64, t: f64) -> NVec2 {
    -(omega * omega) * position(r, omega, t)
}
