//! Core state types for the circular-motion simulation.
//!
//! Defines the snapshot values handed from the simulation to a renderer:
//! - `SimulationState` the object on its path at the current time
//! - `TrailFrame`      one faded past position of the object
//! - `BankedCornerState` the slider pair for the banked-corner scenario
//!
//! None of these are mutated in place by the engine; every update replaces
//! the whole value.

use nalgebra::Vector2;
use serde::Serialize;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationState {
    pub time: f64, // current time, within [time_min, time_max]
    pub position: NVec2, // point on the circular path
    pub velocity: NVec2, // tangential velocity at `position`
}

impl SimulationState {
    /// Canonical start: object at `(radius, 0)` moving straight up with speed `ω·r`
    pub fn start(time_min: f64, radius: f64, angular_velocity: f64) -> Self {
        Self {
            time: time_min,
            position: NVec2::new(radius, 0.0),
            velocity: NVec2::new(0.0, angular_velocity * radius),
        }
    }
}

/// A past position of the object, derived from the current time alone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailFrame {
    pub time: f64, // time this frame was sampled at
    pub position: NVec2,
    pub velocity: NVec2,
    pub rank: usize, // 0 = most recent frame
    pub age: f64, // distance back in time, (rank + 1) * time_step
    pub tint: [u8; 3], // rgb grey, lighter as rank grows
}

/// Inputs of the banked-corner scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BankedCornerState {
    pub angle_degrees: f64, // bank angle, [0, 60]
    pub friction_coefficient: f64, // mu, [0, 1]
}
