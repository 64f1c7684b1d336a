//! Numerical and physical parameters for the simulation
//!
//! `SimulationParameters` holds the circular-motion settings:
//! - path radius and angular velocity,
//! - time bounds and slider step,
//! - trail depth (number of faded frames kept behind the object)
//!
//! `BankedParameters` holds the fixed force scale of the banked corner.
//!
//! Both are immutable once a scenario is built; `validate` is the only place
//! bad values are caught.

use serde::Serialize;

use crate::error::{Result, SimError};

/// Upper bound of the bank angle, in degrees
pub const MAX_BANK_ANGLE: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationParameters {
    pub radius: f64, // path radius
    pub angular_velocity: f64, // omega
    pub time_min: f64,
    pub time_max: f64,
    pub time_step: f64, // slider step, also the spacing of trail frames
    pub trail_depth: usize, // max trail frames
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            radius: 80.0,
            angular_velocity: 0.5,
            time_min: 0.0,
            time_max: 100.0,
            time_step: 2.0,
            trail_depth: 8,
        }
    }
}

impl SimulationParameters {
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SimError::invalid("radius", format!("must be finite and > 0, got {}", self.radius)));
        }
        if !self.angular_velocity.is_finite() || !(self.angular_velocity * self.radius).is_finite() {
            return Err(SimError::invalid(
                "angular_velocity",
                format!("omega = {} gives a non-finite speed", self.angular_velocity),
            ));
        }
        if !self.time_min.is_finite() || !self.time_max.is_finite() {
            return Err(SimError::invalid("time_min", "time bounds must be finite"));
        }
        if self.time_min > self.time_max {
            return Err(SimError::invalid(
                "time_max",
                format!("time_max {} is below time_min {}", self.time_max, self.time_min),
            ));
        }
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(SimError::invalid("time_step", format!("must be finite and > 0, got {}", self.time_step)));
        }
        Ok(())
    }

    /// Clamp `t` into the time bounds
    pub fn clamp_time(&self, t: f64) -> f64 {
        t.clamp(self.time_min, self.time_max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankedParameters {
    pub dy_std: f64, // length of the weight arrow; every other force is scaled from it
}

impl Default for BankedParameters {
    fn default() -> Self {
        Self { dy_std: 20.0 }
    }
}

impl BankedParameters {
    pub fn validate(&self) -> Result<()> {
        if !self.dy_std.is_finite() || self.dy_std <= 0.0 {
            return Err(SimError::invalid("dy_std", format!("must be finite and > 0, got {}", self.dy_std)));
        }
        Ok(())
    }
}

/// Reject bank angles and friction coefficients outside their slider ranges
pub fn validate_banked_inputs(angle_degrees: f64, mu: f64) -> Result<()> {
    if !(0.0..=MAX_BANK_ANGLE).contains(&angle_degrees) {
        return Err(SimError::OutOfRangeInput {
            name: "angle_degrees",
            value: angle_degrees,
            min: 0.0,
            max: MAX_BANK_ANGLE,
        });
    }
    if !(0.0..=1.0).contains(&mu) {
        return Err(SimError::OutOfRangeInput {
            name: "friction_coefficient",
            value: mu,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationParameters::default().validate().is_ok());
        assert!(BankedParameters::default().validate().is_ok());
    }

    #[test]
    fn nan_angle_is_rejected() {
        assert!(validate_banked_inputs(f64::NAN, 0.5).is_err());
        assert!(validate_banked_inputs(30.0, f64::NAN).is_err());
    }
}
