//! Input controls that drive a scenario
//!
//! The simulation only needs to read the current value of a control and, on a
//! wrap, to push a value back into it. [`Slider`] is the bounded, stepped
//! control used by the binary and the tests.

use crate::error::{Result, SimError};

pub trait TimeControl {
    fn get_current_value(&self) -> f64;
    fn set_value(&mut self, v: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    animate: bool, // auto-advance on tick
}

impl Slider {
    pub fn new(min: f64, max: f64, step: f64, value: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(SimError::invalid("slider", format!("bad bounds [{min}, {max}]")));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SimError::invalid("slider", format!("step must be > 0, got {step}")));
        }
        let mut slider = Self {
            min,
            max,
            step,
            value: min,
            animate: false,
        };
        slider.set_value(value);
        Ok(slider)
    }

    pub fn animated(mut self) -> Self {
        self.animate = true;
        self
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamp into bounds and round onto the step grid anchored at `min`
    fn snap(&self, v: f64) -> f64 {
        let v = v.clamp(self.min, self.max);
        let snapped = self.min + ((v - self.min) / self.step).round() * self.step;
        snapped.min(self.max)
    }

    /// Auto-advance by one step; past `max` the value wraps back to `min`
    pub fn tick(&mut self) -> f64 {
        if self.animate {
            let next = self.value + self.step;
            self.value = if next > self.max { self.min } else { self.snap(next) };
        }
        self.value
    }
}

impl TimeControl for Slider {
    fn get_current_value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, v: f64) {
        if v.is_finite() {
            self.value = self.snap(v);
        }
    }
}
