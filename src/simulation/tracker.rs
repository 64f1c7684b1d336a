//! Time-driven state tracker
//!
//! Maps a new time value onto a fresh [`SimulationState`]. The transition is a
//! pure function ([`advance`]); [`StateTracker`] only owns the previous state
//! so that callers driving it from a slider don't have to thread it around.
//!
//! A wrap resets the object to its canonical start `(radius, 0)` at
//! `time_min`. The caller is told through [`Update::wrapped`] and is expected
//! to move its own time control back to `time_min`.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::configuration::config::WrapPolicy;
use crate::error::{Result, SimError};

use super::kinematics::{position, velocity};
use super::params::SimulationParameters;
use super::states::SimulationState;

/// Why a transition reset the state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WrapReason {
    /// `y` went from negative to positive, the object passed its start point
    SignCrossing,
    /// `t - time_step >= trail_depth`
    HistoryBound,
}

/// Result of one transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Update {
    pub state: SimulationState,
    pub wrapped: Option<WrapReason>,
}

impl Update {
    pub fn is_reset(&self) -> bool {
        self.wrapped.is_some()
    }
}

fn wrap_reason(
    params: &SimulationParameters,
    policy: WrapPolicy,
    prev: &SimulationState,
    t: f64,
    y_new: f64,
) -> Option<WrapReason> {
    let crossed = y_new > 0.0 && prev.position.y < 0.0;
    let past_history = t - params.time_step >= params.trail_depth as f64;

    match policy {
        WrapPolicy::Both if crossed => Some(WrapReason::SignCrossing),
        WrapPolicy::Both if past_history => Some(WrapReason::HistoryBound),
        WrapPolicy::SignCrossing if crossed => Some(WrapReason::SignCrossing),
        WrapPolicy::HistoryBound if past_history => Some(WrapReason::HistoryBound),
        _ => None,
    }
}

/// Compute the state that follows `prev` when the time input becomes `t`
///
/// `t` is clamped into `[time_min, time_max]`; a non-finite `t` is an error.
pub fn advance(
    params: &SimulationParameters,
    policy: WrapPolicy,
    prev: &SimulationState,
    t: f64,
) -> Result<Update> {
    if !t.is_finite() {
        return Err(SimError::OutOfRangeInput {
            name: "time",
            value: t,
            min: params.time_min,
            max: params.time_max,
        });
    }

    let clamped = params.clamp_time(t);
    if clamped != t {
        warn!(requested = t, clamped, "time input outside bounds, clamping");
    }
    let t = clamped;

    let p = position(params.radius, params.angular_velocity, t);

    if let Some(reason) = wrap_reason(params, policy, prev, t, p.y) {
        info!(time = t, ?reason, "wrapping to start");
        return Ok(Update {
            state: SimulationState::start(params.time_min, params.radius, params.angular_velocity),
            wrapped: Some(reason),
        });
    }

    let state = SimulationState {
        time: t,
        position: p,
        velocity: velocity(params.radius, params.angular_velocity, t),
    };
    debug!(time = t, x = p.x, y = p.y, "advanced");

    Ok(Update { state, wrapped: None })
}

/// Owns the current state of one circular-motion session
#[derive(Debug, Clone)]
pub struct StateTracker {
    params: SimulationParameters,
    policy: WrapPolicy,
    state: SimulationState,
}

impl StateTracker {
    pub fn new(params: SimulationParameters, policy: WrapPolicy) -> Result<Self> {
        params.validate()?;
        let state = SimulationState::start(params.time_min, params.radius, params.angular_velocity);
        Ok(Self { params, policy, state })
    }

    /// Replace the current state with the one for time `t`
    pub fn advance(&mut self, t: f64) -> Result<Update> {
        let update = advance(&self.params, self.policy, &self.state, t)?;
        self.state = update.state;
        Ok(update)
    }

    pub fn reset(&mut self) {
        self.state = SimulationState::start(
            self.params.time_min,
            self.params.radius,
            self.params.angular_velocity,
        );
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn policy(&self) -> WrapPolicy {
        self.policy
    }
}
