//! Build fully-initialized scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime [`Scenario`]:
//! - `Circular`: a [`StateTracker`] driven by a time slider, producing a trail
//!   and a scene on every input
//! - `Banked`: an angle and a friction slider, producing a force
//!   decomposition and a scene on every input
//!
//! Each input event runs the whole chain (tracker, trail, scene) to
//! completion and returns the frame; nothing is recomputed lazily.

use serde::Serialize;
use tracing::{debug, warn};

use crate::configuration::config::{ScenarioConfig, ScenarioKind, ViewConfig, WrapPolicy};
use crate::error::Result;
use crate::visualization::render::Renderer;
use crate::visualization::scene::{banked_scene, circular_scene, Scene};

use super::banked::{banked_forces, ForceDecomposition};
use super::controls::{Slider, TimeControl};
use super::params::{validate_banked_inputs, BankedParameters, SimulationParameters, MAX_BANK_ANGLE};
use super::states::{BankedCornerState, TrailFrame};
use super::tracker::{StateTracker, Update};
use super::trail::trail_frames;

/// Everything produced by one circular-motion input event
#[derive(Debug, Clone, Serialize)]
pub struct CircularFrame {
    pub update: Update,
    pub trail: Vec<TrailFrame>,
    pub scene: Scene,
}

/// Everything produced by one banked-corner input event
#[derive(Debug, Clone, Serialize)]
pub struct BankedFrame {
    pub inputs: BankedCornerState,
    pub forces: ForceDecomposition,
    pub scene: Scene,
}

#[derive(Debug, Clone)]
pub struct CircularSession {
    tracker: StateTracker,
    view: ViewConfig,
    slider: Slider,
}

/// Read `control`, advance the tracker and rebuild trail and scene.
/// On a wrap the control is pushed back to `time_min`.
fn drive_circular<C: TimeControl>(tracker: &mut StateTracker, view: &ViewConfig, control: &mut C) -> Result<CircularFrame> {
    let t = control.get_current_value();
    let update = tracker.advance(t)?;
    if update.is_reset() {
        control.set_value(tracker.params().time_min);
    }

    let trail = trail_frames(tracker.params(), update.state.time);
    let scene = circular_scene(tracker.params(), view, &update.state, &trail);
    debug!(time = update.state.time, trail = trail.len(), "circular frame");

    Ok(CircularFrame { update, trail, scene })
}

impl CircularSession {
    pub fn new(params: SimulationParameters, policy: WrapPolicy, view: ViewConfig) -> Result<Self> {
        let slider = Slider::new(params.time_min, params.time_max, params.time_step, params.time_min)?.animated();
        let tracker = StateTracker::new(params, policy)?;
        Ok(Self { tracker, view, slider })
    }

    /// Handle a value change on an external time control
    pub fn on_input<C: TimeControl>(&mut self, control: &mut C) -> Result<CircularFrame> {
        drive_circular(&mut self.tracker, &self.view, control)
    }

    /// Auto-advance the session's own slider by one step and handle it
    pub fn tick(&mut self) -> Result<CircularFrame> {
        self.slider.tick();
        drive_circular(&mut self.tracker, &self.view, &mut self.slider)
    }

    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }
}

#[derive(Debug, Clone)]
pub struct BankedSession {
    params: BankedParameters,
    angle: Slider,
    friction: Slider,
}

impl BankedSession {
    pub fn new(params: BankedParameters, angle_degrees: f64, mu: f64, angle_step: f64, friction_step: f64) -> Result<Self> {
        params.validate()?;
        validate_banked_inputs(angle_degrees, mu)?;
        let angle = Slider::new(0.0, MAX_BANK_ANGLE, angle_step, angle_degrees)?.animated();
        let friction = Slider::new(0.0, 1.0, friction_step, mu)?;

        if angle.get_current_value() != angle_degrees {
            warn!(requested = angle_degrees, snapped = angle.get_current_value(), step = angle.step(), "bank angle off slider grid, snapping");
        }
        if friction.get_current_value() != mu {
            warn!(requested = mu, snapped = friction.get_current_value(), step = friction.step(), "friction coefficient off slider grid, snapping");
        }

        Ok(Self { params, angle, friction })
    }

    /// Decompose the forces for an explicit slider pair
    pub fn on_input(&mut self, angle_degrees: f64, mu: f64) -> Result<BankedFrame> {
        let forces = banked_forces(&self.params, angle_degrees, mu)?;
        self.angle.set_value(angle_degrees);
        self.friction.set_value(mu);

        let inputs = BankedCornerState {
            angle_degrees,
            friction_coefficient: mu,
        };
        let scene = banked_scene(&self.params, &inputs, &forces);
        debug!(angle_degrees, mu, net = forces.net_horizontal.x, "banked frame");

        Ok(BankedFrame { inputs, forces, scene })
    }

    /// Recompute for the current slider values
    pub fn current(&mut self) -> Result<BankedFrame> {
        let (angle, mu) = (self.angle.get_current_value(), self.friction.get_current_value());
        self.on_input(angle, mu)
    }

    pub fn angle(&self) -> &Slider {
        &self.angle
    }

    pub fn friction(&self) -> &Slider {
        &self.friction
    }

    /// Sweep the angle slider one step and recompute
    pub fn tick(&mut self) -> Result<BankedFrame> {
        self.angle.tick();
        self.current()
    }
}

/// A fully-initialized runtime scenario
#[derive(Debug, Clone)]
pub enum Scenario {
    Circular(CircularSession),
    Banked(BankedSession),
}

impl Scenario {
    /// Validate the configuration and build the session; bad parameters fail here
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        match cfg.engine.scenario {
            ScenarioKind::Circular => {
                let params = SimulationParameters::from(&cfg.parameters);
                Ok(Self::Circular(CircularSession::new(params, cfg.engine.wrap, cfg.view)?))
            }
            ScenarioKind::BankedCorner => {
                let b = cfg.banked;
                let params = BankedParameters { dy_std: b.dy_std };
                Ok(Self::Banked(BankedSession::new(
                    params,
                    b.angle_degrees,
                    b.friction_coefficient,
                    b.angle_step,
                    b.friction_step,
                )?))
            }
        }
    }

    /// Scene for the current inputs, without advancing
    pub fn initial_scene(&mut self) -> Result<Scene> {
        match self {
            Self::Circular(session) => {
                let mut slider = session.slider.clone();
                Ok(session.on_input(&mut slider)?.scene)
            }
            Self::Banked(session) => Ok(session.current()?.scene),
        }
    }

    /// Advance one auto-animation step and render the result
    pub fn step<R: Renderer>(&mut self, renderer: &mut R) -> Result<Scene> {
        let scene = match self {
            Self::Circular(session) => session.tick()?.scene,
            Self::Banked(session) => session.tick()?.scene,
        };
        renderer.render(&scene)?;
        Ok(scene)
    }
}
