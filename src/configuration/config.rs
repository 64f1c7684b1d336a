//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – which scenario to run and how time wraps
//! - [`ParametersConfig`] – circular-motion parameters
//! - [`BankedConfig`]     – banked-corner slider values and force scale
//! - [`ViewConfig`]       – plot extents handed to the renderer
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every section except `engine` may be omitted and falls back to defaults:
//!
//! ```yaml
//! engine:
//!   scenario: "circular"    # or "banked_corner"
//!   wrap: "both"            # "sign_crossing", "history_bound"
//!
//! parameters:
//!   radius: 80.0
//!   angular_velocity: 0.5
//!   time_min: 0.0
//!   time_max: 100.0
//!   time_step: 2.0
//!   trail_depth: 8
//!
//! banked:
//!   angle_degrees: 30.0
//!   friction_coefficient: 0.5
//!   angle_step: 5.0
//!   friction_step: 0.1
//!   dy_std: 20.0
//!
//! view:
//!   half_width: 100.0
//!   half_height: 100.0
//!   object_radius: 10.0
//!   path_samples: 100
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::simulation::params::{BankedParameters, SimulationParameters};

/// Which scenario the engine drives
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioKind {
    #[serde(rename = "circular")] // object moving round a circle, driven by a time slider
    Circular,

    #[serde(rename = "banked_corner")] // static force decomposition, driven by angle and friction sliders
    BankedCorner,
}

/// When the time tracker resets to its start state
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapPolicy {
    #[default]
    #[serde(rename = "both")] // either condition below
    Both,

    #[serde(rename = "sign_crossing")] // y goes from negative to positive
    SignCrossing,

    #[serde(rename = "history_bound")] // t - time_step >= trail_depth
    HistoryBound,
}

#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub scenario: ScenarioKind,
    #[serde(default)]
    pub wrap: WrapPolicy,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub radius: f64,
    pub angular_velocity: f64,
    pub time_min: f64,
    pub time_max: f64,
    pub time_step: f64,
    pub trail_depth: usize,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = SimulationParameters::default();
        Self {
            radius: p.radius,
            angular_velocity: p.angular_velocity,
            time_min: p.time_min,
            time_max: p.time_max,
            time_step: p.time_step,
            trail_depth: p.trail_depth,
        }
    }
}

impl From<&ParametersConfig> for SimulationParameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Self {
            radius: cfg.radius,
            angular_velocity: cfg.angular_velocity,
            time_min: cfg.time_min,
            time_max: cfg.time_max,
            time_step: cfg.time_step,
            trail_depth: cfg.trail_depth,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BankedConfig {
    pub angle_degrees: f64, // initial angle slider value
    pub friction_coefficient: f64, // initial mu slider value
    pub angle_step: f64,
    pub friction_step: f64,
    pub dy_std: f64, // length of the weight arrow
}

impl Default for BankedConfig {
    fn default() -> Self {
        Self {
            angle_degrees: 0.0,
            friction_coefficient: 0.0,
            angle_step: 5.0,
            friction_step: 0.1,
            dy_std: BankedParameters::default().dy_std,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub half_width: f64, // x axis spans [-half_width, half_width]
    pub half_height: f64,
    pub object_radius: f64, // radius of the object marker
    pub path_samples: usize, // x samples per half of the path polyline
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            half_width: 100.0,
            half_height: 100.0,
            object_radius: 10.0,
            path_samples: 100,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub banked: BankedConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }
}
