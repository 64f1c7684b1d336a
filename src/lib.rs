pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{SimulationState, TrailFrame, BankedCornerState, NVec2};
pub use simulation::params::{SimulationParameters, BankedParameters, MAX_BANK_ANGLE};
pub use simulation::kinematics::{position, velocity, centripetal_acceleration};
pub use simulation::tracker::{advance, StateTracker, Update, WrapReason};
pub use simulation::trail::{trail_frames, fade_tint};
pub use simulation::banked::{banked_forces, ForceDecomposition};
pub use simulation::controls::{Slider, TimeControl};
pub use simulation::scenario::{Scenario, CircularSession, BankedSession, CircularFrame, BankedFrame};

pub use configuration::config::{ScenarioConfig, EngineConfig, ParametersConfig, BankedConfig, ViewConfig, ScenarioKind, WrapPolicy};

pub use visualization::scene::{Scene, circular_scene, banked_scene};
pub use visualization::render::{Renderer, YamlRenderer, LogRenderer};

pub use benchmark::benchmark::{bench_trail, TrailBench};
