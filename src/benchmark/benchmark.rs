use std::time::Instant;

use tracing::info;

use crate::configuration::config::{ViewConfig, WrapPolicy};
use crate::error::Result;
use crate::simulation::controls::Slider;
use crate::simulation::params::SimulationParameters;
use crate::simulation::scenario::CircularSession;

/// Per-frame cost of the full recomputation chain for one trail depth
#[derive(Debug, Clone, Copy)]
pub struct TrailBench {
    pub depth: usize,
    pub frames: usize,
    pub us_per_frame: f64,
}

/// Time advance + trail + scene over a full slider sweep for each depth.
/// The trail is rebuilt from scratch every frame, so cost should grow
/// linearly with depth.
pub fn bench_trail(depths: &[usize]) -> Result<Vec<TrailBench>> {
    let mut results = Vec::with_capacity(depths.len());

    for &depth in depths {
        let params = SimulationParameters {
            time_max: 1000.0,
            time_step: 0.5,
            trail_depth: depth,
            ..SimulationParameters::default()
        };
        let mut session = CircularSession::new(params.clone(), WrapPolicy::SignCrossing, ViewConfig::default())?;
        let mut slider = Slider::new(params.time_min, params.time_max, params.time_step, params.time_min)?.animated();
        let frames = ((params.time_max - params.time_min) / params.time_step) as usize;

        // Warm up
        session.on_input(&mut slider)?;

        let t0 = Instant::now();
        for _ in 0..frames {
            slider.tick();
            session.on_input(&mut slider)?;
        }
        let us_per_frame = t0.elapsed().as_secs_f64() * 1e6 / frames as f64;

        info!(depth, frames, us_per_frame, "trail bench");
        results.push(TrailBench {
            depth,
            frames,
            us_per_frame,
        });
    }

    Ok(results)
}
