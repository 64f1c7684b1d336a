//! Trail history
//!
//! The trail is re-derived from the current time on every call; nothing is
//! carried over between frames.

use super::kinematics::{position, velocity};
use super::params::SimulationParameters;
use super::states::TrailFrame;

/// Darkest grey of the fade, used for the most recent frame
pub const TINT_DARKEST: u8 = 0x88;
/// Lightest grey of the fade, used for the oldest frame
pub const TINT_LIGHTEST: u8 = 0xff;

/// Grey tint for a frame of the given rank in a trail of `depth` frames.
///
/// For a depth of 8 this is `#888888, #999999, .. #ffffff`.
pub fn fade_tint(rank: usize, depth: usize) -> [u8; 3] {
    let span = (TINT_LIGHTEST - TINT_DARKEST) as usize;
    let level = if depth <= 1 {
        TINT_DARKEST as usize
    } else {
        TINT_DARKEST as usize + span * rank.min(depth - 1) / (depth - 1)
    };
    let level = level as u8;
    [level, level, level]
}

/// Frames at `time - k * time_step` for `k = 1, 2, ..` while the sampled time
/// stays above zero, most recent first, at most `trail_depth` of them
pub fn trail_frames(params: &SimulationParameters, time: f64) -> Vec<TrailFrame> {
    // at most one frame per whole step back to zero, whatever the depth
    let reachable = (time / params.time_step).max(0.0) as usize;
    let mut frames = Vec::with_capacity(params.trail_depth.min(reachable));
    let mut n = time - params.time_step;

    while n > 0.0 && frames.len() < params.trail_depth {
        let rank = frames.len();
        frames.push(TrailFrame {
            time: n,
            position: position(params.radius, params.angular_velocity, n),
            velocity: velocity(params.radius, params.angular_velocity, n),
            rank,
            age: (rank + 1) as f64 * params.time_step,
            tint: fade_tint(rank, params.trail_depth),
        });
        n -= params.time_step;
    }

    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_matches_eight_step_palette() {
        let greys: Vec<u8> = (0..8).map(|r| fade_tint(r, 8)[0]).collect();
        assert_eq!(greys, vec![0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
    }

    #[test]
    fn no_frames_at_or_before_first_step() {
        let params = SimulationParameters::default();
        assert!(trail_frames(&params, 0.0).is_empty());
        assert!(trail_frames(&params, 2.0).is_empty());
        assert_eq!(trail_frames(&params, 4.0).len(), 1);
    }
}
