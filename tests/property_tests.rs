use circsim::configuration::config::WrapPolicy;
use circsim::simulation::banked::banked_forces;
use circsim::simulation::kinematics::{position, velocity};
use circsim::simulation::params::{BankedParameters, SimulationParameters};
use circsim::simulation::states::SimulationState;
use circsim::simulation::tracker::advance;
use circsim::simulation::trail::trail_frames;
use proptest::prelude::*;

fn params(radius: f64, omega: f64, step: f64, depth: usize) -> SimulationParameters {
    SimulationParameters {
        radius,
        angular_velocity: omega,
        time_min: 0.0,
        time_max: 100.0,
        time_step: step,
        trail_depth: depth,
    }
}

fn wrap_policy() -> impl Strategy<Value = WrapPolicy> {
    prop_oneof![
        Just(WrapPolicy::Both),
        Just(WrapPolicy::SignCrossing),
        Just(WrapPolicy::HistoryBound),
    ]
}

// =============================================================================
// Kinematics
// =============================================================================

proptest! {
    #[test]
    fn position_stays_on_circle(r in 0.1f64..500.0, omega in -5.0f64..5.0, t in 0.0f64..1000.0) {
        let p = position(r, omega, t);
        let err = (p.x * p.x + p.y * p.y - r * r).abs();
        prop_assert!(err <= 1e-9 * r * r, "x^2 + y^2 off by {} for r = {}", err, r);
    }

    #[test]
    fn velocity_orthogonal_to_position(r in 0.1f64..500.0, omega in -5.0f64..5.0, t in 0.0f64..1000.0) {
        let p = position(r, omega, t);
        let v = velocity(r, omega, t);
        let scale = (r * r * omega.abs()).max(1.0);
        prop_assert!(p.dot(&v).abs() <= 1e-9 * scale, "p . v = {}", p.dot(&v));
    }
}

// =============================================================================
// Tracker
// =============================================================================

proptest! {
    #[test]
    fn advance_keeps_state_on_path_and_in_bounds(
        r in 1.0f64..200.0,
        omega in -2.0f64..2.0,
        prev_t in 0.0f64..100.0,
        t in -50.0f64..150.0,
        policy in wrap_policy(),
    ) {
        let p = params(r, omega, 2.0, 8);
        let prev = SimulationState {
            time: prev_t,
            position: position(r, omega, prev_t),
            velocity: velocity(r, omega, prev_t),
        };
        let update = advance(&p, policy, &prev, t).unwrap();
        let s = update.state;

        prop_assert!(s.time >= p.time_min && s.time <= p.time_max);
        prop_assert!((s.position.norm() - r).abs() <= 1e-9 * r);
        if update.wrapped.is_some() {
            prop_assert_eq!(s.time, p.time_min);
            prop_assert_eq!(s.position.x, r);
            prop_assert_eq!(s.position.y, 0.0);
        }
    }
}

// =============================================================================
// Trail
// =============================================================================

proptest! {
    #[test]
    fn trail_never_exceeds_depth(
        step in 0.1f64..10.0,
        depth in 0usize..32,
        time in 0.0f64..100.0,
    ) {
        let p = params(80.0, 0.5, step, depth);
        let trail = trail_frames(&p, time);

        prop_assert!(trail.len() <= depth);
        for (k, frame) in trail.iter().enumerate() {
            prop_assert_eq!(frame.rank, k);
            prop_assert!(frame.time > 0.0);
            prop_assert!((frame.age - (k + 1) as f64 * step).abs() < 1e-9);
        }
        prop_assert!(trail.windows(2).all(|w| w[0].age < w[1].age));
    }
}

// =============================================================================
// Banked corner
// =============================================================================

proptest! {
    #[test]
    fn banked_magnitudes_follow_cos_squared(
        angle in 0.0f64..=60.0,
        mu in 0.0f64..=1.0,
        dy in 1.0f64..100.0,
    ) {
        let bp = BankedParameters { dy_std: dy };
        let f = banked_forces(&bp, angle, mu).unwrap();
        let cos2 = angle.to_radians().cos().powi(2);

        prop_assert!((f.weight.norm() - dy).abs() < 1e-9);
        prop_assert_eq!(f.weight.x, 0.0);
        prop_assert!((f.normal.norm() - dy * cos2).abs() < 1e-9 * dy);
        prop_assert!((f.friction.norm() - mu * dy * cos2).abs() < 1e-9 * dy);
        prop_assert!(f.net_horizontal.x <= 0.0);
    }

    #[test]
    fn banked_rejects_steep_angles(angle in 60.0001f64..180.0, mu in 0.0f64..=1.0) {
        prop_assert!(banked_forces(&BankedParameters::default(), angle, mu).is_err());
    }
}
