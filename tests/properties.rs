//! Randomized invariants over the simulation
//!
//! These drive whole-arena ticks with arbitrary input sequences and check
//! the properties that must hold for every reachable state.

use bytetrail_arena::consts::*;
use bytetrail_arena::sim::{ArenaState, TickInput, Trail, point_segment_distance, tick};
use glam::Vec2;
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = (TickInput, f32)> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0.001f32..0.1,
    )
        .prop_map(|(forward, reverse, turn_left, turn_right, dt)| {
            (
                TickInput {
                    forward,
                    reverse,
                    turn_left,
                    turn_right,
                },
                dt,
            )
        })
}

proptest! {
    #[test]
    fn speed_never_exceeds_max(
        seed in any::<u64>(),
        steps in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let mut state = ArenaState::new(seed);
        for (input, dt) in steps {
            tick(&mut state, &input, dt);
            prop_assert!(state.player.speed.abs() <= state.player.max_speed + 1e-4);
            for cycle in &state.cycles {
                prop_assert!(cycle.actor.speed.abs() <= cycle.actor.max_speed + 1e-4);
            }
        }
    }

    #[test]
    fn positions_satisfy_arena_bounds(
        seed in any::<u64>(),
        steps in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let mut state = ArenaState::new(seed);
        for (input, dt) in steps {
            tick(&mut state, &input, dt);
            // Player is hard-clamped at the limit
            prop_assert!(state.player.pos.x.abs() <= BOUNDARY_LIMIT);
            prop_assert!(state.player.pos.y.abs() <= BOUNDARY_LIMIT);
            // AI turns away before ever entering the buffer zone
            for cycle in state.cycles.iter().filter(|c| c.actor.alive) {
                prop_assert!(cycle.actor.pos.x.abs() < BOUNDARY_LIMIT - BOUNDARY_BUFFER);
                prop_assert!(cycle.actor.pos.y.abs() < BOUNDARY_LIMIT - BOUNDARY_BUFFER);
            }
        }
    }

    #[test]
    fn headings_finite_and_trails_capped(
        seed in any::<u64>(),
        steps in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let mut state = ArenaState::new(seed);
        for (input, dt) in steps {
            tick(&mut state, &input, dt);
            prop_assert!(state.player.heading.is_finite());
            prop_assert!(state.player.trail.len() <= state.tuning.trail_max_points);
            for cycle in &state.cycles {
                prop_assert!(cycle.actor.heading.is_finite());
                prop_assert!(cycle.actor.trail.len() <= state.tuning.trail_max_points);
            }
        }
    }

    #[test]
    fn same_seed_same_trajectory(
        seed in any::<u64>(),
        steps in prop::collection::vec(input_strategy(), 1..100),
    ) {
        let mut a = ArenaState::new(seed);
        let mut b = ArenaState::new(seed);
        for (input, dt) in &steps {
            tick(&mut a, input, *dt);
            tick(&mut b, input, *dt);
        }
        prop_assert_eq!(a.player.pos, b.player.pos);
        prop_assert_eq!(a.player.score, b.player.score);
        for (ca, cb) in a.cycles.iter().zip(&b.cycles) {
            prop_assert_eq!(ca.actor.pos, cb.actor.pos);
            prop_assert_eq!(ca.actor.alive, cb.actor.alive);
            prop_assert_eq!(ca.actor.score, cb.actor.score);
        }
    }

    #[test]
    fn non_positive_dt_leaves_state_untouched(
        seed in any::<u64>(),
        dt in -10.0f32..=0.0,
    ) {
        let mut state = ArenaState::new(seed);
        let input = TickInput { forward: true, ..Default::default() };
        tick(&mut state, &input, dt);
        prop_assert_eq!(state.time_ticks, 0);
        prop_assert_eq!(state.player.pos, Vec2::ZERO);
        prop_assert_eq!(state.player.speed, 0.0);
        prop_assert!(state.events.is_empty());
    }

    #[test]
    fn point_segment_distance_symmetric(
        px in -100f32..100.0, py in -100f32..100.0,
        ax in -100f32..100.0, ay in -100f32..100.0,
        bx in -100f32..100.0, by in -100f32..100.0,
    ) {
        let p = Vec2::new(px, py);
        let a = Vec2::new(ax, ay);
        let b = Vec2::new(bx, by);
        let forward = point_segment_distance(p, a, b);
        let reversed = point_segment_distance(p, b, a);
        prop_assert!((forward - reversed).abs() <= 1e-3);
    }

    #[test]
    fn trail_cap_is_fifo(
        points in prop::collection::vec((-100f32..100.0, -100f32..100.0), 1..200),
    ) {
        let mut trail = Trail::new(TRAIL_MAX_POINTS, 0.0);
        for (i, &(x, y)) in points.iter().enumerate() {
            trail.record(Vec2::new(x, y), i as f32);
        }
        prop_assert!(trail.len() <= TRAIL_MAX_POINTS);

        // Whatever survives is exactly the newest suffix, oldest first
        let expected_start = points.len().saturating_sub(TRAIL_MAX_POINTS);
        for (stored, &(x, y)) in trail.points().iter().zip(&points[expected_start..]) {
            prop_assert_eq!(*stored, Vec2::new(x, y));
        }
    }
}
