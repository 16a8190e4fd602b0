//! Movement patterns for AI cycles
//!
//! Every AI is assigned exactly one pattern at construction and keeps it for
//! life. A pattern is a pure heading update: given the current heading,
//! pattern-local time, and position, produce the heading for this tick.
//! Speed is not a pattern concern - the tick locks AI speed to its maximum.
//!
//! Headings follow the vehicle convention `(sin h, cos h)`: heading 0 points
//! along +z and increases counterclockwise when viewed from above.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, FRAC_PI_8, PI};

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::shortest_angle_diff;

/// The four autonomous navigation styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPattern {
    /// Loose circle with a slowly breathing radius
    Circular,
    /// Sinusoidal weave around the current heading
    Zigzag,
    /// Straight runs broken by sharp ~90° turns
    Patrol,
    /// Lateral wave with a center-seeking bias
    Snake,
}

impl MovementPattern {
    /// Round-robin assignment by AI index
    pub fn for_index(index: usize) -> Self {
        match index % 4 {
            0 => MovementPattern::Circular,
            1 => MovementPattern::Zigzag,
            2 => MovementPattern::Patrol,
            _ => MovementPattern::Snake,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementPattern::Circular => "circular",
            MovementPattern::Zigzag => "zigzag",
            MovementPattern::Patrol => "patrol",
            MovementPattern::Snake => "snake",
        }
    }

    /// Produce this tick's heading. `pattern_time` is the pattern-local
    /// clock; zigzag and snake wrap it, patrol resets it after each turn.
    pub fn update_heading(
        self,
        heading: f32,
        pattern_time: &mut f32,
        position: Vec2,
        dt: f32,
        rng: &mut Pcg32,
    ) -> f32 {
        match self {
            MovementPattern::Circular => circular(heading, *pattern_time),
            MovementPattern::Zigzag => zigzag(heading, pattern_time, rng),
            MovementPattern::Patrol => patrol(heading, pattern_time, rng),
            MovementPattern::Snake => snake(heading, pattern_time, position, dt, rng),
        }
    }
}

/// Heading that points from `position` at the arena center
#[inline]
pub fn heading_to_center(position: Vec2) -> f32 {
    (-position.x).atan2(-position.y)
}

fn circular(heading: f32, t: f32) -> f32 {
    // Base turn rate plus a slow wobble varies the radius
    let wobble = (t * 0.7).sin() * 0.01;
    heading + 0.02 + wobble
}

fn zigzag(heading: f32, t: &mut f32, rng: &mut Pcg32) -> f32 {
    // Wrap pattern time to keep the oscillation arguments bounded
    if *t > 10.0 {
        *t = 0.0;
    }

    let amplitude = FRAC_PI_3 + (*t * 0.5).sin() * FRAC_PI_6;
    let period = 1.5 + (*t * 0.3).sin() * 0.5;
    let jitter = rng.random_range(-0.05..0.05);
    let target = heading + (*t * (PI / period)).sin() * amplitude + jitter;

    // Chase the target, never snap to it
    heading + shortest_angle_diff(heading, target) * 0.15
}

fn patrol(heading: f32, t: &mut f32, rng: &mut Pcg32) -> f32 {
    let dwell = 3.0 + (*t * 0.4).sin();
    if *t > dwell {
        *t = 0.0;
        return heading + FRAC_PI_2 + rng.random_range(-FRAC_PI_8..FRAC_PI_8);
    }
    heading
}

fn snake(heading: f32, t: &mut f32, position: Vec2, dt: f32, rng: &mut Pcg32) -> f32 {
    if *t > 10.0 {
        *t = 0.0;
    }

    let period = 2.0;
    let wave = (*t * (PI / period)).sin() * FRAC_PI_4;

    let distance = position.length();
    let center = heading_to_center(position);

    let mut target = if distance > 100.0 {
        // Far out: head straight back
        center
    } else {
        let influence = ((distance - 50.0) / 100.0).clamp(0.0, 1.0);
        heading + wave + center * influence * 0.2
    };
    target += rng.random_range(-0.05..0.05);

    let mut next = heading + shortest_angle_diff(heading, target) * (dt * 2.0);

    // Rare sharp turn breaks periodic loops
    if rng.random::<f32>() < 0.02 {
        next += rng.random_range(-FRAC_PI_8..FRAC_PI_8);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_round_robin_assignment() {
        assert_eq!(MovementPattern::for_index(0), MovementPattern::Circular);
        assert_eq!(MovementPattern::for_index(1), MovementPattern::Zigzag);
        assert_eq!(MovementPattern::for_index(2), MovementPattern::Patrol);
        assert_eq!(MovementPattern::for_index(3), MovementPattern::Snake);
        assert_eq!(MovementPattern::for_index(4), MovementPattern::Circular);
    }

    #[test]
    fn test_circular_turns_steadily() {
        let mut t = 0.0;
        let h = MovementPattern::Circular.update_heading(1.0, &mut t, Vec2::ZERO, 0.016, &mut rng());
        assert!(h > 1.0);
        assert!(h - 1.0 < 0.05);
    }

    #[test]
    fn test_zigzag_wraps_pattern_time() {
        let mut t = 10.5;
        MovementPattern::Zigzag.update_heading(0.0, &mut t, Vec2::ZERO, 0.016, &mut rng());
        assert!(t < 10.0);
    }

    #[test]
    fn test_patrol_dwells_then_turns() {
        let mut r = rng();

        // Mid-dwell: heading untouched
        let mut t = 1.0;
        let h = MovementPattern::Patrol.update_heading(0.5, &mut t, Vec2::ZERO, 0.016, &mut r);
        assert_eq!(h, 0.5);

        // Past the dwell: roughly a quarter turn, clock reset
        let mut t = 4.5;
        let h = MovementPattern::Patrol.update_heading(0.5, &mut t, Vec2::ZERO, 0.016, &mut r);
        assert_eq!(t, 0.0);
        let turn = h - 0.5;
        assert!(turn > FRAC_PI_2 - FRAC_PI_8 && turn < FRAC_PI_2 + FRAC_PI_8);
    }

    #[test]
    fn test_snake_seeks_center_when_far() {
        let mut r = rng();
        let pos = Vec2::new(150.0, 0.0);
        let center = heading_to_center(pos);

        // Heading away from center; repeated updates must chase it down
        // despite jitter and the occasional sharp turn
        let mut heading = center + PI * 0.9;
        let mut t = 0.0;
        let mut best = shortest_angle_diff(heading, center).abs();
        for _ in 0..200 {
            t += 0.016;
            heading = MovementPattern::Snake.update_heading(heading, &mut t, pos, 0.016, &mut r);
            best = best.min(shortest_angle_diff(heading, center).abs());
        }
        assert!(best < 0.3);
    }

    #[test]
    fn test_headings_stay_finite() {
        let mut r = rng();
        for (i, pattern) in [
            MovementPattern::Circular,
            MovementPattern::Zigzag,
            MovementPattern::Patrol,
            MovementPattern::Snake,
        ]
        .into_iter()
        .enumerate()
        {
            let mut heading = i as f32;
            let mut t = 0.0;
            for step in 0..1000 {
                t += 0.016;
                heading = pattern.update_heading(
                    heading,
                    &mut t,
                    Vec2::new(step as f32 % 190.0, -40.0),
                    0.016,
                    &mut r,
                );
                assert!(heading.is_finite());
            }
        }
    }
}
