//! ByteTrail Arena - a light cycle arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, trails, collisions, scoring)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, camera, audio, and UI are external collaborators: a frontend
//! feeds a [`sim::TickInput`] and a frame delta into [`sim::tick`] each frame
//! and consumes actor transforms, trail ribbons, and [`sim::GameEvent`]s.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame rate the per-frame rates below were tuned against. Input
    /// integration scales by `dt * REFERENCE_FRAME_RATE` so behavior is
    /// independent of the actual frame rate.
    pub const REFERENCE_FRAME_RATE: f32 = 60.0;
    /// Fixed timestep used by the demo driver and tests
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Arena dimensions
    pub const ARENA_SIZE: f32 = 400.0;
    pub const BOUNDARY_MARGIN: f32 = 5.0;
    /// Hard containment limit on |x| and |z| for every actor
    pub const BOUNDARY_LIMIT: f32 = ARENA_SIZE / 2.0 - BOUNDARY_MARGIN;

    /// Trail geometry
    pub const TRAIL_MAX_POINTS: usize = 50;
    /// Minimum simulation time between recorded samples (seconds)
    pub const TRAIL_SAMPLE_INTERVAL: f32 = 0.016;
    pub const TRAIL_HALF_WIDTH: f32 = 3.0;
    /// Height of the ribbon above the ground plane
    pub const TRAIL_HEIGHT: f32 = 0.1;
    /// Samples are taken this far behind the vehicle, along its heading
    pub const TAIL_OFFSET: f32 = 1.5;
    /// Fixed height at which vehicles ride (renderer hint)
    pub const VEHICLE_HEIGHT: f32 = 0.6;

    /// Player vehicle tuning
    pub const PLAYER_MAX_SPEED: f32 = 1.5;
    pub const PLAYER_ACCELERATION: f32 = 0.03;
    pub const PLAYER_DECELERATION: f32 = 0.015;
    /// Turn rate in radians per reference frame
    pub const PLAYER_TURN_RATE: f32 = 0.05;
    /// Turning is disabled below this speed magnitude
    pub const TURN_SPEED_DEADBAND: f32 = 0.01;

    /// AI tuning
    pub const AI_MAX_SPEED: f32 = 2.0;
    /// AI starts turning away this far before the boundary limit
    pub const BOUNDARY_BUFFER: f32 = 20.0;
    /// Radians per tick the AI rotates toward arena center while avoiding
    pub const BOUNDARY_TURN_RATE: f32 = 0.1;

    /// Collision thresholds (distance from a vehicle to a trail segment)
    pub const PLAYER_COLLISION_THRESHOLD: f32 = TRAIL_HALF_WIDTH * 1.5;
    pub const AI_COLLISION_THRESHOLD: f32 = 2.0;

    /// Coins and scoring
    pub const COIN_VALUE: u32 = 10;
    pub const COIN_PICKUP_RADIUS: f32 = 3.0;
    /// Coins dropped by a killed AI
    pub const COIN_DROP_COUNT: u32 = 3;
    /// Dropped coins scatter within this spread of the death position
    pub const COIN_DROP_SPREAD: f32 = 8.0;
    /// Kill bonus credited to the killer when the victim is the player
    pub const PLAYER_KILL_BONUS: u64 = 100;
    /// Kill bonus credited to the killer when the victim is an AI
    pub const AI_KILL_BONUS: u64 = 50;

    /// Respawn countdown after death (seconds)
    pub const RESPAWN_TIME: f32 = 3.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Signed shortest rotation from `from` to `to`, wrapped into (-π, π]
#[inline]
pub fn shortest_angle_diff(from: f32, to: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let mut diff = (to - from).rem_euclid(TAU);
    if diff > PI {
        diff -= TAU;
    }
    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(0.0)).abs() < 1e-6);
        assert!((normalize_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((normalize_angle(-TAU - 0.5) + 0.5).abs() < 1e-5);
        assert!((normalize_angle(PI) + PI).abs() < 1e-6); // π wraps to -π
    }

    #[test]
    fn test_shortest_angle_diff_wraps() {
        // Crossing the ±π seam takes the short way around
        let d = shortest_angle_diff(3.0, -3.0);
        assert!((d - (TAU - 6.0)).abs() < 1e-5);
        assert!(d > 0.0);

        let d = shortest_angle_diff(-3.0, 3.0);
        assert!(d < 0.0);

        // Plain small difference is untouched
        assert!((shortest_angle_diff(0.2, 0.5) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_shortest_angle_diff_half_turn() {
        // Exactly opposite headings resolve to +π, not -π
        let d = shortest_angle_diff(0.0, PI);
        assert!((d - PI).abs() < 1e-6);
    }
}
