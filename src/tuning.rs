//! Data-driven game balance
//!
//! Every balance knob the simulation reads at runtime, with defaults from
//! [`crate::consts`]. A JSON override file (all fields optional) can be
//! supplied through the `BYTETRAIL_TUNING` environment variable; anything
//! unreadable falls back to defaults with a logged warning.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Gameplay balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player vehicle ===
    pub player_max_speed: f32,
    pub player_acceleration: f32,
    pub player_deceleration: f32,
    pub player_turn_rate: f32,

    // === AI cycles ===
    pub ai_max_speed: f32,

    // === Collision ===
    pub player_collision_threshold: f32,
    pub ai_collision_threshold: f32,

    // === Coins and scoring ===
    pub coin_value: u32,
    pub coin_drop_count: u32,
    pub player_kill_bonus: u64,
    pub ai_kill_bonus: u64,

    // === Lifecycle ===
    pub respawn_time: f32,

    // === Trails ===
    pub trail_max_points: usize,
    pub trail_sample_interval: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_max_speed: consts::PLAYER_MAX_SPEED,
            player_acceleration: consts::PLAYER_ACCELERATION,
            player_deceleration: consts::PLAYER_DECELERATION,
            player_turn_rate: consts::PLAYER_TURN_RATE,

            ai_max_speed: consts::AI_MAX_SPEED,

            player_collision_threshold: consts::PLAYER_COLLISION_THRESHOLD,
            ai_collision_threshold: consts::AI_COLLISION_THRESHOLD,

            coin_value: consts::COIN_VALUE,
            coin_drop_count: consts::COIN_DROP_COUNT,
            player_kill_bonus: consts::PLAYER_KILL_BONUS,
            ai_kill_bonus: consts::AI_KILL_BONUS,

            respawn_time: consts::RESPAWN_TIME,

            trail_max_points: consts::TRAIL_MAX_POINTS,
            trail_sample_interval: consts::TRAIL_SAMPLE_INTERVAL,
        }
    }
}

impl Tuning {
    /// Environment variable naming the override file
    pub const ENV_VAR: &'static str = "BYTETRAIL_TUNING";

    /// Load tuning, honoring a JSON override file if one is configured
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides from {path}");
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {path}: {err}");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Cannot read tuning file {path}: {err}");
                Self::default()
            }
        }
    }
}
