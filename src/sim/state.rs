//! Arena state and core simulation types
//!
//! `ArenaState` is the single aggregate the tick function mutates: player,
//! AI cycles, coins, pending events, and the seeded RNG. No ambient globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::autonomy::MovementPattern;
use super::trail::Trail;
use crate::tuning::Tuning;

/// Stable identity of an actor across its whole lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorId {
    Player,
    /// AI cycle by index into `ArenaState::cycles`
    Ai(u8),
}

/// A vehicle: the player or one AI cycle
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    /// Position on the arena plane; `pos.y` is the world z coordinate
    pub pos: Vec2,
    /// Heading in radians, `(sin h, cos h)` convention. Always finite,
    /// never required to be normalized.
    pub heading: f32,
    /// Signed scalar speed, |speed| <= max_speed
    pub speed: f32,
    pub max_speed: f32,
    pub alive: bool,
    /// Seconds until respawn while dead
    pub respawn_timer: f32,
    pub score: u64,
    /// Render hint (RGB)
    pub color: u32,
    pub trail: Trail,
}

impl Actor {
    pub fn new(
        id: ActorId,
        pos: Vec2,
        heading: f32,
        max_speed: f32,
        color: u32,
        tuning: &Tuning,
    ) -> Self {
        Self {
            id,
            pos,
            heading,
            speed: 0.0,
            max_speed,
            alive: true,
            respawn_timer: 0.0,
            score: 0,
            color,
            trail: Trail::new(tuning.trail_max_points, tuning.trail_sample_interval),
        }
    }

    /// Unit vector along the current heading
    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::new(self.heading.sin(), self.heading.cos())
    }
}

/// One AI opponent: a shared-shape actor plus its navigation pattern
#[derive(Debug, Clone)]
pub struct AiCycle {
    pub actor: Actor,
    pub pattern: MovementPattern,
    /// Pattern-local clock; wrapped/reset by the pattern itself
    pub pattern_time: f32,
}

/// A collectible coin
#[derive(Debug, Clone)]
pub struct Coin {
    pub pos: Vec2,
    pub value: u32,
    /// Guards against double-scoring in the tick that collects it
    pub collected: bool,
}

impl Coin {
    pub fn new(pos: Vec2, value: u32) -> Self {
        Self {
            pos,
            value,
            collected: false,
        }
    }
}

/// Discrete notifications for the external effects/audio/UI layer.
///
/// The simulation queues these during a tick; the driver drains them with
/// [`ArenaState::take_events`] and runs any decorative animations on its own
/// schedule, fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected {
        actor: ActorId,
        pos: Vec2,
        value: u32,
    },
    ActorDied {
        actor: ActorId,
        pos: Vec2,
        killer: Option<ActorId>,
    },
    ActorRespawned {
        actor: ActorId,
        pos: Vec2,
    },
}

/// A fixed AI spawn location with its preset heading
#[derive(Debug, Clone, Copy)]
pub struct SpawnPoint {
    pub pos: Vec2,
    pub heading: f32,
}

/// Fixed AI spawn set; respawns pick one at random
pub const AI_SPAWN_POINTS: [SpawnPoint; 4] = [
    SpawnPoint {
        pos: Vec2::new(-50.0, -50.0),
        heading: std::f32::consts::FRAC_PI_4,
    },
    SpawnPoint {
        pos: Vec2::new(50.0, -50.0),
        heading: -std::f32::consts::FRAC_PI_4,
    },
    SpawnPoint {
        pos: Vec2::new(0.0, 50.0),
        heading: std::f32::consts::PI,
    },
    SpawnPoint {
        pos: Vec2::new(-50.0, 50.0),
        heading: -std::f32::consts::FRAC_PI_4,
    },
];

/// AI colors: red, green, purple, yellow
pub const AI_COLORS: [u32; 4] = [0xff0000, 0x00ff00, 0x9933ff, 0xffff00];

pub const PLAYER_COLOR: u32 = 0x00d4ff;

/// Coin positions seeded at startup
pub const COIN_SEED_POSITIONS: [Vec2; 5] = [
    Vec2::new(50.0, 50.0),
    Vec2::new(-50.0, -50.0),
    Vec2::new(75.0, 0.0),
    Vec2::new(0.0, 75.0),
    Vec2::new(0.0, -75.0),
];

/// Complete arena state, advanced by [`super::tick`]
#[derive(Debug, Clone)]
pub struct ArenaState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Accumulated simulation time in seconds
    pub time: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Actor,
    /// AI cycles in fixed iteration order (the ordering is part of the
    /// simulation contract, see the tick module)
    pub cycles: Vec<AiCycle>,
    /// Shared arena-level coin collection
    pub coins: Vec<Coin>,
    /// Session-best player score, in-memory only
    pub high_score: u64,
    pub tuning: Tuning,
    /// Events queued this tick, drained by the driver
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl ArenaState {
    /// Create a fresh arena with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let player = Actor::new(
            ActorId::Player,
            Vec2::ZERO,
            0.0,
            tuning.player_max_speed,
            PLAYER_COLOR,
            &tuning,
        );

        let cycles = AI_SPAWN_POINTS
            .iter()
            .zip(AI_COLORS)
            .enumerate()
            .map(|(index, (spawn, color))| AiCycle {
                actor: Actor::new(
                    ActorId::Ai(index as u8),
                    spawn.pos,
                    spawn.heading,
                    tuning.ai_max_speed,
                    color,
                    &tuning,
                ),
                pattern: MovementPattern::for_index(index),
                pattern_time: 0.0,
            })
            .collect();

        let coins = COIN_SEED_POSITIONS
            .iter()
            .map(|&pos| Coin::new(pos, tuning.coin_value))
            .collect();

        Self {
            seed,
            time: 0.0,
            time_ticks: 0,
            player,
            cycles,
            coins,
            high_score: 0,
            tuning,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Drain the events queued since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Living AI cycles with their indices
    pub fn alive_cycles(&self) -> impl Iterator<Item = (usize, &AiCycle)> {
        self.cycles
            .iter()
            .enumerate()
            .filter(|(_, cycle)| cycle.actor.alive)
    }
}
