//! ByteTrail Arena entry point
//!
//! Headless demo driver: runs the simulation at a fixed timestep with
//! scripted player input and logs the events a frontend would turn into
//! visual/audio effects. Rendering frontends link the library instead and
//! drive [`bytetrail_arena::sim::tick`] from their own frame loop.

use std::time::{SystemTime, UNIX_EPOCH};

use bytetrail_arena::Tuning;
use bytetrail_arena::consts::SIM_DT;
use bytetrail_arena::sim::{ActorId, ArenaState, GameEvent, TickInput, tick};

const DEMO_SECONDS: u64 = 60;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or(0)
        });
    log::info!("ByteTrail Arena demo starting (seed {seed})");

    let mut state = ArenaState::with_tuning(seed, Tuning::load());

    for tick_index in 0..DEMO_SECONDS * 60 {
        tick(&mut state, &demo_input(tick_index), SIM_DT);

        for event in state.take_events() {
            match event {
                GameEvent::CoinCollected { actor, value, .. } => {
                    log::info!("{} collected a coin worth {value}", name(actor));
                }
                GameEvent::ActorDied { actor, pos, killer } => match killer {
                    Some(killer) => log::info!(
                        "{} crashed into {}'s trail at ({:.0}, {:.0})",
                        name(actor),
                        name(killer),
                        pos.x,
                        pos.y
                    ),
                    None => log::info!("{} crashed at ({:.0}, {:.0})", name(actor), pos.x, pos.y),
                },
                GameEvent::ActorRespawned { actor, .. } => {
                    log::info!("{} is back on the grid", name(actor));
                }
            }
        }
    }

    println!("Leaderboard after {DEMO_SECONDS}s (seed {seed}):");
    println!(
        "  player: {} (session best {})",
        state.player.score, state.high_score
    );
    for (index, cycle) in state.cycles.iter().enumerate() {
        println!(
            "  cycle {index} [{}]: {} ({})",
            cycle.pattern.as_str(),
            cycle.actor.score,
            if cycle.actor.alive {
                "alive"
            } else {
                "respawning"
            }
        );
    }
}

/// Scripted input: hold forward, weave left and right every couple seconds
fn demo_input(tick_index: u64) -> TickInput {
    let phase = (tick_index / 120) % 4;
    TickInput {
        forward: true,
        reverse: false,
        turn_left: phase == 1,
        turn_right: phase == 3,
    }
}

fn name(actor: ActorId) -> String {
    match actor {
        ActorId::Player => "player".to_string(),
        ActorId::Ai(index) => format!("cycle {index}"),
    }
}
