//! Per-frame simulation advance
//!
//! One external driver calls [`tick`] once per rendered frame with the frame
//! delta and the current input flags. Within a tick the frame runs in a
//! fixed sequence: player motion and trail first, then every AI cycle in
//! index order, then player pickups and the player-vs-trail lethal check.
//!
//! The AI iteration order is part of the simulation contract: a
//! later-indexed cycle's trail test observes earlier-indexed cycles'
//! already-updated positions for the current tick. Everything else a cycle
//! reads was committed before collision checks run.

use glam::Vec2;
use rand::Rng;

use super::autonomy;
use super::collision;
use super::state::{ActorId, ArenaState, Coin, GameEvent, AI_SPAWN_POINTS};
use crate::consts::*;
use crate::shortest_angle_diff;

/// Input flags for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub forward: bool,
    pub reverse: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

/// Advance the arena by `dt` seconds.
///
/// Non-positive or non-finite deltas are zero-effect ticks: the state is
/// left untouched.
pub fn tick(state: &mut ArenaState, input: &TickInput, dt: f32) {
    if !dt.is_finite() || dt <= 0.0 {
        return;
    }

    state.time += dt;
    state.time_ticks += 1;

    update_player(state, input, dt);

    for index in 0..state.cycles.len() {
        update_cycle(state, index, dt);
    }

    collect_coins(state, ActorId::Player);
    check_player_collisions(state);

    state.high_score = state.high_score.max(state.player.score);
}

/// Integrate player speed/heading from input, translate, clamp, record trail
fn update_player(state: &mut ArenaState, input: &TickInput, dt: f32) {
    let frames = dt * REFERENCE_FRAME_RATE;
    let tuning = &state.tuning;
    let player = &mut state.player;

    if input.forward {
        player.speed = (player.speed + tuning.player_acceleration * frames).min(player.max_speed);
    } else if input.reverse {
        player.speed = (player.speed - tuning.player_acceleration * frames).max(-player.max_speed);
    } else {
        // Coasting decays exponentially toward rest
        player.speed *= (1.0 - tuning.player_deceleration).powf(frames);
    }

    if player.speed.abs() > TURN_SPEED_DEADBAND {
        if input.turn_left {
            player.heading += tuning.player_turn_rate * frames;
        }
        if input.turn_right {
            player.heading -= tuning.player_turn_rate * frames;
        }
    }

    // Hard componentwise clamp is the player containment policy
    let next = player.pos + player.forward() * player.speed;
    player.pos = next.clamp(Vec2::splat(-BOUNDARY_LIMIT), Vec2::splat(BOUNDARY_LIMIT));

    let tail = player.pos - player.forward() * TAIL_OFFSET;
    player.trail.record(tail, state.time);
}

/// Full update for one AI cycle
fn update_cycle(state: &mut ArenaState, index: usize, dt: f32) {
    if !state.cycles[index].actor.alive {
        state.cycles[index].actor.respawn_timer -= dt;
        if state.cycles[index].actor.respawn_timer <= 0.0 {
            respawn_cycle(state, index);
        }
        return;
    }

    state.cycles[index].pattern_time += dt;

    // Contact with any other living cycle's trail is lethal; the trail
    // owner is credited with the kill.
    let threshold = state.tuning.ai_collision_threshold;
    let pos = state.cycles[index].actor.pos;
    let killer = state
        .cycles
        .iter()
        .enumerate()
        .filter(|&(other_index, other)| other_index != index && other.actor.alive)
        .find(|(_, other)| collision::trail_hit(pos, &other.actor.trail, threshold))
        .map(|(other_index, _)| ActorId::Ai(other_index as u8));
    if let Some(killer) = killer {
        kill_cycle(state, index, Some(killer));
        return;
    }

    let now = state.time;
    let cycle = &mut state.cycles[index];

    let prev_heading = cycle.actor.heading;
    let heading = cycle.pattern.update_heading(
        prev_heading,
        &mut cycle.pattern_time,
        cycle.actor.pos,
        dt,
        &mut state.rng,
    );
    cycle.actor.heading = heading;
    cycle.actor.speed = cycle.actor.max_speed;

    let next = cycle.actor.pos + cycle.actor.forward() * cycle.actor.speed;

    // Near a wall the pattern's output is discarded for this tick: rotate
    // toward arena center instead of translating. AI never clamps.
    let avoid_limit = BOUNDARY_LIMIT - BOUNDARY_BUFFER;
    if next.x.abs() >= avoid_limit || next.y.abs() >= avoid_limit {
        let to_center = autonomy::heading_to_center(cycle.actor.pos);
        let diff = shortest_angle_diff(prev_heading, to_center);
        cycle.actor.heading = prev_heading + BOUNDARY_TURN_RATE * diff.signum();
        return;
    }

    cycle.actor.pos = next;
    let tail = next - cycle.actor.forward() * TAIL_OFFSET;
    cycle.actor.trail.record(tail, now);

    // Player trail is just as lethal to a cycle as another cycle's
    let pos = state.cycles[index].actor.pos;
    if collision::trail_hit(pos, &state.player.trail, threshold) {
        kill_cycle(state, index, Some(ActorId::Player));
        return;
    }

    collect_coins(state, ActorId::Ai(index as u8));
}

/// Kill one cycle: state flip, trail wipe, killer credit, coin drop
fn kill_cycle(state: &mut ArenaState, index: usize, killer: Option<ActorId>) {
    let pos = {
        let actor = &mut state.cycles[index].actor;
        actor.alive = false;
        actor.respawn_timer = state.tuning.respawn_time;
        actor.speed = 0.0;
        actor.trail.reset();
        actor.pos
    };
    log::debug!(
        "cycle {index} destroyed at ({:.1}, {:.1}) by {killer:?}",
        pos.x,
        pos.y
    );

    state.events.push(GameEvent::ActorDied {
        actor: ActorId::Ai(index as u8),
        pos,
        killer,
    });

    match killer {
        Some(ActorId::Player) => state.player.score += state.tuning.ai_kill_bonus,
        Some(ActorId::Ai(owner)) => {
            state.cycles[owner as usize].actor.score += state.tuning.ai_kill_bonus;
        }
        None => {}
    }

    drop_coins(state, pos);
}

/// Scatter the death drop around `pos`
fn drop_coins(state: &mut ArenaState, pos: Vec2) {
    for _ in 0..state.tuning.coin_drop_count {
        let offset = Vec2::new(
            state.rng.random_range(-0.5..0.5),
            state.rng.random_range(-0.5..0.5),
        ) * COIN_DROP_SPREAD;
        state
            .coins
            .push(Coin::new(pos + offset, state.tuning.coin_value));
    }
}

/// Bring a dead cycle back at a randomly chosen fixed spawn point
fn respawn_cycle(state: &mut ArenaState, index: usize) {
    let spawn = AI_SPAWN_POINTS[state.rng.random_range(0..AI_SPAWN_POINTS.len())];
    let cycle = &mut state.cycles[index];
    cycle.actor.pos = spawn.pos;
    cycle.actor.heading = spawn.heading;
    cycle.actor.speed = 0.0;
    cycle.actor.alive = true;
    cycle.actor.respawn_timer = 0.0;
    cycle.actor.trail.reset();

    log::debug!(
        "cycle {index} respawned at ({:.0}, {:.0})",
        spawn.pos.x,
        spawn.pos.y
    );
    state.events.push(GameEvent::ActorRespawned {
        actor: ActorId::Ai(index as u8),
        pos: spawn.pos,
    });
}

/// Collect every coin within pickup range of the given actor
fn collect_coins(state: &mut ArenaState, actor: ActorId) {
    let pos = match actor {
        ActorId::Player => state.player.pos,
        ActorId::Ai(index) => state.cycles[index as usize].actor.pos,
    };

    let mut i = 0;
    while i < state.coins.len() {
        if !state.coins[i].collected && state.coins[i].pos.distance(pos) < COIN_PICKUP_RADIUS {
            let mut coin = state.coins.remove(i);
            coin.collected = true;
            match actor {
                ActorId::Player => state.player.score += coin.value as u64,
                ActorId::Ai(index) => {
                    state.cycles[index as usize].actor.score += coin.value as u64;
                }
            }
            state.events.push(GameEvent::CoinCollected {
                actor,
                pos: coin.pos,
                value: coin.value,
            });
        } else {
            i += 1;
        }
    }
}

/// Lethal check for the player against every living cycle's trail
fn check_player_collisions(state: &mut ArenaState) {
    let pos = state.player.pos;
    let threshold = state.tuning.player_collision_threshold;
    let killer = state
        .alive_cycles()
        .find(|(_, cycle)| collision::trail_hit(pos, &cycle.actor.trail, threshold))
        .map(|(index, _)| ActorId::Ai(index as u8));

    if let Some(killer) = killer {
        kill_player(state, killer);
    }
}

/// Player death: credit the killer, reset the run in place
fn kill_player(state: &mut ArenaState, killer: ActorId) {
    let pos = state.player.pos;
    log::info!("player destroyed at ({:.1}, {:.1})", pos.x, pos.y);

    state.events.push(GameEvent::ActorDied {
        actor: ActorId::Player,
        pos,
        killer: Some(killer),
    });
    if let ActorId::Ai(owner) = killer {
        state.cycles[owner as usize].actor.score += state.tuning.player_kill_bonus;
    }

    let player = &mut state.player;
    player.pos = Vec2::ZERO;
    player.heading = 0.0;
    player.speed = 0.0;
    player.score = 0;
    player.trail.reset();

    state.events.push(GameEvent::ActorRespawned {
        actor: ActorId::Player,
        pos: Vec2::ZERO,
    });
}
