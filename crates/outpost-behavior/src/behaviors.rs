//! The periodic behaviors: intent producers, one function per behavior.
//!
//! Each producer takes the acting agent, the read-only context, and the
//! agent's own RNG, and returns the intents for one firing.  Due-checking
//! and re-arming are the scheduler's job; a producer called on an agent the
//! behavior does not apply to simply returns nothing.

use outpost_agent::Agent;
use outpost_core::AgentRng;

use crate::{BehaviorContext, Intent};

/// Upper bound of the random scale for idle fidgeting (fraction of the room
/// extents).
const FIDGET_SCALE: f32 = 0.1;

// ── Idle motion ──────────────────────────────────────────────────────────────

/// A small random in-room shuffle so standing agents look alive.
///
/// Fires only while the agent is not following a route; purely cosmetic and
/// never changes the agent's room.
pub fn idle_motion(agent: &Agent, ctx: &BehaviorContext<'_>, rng: &mut AgentRng) -> Vec<Intent> {
    if !agent.is_idle() {
        return vec![];
    }
    let room = ctx.world.room(agent.room);
    let scale = rng.gen_range(0.0..FIDGET_SCALE);
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    vec![Intent::Nudge {
        position: room.offset_point(agent.position, scale, angle),
    }]
}

// ── Combat ───────────────────────────────────────────────────────────────────

/// Attack every opponent sharing the agent's room.
///
/// The hero's opponents are all live monsters in its room; a monster's only
/// opponent is the hero, and only when co-located.  Each opponent is rolled
/// independently against the attacker's hit chance.
pub fn combat(agent: &Agent, ctx: &BehaviorContext<'_>, rng: &mut AgentRng) -> Vec<Intent> {
    let mut intents = Vec::new();
    let opponents: Vec<&Agent> = if agent.is_hero() {
        ctx.agents
            .iter()
            .filter(|a| !a.is_hero() && a.is_alive() && a.room == agent.room)
            .collect()
    } else {
        ctx.agents
            .hero()
            .filter(|h| h.is_alive() && h.room == agent.room)
            .into_iter()
            .collect()
    };

    for opponent in opponents {
        log::debug!("'{}' attacking '{}'!", agent.name, opponent.name);
        if rng.gen_bool(agent.hit_chance) {
            log::debug!("'{}' hits!", agent.name);
            intents.push(Intent::Strike {
                target: opponent.id,
                damage: agent.weapon_damage,
            });
        }
    }
    intents
}

// ── Healing ──────────────────────────────────────────────────────────────────

/// Regenerate the agent's per-tick healing amount (zero for monsters by
/// default, so this is effectively the hero's slow recovery).
pub fn healing(agent: &Agent) -> Vec<Intent> {
    if agent.healing > 0.0 {
        vec![Intent::Heal { amount: agent.healing }]
    } else {
        vec![]
    }
}

// ── Wandering ────────────────────────────────────────────────────────────────

/// Pick one random currently-connected room and head there.
///
/// Monsters only, and only while idle; an agent boxed in by closed doors
/// stays put until the next firing.
pub fn wander(agent: &Agent, ctx: &BehaviorContext<'_>, rng: &mut AgentRng) -> Vec<Intent> {
    if agent.is_hero() || !agent.is_idle() {
        return vec![];
    }
    let exits: Vec<_> = ctx.world.connected_rooms(agent.room).collect();
    match rng.choose(&exits) {
        Some(&(room, conn)) => vec![Intent::Roam { room, conn }],
        None => vec![],
    }
}
