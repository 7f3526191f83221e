//! The agent record: one hero or monster.

use rustc_hash::FxHashSet;

use outpost_core::{AgentId, ConnId, RoomId, Tick, Vec2};
use outpost_world::RouteLeg;

/// Health ceiling for every agent.  Healing clamps here; damage has no
/// floor — death detection compares against zero.
pub const MAX_HEALTH: f32 = 100.0;

// ── AgentKind ────────────────────────────────────────────────────────────────

/// Hero (player-directed) or monster (autonomous).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentKind {
    Hero,
    Monster,
}

impl AgentKind {
    #[inline]
    pub fn is_hero(self) -> bool {
        matches!(self, AgentKind::Hero)
    }
}

// ── Transit ──────────────────────────────────────────────────────────────────

/// Which sub-leg of a route leg the agent is currently walking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitPhase {
    /// Heading for a door's crossing point.
    Crossing(ConnId),
    /// Past any crossing point, heading for a point inside the destination
    /// room.
    Entering,
}

/// The in-flight waypoint of an agent that is walking its route.
///
/// `None` on the agent means no waypoint is active: either the agent is idle
/// or its next waypoint has not been derived from `route[0]` yet.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transit {
    pub target: Vec2,
    pub phase:  TransitPhase,
}

// ── BehaviorTimers ───────────────────────────────────────────────────────────

/// Next-due ticks for each of an agent's periodic behaviors.
///
/// Owned by the agent and read by the tick-driven scheduler; a behavior
/// fires when `now >= due` and is then re-armed.  Dead agents are never
/// re-armed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorTimers {
    pub idle_due:   Tick,
    pub combat_due: Tick,
    pub heal_due:   Tick,
    pub wander_due: Tick,
}

impl BehaviorTimers {
    /// All behaviors due at `tick` (used at spawn so a fresh agent acts on
    /// its first scheduled step).
    pub fn starting_at(tick: Tick) -> Self {
        Self { idle_due: tick, combat_due: tick, heal_due: tick, wander_due: tick }
    }
}

// ── Agent ────────────────────────────────────────────────────────────────────

/// Entity state for one hero or monster.
///
/// Mutated in place by the movement controller and the behavior scheduler;
/// the agent never owns room or connection records, only its id references
/// into the world graph.
#[derive(Clone, Debug)]
pub struct Agent {
    pub id:   AgentId,
    pub name: String,
    pub kind: AgentKind,

    /// The room the agent is logically in.  Updated when a route leg's
    /// destination point is reached, not while crossing.
    pub room: RoomId,
    /// Continuous position in display space.
    pub position: Vec2,
    /// Movement speed in display units per simulated second.
    pub speed: f32,

    // ── Combat & vitals ───────────────────────────────────────────────────
    /// Probability that an attack lands, in [0, 1].
    pub hit_chance: f64,
    pub weapon_damage: f32,
    /// Health restored per heal tick.  Zero for monsters by default.
    pub healing: f32,
    pub health: f32,
    pub ammo:   f32,
    pub morale: f32,

    // ── Movement ──────────────────────────────────────────────────────────
    /// Remaining route legs, first leg next.
    pub route: Vec<RouteLeg>,
    /// Active waypoint, if any.
    pub transit: Option<Transit>,

    // ── Perception & scheduling ───────────────────────────────────────────
    /// Rooms this agent currently considers observable (its own room always
    /// included).
    pub vision: FxHashSet<RoomId>,
    pub timers: BehaviorTimers,

    /// Set once the death event for this agent has been emitted, so a dead
    /// hero is announced exactly once.
    pub death_announced: bool,
}

impl Agent {
    #[inline]
    pub fn is_hero(&self) -> bool {
        self.kind.is_hero()
    }

    /// Dead agents stop moving and none of their behaviors reschedule.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// `true` when the agent has no route and no active waypoint.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.route.is_empty() && self.transit.is_none()
    }

    /// Subtract damage.  No floor clamp — death is detected by the reap
    /// pass comparing against zero.
    #[inline]
    pub fn apply_damage(&mut self, damage: f32) {
        self.health -= damage;
    }

    /// Raise health toward the ceiling; never lowers it.
    #[inline]
    pub fn heal(&mut self, amount: f32) {
        if amount > 0.0 {
            self.health = (self.health + amount).min(MAX_HEALTH);
        }
    }

    /// Drop the route and any active waypoint, freezing the agent where it
    /// stands.
    #[inline]
    pub fn clear_route(&mut self) {
        self.route.clear();
        self.transit = None;
    }
}
