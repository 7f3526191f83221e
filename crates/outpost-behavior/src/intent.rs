//! Agent intents — what a behavior wants done to the world.
//!
//! Behaviors run against a read-only [`BehaviorContext`][crate::BehaviorContext]
//! and describe their effects as intents; the scheduler applies them
//! sequentially afterwards.  This split is what lets combat damage *other*
//! agents without aliasing mutable borrows across the population.

use outpost_core::{AgentId, ConnId, RoomId, Vec2};

/// One effect requested by a behavior for the current tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Intent {
    /// Cosmetic in-room fidget: move the agent to `position` (already
    /// clamped inside its room).  Never changes the agent's room.
    Nudge { position: Vec2 },

    /// A landed attack: subtract `damage` from `target`'s health.
    Strike { target: AgentId, damage: f32 },

    /// Regenerate `amount` health, clamped at full.
    Heal { amount: f32 },

    /// Start wandering: walk one hop through `conn` into `room`.
    Roam { room: RoomId, conn: ConnId },
}
