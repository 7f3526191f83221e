//! Simulation events for the presentation layer.

use outpost_core::{AgentId, ConnId, RoomId};

/// Kind of consumable item the hero can collect from a room.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Heals the collector to full health.
    FirstAid,
    /// Grants +100 ammo.
    Ammo,
}

/// Something the presentation layer may want to react to.
///
/// Events are delivered to the [`SimObserver`][crate::SimObserver] as they
/// happen, in tick order; within a tick the order follows the phase order of
/// the step (movement, behaviors, population control).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimEvent {
    /// An agent's position crossed into `room` (its logical room changed).
    EnteredRoom { agent: AgentId, room: RoomId },

    /// An agent finished its route in `room`.
    RouteCompleted { agent: AgentId, room: RoomId },

    /// An agent's route was dropped because `conn` was closed ahead of it.
    RouteInvalidated { agent: AgentId, conn: ConnId },

    /// A monster spawned in `room`.
    AgentSpawned { agent: AgentId, room: RoomId },

    /// An agent was found dead — monsters are removed from the live set,
    /// the hero stays (announced exactly once).
    AgentDied { agent: AgentId, room: RoomId },

    /// A door was toggled; `open` is the new state.
    ConnectionToggled { conn: ConnId, open: bool },

    /// The hero collected a consumable from `room`.
    ItemCollected { agent: AgentId, kind: ItemKind, room: RoomId },
}
