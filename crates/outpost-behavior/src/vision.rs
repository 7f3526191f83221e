//! Perception: which rooms an agent currently considers observable.

use rustc_hash::FxHashSet;

use outpost_agent::Agent;
use outpost_core::RoomId;
use outpost_world::WorldGraph;

/// The rooms observable from `room`: the room itself plus every room one
/// open connection away.
pub fn field_of_view(world: &WorldGraph, room: RoomId) -> FxHashSet<RoomId> {
    let mut seen: FxHashSet<RoomId> = world.connected_rooms(room).map(|(r, _)| r).collect();
    seen.insert(room);
    seen
}

/// Recompute an agent's vision set from its current room.
///
/// Called on spawn, on room arrival, and after a connection toggles (the
/// set is defined over *currently open* connections).
pub fn refresh_vision(world: &WorldGraph, agent: &mut Agent) {
    agent.vision = field_of_view(world, agent.room);
}

/// Whether a room should be rendered: it lies in the hero's vision set, or
/// it carries a camera (camera visibility is room-intrinsic and needs no
/// line of sight).
pub fn room_is_visible(world: &WorldGraph, hero: Option<&Agent>, room: RoomId) -> bool {
    world.room(room).tags.camera || hero.is_some_and(|h| h.vision.contains(&room))
}
