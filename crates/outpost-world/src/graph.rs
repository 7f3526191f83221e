//! World graph: rooms, connections, and adjacency.
//!
//! # Data layout
//!
//! Rooms and connections live in `Vec`s indexed by their typed IDs.  Each
//! room additionally carries an **insertion-ordered** list of the
//! connections that reference it.  That order is load-bearing: the router's
//! tie-break between equally short paths follows it (see
//! [`router`](crate::router)), so it is kept as an explicit `Vec<ConnId>`
//! rather than left to incidental map ordering.

use rustc_hash::FxHashMap;

use outpost_core::{ConnId, Rect, RoomId, Vec2};

use crate::connection::Connection;
use crate::room::{Room, RoomTags};

// ── WorldGraph ───────────────────────────────────────────────────────────────

/// The static-ish world topology: rooms (nodes) and connections (edges).
///
/// Topology never changes after [`WorldGraphBuilder::build`]; at runtime only
/// connection `open`/`locked` flags and consumable room tags mutate.
pub struct WorldGraph {
    rooms:       Vec<Room>,
    connections: Vec<Connection>,
    /// Connections referencing each room, in connection insertion order.
    room_conns:  Vec<Vec<ConnId>>,
    room_names:  FxHashMap<String, RoomId>,
    conn_names:  FxHashMap<String, ConnId>,
    /// Where the hero enters the level, if the layout designates one.
    pub start_room: Option<RoomId>,
}

impl WorldGraph {
    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn connection(&self, id: ConnId) -> &Connection {
        &self.connections[id.index()]
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room_by_name(&self, name: &str) -> Option<RoomId> {
        self.room_names.get(name).copied()
    }

    pub fn connection_by_name(&self, name: &str) -> Option<ConnId> {
        self.conn_names.get(name).copied()
    }

    /// Iterator over all `RoomId`s in ascending index order.
    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        (0..self.rooms.len() as u32).map(RoomId)
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// All rooms reachable from `room` through one **open** connection, with
    /// the connection used, in connection insertion order.
    ///
    /// Locked connections are never open, and connections without a room
    /// pair contribute nothing.
    pub fn connected_rooms(&self, room: RoomId) -> impl Iterator<Item = (RoomId, ConnId)> + '_ {
        self.room_conns[room.index()].iter().filter_map(move |&cid| {
            let conn = &self.connections[cid.index()];
            if !conn.is_open() {
                return None;
            }
            conn.other_side(room).map(|other| (other, cid))
        })
    }

    #[inline]
    pub fn is_open(&self, conn: ConnId) -> bool {
        self.connections[conn.index()].is_open()
    }

    // ── Runtime mutation ──────────────────────────────────────────────────

    /// Flip a door open/closed.  Locked doors and plain passages silently
    /// refuse; returns whether the state changed.
    pub fn toggle(&mut self, conn: ConnId) -> bool {
        let changed = self.connections[conn.index()].toggle();
        if changed {
            let c = &self.connections[conn.index()];
            log::debug!("connection '{}' now {}", c.name, if c.is_open() { "open" } else { "closed" });
        }
        changed
    }

    /// Lock a connection, closing it if it was open.
    pub fn lock(&mut self, conn: ConnId) {
        self.connections[conn.index()].lock();
    }

    pub fn unlock(&mut self, conn: ConnId) {
        self.connections[conn.index()].unlock();
    }

    /// Consume a room's first-aid item.  Returns `true` exactly once.
    pub fn take_first_aid(&mut self, room: RoomId) -> bool {
        self.rooms[room.index()].tags.take_first_aid()
    }

    /// Consume a room's ammo item.  Returns `true` exactly once.
    pub fn take_ammo(&mut self, room: RoomId) -> bool {
        self.rooms[room.index()].tags.take_ammo()
    }
}

// ── WorldGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`WorldGraph`] incrementally, then call [`build`](Self::build).
///
/// Rooms and connections are handed in by whatever parsed the level layout;
/// the builder assigns sequential IDs and wires up per-room adjacency lists
/// in connection insertion order.
///
/// # Example
///
/// ```
/// use outpost_core::{Rect, Vec2};
/// use outpost_world::{RoomTags, WorldGraphBuilder};
///
/// let mut b = WorldGraphBuilder::new();
/// let a = b.add_room("a", Rect::new(0.0, 0.0, 100.0, 100.0), RoomTags::default());
/// let c = b.add_room("b", Rect::new(100.0, 0.0, 100.0, 100.0), RoomTags::default());
/// b.add_door("d1", (a, c), Some(Vec2::new(100.0, 50.0)), true, false);
/// let world = b.build();
/// assert_eq!(world.connected_rooms(a).count(), 1);
/// ```
pub struct WorldGraphBuilder {
    rooms:       Vec<Room>,
    connections: Vec<Connection>,
    room_names:  FxHashMap<String, RoomId>,
    conn_names:  FxHashMap<String, ConnId>,
    start_room:  Option<RoomId>,
}

impl WorldGraphBuilder {
    pub fn new() -> Self {
        Self {
            rooms:       Vec::new(),
            connections: Vec::new(),
            room_names:  FxHashMap::default(),
            conn_names:  FxHashMap::default(),
            start_room:  None,
        }
    }

    /// Add a room and return its `RoomId` (sequential from 0).
    pub fn add_room(&mut self, name: &str, rect: Rect, tags: RoomTags) -> RoomId {
        let id = RoomId(self.rooms.len() as u32);
        self.rooms.push(Room {
            id,
            name: name.to_owned(),
            rect,
            center: rect.center(),
            tags,
        });
        self.room_names.insert(name.to_owned(), id);
        id
    }

    /// Add a door joining two rooms.  `center` is the physical crossing
    /// point agents walk through (absent for doors the layout gave no
    /// geometry).  A `locked` door is created closed regardless of `open`.
    pub fn add_door(
        &mut self,
        name:   &str,
        rooms:  (RoomId, RoomId),
        center: Option<Vec2>,
        open:   bool,
        locked: bool,
    ) -> ConnId {
        self.push_connection(name, Some(rooms), true, center, open, locked)
    }

    /// Add an always-open passage.  `rooms` may be `None` for openings that
    /// do not join two explicit rooms; those never contribute to adjacency.
    pub fn add_passage(&mut self, name: &str, rooms: Option<(RoomId, RoomId)>) -> ConnId {
        self.push_connection(name, rooms, false, None, true, false)
    }

    /// Attach the display rectangle of a door (presentation geometry only).
    pub fn set_connection_rect(&mut self, conn: ConnId, rect: Rect) {
        self.connections[conn.index()].rect = Some(rect);
    }

    /// Designate the room the hero enters the level in.
    pub fn set_start_room(&mut self, room: RoomId) {
        self.start_room = Some(room);
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    fn push_connection(
        &mut self,
        name:    &str,
        rooms:   Option<(RoomId, RoomId)>,
        is_door: bool,
        center:  Option<Vec2>,
        open:    bool,
        locked:  bool,
    ) -> ConnId {
        let id = ConnId(self.connections.len() as u32);
        self.connections.push(Connection::new(
            id,
            name.to_owned(),
            rooms,
            is_door,
            center,
            None,
            open,
            locked,
        ));
        self.conn_names.insert(name.to_owned(), id);
        id
    }

    /// Consume the builder and produce a [`WorldGraph`].
    pub fn build(self) -> WorldGraph {
        // Per-room adjacency in connection insertion order.
        let mut room_conns = vec![Vec::new(); self.rooms.len()];
        for conn in &self.connections {
            if let Some((a, b)) = conn.rooms {
                room_conns[a.index()].push(conn.id);
                room_conns[b.index()].push(conn.id);
            }
        }

        WorldGraph {
            rooms:       self.rooms,
            connections: self.connections,
            room_conns,
            room_names:  self.room_names,
            conn_names:  self.conn_names,
            start_room:  self.start_room,
        }
    }
}

impl Default for WorldGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
