//! JSON level loader.
//!
//! Levels arrive from whatever parses the visual layout as a JSON document
//! listing rooms (with display rectangles and tags) and connections (with
//! lock state and door geometry).  The engine computes no geometry itself —
//! rectangles and crossing points are taken as supplied.
//!
//! Rooms and connections are **arrays**, not maps: their file order becomes
//! the graph's insertion order, which the router's tie-break depends on.
//!
//! # Format
//!
//! ```json
//! {
//!   "start_room": "hall",
//!   "rooms": [
//!     { "name": "hall", "rect": { "left": 0, "top": 0, "width": 120, "height": 80 },
//!       "camera": true }
//!   ],
//!   "connections": [
//!     { "name": "hall-lab", "door": true, "open": false, "locked": false,
//!       "rooms": ["hall", "lab"], "center": { "x": 120, "y": 40 } }
//!   ]
//! }
//! ```

use std::io::Read;

use serde::Deserialize;

use outpost_core::{Rect, RoomId, Vec2};

use crate::room::RoomTags;
use crate::{WorldError, WorldGraph, WorldGraphBuilder, WorldResult};

// ── Wire structs ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LevelSpec {
    #[serde(default)]
    start_room: Option<String>,
    rooms: Vec<RoomSpec>,
    connections: Vec<ConnSpec>,
}

#[derive(Debug, Deserialize)]
struct RoomSpec {
    name: String,
    rect: RectSpec,
    #[serde(default)]
    camera: bool,
    #[serde(default)]
    terminal: bool,
    #[serde(default)]
    puzzle: bool,
    #[serde(default)]
    first_aid: bool,
    #[serde(default)]
    ammo: bool,
}

#[derive(Debug, Deserialize)]
struct ConnSpec {
    name: String,
    #[serde(default)]
    door: bool,
    #[serde(default)]
    open: bool,
    #[serde(default)]
    locked: bool,
    /// The two rooms this connection joins, by name.  Absent for openings
    /// that do not join explicit rooms.
    #[serde(default)]
    rooms: Option<(String, String)>,
    #[serde(default)]
    center: Option<PointSpec>,
    #[serde(default)]
    rect: Option<RectSpec>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
struct RectSpec {
    left:   f32,
    top:    f32,
    width:  f32,
    height: f32,
}

impl From<RectSpec> for Rect {
    fn from(r: RectSpec) -> Rect {
        Rect::new(r.left, r.top, r.width, r.height)
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
struct PointSpec {
    x: f32,
    y: f32,
}

impl From<PointSpec> for Vec2 {
    fn from(p: PointSpec) -> Vec2 {
        Vec2::new(p.x, p.y)
    }
}

// ── Entry points ─────────────────────────────────────────────────────────────

/// Parse a level from a JSON string.
pub fn load_level_str(json: &str) -> WorldResult<WorldGraph> {
    build_level(serde_json::from_str(json)?)
}

/// Parse a level from any reader (file, embedded bytes, network payload).
pub fn load_level_reader<R: Read>(reader: R) -> WorldResult<WorldGraph> {
    build_level(serde_json::from_reader(reader)?)
}

fn build_level(spec: LevelSpec) -> WorldResult<WorldGraph> {
    let mut b = WorldGraphBuilder::new();

    let mut names: Vec<String> = Vec::with_capacity(spec.rooms.len());
    for room in spec.rooms {
        let tags = RoomTags {
            camera:    room.camera,
            terminal:  room.terminal,
            puzzle:    room.puzzle,
            first_aid: room.first_aid,
            ammo:      room.ammo,
        };
        b.add_room(&room.name, room.rect.into(), tags);
        names.push(room.name);
    }

    let find_room = |name: &str| -> WorldResult<RoomId> {
        names
            .iter()
            .position(|n| n == name)
            .map(|i| RoomId(i as u32))
            .ok_or_else(|| WorldError::UnknownRoom(name.to_owned()))
    };

    for conn in spec.connections {
        let center = conn.center.map(Vec2::from);
        let id = match conn.rooms {
            Some((a, c)) => {
                let a = find_room(&a)?;
                let c = find_room(&c)?;
                if conn.door {
                    b.add_door(&conn.name, (a, c), center, conn.open, conn.locked)
                } else {
                    b.add_passage(&conn.name, Some((a, c)))
                }
            }
            None => b.add_passage(&conn.name, None),
        };
        if let Some(rect) = conn.rect {
            b.set_connection_rect(id, rect.into());
        }
    }

    if let Some(start) = spec.start_room {
        let id = find_room(&start)?;
        b.set_start_room(id);
    }

    let world = b.build();
    log::info!(
        "loaded level: {} rooms, {} connections",
        world.room_count(),
        world.connections().len()
    );
    Ok(world)
}
