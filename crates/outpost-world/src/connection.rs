//! Connections: edges in the world graph, optionally lockable doors.

use outpost_core::{ConnId, Rect, RoomId, Vec2};

/// An edge between two rooms — a door or an open passage.
///
/// Invariant: a `locked` connection is never `open`.  The `open`/`locked`
/// fields are private so every mutation path preserves that.
///
/// `rooms` may be `None` for passages that do not join two explicit rooms
/// (decorative openings in the layout); such connections never contribute to
/// adjacency.  Doors have a physical crossing point (`center`); plain
/// openings do not.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub id:     ConnId,
    pub name:   String,
    pub rooms:  Option<(RoomId, RoomId)>,
    pub is_door: bool,
    pub center: Option<Vec2>,
    pub rect:   Option<Rect>,
    open:   bool,
    locked: bool,
}

impl Connection {
    pub(crate) fn new(
        id:      ConnId,
        name:    String,
        rooms:   Option<(RoomId, RoomId)>,
        is_door: bool,
        center:  Option<Vec2>,
        rect:    Option<Rect>,
        open:    bool,
        locked:  bool,
    ) -> Self {
        Self {
            id,
            name,
            rooms,
            is_door,
            center,
            rect,
            // locked doors are always closed
            open: open && !locked,
            locked,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The room on the other side of `room`, if this connection joins two
    /// rooms and `room` is one of them.
    pub fn other_side(&self, room: RoomId) -> Option<RoomId> {
        match self.rooms {
            Some((a, b)) if a == room => Some(b),
            Some((a, b)) if b == room => Some(a),
            _ => None,
        }
    }

    /// Flip open/closed.  Only doors toggle; a locked door silently refuses.
    /// Returns whether the state changed.
    pub(crate) fn toggle(&mut self) -> bool {
        if !self.is_door || self.locked {
            return false;
        }
        self.open = !self.open;
        true
    }

    /// Lock the connection, closing it if necessary.
    pub(crate) fn lock(&mut self) {
        self.locked = true;
        self.open = false;
    }

    pub(crate) fn unlock(&mut self) {
        self.locked = false;
    }
}
