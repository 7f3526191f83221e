//! Rooms: physical bounds plus status tags.

use outpost_core::{Rect, RoomId, Vec2};

/// Agents keep this far from a room's walls when choosing interior points.
pub const WALL_MARGIN: f32 = 15.0;

// ── RoomTags ─────────────────────────────────────────────────────────────────

/// Non-exclusive status tags a room can carry.
///
/// `first_aid` and `ammo` are consumable: cleared when the hero collects the
/// item, never re-added.  `camera` makes the room (and its occupants)
/// unconditionally visible to the display layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomTags {
    pub camera:    bool,
    pub terminal:  bool,
    pub puzzle:    bool,
    pub first_aid: bool,
    pub ammo:      bool,
}

impl RoomTags {
    /// Consume the first-aid item if present.  Returns `true` exactly once.
    pub fn take_first_aid(&mut self) -> bool {
        std::mem::take(&mut self.first_aid)
    }

    /// Consume the ammo item if present.  Returns `true` exactly once.
    pub fn take_ammo(&mut self) -> bool {
        std::mem::take(&mut self.ammo)
    }
}

// ── Room ─────────────────────────────────────────────────────────────────────

/// A node in the world graph with physical bounds and status tags.
///
/// Rooms are created once at world initialization from external layout data;
/// only `tags` mutates afterwards (item consumption).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub id:     RoomId,
    pub name:   String,
    pub rect:   Rect,
    pub center: Vec2,
    pub tags:   RoomTags,
}

impl Room {
    /// A point near `origin`, displaced by `scale` of the room extents in
    /// the direction `angle` (radians), clamped inside the walls.
    ///
    /// Used both for arrival targets (so co-located agents don't stack on
    /// the exact room center) and for idle fidgeting.  The caller samples
    /// the angle; the displacement itself is deterministic.
    pub fn offset_point(&self, origin: Vec2, scale: f32, angle: f32) -> Vec2 {
        let offset = Vec2::new(
            self.rect.width * scale * angle.cos(),
            self.rect.height * scale * angle.sin(),
        );
        self.rect.clamp_inset(origin + offset, WALL_MARGIN)
    }
}
