//! Unit tests for outpost-world.
//!
//! All tests use hand-crafted levels so they run without any layout file.

#[cfg(test)]
mod helpers {
    use outpost_core::{Rect, RoomId, Vec2};

    use crate::{RoomTags, WorldGraph, WorldGraphBuilder};

    /// 100×100 rooms side by side starting at x = 100 * index.
    pub fn room_rect(i: u32) -> Rect {
        Rect::new(100.0 * i as f32, 0.0, 100.0, 100.0)
    }

    /// Door center on the shared wall between adjacent test rooms.
    pub fn door_center(left_room: u32) -> Vec2 {
        Vec2::new(100.0 * (left_room + 1) as f32, 50.0)
    }

    /// Corridor of `n` rooms chained by open doors: r0 – r1 – … – r(n-1).
    pub fn corridor(n: u32) -> (WorldGraph, Vec<RoomId>) {
        let mut b = WorldGraphBuilder::new();
        let rooms: Vec<RoomId> = (0..n)
            .map(|i| b.add_room(&format!("r{i}"), room_rect(i), RoomTags::default()))
            .collect();
        for i in 0..n.saturating_sub(1) as usize {
            b.add_door(
                &format!("d{i}"),
                (rooms[i], rooms[i + 1]),
                Some(door_center(i as u32)),
                true,
                false,
            );
        }
        (b.build(), rooms)
    }
}

// ── Graph structure & adjacency ──────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use outpost_core::Vec2;

    use super::helpers::{corridor, door_center, room_rect};
    use crate::{RoomTags, WorldGraphBuilder};

    #[test]
    fn rooms_and_names() {
        let (world, rooms) = corridor(3);
        assert_eq!(world.room_count(), 3);
        assert_eq!(world.room_by_name("r1"), Some(rooms[1]));
        assert_eq!(world.room_by_name("nope"), None);
        assert_eq!(world.room(rooms[0]).center, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn connected_rooms_yields_open_only() {
        let mut b = WorldGraphBuilder::new();
        let a = b.add_room("a", room_rect(0), RoomTags::default());
        let c = b.add_room("b", room_rect(1), RoomTags::default());
        let d = b.add_room("c", room_rect(2), RoomTags::default());
        b.add_door("open", (a, c), Some(door_center(0)), true, false);
        b.add_door("closed", (a, d), Some(door_center(1)), false, false);
        let world = b.build();

        let neighbors: Vec<_> = world.connected_rooms(a).map(|(r, _)| r).collect();
        assert_eq!(neighbors, vec![c]);
    }

    #[test]
    fn connection_without_rooms_contributes_nothing() {
        let mut b = WorldGraphBuilder::new();
        let a = b.add_room("a", room_rect(0), RoomTags::default());
        b.add_passage("decorative", None);
        let world = b.build();
        assert_eq!(world.connected_rooms(a).count(), 0);
    }

    #[test]
    fn insertion_order_preserved() {
        let mut b = WorldGraphBuilder::new();
        let a = b.add_room("a", room_rect(0), RoomTags::default());
        let c = b.add_room("b", room_rect(1), RoomTags::default());
        let d = b.add_room("c", room_rect(2), RoomTags::default());
        let first = b.add_door("first", (a, c), Some(door_center(0)), true, false);
        let second = b.add_door("second", (a, d), Some(door_center(1)), true, false);
        let world = b.build();

        let conns: Vec<_> = world.connected_rooms(a).map(|(_, cid)| cid).collect();
        assert_eq!(conns, vec![first, second]);
    }

    #[test]
    fn locked_door_is_created_closed() {
        let mut b = WorldGraphBuilder::new();
        let a = b.add_room("a", room_rect(0), RoomTags::default());
        let c = b.add_room("b", room_rect(1), RoomTags::default());
        // `open: true` must lose against `locked: true`
        let d = b.add_door("d", (a, c), Some(door_center(0)), true, true);
        let world = b.build();
        assert!(!world.is_open(d));
        assert!(world.connection(d).is_locked());
    }

    #[test]
    fn toggle_flips_unlocked_doors_only() {
        let mut b = WorldGraphBuilder::new();
        let a = b.add_room("a", room_rect(0), RoomTags::default());
        let c = b.add_room("b", room_rect(1), RoomTags::default());
        let door = b.add_door("door", (a, c), Some(door_center(0)), false, false);
        let locked = b.add_door("locked", (a, c), Some(door_center(0)), false, true);
        let passage = b.add_passage("pass", Some((a, c)));
        let mut world = b.build();

        assert!(world.toggle(door));
        assert!(world.is_open(door));
        assert!(world.toggle(door));
        assert!(!world.is_open(door));

        // silent rejections, state unchanged
        assert!(!world.toggle(locked));
        assert!(!world.is_open(locked));
        assert!(!world.toggle(passage));
        assert!(world.is_open(passage));
    }

    #[test]
    fn lock_closes_an_open_door() {
        let mut b = WorldGraphBuilder::new();
        let a = b.add_room("a", room_rect(0), RoomTags::default());
        let c = b.add_room("b", room_rect(1), RoomTags::default());
        let d = b.add_door("d", (a, c), Some(door_center(0)), true, false);
        let mut world = b.build();

        world.lock(d);
        assert!(!world.is_open(d));
        assert!(!world.toggle(d));

        world.unlock(d);
        assert!(world.toggle(d));
        assert!(world.is_open(d));
    }

    #[test]
    fn consumable_tags_fire_once() {
        let mut b = WorldGraphBuilder::new();
        let tags = RoomTags { first_aid: true, ammo: true, ..RoomTags::default() };
        let a = b.add_room("a", room_rect(0), tags);
        let mut world = b.build();

        assert!(world.take_first_aid(a));
        assert!(!world.take_first_aid(a));
        assert!(world.take_ammo(a));
        assert!(!world.take_ammo(a));
        // camera is not consumable
        assert!(!world.room(a).tags.camera);
    }
}

// ── Room offset points ───────────────────────────────────────────────────────

#[cfg(test)]
mod offsets {
    use outpost_core::Vec2;

    use super::helpers::corridor;
    use crate::WALL_MARGIN;

    #[test]
    fn offset_point_stays_inside_walls() {
        let (world, rooms) = corridor(1);
        let room = world.room(rooms[0]);
        for i in 0..32 {
            let angle = i as f32 * 0.3;
            let p = room.offset_point(room.center, 0.4, angle);
            assert!(room.rect.contains_inset(p, WALL_MARGIN), "escaped at angle {angle}: {p}");
        }
    }

    #[test]
    fn offset_point_clamps_outside_origin() {
        let (world, rooms) = corridor(1);
        let room = world.room(rooms[0]);
        let p = room.offset_point(Vec2::new(-500.0, 900.0), 0.1, 1.0);
        assert!(room.rect.contains_inset(p, WALL_MARGIN));
    }
}

// ── Routing ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use super::helpers::{corridor, door_center, room_rect};
    use crate::{HopRouter, RoomTags, RouteLeg, Router, WorldError, WorldGraphBuilder};

    #[test]
    fn same_room_is_empty_path() {
        let (world, rooms) = corridor(2);
        let path = HopRouter.shortest_path(&world, rooms[0], rooms[0]).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn corridor_path_has_true_hop_length() {
        let (world, rooms) = corridor(5);
        let path = HopRouter.shortest_path(&world, rooms[0], rooms[4]).unwrap();
        assert_eq!(path.len(), 4);
        let visited: Vec<_> = path.iter().map(|leg| leg.room()).collect();
        assert_eq!(visited, vec![rooms[1], rooms[2], rooms[3], rooms[4]]);
        // every leg crosses a connection
        assert!(path.iter().all(|leg| leg.conn().is_some()));
    }

    #[test]
    fn closed_door_blocks_then_open_reroutes() {
        // rooms {a, b, c}: a–b open, b–c closed.
        let mut b = WorldGraphBuilder::new();
        let ra = b.add_room("a", room_rect(0), RoomTags::default());
        let rb = b.add_room("b", room_rect(1), RoomTags::default());
        let rc = b.add_room("c", room_rect(2), RoomTags::default());
        let ab = b.add_door("ab", (ra, rb), Some(door_center(0)), true, false);
        let bc = b.add_door("bc", (rb, rc), Some(door_center(1)), false, false);
        let mut world = b.build();

        let result = HopRouter.shortest_path(&world, ra, rc);
        assert!(matches!(result, Err(WorldError::NoPath { .. })));

        world.toggle(bc);
        let path = HopRouter.shortest_path(&world, ra, rc).unwrap();
        assert_eq!(
            path,
            vec![
                RouteLeg::Door { room: rb, conn: ab },
                RouteLeg::Door { room: rc, conn: bc },
            ]
        );
    }

    #[test]
    fn disconnected_rooms_have_no_path() {
        let mut b = WorldGraphBuilder::new();
        let a = b.add_room("a", room_rect(0), RoomTags::default());
        let c = b.add_room("b", room_rect(1), RoomTags::default());
        let world = b.build();
        assert!(matches!(
            HopRouter.shortest_path(&world, a, c),
            Err(WorldError::NoPath { .. })
        ));
    }

    #[test]
    fn equal_paths_tie_break_by_insertion_order() {
        // Diamond: start → {left, right} → goal, both 2 hops.  The door to
        // `left` is inserted before the door to `right`, so the route must
        // go through `left`.
        let mut b = WorldGraphBuilder::new();
        let start = b.add_room("start", room_rect(0), RoomTags::default());
        let left  = b.add_room("left", room_rect(1), RoomTags::default());
        let right = b.add_room("right", room_rect(2), RoomTags::default());
        let goal  = b.add_room("goal", room_rect(3), RoomTags::default());
        b.add_door("start-left", (start, left), Some(door_center(0)), true, false);
        b.add_door("start-right", (start, right), Some(door_center(1)), true, false);
        b.add_door("left-goal", (left, goal), Some(door_center(2)), true, false);
        b.add_door("right-goal", (right, goal), Some(door_center(2)), true, false);
        let world = b.build();

        let path = HopRouter.shortest_path(&world, start, goal).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].room(), left);
    }

    #[test]
    fn path_length_matches_bfs_distance_on_ring() {
        // 6-room ring: opposite rooms are 3 hops apart either way.
        let mut b = WorldGraphBuilder::new();
        let rooms: Vec<_> = (0..6)
            .map(|i| b.add_room(&format!("r{i}"), room_rect(i), RoomTags::default()))
            .collect();
        for i in 0..6 {
            let j = (i + 1) % 6;
            b.add_door(&format!("d{i}"), (rooms[i], rooms[j]), Some(door_center(i as u32)), true, false);
        }
        let world = b.build();

        for (from, to, hops) in [(0, 3, 3), (0, 2, 2), (1, 5, 2), (2, 2, 0)] {
            let path = HopRouter.shortest_path(&world, rooms[from], rooms[to]).unwrap();
            assert_eq!(path.len(), hops, "{from} -> {to}");
        }
    }

    #[test]
    fn route_through_passage_with_rooms() {
        let mut b = WorldGraphBuilder::new();
        let a = b.add_room("a", room_rect(0), RoomTags::default());
        let c = b.add_room("b", room_rect(1), RoomTags::default());
        let p = b.add_passage("arch", Some((a, c)));
        let world = b.build();

        let path = HopRouter.shortest_path(&world, a, c).unwrap();
        assert_eq!(path, vec![RouteLeg::Door { room: c, conn: p }]);
    }
}

// ── Level loader ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use crate::{load_level_str, WorldError};

    const LEVEL: &str = r#"{
        "start_room": "hall",
        "rooms": [
            { "name": "hall", "rect": { "left": 0, "top": 0, "width": 120, "height": 80 }, "camera": true },
            { "name": "lab",  "rect": { "left": 120, "top": 0, "width": 100, "height": 80 }, "first_aid": true },
            { "name": "store", "rect": { "left": 220, "top": 0, "width": 60, "height": 80 }, "ammo": true }
        ],
        "connections": [
            { "name": "hall-lab", "door": true, "open": true,
              "rooms": ["hall", "lab"], "center": { "x": 120, "y": 40 } },
            { "name": "lab-store", "door": true, "locked": true, "open": true,
              "rooms": ["lab", "store"], "center": { "x": 220, "y": 40 } },
            { "name": "vent", "rooms": ["hall", "store"] }
        ]
    }"#;

    #[test]
    fn loads_rooms_connections_and_start() {
        let world = load_level_str(LEVEL).unwrap();
        assert_eq!(world.room_count(), 3);
        assert_eq!(world.connections().len(), 3);

        let hall = world.room_by_name("hall").unwrap();
        assert_eq!(world.start_room, Some(hall));
        assert!(world.room(hall).tags.camera);

        let lab = world.room_by_name("lab").unwrap();
        assert!(world.room(lab).tags.first_aid);
    }

    #[test]
    fn locked_overrides_open_in_level_data() {
        let world = load_level_str(LEVEL).unwrap();
        let conn = world.connection_by_name("lab-store").unwrap();
        assert!(world.connection(conn).is_locked());
        assert!(!world.is_open(conn));
    }

    #[test]
    fn passage_is_open_without_flags() {
        let world = load_level_str(LEVEL).unwrap();
        let vent = world.connection_by_name("vent").unwrap();
        assert!(world.is_open(vent));
        assert!(!world.connection(vent).is_door);
    }

    #[test]
    fn unknown_room_reference_errors() {
        let bad = r#"{
            "rooms": [ { "name": "a", "rect": { "left": 0, "top": 0, "width": 10, "height": 10 } } ],
            "connections": [ { "name": "x", "door": true, "rooms": ["a", "ghost"] } ]
        }"#;
        assert!(matches!(load_level_str(bad), Err(WorldError::UnknownRoom(_))));
    }

    #[test]
    fn malformed_json_errors() {
        assert!(matches!(load_level_str("{"), Err(WorldError::Json(_))));
    }
}
