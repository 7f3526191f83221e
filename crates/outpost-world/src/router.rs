//! Routing trait and the default hop-count router.
//!
//! # Pluggability
//!
//! The simulation calls routing via the [`Router`] trait, so a different
//! search (A* over real distances, cost-aware variants) can be swapped in
//! without touching the engine core.  The default [`HopRouter`] treats every
//! traversable connection as unit cost — routing does not model terrain.
//!
//! # Tie-breaking
//!
//! When several equally short paths exist, the path returned follows the
//! **connection insertion order** of each room's adjacency list: during
//! forward reconstruction a neighbor is only chosen over the incumbent when
//! its goal distance is *strictly* smaller, so the first candidate in
//! enumeration order wins ties.  This single-`nearest` comparison is
//! intentional, pathological tie cases included — tests pin the chosen
//! routes, so do not replace it with parent-pointer BFS.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use outpost_core::{ConnId, RoomId};

use crate::{WorldError, WorldGraph, WorldResult};

// ── RouteLeg ─────────────────────────────────────────────────────────────────

/// One step of a route: the room to enter, and the connection crossed to get
/// there when the step passes through one.
///
/// The router always emits [`Door`](RouteLeg::Door) legs; [`Room`](RouteLeg::Room)
/// legs come from externally supplied patrol routes, which name rooms only.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteLeg {
    /// Walk into `room` without a designated crossing point.
    Room { room: RoomId },
    /// Cross `conn` into `room`.
    Door { room: RoomId, conn: ConnId },
}

impl RouteLeg {
    /// The destination room of this leg.
    #[inline]
    pub fn room(&self) -> RoomId {
        match *self {
            RouteLeg::Room { room } | RouteLeg::Door { room, .. } => room,
        }
    }

    /// The connection crossed by this leg, if any.
    #[inline]
    pub fn conn(&self) -> Option<ConnId> {
        match *self {
            RouteLeg::Room { .. } => None,
            RouteLeg::Door { conn, .. } => Some(conn),
        }
    }
}

// ── Router trait ─────────────────────────────────────────────────────────────

/// Pluggable shortest-path search over the live open-subgraph.
pub trait Router {
    /// Compute a path from `from` to `to` honoring connection traversability
    /// (open, unlocked).
    ///
    /// `from == to` yields an empty path.  An unreachable goal is
    /// [`WorldError::NoPath`].
    fn shortest_path(
        &self,
        world: &WorldGraph,
        from:  RoomId,
        to:    RoomId,
    ) -> WorldResult<Vec<RouteLeg>>;
}

// ── HopRouter ────────────────────────────────────────────────────────────────

/// Breadth-first search weighted by hop count only.
///
/// Runs a reverse single-source BFS from the goal, recording each reached
/// room's distance *to* the goal, then reconstructs the forward path by
/// walking downhill through those distances.  Distances are memoized only
/// for the duration of one call — the graph may change between calls as
/// doors open and close.
pub struct HopRouter;

impl Router for HopRouter {
    fn shortest_path(
        &self,
        world: &WorldGraph,
        from:  RoomId,
        to:    RoomId,
    ) -> WorldResult<Vec<RouteLeg>> {
        if from == to {
            return Ok(vec![]);
        }

        // ── Reverse BFS from the goal ─────────────────────────────────────
        //
        // Stops as soon as `from` is dequeued; rooms not yet discovered at
        // that point simply have no recorded distance and are skipped during
        // reconstruction.
        let mut dist: FxHashMap<RoomId, u32> = FxHashMap::default();
        dist.insert(to, 0);

        let mut queue = VecDeque::new();
        queue.push_back(to);

        let mut reached = false;
        while let Some(pos) = queue.pop_front() {
            if pos == from {
                reached = true;
                break;
            }
            let d = dist[&pos];
            for (neighbor, _conn) in world.connected_rooms(pos) {
                dist.entry(neighbor).or_insert_with(|| {
                    queue.push_back(neighbor);
                    d + 1
                });
            }
        }
        if !reached {
            return Err(WorldError::NoPath { from, to });
        }

        // ── Forward reconstruction ────────────────────────────────────────
        //
        // From each position, take the first neighbor (in connection
        // insertion order) whose goal distance is strictly smaller than the
        // best seen so far.  See the module docs on tie-breaking.
        let mut path = Vec::new();
        let mut pos = from;
        while pos != to {
            let mut nearest = dist[&pos];
            let mut step: Option<(RoomId, ConnId)> = None;
            for (neighbor, conn) in world.connected_rooms(pos) {
                if let Some(&d) = dist.get(&neighbor) {
                    if d < nearest {
                        nearest = d;
                        step = Some((neighbor, conn));
                    }
                }
            }
            match step {
                Some((room, conn)) => {
                    path.push(RouteLeg::Door { room, conn });
                    pos = room;
                }
                // Only possible if the graph mutated underneath us, which
                // `&WorldGraph` rules out; treat as unreachable.
                None => return Err(WorldError::NoPath { from, to }),
            }
        }
        Ok(path)
    }
}
