//! The movement controller: advances one agent along its route.
//!
//! # Movement model
//!
//! A route is a list of legs (see [`RouteLeg`]); each leg is walked in one
//! or two straight sub-legs:
//!
//! 1. if the leg crosses a door with a physical center, head for that
//!    crossing point first;
//! 2. then head for a scattered point inside the destination room (scattered
//!    so co-located agents don't stack on the exact center).
//!
//! Positions interpolate at `speed` units per simulated second and snap
//! exactly onto a waypoint when the remaining distance is smaller than the
//! step — no overshoot, and movement never rewinds.  Leftover time from a
//! snap carries into the next sub-leg within the same call, so splitting a
//! time budget across several calls lands on the same position as one call.
//!
//! # Blocked doors
//!
//! A door that is found closed — at waypoint derivation or while heading for
//! its crossing point — invalidates the whole route: the agent freezes in
//! place and a [`MoveEvent::RouteInvalidated`] is reported.  This is the
//! normal outcome of a door closing ahead of an agent, not an error.

use outpost_agent::{Agent, Transit, TransitPhase};
use outpost_core::{AgentRng, ConnId, RoomId, Vec2};
use outpost_world::{RouteLeg, Router, WorldGraph, WorldResult};

/// How far arrival points scatter from the room center, as a fraction of the
/// room extents.
const ENTRY_SCATTER: f32 = 0.1;

// ── MoveEvent ────────────────────────────────────────────────────────────────

/// What happened to the advanced agent during one `advance` call.
///
/// The controller reports; the simulation layer reacts (vision refresh, item
/// pickup, wander rescheduling) and re-emits to observers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveEvent {
    /// The agent reached a leg's destination point; `agent.room` now equals
    /// `room`.
    EnteredRoom { room: RoomId },
    /// The route just became empty — the agent arrived at its final
    /// destination.  Reported exactly once per arrival.
    RouteCompleted,
    /// The leading leg's connection was not open; the route was dropped and
    /// the agent froze in place.
    RouteInvalidated { conn: ConnId },
}

// ── MovementController ───────────────────────────────────────────────────────

/// Stateless driver over a pluggable [`Router`]; all movement state lives on
/// the agent itself.
pub struct MovementController<R: Router> {
    pub router: R,
}

impl<R: Router> MovementController<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    // ── Advancing ─────────────────────────────────────────────────────────

    /// Move `agent` along its route for `elapsed_secs` simulated seconds.
    ///
    /// No-op for dead agents and for agents with neither route nor waypoint.
    pub fn advance(
        &self,
        world:        &WorldGraph,
        agent:        &mut Agent,
        elapsed_secs: f32,
        rng:          &mut AgentRng,
    ) -> Vec<MoveEvent> {
        let mut events = Vec::new();
        if !agent.is_alive() {
            return events;
        }

        let mut remaining = elapsed_secs;
        while remaining > 0.0 {
            // Derive the next waypoint from the leading leg if none is active.
            let transit = match agent.transit {
                Some(t) => t,
                None => {
                    let Some(&leg) = agent.route.first() else { break };
                    match self.derive_waypoint(world, leg, rng) {
                        Ok(t) => {
                            agent.transit = Some(t);
                            t
                        }
                        Err(conn) => {
                            agent.clear_route();
                            events.push(MoveEvent::RouteInvalidated { conn });
                            break;
                        }
                    }
                }
            };

            // A door can close while the agent is still approaching it.
            if let TransitPhase::Crossing(conn) = transit.phase {
                if !world.is_open(conn) {
                    agent.clear_route();
                    events.push(MoveEvent::RouteInvalidated { conn });
                    break;
                }
            }

            let to_target = transit.target - agent.position;
            let dist = to_target.length();
            let step = agent.speed * remaining;

            if step < dist {
                agent.position = agent.position + to_target.normalized() * step;
                break;
            }

            // Snap onto the waypoint and carry the unspent time forward.
            agent.position = transit.target;
            remaining -= if agent.speed > 0.0 { dist / agent.speed } else { remaining };
            self.finish_subleg(world, agent, transit.phase, rng, &mut events);
        }

        events
    }

    /// Handle reaching the active waypoint.
    fn finish_subleg(
        &self,
        world:  &WorldGraph,
        agent:  &mut Agent,
        phase:  TransitPhase,
        rng:    &mut AgentRng,
        events: &mut Vec<MoveEvent>,
    ) {
        match phase {
            // Door center reached: swing into the destination room without
            // popping the route entry.
            TransitPhase::Crossing(_) => match agent.route.first().copied() {
                Some(leg) => {
                    agent.transit = Some(Transit {
                        target: room_scatter(world, leg.room(), rng),
                        phase:  TransitPhase::Entering,
                    });
                }
                None => agent.transit = None,
            },

            // Destination point reached: the agent is now in the leg's room.
            TransitPhase::Entering => {
                if let Some(leg) = agent.route.first().copied() {
                    agent.route.remove(0);
                    agent.room = leg.room();
                    agent.transit = None;
                    log::trace!("'{}' entered room {}", agent.name, leg.room());
                    events.push(MoveEvent::EnteredRoom { room: leg.room() });
                    if agent.route.is_empty() {
                        events.push(MoveEvent::RouteCompleted);
                    }
                } else {
                    agent.transit = None;
                }
            }
        }
    }

    /// First waypoint for `leg`, or the blocking connection.
    fn derive_waypoint(
        &self,
        world: &WorldGraph,
        leg:   RouteLeg,
        rng:   &mut AgentRng,
    ) -> Result<Transit, ConnId> {
        match leg {
            RouteLeg::Door { room, conn } => {
                let connection = world.connection(conn);
                if !connection.is_open() {
                    return Err(conn);
                }
                match connection.center {
                    Some(center) => Ok(Transit {
                        target: center,
                        phase:  TransitPhase::Crossing(conn),
                    }),
                    // A door the layout gave no crossing point is walked
                    // like a plain opening.
                    None => Ok(Transit {
                        target: room_scatter(world, room, rng),
                        phase:  TransitPhase::Entering,
                    }),
                }
            }
            RouteLeg::Room { room } => Ok(Transit {
                target: room_scatter(world, room, rng),
                phase:  TransitPhase::Entering,
            }),
        }
    }

    // ── Route planning ────────────────────────────────────────────────────

    /// Route `agent` to `dest`, preserving any in-flight leg.
    ///
    /// An agent already on its way keeps the leg it has committed to and the
    /// fresh path is spliced on after it; an idle agent routes from its
    /// current room.  On routing failure the existing route is left
    /// untouched.
    pub fn set_destination(
        &self,
        world: &WorldGraph,
        agent: &mut Agent,
        dest:  RoomId,
    ) -> WorldResult<()> {
        match agent.route.first().copied() {
            Some(committed) => {
                let tail = self.router.shortest_path(world, committed.room(), dest)?;
                let mut route = Vec::with_capacity(tail.len() + 1);
                route.push(committed);
                route.extend(tail);
                agent.route = route;
                // transit untouched: the in-flight sub-leg keeps walking
            }
            None => {
                agent.route = self.router.shortest_path(world, agent.room, dest)?;
            }
        }
        Ok(())
    }
}

/// A scattered arrival point inside `room`.
fn room_scatter(world: &WorldGraph, room: RoomId, rng: &mut AgentRng) -> Vec2 {
    let r = world.room(room);
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    r.offset_point(r.center, ENTRY_SCATTER, angle)
}
