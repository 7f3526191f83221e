//! Read-only simulation state passed to every behavior.

use outpost_agent::AgentStore;
use outpost_core::Tick;
use outpost_world::WorldGraph;

/// A read-only snapshot of the simulation state for one tick's intent phase.
///
/// Behaviors may look at any agent and any room through this, but all
/// mutation goes through [`Intent`][crate::Intent]s applied afterwards.
pub struct BehaviorContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// The world graph (adjacency honors current door states).
    pub world: &'a WorldGraph,

    /// The live agent population.
    pub agents: &'a AgentStore,
}

impl<'a> BehaviorContext<'a> {
    #[inline]
    pub fn new(tick: Tick, world: &'a WorldGraph, agents: &'a AgentStore) -> Self {
        Self { tick, world, agents }
    }
}
