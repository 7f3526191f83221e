//! The live agent population and its per-agent RNGs.
//!
//! # Why two structs?
//!
//! The behavior layer reads the whole population (`&AgentStore`) while
//! rolling dice on one agent's RNG (`&mut AgentRng`).  Keeping the RNGs in
//! a separate `AgentRngs` struct lets both borrows coexist; a single struct
//! would trip the borrow checker on every combat roll.

use rustc_hash::FxHashMap;

use outpost_core::{AgentId, AgentRng, RoomId, SimRng, Tick, Vec2};

use crate::agent::{Agent, AgentKind};
use crate::template::{random_name, AgentTemplate, HERO_NAME};

// ── AgentStore ───────────────────────────────────────────────────────────────

/// The live agent set: hero plus monsters, in spawn order.
///
/// IDs are assigned sequentially and never reused within a run, so reaping
/// a monster cannot make a stale `AgentId` point at a different agent.
#[derive(Default)]
pub struct AgentStore {
    agents:  Vec<Agent>,
    next_id: u32,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Spawn the hero.  There is exactly one; spawning a second is a logic
    /// error the caller (the sim builder) must prevent.
    pub fn spawn_hero(
        &mut self,
        template: &AgentTemplate,
        room:     RoomId,
        position: Vec2,
        now:      Tick,
    ) -> AgentId {
        debug_assert!(self.hero().is_none(), "hero already spawned");
        self.push(template, HERO_NAME.to_owned(), AgentKind::Hero, room, position, now)
    }

    /// Spawn a monster with a generated name unique among live agents.
    pub fn spawn_monster(
        &mut self,
        template: &AgentTemplate,
        room:     RoomId,
        position: Vec2,
        now:      Tick,
        rng:      &mut SimRng,
    ) -> AgentId {
        let mut name = random_name(rng);
        while self.agents.iter().any(|a| a.name == name) {
            name = random_name(rng);
        }
        self.push(template, name, AgentKind::Monster, room, position, now)
    }

    fn push(
        &mut self,
        template: &AgentTemplate,
        name:     String,
        kind:     AgentKind,
        room:     RoomId,
        position: Vec2,
        now:      Tick,
    ) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        self.agents.push(template.instantiate(id, name, kind, room, position, now));
        id
    }

    // ── Access ────────────────────────────────────────────────────────────

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.id == id)
    }

    pub fn hero(&self) -> Option<&Agent> {
        self.agents.iter().find(|a| a.is_hero())
    }

    pub fn hero_mut(&mut self) -> Option<&mut Agent> {
        self.agents.iter_mut().find(|a| a.is_hero())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.iter_mut()
    }

    /// Snapshot of all live agent IDs in spawn order.  Taken before loops
    /// that mutate the store mid-iteration.
    pub fn live_ids(&self) -> Vec<AgentId> {
        self.agents.iter().filter(|a| a.is_alive()).map(|a| a.id).collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Monsters currently alive (spawn gating compares this to the cap).
    pub fn live_monster_count(&self) -> usize {
        self.agents
            .iter()
            .filter(|a| !a.is_hero() && a.is_alive())
            .count()
    }

    // ── Reaping ───────────────────────────────────────────────────────────

    /// Remove all dead monsters from the live set, returning them.
    ///
    /// The hero is never removed; callers handle hero death separately.
    pub fn extract_dead_monsters(&mut self) -> Vec<Agent> {
        let mut dead = Vec::new();
        self.agents.retain(|a| {
            if !a.is_hero() && !a.is_alive() {
                dead.push(a.clone());
                false
            } else {
                true
            }
        });
        dead
    }
}

// ── AgentRngs ────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, keyed by `AgentId`.
///
/// RNGs are materialized lazily on first use — seeding depends only on the
/// global seed and the agent's id, so "create at spawn" and "create on first
/// roll" produce identical streams.
pub struct AgentRngs {
    global_seed: u64,
    map: FxHashMap<AgentId, AgentRng>,
}

impl AgentRngs {
    pub fn new(global_seed: u64) -> Self {
        Self { global_seed, map: FxHashMap::default() }
    }

    /// Mutable reference to one agent's RNG, seeding it if needed.
    pub fn rng_for(&mut self, agent: AgentId) -> &mut AgentRng {
        let seed = self.global_seed;
        self.map
            .entry(agent)
            .or_insert_with(|| AgentRng::new(seed, agent))
    }

    /// Drop a reaped agent's RNG state.
    pub fn remove(&mut self, agent: AgentId) {
        self.map.remove(&agent);
    }
}
