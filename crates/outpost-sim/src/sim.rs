//! The `Sim` struct and its tick loop.

use outpost_agent::{AgentRngs, AgentStore, AgentTemplate, MAX_HEALTH};
use outpost_behavior::{
    combat, healing, idle_motion, refresh_vision, room_is_visible, wander, BehaviorConfig,
    BehaviorContext, Intent,
};
use outpost_core::{AgentId, ConnId, RoomId, SimClock, SimConfig, SimRng, Tick};
use outpost_mobility::{MoveEvent, MovementController};
use outpost_world::{Router, RouteLeg, WorldGraph};

use crate::{ItemKind, SimError, SimEvent, SimObserver, SimResult};

// ── Periods ──────────────────────────────────────────────────────────────────

/// Behavior periods converted to tick counts once at startup.
pub(crate) struct Periods {
    pub idle:   u64,
    pub combat: u64,
    pub heal:   u64,
    pub spawn:  u64,
    pub reap:   u64,
}

impl Periods {
    pub(crate) fn from_config(clock: &SimClock, cfg: &BehaviorConfig) -> Self {
        Self {
            idle:   clock.ticks_for_secs(cfg.idle_period_secs),
            combat: clock.ticks_for_secs(cfg.combat_period_secs),
            heal:   clock.ticks_for_secs(cfg.heal_period_secs),
            spawn:  clock.ticks_for_secs(cfg.spawn_period_secs),
            reap:   clock.ticks_for_secs(cfg.reap_period_secs),
        }
    }
}

// ── Sim ──────────────────────────────────────────────────────────────────────

/// The simulation context: the world graph plus the live agent population,
/// stepped by a single tick-driven scheduler.
///
/// One `step` is one fixed simulation tick:
///
/// 1. **Movement**: every live agent advances along its route; arrivals
///    refresh perception, trigger hero item pickup, and re-jitter wandering.
/// 2. **Behaviors**: each live agent's due behaviors (idle motion, combat,
///    healing, wandering) produce intents against a read-only context; the
///    intents are then applied sequentially in spawn order, and fired
///    behaviors are re-armed.  Dead agents neither fire nor re-arm.
/// 3. **Population control**: a probability-gated spawn pass keeps up to
///    `monster_cap` monsters alive; a reap pass removes dead monsters.
///
/// Everything runs on the calling thread.  Within one phase an agent's state
/// is exclusive; across phases any agent may have been mutated by another's
/// combat — routes computed from a snapshot can therefore be stale, which
/// the movement controller degrades to "agent stops" rather than an error.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    pub config:   SimConfig,
    pub behavior: BehaviorConfig,
    pub clock:    SimClock,

    pub(crate) world:      WorldGraph,
    pub(crate) agents:     AgentStore,
    pub(crate) rngs:       AgentRngs,
    pub(crate) sim_rng:    SimRng,
    pub(crate) controller: MovementController<R>,

    pub(crate) periods:        Periods,
    pub(crate) spawn_due:      Tick,
    pub(crate) reap_due:       Tick,
    pub(crate) spawn_template: AgentTemplate,

    /// Events produced outside `step` (door toggles), delivered at the next
    /// tick boundary.
    pub(crate) queued: Vec<SimEvent>,
}

impl<R: Router> Sim<R> {
    // ── Read access ───────────────────────────────────────────────────────

    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn hero(&self) -> Option<&outpost_agent::Agent> {
        self.agents.hero()
    }

    /// Whether the presentation layer should render `room`: in the hero's
    /// vision set, or carrying a camera.
    pub fn room_is_visible(&self, room: RoomId) -> bool {
        room_is_visible(&self.world, self.agents.hero(), room)
    }

    /// Whether an agent should be rendered (its room is visible).
    pub fn agent_is_visible(&self, agent: AgentId) -> bool {
        match self.agents.get(agent) {
            Some(a) => self.room_is_visible(a.room),
            None => false,
        }
    }

    // ── External mutators ─────────────────────────────────────────────────

    /// Flip a door open/closed.  Locked doors and plain passages are
    /// silently rejected (returns `false`, state unchanged).
    ///
    /// A successful toggle refreshes every live agent's vision — perception
    /// is defined over currently-open connections — and queues a
    /// [`SimEvent::ConnectionToggled`] for the next tick boundary.
    pub fn toggle_connection(&mut self, conn: ConnId) -> bool {
        if !self.world.toggle(conn) {
            return false;
        }
        let world = &self.world;
        for agent in self.agents.iter_mut() {
            if agent.is_alive() {
                refresh_vision(world, agent);
            }
        }
        self.queued.push(SimEvent::ConnectionToggled {
            conn,
            open: self.world.is_open(conn),
        });
        true
    }

    /// Route an agent to `room`, preserving any in-flight leg.
    ///
    /// An unreachable destination is a routing failure: the error is
    /// returned and the agent's existing route is left unchanged.
    pub fn set_agent_destination(&mut self, agent: AgentId, room: RoomId) -> SimResult<()> {
        if room.index() >= self.world.room_count() {
            return Err(SimError::RoomNotFound(room));
        }
        let world = &self.world;
        let controller = &self.controller;
        let a = self
            .agents
            .get_mut(agent)
            .ok_or(SimError::AgentNotFound(agent))?;
        controller.set_destination(world, a, room)?;
        Ok(())
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run the simulation for `secs` simulated seconds.
    pub fn run_secs<O: SimObserver>(&mut self, secs: f32, observer: &mut O) {
        let n = self.clock.ticks_for_secs(secs);
        self.run_ticks(n, observer);
    }

    /// Run exactly `n` ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Advance the simulation by one tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        for event in std::mem::take(&mut self.queued) {
            observer.on_event(now, &event);
        }

        self.advance_movement(now, observer);
        self.run_behaviors(now, observer);
        self.spawn_pass(now, observer);
        self.reap_pass(now, observer);

        observer.on_tick_end(now);
        self.clock.advance();
    }

    // ── Phase 1: movement ─────────────────────────────────────────────────

    fn advance_movement<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let dt = self.clock.tick_duration_secs;
        for id in self.agents.live_ids() {
            let moves = {
                let world = &self.world;
                let controller = &self.controller;
                let rng = self.rngs.rng_for(id);
                match self.agents.get_mut(id) {
                    Some(agent) => controller.advance(world, agent, dt, rng),
                    None => continue,
                }
            };
            for m in moves {
                self.apply_move_event(id, m, now, observer);
            }
        }
    }

    fn apply_move_event<O: SimObserver>(
        &mut self,
        id:       AgentId,
        event:    MoveEvent,
        now:      Tick,
        observer: &mut O,
    ) {
        match event {
            MoveEvent::EnteredRoom { room } => {
                let world = &self.world;
                let is_hero = match self.agents.get_mut(id) {
                    Some(agent) => {
                        refresh_vision(world, agent);
                        agent.is_hero()
                    }
                    None => return,
                };
                observer.on_event(now, &SimEvent::EnteredRoom { agent: id, room });
                if is_hero {
                    self.collect_items(id, room, now, observer);
                }
            }

            MoveEvent::RouteCompleted => {
                let room = match self.agents.get(id) {
                    Some(agent) => agent.room,
                    None => return,
                };
                log::debug!("agent {id} reached destination {room}");
                observer.on_event(now, &SimEvent::RouteCompleted { agent: id, room });
                self.rearm_wander(id, now);
            }

            MoveEvent::RouteInvalidated { conn } => {
                log::debug!("agent {id} blocked: {conn} closed ahead");
                observer.on_event(now, &SimEvent::RouteInvalidated { agent: id, conn });
                self.rearm_wander(id, now);
            }
        }
    }

    /// Hero item pickup on room arrival — exactly once per item, the tag is
    /// consumed with the effect.
    fn collect_items<O: SimObserver>(
        &mut self,
        id:       AgentId,
        room:     RoomId,
        now:      Tick,
        observer: &mut O,
    ) {
        if self.world.take_first_aid(room) {
            if let Some(agent) = self.agents.get_mut(id) {
                agent.health = MAX_HEALTH;
            }
            log::info!("first aid collected in {room}");
            observer.on_event(now, &SimEvent::ItemCollected { agent: id, kind: ItemKind::FirstAid, room });
        }
        if self.world.take_ammo(room) {
            if let Some(agent) = self.agents.get_mut(id) {
                agent.ammo += 100.0;
            }
            log::info!("ammo collected in {room}");
            observer.on_event(now, &SimEvent::ItemCollected { agent: id, kind: ItemKind::Ammo, room });
        }
    }

    // ── Phase 2: behaviors ────────────────────────────────────────────────

    fn run_behaviors<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let ids = self.agents.live_ids();

        // Intent phase: read-only context, per-agent RNG.
        let mut batch: Vec<(AgentId, Vec<Intent>)> = Vec::with_capacity(ids.len());
        {
            let ctx = BehaviorContext::new(now, &self.world, &self.agents);
            for &id in &ids {
                let Some(agent) = ctx.agents.get(id) else { continue };
                let rng = self.rngs.rng_for(id);
                let timers = agent.timers;
                let mut intents = Vec::new();
                if now >= timers.idle_due {
                    intents.extend(idle_motion(agent, &ctx, rng));
                }
                if now >= timers.combat_due {
                    intents.extend(combat(agent, &ctx, rng));
                }
                if now >= timers.heal_due {
                    intents.extend(healing(agent));
                }
                if now >= timers.wander_due {
                    intents.extend(wander(agent, &ctx, rng));
                }
                if !intents.is_empty() {
                    batch.push((id, intents));
                }
            }
        }

        // Re-arm every fired behavior (dead agents never re-arm: `ids` was
        // a snapshot of the living, and an agent killed later this tick
        // stops at the next snapshot).
        for &id in &ids {
            let Some(timers) = self.agents.get(id).map(|a| a.timers) else { continue };
            let wander_delay = if now >= timers.wander_due {
                Some(self.wander_delay_ticks(id))
            } else {
                None
            };
            if let Some(agent) = self.agents.get_mut(id) {
                let t = &mut agent.timers;
                if now >= t.idle_due {
                    t.idle_due = now + self.periods.idle;
                }
                if now >= t.combat_due {
                    t.combat_due = now + self.periods.combat;
                }
                if now >= t.heal_due {
                    t.heal_due = now + self.periods.heal;
                }
                if let Some(delay) = wander_delay {
                    t.wander_due = now + delay;
                }
            }
        }

        // Apply phase: sequential, in spawn order.
        for (id, intents) in batch {
            for intent in intents {
                self.apply_intent(id, intent);
            }
        }
    }

    fn apply_intent(&mut self, id: AgentId, intent: Intent) {
        match intent {
            Intent::Nudge { position } => {
                if let Some(agent) = self.agents.get_mut(id) {
                    if agent.is_alive() && agent.is_idle() {
                        agent.position = position;
                    }
                }
            }

            Intent::Strike { target, damage } => {
                if let Some(victim) = self.agents.get_mut(target) {
                    victim.apply_damage(damage);
                    log::debug!("agent {target} took {damage} damage ({} left)", victim.health);
                }
            }

            Intent::Heal { amount } => {
                if let Some(agent) = self.agents.get_mut(id) {
                    if agent.is_alive() {
                        agent.heal(amount);
                    }
                }
            }

            Intent::Roam { room, conn } => {
                if let Some(agent) = self.agents.get_mut(id) {
                    if agent.is_alive() && agent.is_idle() {
                        agent.route = vec![RouteLeg::Door { room, conn }];
                    }
                }
            }
        }
    }

    // ── Phase 3: population control ───────────────────────────────────────

    fn spawn_pass<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        if now < self.spawn_due {
            return;
        }
        self.spawn_due = now + self.periods.spawn;

        if self.agents.live_monster_count() >= self.behavior.monster_cap {
            return;
        }
        if !self.sim_rng.gen_bool(self.behavior.spawn_chance) {
            return;
        }

        let room = {
            let rooms: Vec<RoomId> = self.world.room_ids().collect();
            match self.sim_rng.choose(&rooms) {
                Some(&r) => r,
                None => return,
            }
        };
        let position = self.world.room(room).center;
        let id = self.agents.spawn_monster(
            &self.spawn_template,
            room,
            position,
            now,
            &mut self.sim_rng,
        );
        {
            let world = &self.world;
            if let Some(agent) = self.agents.get_mut(id) {
                refresh_vision(world, agent);
                log::info!("monster '{}' spawned in {room}", agent.name);
            }
        }
        observer.on_event(now, &SimEvent::AgentSpawned { agent: id, room });
    }

    fn reap_pass<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        if now < self.reap_due {
            return;
        }
        self.reap_due = now + self.periods.reap;

        for corpse in self.agents.extract_dead_monsters() {
            self.rngs.remove(corpse.id);
            log::info!("monster '{}' died in {}", corpse.name, corpse.room);
            observer.on_event(now, &SimEvent::AgentDied { agent: corpse.id, room: corpse.room });
        }

        // The hero is never removed; announce its death exactly once.
        if let Some(hero) = self.agents.hero_mut() {
            if !hero.is_alive() && !hero.death_announced {
                hero.death_announced = true;
                let (id, room) = (hero.id, hero.room);
                log::info!("the hero died in {room}");
                observer.on_event(now, &SimEvent::AgentDied { agent: id, room });
            }
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Jittered wander delay, sampled from the agent's own RNG.
    fn wander_delay_ticks(&mut self, id: AgentId) -> u64 {
        let (min, max) = (
            self.behavior.wander_min_delay_secs,
            self.behavior.wander_max_delay_secs,
        );
        let secs = if max > min {
            self.rngs.rng_for(id).gen_range(min..max)
        } else {
            min
        };
        self.clock.ticks_for_secs(secs)
    }

    fn rearm_wander(&mut self, id: AgentId, now: Tick) {
        let is_monster = self.agents.get(id).is_some_and(|a| !a.is_hero());
        if !is_monster {
            return;
        }
        let delay = self.wander_delay_ticks(id);
        if let Some(agent) = self.agents.get_mut(id) {
            agent.timers.wander_due = now + delay;
        }
    }
}
