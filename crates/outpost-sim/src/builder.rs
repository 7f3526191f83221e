//! Fluent builder for constructing a [`Sim`].

use outpost_agent::{AgentRngs, AgentStore, AgentTemplate};
use outpost_behavior::{refresh_vision, BehaviorConfig};
use outpost_core::{RoomId, SimConfig, SimRng};
use outpost_mobility::MovementController;
use outpost_world::{HopRouter, Router, RouteLeg, WorldGraph};

use crate::sim::Periods;
use crate::{Sim, SimError, SimResult};

/// A monster to place at world start.
struct MonsterSpawn {
    template: AgentTemplate,
    /// `None` places the monster in a random room.
    room: Option<RoomId>,
    /// Room-only patrol legs walked immediately after spawn.
    patrol: Vec<RoomId>,
}

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - a built [`WorldGraph`]
/// - [`SimConfig`] — tick resolution and master seed
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                     |
/// |----------------------|---------------------------------------------|
/// | `.behavior(cfg)`     | `BehaviorConfig::default()`                 |
/// | `.hero_in(room)`     | the level's start room, else the first room |
/// | `.hero(template)`    | `AgentTemplate::hero()`                     |
/// | `.spawn_template(t)` | `AgentTemplate::monster()`                  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(world, SimConfig::default())
///     .monster(AgentTemplate::monster(), None)
///     .patrolling_monster(AgentTemplate::monster(), guard_post, vec![yard, gate, guard_post])
///     .build()?;
/// sim.run_secs(60.0, &mut NoopObserver);
/// ```
pub struct SimBuilder {
    world:          WorldGraph,
    config:         SimConfig,
    behavior:       BehaviorConfig,
    hero_template:  AgentTemplate,
    hero_room:      Option<RoomId>,
    monsters:       Vec<MonsterSpawn>,
    spawn_template: AgentTemplate,
}

impl SimBuilder {
    pub fn new(world: WorldGraph, config: SimConfig) -> Self {
        Self {
            world,
            config,
            behavior:       BehaviorConfig::default(),
            hero_template:  AgentTemplate::hero(),
            hero_room:      None,
            monsters:       Vec::new(),
            spawn_template: AgentTemplate::monster(),
        }
    }

    /// Override the behavior tuning (periods, spawn gate, monster cap).
    pub fn behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Override the hero's stats.
    pub fn hero(mut self, template: AgentTemplate) -> Self {
        self.hero_template = template;
        self
    }

    /// Place the hero somewhere other than the level's start room.
    pub fn hero_in(mut self, room: RoomId) -> Self {
        self.hero_room = Some(room);
        self
    }

    /// Add a monster at world start.  `room: None` picks a random room.
    pub fn monster(mut self, template: AgentTemplate, room: Option<RoomId>) -> Self {
        self.monsters.push(MonsterSpawn { template, room, patrol: Vec::new() });
        self
    }

    /// Add a monster with an initial patrol route (room-only legs, walked
    /// immediately after spawn).
    pub fn patrolling_monster(
        mut self,
        template: AgentTemplate,
        room:     RoomId,
        patrol:   Vec<RoomId>,
    ) -> Self {
        self.monsters.push(MonsterSpawn { template, room: Some(room), patrol });
        self
    }

    /// Stats for monsters added later by the periodic spawn pass.
    pub fn spawn_template(mut self, template: AgentTemplate) -> Self {
        self.spawn_template = template;
        self
    }

    /// Build with the default hop-count router.
    pub fn build(self) -> SimResult<Sim<HopRouter>> {
        self.build_with_router(HopRouter)
    }

    /// Build with a custom routing implementation.
    pub fn build_with_router<R: Router>(self, router: R) -> SimResult<Sim<R>> {
        let SimBuilder {
            world,
            config,
            behavior,
            hero_template,
            hero_room,
            monsters,
            spawn_template,
        } = self;

        if world.room_count() == 0 {
            return Err(SimError::Config("world has no rooms".into()));
        }

        let clock = config.make_clock();
        let now = clock.current_tick;
        let periods = Periods::from_config(&clock, &behavior);

        let mut agents = AgentStore::new();
        let mut sim_rng = SimRng::new(config.seed);

        // Hero: explicit room, else the level's start room, else room 0.
        let hero_room = hero_room.or(world.start_room).unwrap_or(RoomId(0));
        check_room(&world, hero_room)?;
        agents.spawn_hero(
            &hero_template,
            hero_room,
            world.room(hero_room).center,
            now,
        );

        for spawn in monsters {
            let room = match spawn.room {
                Some(r) => {
                    check_room(&world, r)?;
                    r
                }
                None => {
                    let rooms: Vec<RoomId> = world.room_ids().collect();
                    match sim_rng.choose(&rooms) {
                        Some(&r) => r,
                        None => return Err(SimError::Config("world has no rooms".into())),
                    }
                }
            };
            let id = agents.spawn_monster(
                &spawn.template,
                room,
                world.room(room).center,
                now,
                &mut sim_rng,
            );
            if !spawn.patrol.is_empty() {
                for &r in &spawn.patrol {
                    check_room(&world, r)?;
                }
                if let Some(agent) = agents.get_mut(id) {
                    agent.route = spawn.patrol.iter().map(|&room| RouteLeg::Room { room }).collect();
                }
            }
        }

        // Everyone starts with fresh eyes.
        for agent in agents.iter_mut() {
            refresh_vision(&world, agent);
        }
        log::info!(
            "simulation ready: {} rooms, {} agents, seed {}",
            world.room_count(),
            agents.len(),
            config.seed
        );

        let seed = config.seed;
        Ok(Sim {
            spawn_due: now + periods.spawn,
            reap_due: now + periods.reap,
            config,
            behavior,
            clock,
            world,
            agents,
            rngs: AgentRngs::new(seed),
            sim_rng,
            controller: MovementController::new(router),
            periods,
            spawn_template,
            queued: Vec::new(),
        })
    }
}

fn check_room(world: &WorldGraph, room: RoomId) -> SimResult<()> {
    if room.index() < world.room_count() {
        Ok(())
    } else {
        Err(SimError::RoomNotFound(room))
    }
}
