//! Agent templates: stat bundles applied at spawn time.

use rustc_hash::FxHashSet;

use outpost_core::{AgentId, RoomId, SimRng, Tick, Vec2};

use crate::agent::{Agent, AgentKind, BehaviorTimers, MAX_HEALTH};

/// The hero's fixed display label.
pub const HERO_NAME: &str = "Hero";

// ── AgentTemplate ────────────────────────────────────────────────────────────

/// Stats applied to a newly spawned agent.
///
/// The defaults mirror the classic entity parameters: 50 units/s walking
/// speed, a coin-flip to hit, 10 damage per hit.  Only the hero regenerates.
///
/// ```
/// use outpost_agent::AgentTemplate;
///
/// let brute = AgentTemplate::monster()
///     .with_weapon_damage(25.0)
///     .with_speed(30.0);
/// assert_eq!(brute.weapon_damage, 25.0);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct AgentTemplate {
    pub speed:         f32,
    pub hit_chance:    f64,
    pub weapon_damage: f32,
    pub healing:       f32,
    pub health:        f32,
    pub ammo:          f32,
    pub morale:        f32,
}

impl AgentTemplate {
    pub fn hero() -> Self {
        Self {
            speed:         50.0,
            hit_chance:    0.5,
            weapon_damage: 10.0,
            healing:       1.0,
            health:        MAX_HEALTH,
            ammo:          100.0,
            morale:        100.0,
        }
    }

    pub fn monster() -> Self {
        Self { healing: 0.0, ..Self::hero() }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_hit_chance(mut self, hit_chance: f64) -> Self {
        self.hit_chance = hit_chance;
        self
    }

    pub fn with_weapon_damage(mut self, damage: f32) -> Self {
        self.weapon_damage = damage;
        self
    }

    pub fn with_healing(mut self, healing: f32) -> Self {
        self.healing = healing;
        self
    }

    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health;
        self
    }

    /// Instantiate an agent from this template.
    pub(crate) fn instantiate(
        &self,
        id:       AgentId,
        name:     String,
        kind:     AgentKind,
        room:     RoomId,
        position: Vec2,
        now:      Tick,
    ) -> Agent {
        Agent {
            id,
            name,
            kind,
            room,
            position,
            speed:           self.speed,
            hit_chance:      self.hit_chance,
            weapon_damage:   self.weapon_damage,
            healing:         self.healing,
            health:          self.health,
            ammo:            self.ammo,
            morale:          self.morale,
            route:           Vec::new(),
            transit:         None,
            vision:          FxHashSet::default(),
            timers:          BehaviorTimers::starting_at(now),
            death_announced: false,
        }
    }
}

// ── Name generation ──────────────────────────────────────────────────────────

/// A short random lowercase name for a monster.
///
/// Uniqueness against the live population is the store's job.
pub(crate) fn random_name(rng: &mut SimRng) -> String {
    let len = rng.gen_range(5..=9usize);
    (0..len)
        .map(|_| (b'a' + rng.gen_range(0..26u8)) as char)
        .collect()
}
