//! Unit tests for outpost-agent.

use outpost_core::{RoomId, SimRng, Tick, Vec2};

use crate::{AgentStore, AgentTemplate, HERO_NAME, MAX_HEALTH};

fn store_with_hero() -> AgentStore {
    let mut store = AgentStore::new();
    store.spawn_hero(&AgentTemplate::hero(), RoomId(0), Vec2::ZERO, Tick::ZERO);
    store
}

// ── Vitals ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vitals {
    use super::*;

    #[test]
    fn damage_has_no_floor() {
        let mut store = store_with_hero();
        let hero = store.hero_mut().unwrap();
        hero.apply_damage(150.0);
        assert_eq!(hero.health, -50.0);
        assert!(!hero.is_alive());
    }

    #[test]
    fn heal_clamps_at_ceiling() {
        let mut store = store_with_hero();
        let hero = store.hero_mut().unwrap();
        hero.health = 95.0;
        hero.heal(20.0);
        assert_eq!(hero.health, MAX_HEALTH);
    }

    #[test]
    fn heal_never_lowers() {
        let mut store = store_with_hero();
        let hero = store.hero_mut().unwrap();
        hero.health = 40.0;
        hero.heal(0.0);
        assert_eq!(hero.health, 40.0);
        hero.heal(-10.0);
        assert_eq!(hero.health, 40.0);
    }

    #[test]
    fn zero_health_is_dead() {
        let mut store = store_with_hero();
        let hero = store.hero_mut().unwrap();
        hero.health = 0.0;
        assert!(!hero.is_alive());
    }
}

// ── Templates ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod templates {
    use super::*;

    #[test]
    fn monster_does_not_regenerate_by_default() {
        assert_eq!(AgentTemplate::monster().healing, 0.0);
        assert!(AgentTemplate::hero().healing > 0.0);
    }

    #[test]
    fn builder_overrides() {
        let t = AgentTemplate::monster()
            .with_health(30.0)
            .with_weapon_damage(20.0)
            .with_hit_chance(1.0);
        assert_eq!(t.health, 30.0);
        assert_eq!(t.weapon_damage, 20.0);
        assert_eq!(t.hit_chance, 1.0);
    }
}

// ── Store ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population {
    use super::*;

    #[test]
    fn hero_has_fixed_label() {
        let store = store_with_hero();
        assert_eq!(store.hero().unwrap().name, HERO_NAME);
    }

    #[test]
    fn monster_names_are_unique_lowercase() {
        let mut store = store_with_hero();
        let mut rng = SimRng::new(7);
        for _ in 0..20 {
            store.spawn_monster(&AgentTemplate::monster(), RoomId(0), Vec2::ZERO, Tick::ZERO, &mut rng);
        }
        let names: Vec<&str> = store.iter().map(|a| a.name.as_str()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate name {name}");
        }
        for name in names.iter().skip(1) {
            assert!(name.chars().all(|c| c.is_ascii_lowercase()), "bad name {name}");
        }
    }

    #[test]
    fn ids_are_sequential_and_stable() {
        let mut store = store_with_hero();
        let mut rng = SimRng::new(1);
        let m1 = store.spawn_monster(&AgentTemplate::monster(), RoomId(0), Vec2::ZERO, Tick::ZERO, &mut rng);
        let m2 = store.spawn_monster(&AgentTemplate::monster(), RoomId(0), Vec2::ZERO, Tick::ZERO, &mut rng);
        assert!(m1 < m2);

        store.get_mut(m1).unwrap().health = 0.0;
        let dead = store.extract_dead_monsters();
        assert_eq!(dead.len(), 1);
        // m2 still resolves to the same agent after the removal
        assert_eq!(store.get(m2).unwrap().id, m2);
    }

    #[test]
    fn reap_removes_dead_monsters_only() {
        let mut store = store_with_hero();
        let mut rng = SimRng::new(2);
        let m = store.spawn_monster(&AgentTemplate::monster(), RoomId(0), Vec2::ZERO, Tick::ZERO, &mut rng);
        store.get_mut(m).unwrap().health = 0.0;
        store.hero_mut().unwrap().health = 0.0;

        let dead = store.extract_dead_monsters();
        assert_eq!(dead.len(), 1);
        assert_eq!(dead[0].id, m);
        // the dead hero stays in the live set
        assert!(store.hero().is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn live_monster_count_ignores_dead() {
        let mut store = store_with_hero();
        let mut rng = SimRng::new(3);
        let m1 = store.spawn_monster(&AgentTemplate::monster(), RoomId(0), Vec2::ZERO, Tick::ZERO, &mut rng);
        store.spawn_monster(&AgentTemplate::monster(), RoomId(0), Vec2::ZERO, Tick::ZERO, &mut rng);
        assert_eq!(store.live_monster_count(), 2);
        store.get_mut(m1).unwrap().health = -5.0;
        assert_eq!(store.live_monster_count(), 1);
    }
}

// ── RNGs ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rngs {
    use outpost_core::AgentId;

    use crate::AgentRngs;

    #[test]
    fn lazy_seeding_is_deterministic() {
        let mut a = AgentRngs::new(42);
        let mut b = AgentRngs::new(42);
        // touch in different orders
        let x1: u64 = a.rng_for(AgentId(0)).random();
        let _ = a.rng_for(AgentId(1)).random::<u64>();
        let _ = b.rng_for(AgentId(1)).random::<u64>();
        let y1: u64 = b.rng_for(AgentId(0)).random();
        assert_eq!(x1, y1);
    }

    #[test]
    fn remove_then_reuse_reseeds_identically() {
        let mut rngs = AgentRngs::new(9);
        let first: u64 = rngs.rng_for(AgentId(4)).random();
        rngs.remove(AgentId(4));
        let again: u64 = rngs.rng_for(AgentId(4)).random();
        assert_eq!(first, again);
    }
}
