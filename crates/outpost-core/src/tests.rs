//! Unit tests for outpost-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ConnId, RoomId};

    #[test]
    fn index_and_ordering() {
        let id = RoomId(42);
        assert_eq!(id.index(), 42);
        assert!(AgentId(0) < AgentId(1));
        assert!(ConnId(100) > ConnId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(RoomId::INVALID.0, u32::MAX);
        assert_eq!(ConnId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(RoomId(7).to_string(), "RoomId(7)");
    }
}

#[cfg(test)]
mod geom {
    use crate::{Rect, Vec2};

    #[test]
    fn vector_arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 3.0));
        assert_eq!(a - b, Vec2::new(2.0, 5.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.dot(b), -1.0);
    }

    #[test]
    fn normalized_is_unit_length() {
        let v = Vec2::new(10.0, 0.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(r.center(), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn clamp_inset_pins_to_margins() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let p = r.clamp_inset(Vec2::new(-50.0, 200.0), 15.0);
        assert_eq!(p, Vec2::new(15.0, 85.0));
        assert!(r.contains_inset(p, 15.0));
    }

    #[test]
    fn clamp_inset_narrow_rect_collapses() {
        // Narrower than twice the margin: clamps to the center line instead
        // of producing an inverted range.
        let r = Rect::new(0.0, 0.0, 20.0, 100.0);
        let p = r.clamp_inset(Vec2::new(100.0, 50.0), 15.0);
        assert_eq!(p.x, 15.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.1);
        assert_eq!(clock.elapsed_secs(), 0.0);
        for _ in 0..10 {
            clock.advance();
        }
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.1);
        assert_eq!(clock.ticks_for_secs(1.5), 15);
        assert_eq!(clock.ticks_for_secs(1.01), 11);
        // sub-tick periods still take one full tick
        assert_eq!(clock.ticks_for_secs(0.01), 1);
    }

    #[test]
    fn config_makes_clock() {
        let cfg = SimConfig { tick_duration_secs: 0.5, seed: 7 };
        let clock = cfg.make_clock();
        assert_eq!(clock.tick_duration_secs, 0.5);
        assert_eq!(clock.current_tick, Tick::ZERO);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(42, AgentId(3));
        let mut b = AgentRng::new(42, AgentId(3));
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let same = (0..8).filter(|_| a.random::<u64>() == b.random::<u64>()).count();
        assert_eq!(same, 0);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(1);
        assert!(rng.gen_bool(1.0));
        assert!(!rng.gen_bool(0.0));
        // out-of-range probabilities are clamped, not a panic
        assert!(rng.gen_bool(2.0));
    }

    #[test]
    fn choose_from_slice() {
        let mut rng = SimRng::new(9);
        let items = [10, 20, 30];
        let picked = *rng.choose(&items).unwrap();
        assert!(items.contains(&picked));
        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
