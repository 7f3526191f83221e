//! Behavior tuning knobs.

/// Periods and gates for the periodic behaviors and population control.
///
/// All periods are in simulated seconds; the scheduler converts them to tick
/// counts once at startup.  The defaults are the classic values: behaviors
/// deliberately run on slightly offbeat periods (1.01, 5.1) so they drift
/// through each other instead of firing in lockstep.
#[derive(Clone, Debug)]
pub struct BehaviorConfig {
    /// Idle fidgeting, while not following a route.
    pub idle_period_secs: f32,
    /// Combat resolution between co-located enemies.
    pub combat_period_secs: f32,
    /// Regeneration (`healing` points per tick, clamped at full health).
    pub heal_period_secs: f32,

    /// Bounds of the jittered delay between a monster's wanders.  Each
    /// re-arm samples uniformly from this range.
    pub wander_min_delay_secs: f32,
    pub wander_max_delay_secs: f32,

    /// Period of the global monster spawn pass.
    pub spawn_period_secs: f32,
    /// Probability that a due spawn pass actually spawns.
    pub spawn_chance: f64,
    /// Spawning stops while this many monsters are alive.
    pub monster_cap: usize,

    /// Period of the global reap pass removing dead monsters.
    pub reap_period_secs: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            idle_period_secs:      1.5,
            combat_period_secs:    1.01,
            heal_period_secs:      5.1,
            wander_min_delay_secs: 2.0,
            wander_max_delay_secs: 3.0,
            spawn_period_secs:     5.0,
            spawn_chance:          0.5,
            monster_cap:           3,
            reap_period_secs:      2.0,
        }
    }
}
