//! skirmish — smallest runnable demo of the outpost simulation engine.
//!
//! A hero and a few monsters share a six-room outpost.  The script opens
//! some doors, sends the hero on a supply run (first aid in the lab, ammo
//! in the armory), and prints everything that happens along the way.
//!
//! Run with `RUST_LOG=debug` to also see the per-attack combat chatter.

mod level;

use anyhow::{Context, Result};

use outpost_agent::AgentTemplate;
use outpost_core::{AgentId, RoomId, SimConfig, Tick};
use outpost_sim::{EventLog, Sim, SimBuilder, SimEvent};
use outpost_world::Router;

// ── Constants ────────────────────────────────────────────────────────────────

const SEED:               u64 = 42;
const TICK_DURATION_SECS: f32 = 0.1;
const RUN_SECS:           u32 = 45;

fn main() -> Result<()> {
    env_logger::init();

    println!("=== skirmish — outpost simulation demo ===");
    println!("Seed: {SEED}  |  Tick: {TICK_DURATION_SECS}s  |  Run: {RUN_SECS}s simulated");
    println!();

    // ── World ────────────────────────────────────────────────────────────
    let mut world = level::load().context("loading demo level")?;

    // Make sure the guard's patrol corridor is open.
    for door in ["atrium-barracks", "barracks-reactor"] {
        let conn = world.connection_by_name(door).context("missing door")?;
        if !world.is_open(conn) {
            world.toggle(conn);
        }
    }

    let barracks = world.room_by_name("barracks").context("missing room")?;
    let reactor  = world.room_by_name("reactor").context("missing room")?;

    // ── Simulation ───────────────────────────────────────────────────────
    let mut sim = SimBuilder::new(world, SimConfig { tick_duration_secs: TICK_DURATION_SECS, seed: SEED })
        // a weak lurker somewhere random
        .monster(AgentTemplate::monster().with_health(30.0), None)
        // a guard walking its beat between the barracks and the reactor
        .patrolling_monster(
            AgentTemplate::monster().with_health(30.0),
            barracks,
            vec![reactor, barracks],
        )
        .build()?;

    let hero_id = sim.hero().context("no hero")?.id;

    // ── Scripted interactions, one simulated second at a time ────────────
    let mut log = EventLog::new();
    for second in 0..RUN_SECS {
        match second {
            // the player opens the lab and sends the hero for first aid
            2 => {
                toggle_by_name(&mut sim, "atrium-lab");
                send_hero(&mut sim, hero_id, "lab");
            }
            // then onward to the armory for ammo
            12 => {
                toggle_by_name(&mut sim, "lab-reactor");
                toggle_by_name(&mut sim, "reactor-armory");
                send_hero(&mut sim, hero_id, "armory");
            }
            // the vault stays locked no matter what
            20 => {
                toggle_by_name(&mut sim, "armory-vault");
            }
            _ => {}
        }

        sim.run_secs(1.0, &mut log);
        for (tick, event) in log.events.drain(..) {
            println!("  [{:>5.1}s] {}", tick.0 as f32 * TICK_DURATION_SECS, describe(&sim, tick, event));
        }
    }

    // ── Summary ──────────────────────────────────────────────────────────
    println!();
    println!("{:<12} {:<8} {:<10} {:>7} {:>7}  visible", "Agent", "Kind", "Room", "Health", "Ammo");
    println!("{}", "-".repeat(56));
    for agent in sim.agents().iter() {
        println!(
            "{:<12} {:<8} {:<10} {:>7.0} {:>7.0}  {}",
            agent.name,
            if agent.is_hero() { "hero" } else { "monster" },
            room_name(&sim, agent.room),
            agent.health,
            agent.ammo,
            sim.agent_is_visible(agent.id),
        );
    }

    if let Some(hero) = sim.hero() {
        println!();
        println!("HUD — HEALTH: {:.0}%  AMMO: {:.0}%", hero.health, hero.ammo);
    }

    Ok(())
}

// ── Script helpers ───────────────────────────────────────────────────────────

fn toggle_by_name<R: Router>(sim: &mut Sim<R>, door: &str) {
    match sim.world().connection_by_name(door) {
        Some(conn) => {
            let changed = sim.toggle_connection(conn);
            println!("  > toggle '{door}': {}", if changed { "ok" } else { "rejected" });
        }
        None => println!("  > toggle '{door}': no such door"),
    }
}

fn send_hero<R: Router>(sim: &mut Sim<R>, hero: AgentId, room: &str) {
    let Some(dest) = sim.world().room_by_name(room) else {
        println!("  > no such room '{room}'");
        return;
    };
    match sim.set_agent_destination(hero, dest) {
        Ok(()) => println!("  > hero heads for '{room}'"),
        Err(e) => println!("  > hero can't reach '{room}': {e}"),
    }
}

// ── Pretty-printing ──────────────────────────────────────────────────────────

fn room_name<R: Router>(sim: &Sim<R>, room: RoomId) -> String {
    sim.world().room(room).name.clone()
}

fn agent_name<R: Router>(sim: &Sim<R>, agent: AgentId) -> String {
    sim.agents()
        .get(agent)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| agent.to_string())
}

fn conn_name<R: Router>(sim: &Sim<R>, conn: outpost_core::ConnId) -> String {
    sim.world().connection(conn).name.clone()
}

fn describe<R: Router>(sim: &Sim<R>, _tick: Tick, event: SimEvent) -> String {
    match event {
        SimEvent::EnteredRoom { agent, room } => {
            format!("{} entered {}", agent_name(sim, agent), room_name(sim, room))
        }
        SimEvent::RouteCompleted { agent, room } => {
            format!("{} reached destination {}", agent_name(sim, agent), room_name(sim, room))
        }
        SimEvent::RouteInvalidated { agent, conn } => {
            format!("{} stopped: {} closed ahead", agent_name(sim, agent), conn_name(sim, conn))
        }
        SimEvent::AgentSpawned { agent, room } => {
            format!("{} spawned in {}", agent_name(sim, agent), room_name(sim, room))
        }
        SimEvent::AgentDied { agent, room } => {
            format!("{} died in {}", agent_name(sim, agent), room_name(sim, room))
        }
        SimEvent::ConnectionToggled { conn, open } => {
            format!("{} is now {}", conn_name(sim, conn), if open { "open" } else { "closed" })
        }
        SimEvent::ItemCollected { agent, kind, room } => {
            format!("{} picked up {kind:?} in {}", agent_name(sim, agent), room_name(sim, room))
        }
    }
}
