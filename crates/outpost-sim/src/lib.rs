//! `outpost-sim` — the tick loop orchestrator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`sim`]      | `Sim<R>` — movement, behavior scheduling, spawn/reap      |
//! | [`builder`]  | `SimBuilder` — world + population + config → `Sim`        |
//! | [`events`]   | `SimEvent`, `ItemKind`                                    |
//! | [`observer`] | `SimObserver`, `NoopObserver`, `EventLog`                 |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |
//!
//! # Concurrency model
//!
//! Single-threaded cooperative scheduling: all behaviors and movement steps
//! are short, non-blocking units of work driven by one tick-stepped
//! scheduler.  There are no ordering guarantees across different agents'
//! behaviors within a tick beyond the fixed phase order; the only hard
//! guarantees are that a single agent's movement never rewinds and that
//! re-routing preserves the in-flight leg.

pub mod builder;
pub mod error;
pub mod events;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use events::{ItemKind, SimEvent};
pub use observer::{EventLog, NoopObserver, SimObserver};
pub use sim::Sim;
