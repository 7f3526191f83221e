//! `outpost-core` — foundational types for the outpost simulation engine.
//!
//! This crate is a dependency of every other `outpost-*` crate.  It
//! intentionally has no `outpost-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                   |
//! |----------|--------------------------------------------|
//! | [`ids`]  | `RoomId`, `ConnId`, `AgentId`              |
//! | [`geom`] | `Vec2`, `Rect`                             |
//! | [`time`] | `Tick`, `SimClock`, `SimConfig`            |
//! | [`rng`]  | `AgentRng` (per-agent), `SimRng` (global)  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ───────────────────────────────────────────────────────────────

pub use geom::{Rect, Vec2};
pub use ids::{AgentId, ConnId, RoomId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
