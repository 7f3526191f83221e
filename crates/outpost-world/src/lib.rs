//! `outpost-world` — room graph, connections, routing, and level loading.
//!
//! # Crate layout
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`room`]       | `Room`, `RoomTags`                                   |
//! | [`connection`] | `Connection` (door/passage, open/locked invariant)   |
//! | [`graph`]      | `WorldGraph`, `WorldGraphBuilder`                    |
//! | [`router`]     | `Router` trait, `RouteLeg`, `HopRouter`              |
//! | [`loader`]     | JSON level format → `WorldGraph`                     |
//! | [`error`]      | `WorldError`, `WorldResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.   |

pub mod connection;
pub mod error;
pub mod graph;
pub mod loader;
pub mod room;
pub mod router;

#[cfg(test)]
mod tests;

pub use connection::Connection;
pub use error::{WorldError, WorldResult};
pub use graph::{WorldGraph, WorldGraphBuilder};
pub use loader::{load_level_reader, load_level_str};
pub use room::{Room, RoomTags, WALL_MARGIN};
pub use router::{HopRouter, RouteLeg, Router};
