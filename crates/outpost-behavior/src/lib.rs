//! `outpost-behavior` — periodic agent behaviors and perception.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`config`]    | `BehaviorConfig` — periods, spawn gate, monster cap      |
//! | [`intent`]    | `Intent` — effects behaviors request                     |
//! | [`context`]   | `BehaviorContext` — read-only per-tick view              |
//! | [`behaviors`] | idle motion, combat, healing, wandering producers        |
//! | [`vision`]    | one-hop perception sets, camera visibility               |
//!
//! Behaviors are *pure producers*: they read the context, roll the acting
//! agent's RNG, and return [`Intent`]s.  The tick-driven scheduler in the
//! sim crate owns due-checking, re-arming, and intent application.

pub mod behaviors;
pub mod config;
pub mod context;
pub mod intent;
pub mod vision;


pub use behaviors::{combat, healing, idle_motion, wander};
pub use config::BehaviorConfig;
pub use context::BehaviorContext;
pub use intent::Intent;
pub use vision::{field_of_view, refresh_vision, room_is_visible};
