//! `outpost-mobility` — continuous agent movement along room-graph routes.
//!
//! A single module: [`controller`] holds [`MovementController`] (leg-by-leg
//! interpolation, door sub-legs, blocked-door invalidation, route splicing)
//! and the [`MoveEvent`]s it reports.  Movement *state* lives on the agent
//! (`Agent::route`, `Agent::transit`); this crate only drives it.

pub mod controller;


pub use controller::{MoveEvent, MovementController};
