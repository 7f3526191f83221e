//! `outpost-agent` — agent records and the live population store.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`agent`]    | `Agent`, `AgentKind`, `Transit`, `BehaviorTimers`      |
//! | [`template`] | `AgentTemplate` stat bundles, hero label               |
//! | [`store`]    | `AgentStore` (live set), `AgentRngs` (per-agent RNG)   |

pub mod agent;
pub mod store;
pub mod template;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentKind, BehaviorTimers, Transit, TransitPhase, MAX_HEALTH};
pub use store::{AgentRngs, AgentStore};
pub use template::{AgentTemplate, HERO_NAME};
