use thiserror::Error;

use outpost_core::{AgentId, RoomId};
use outpost_world::WorldError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("room {0} does not exist")]
    RoomNotFound(RoomId),

    #[error(transparent)]
    World(#[from] WorldError),
}

pub type SimResult<T> = Result<T, SimError>;
