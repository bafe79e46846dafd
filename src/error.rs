//! Error types for trivia-royale

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("No active question to answer")]
    NoActiveQuestion,

    #[error("Not joined to a lobby")]
    NotJoined,

    #[error("Channel to the server closed")]
    ChannelClosed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
