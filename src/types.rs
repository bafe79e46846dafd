//! Type definitions for trivia-royale

use serde::{Deserialize, Serialize};

/// Top-level presentation phase, the single source of truth for what the
/// rendering layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Welcome,
    Lobby,
    Playing,
    Eliminated,
    Finished,
}

impl Phase {
    /// Terminal phases suppress further question updates.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Eliminated | Phase::Finished)
    }
}

/// Whether a player is still in the running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    Active,
    Eliminated,
}

/// One roster entry as broadcast by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub user_id: String,
    pub username: String,
    pub status: PlayerStatus,
}

/// The active question. The server names the prompt and option fields in
/// Spanish on the wire; those names are fixed by the protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub game_id: String,
    pub question_id: String,
    /// Prompt text (`enunciado` on the wire).
    #[serde(rename = "enunciado")]
    pub prompt: String,
    /// Ordered answer options (`opciones` on the wire).
    #[serde(rename = "opciones")]
    pub options: Vec<String>,
    /// When the answer window closes, in ms since the Unix epoch.
    pub deadline: u64,
}

/// Winner of a finished game. Absent means a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub username: String,
}

/// Local view of the game, replaced field-by-field by inbound events.
///
/// The rendering layer reads this snapshot and nothing else; all mutation
/// happens inside [`GameController`](crate::controller::GameController).
#[derive(Debug, Clone, Default)]
pub struct GameView {
    pub phase: Phase,
    /// Roster in server-sent order, replaced wholesale on each update.
    pub players: Vec<Player>,
    pub question: Option<Question>,
    pub winner: Option<Winner>,
    /// Local identity, set at join time and kept for the session.
    pub username: Option<String>,
    /// Seconds remaining on the active question. Never negative; absent
    /// while no question is active.
    pub time_left: Option<u64>,
}

// Wire event types

/// Events pushed by the game server, applied in arrival order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Roster changed while waiting in the lobby.
    LobbyUpdate { players: Vec<Player> },
    /// The game begins with this roster.
    GameStart { players: Vec<Player> },
    /// A new question opens for answers.
    NewQuestion(Question),
    /// Roster after a round resolves, with updated statuses.
    RoundUpdate { players: Vec<Player> },
    /// The game ended. No winner means a draw.
    GameOver {
        #[serde(default)]
        winner: Option<Winner>,
    },
    /// This client was eliminated.
    Eliminated,
}

/// Intents emitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    #[serde(rename_all = "camelCase")]
    JoinLobby { user_id: String, username: String },
    LeaveLobby { username: String },
    #[serde(rename_all = "camelCase")]
    Answer {
        game_id: String,
        question_id: String,
        option: String,
    },
}

/// Controller configuration
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Countdown recompute cadence in ms (default: 500)
    pub tick_interval: u64,
    /// Prefix for generated usernames (default: "Player")
    pub name_prefix: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            tick_interval: 500,
            name_prefix: "Player".to_string(),
        }
    }
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_interval(mut self, ms: u64) -> Self {
        self.tick_interval = ms;
        self
    }

    pub fn name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }
}

/// Generate a fallback username like `Player_42`
pub fn generate_username(prefix: &str) -> String {
    use rand::Rng;
    format!("{prefix}_{}", rand::thread_rng().gen_range(0..1000))
}

/// Generate a unique-enough user identifier from the current time
pub fn generate_user_id() -> String {
    crate::runtime::now_ms().to_string()
}
