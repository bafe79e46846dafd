//! In-memory duplex channel between the controller and a transport adapter
//!
//! The real-time transport (WebSocket, socket.io bridge, ...) is an external
//! collaborator: it owns the connection and gets the [`ServerSide`] half,
//! while the controller consumes the [`GameChannel`] half. Both directions
//! are bounded and sends await capacity, so inbound events are never dropped
//! under backpressure and always arrive in order.

use tokio::sync::mpsc;
use tracing::warn;

use crate::error::Result;
use crate::types::{ClientMessage, ServerEvent};

/// Controller half of the connection: inbound server events, outbound
/// client intents. Injected into
/// [`GameController::start`](crate::controller::GameController::start).
pub struct GameChannel {
    pub(crate) events: mpsc::Receiver<ServerEvent>,
    pub(crate) intents: mpsc::Sender<ClientMessage>,
}

/// Transport-adapter half: push decoded server events in, drain client
/// intents out. Doubles as the test double for the controller.
pub struct ServerSide {
    pub events: mpsc::Sender<ServerEvent>,
    pub intents: mpsc::Receiver<ClientMessage>,
}

impl GameChannel {
    /// Create a connected pair of channel halves.
    ///
    /// `capacity` bounds both directions and is clamped to at least 1
    /// (tokio panics on 0).
    pub fn pair(capacity: usize) -> (GameChannel, ServerSide) {
        let capacity = capacity.max(1);
        let (event_tx, event_rx) = mpsc::channel(capacity);
        let (intent_tx, intent_rx) = mpsc::channel(capacity);

        (
            GameChannel {
                events: event_rx,
                intents: intent_tx,
            },
            ServerSide {
                events: event_tx,
                intents: intent_rx,
            },
        )
    }
}

impl ServerSide {
    /// Decode and enqueue one raw frame from the wire.
    ///
    /// Frames that do not match the typed schema are logged and dropped
    /// here, at the boundary, so the state machine never sees them.
    /// Returns `false` if the frame was dropped or the controller is gone.
    pub async fn push_json(&self, raw: &str) -> bool {
        match ServerEvent::from_json(raw) {
            Ok(event) => self.events.send(event).await.is_ok(),
            Err(e) => {
                warn!("Dropping malformed server frame: {}", e);
                false
            }
        }
    }
}

impl ServerEvent {
    /// Decode one raw frame from the transport.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl ClientMessage {
    /// Encode for the transport.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
