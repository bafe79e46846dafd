//! GameController - mirrors server-pushed game state into a local view

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{RwLock, mpsc};
use tracing::{debug, info, warn};

use crate::channel::GameChannel;
use crate::error::{GameError, Result};
use crate::runtime::{Duration, interval, remaining_secs, spawn};
use crate::types::{
    ClientMessage, ControllerConfig, GameView, Phase, PlayerStatus, ServerEvent, generate_user_id,
    generate_username,
};

/// Client-side controller for one game session.
///
/// [`GameController::start`] consumes the injected channel and spawns a
/// single pump task that applies inbound events to the shared [`GameView`]
/// in arrival order. The rendering layer reads [`view`](Self::view) and
/// calls the intent methods; nothing else mutates the view.
///
/// The server is the authority on rosters, questions, eliminations and the
/// winner. Join and leave transitions are optimistic: they apply locally
/// before any acknowledgment.
pub struct GameController {
    config: ControllerConfig,
    view: Arc<RwLock<GameView>>,
    intents: mpsc::Sender<ClientMessage>,
    shared: Arc<Shared>,
}

/// State shared with the pump and countdown tasks.
struct Shared {
    /// Bumped under the view lock whenever the active question is replaced
    /// or cleared. A countdown task only writes while its captured epoch is
    /// still current, so a stale task can never fire after its question is
    /// gone.
    question_epoch: AtomicU64,
    /// Inbound events applied so far, in arrival order.
    events_processed: AtomicU64,
}

impl GameController {
    /// Start the controller over an injected channel.
    pub fn start(channel: GameChannel, config: ControllerConfig) -> Self {
        let GameChannel {
            mut events,
            intents,
        } = channel;

        let view = Arc::new(RwLock::new(GameView::default()));
        let shared = Arc::new(Shared {
            question_epoch: AtomicU64::new(0),
            events_processed: AtomicU64::new(0),
        });

        {
            let view = view.clone();
            let shared = shared.clone();
            let tick = Duration::from_millis(config.tick_interval);

            spawn(async move {
                while let Some(event) = events.recv().await {
                    apply_event(&view, &shared, tick, event).await;
                    shared.events_processed.fetch_add(1, Ordering::SeqCst);
                }
                debug!("Server event stream closed");
            });
        }

        Self {
            config,
            view,
            intents,
            shared,
        }
    }

    /// Snapshot of the current view.
    pub async fn view(&self) -> GameView {
        self.view.read().await.clone()
    }

    /// Current presentation phase.
    pub async fn phase(&self) -> Phase {
        self.view.read().await.phase
    }

    /// Number of inbound events applied so far.
    pub fn events_processed(&self) -> u64 {
        self.shared.events_processed.load(Ordering::SeqCst)
    }

    /// Join the lobby, generating a fallback username when none is given.
    ///
    /// The transition to [`Phase::Lobby`] is optimistic: it does not wait
    /// for the server to acknowledge the join.
    pub async fn join(&self, username: Option<&str>) -> Result<()> {
        let username = match username {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => generate_username(&self.config.name_prefix),
        };
        let user_id = generate_user_id();

        {
            let mut view = self.view.write().await;
            view.username = Some(username.clone());
            view.phase = Phase::Lobby;
        }

        info!("Joining lobby as {}", username);
        self.send(ClientMessage::JoinLobby { user_id, username }).await
    }

    /// Answer the active question.
    ///
    /// No local state changes here; the outcome arrives later via
    /// round/question/elimination events.
    pub async fn answer(&self, option: impl Into<String>) -> Result<()> {
        let (game_id, question_id) = {
            let view = self.view.read().await;
            let question = view.question.as_ref().ok_or(GameError::NoActiveQuestion)?;
            (question.game_id.clone(), question.question_id.clone())
        };

        self.send(ClientMessage::Answer {
            game_id,
            question_id,
            option: option.into(),
        })
        .await
    }

    /// Leave the lobby, optimistically clearing the roster and returning to
    /// the welcome screen.
    pub async fn leave_lobby(&self) -> Result<()> {
        let username = {
            let mut view = self.view.write().await;
            let username = view.username.clone().ok_or(GameError::NotJoined)?;
            view.players.clear();
            view.phase = Phase::Welcome;
            username
        };

        info!("Leaving lobby");
        self.send(ClientMessage::LeaveLobby { username }).await
    }

    /// Return to the welcome screen after a finished game.
    ///
    /// Pure local reset, no outbound event. Clears winner, question and
    /// roster; the session username is kept. The countdown stops because
    /// the question became absent.
    pub async fn reset_to_welcome(&self) {
        let mut view = self.view.write().await;
        self.shared.question_epoch.fetch_add(1, Ordering::SeqCst);
        view.winner = None;
        view.question = None;
        view.players.clear();
        view.time_left = None;
        view.phase = Phase::Welcome;
    }

    async fn send(&self, msg: ClientMessage) -> Result<()> {
        self.intents.send(msg).await.map_err(|_| {
            warn!("Intent dropped: channel to server closed");
            GameError::ChannelClosed
        })
    }
}

/// Apply one inbound event to the view.
///
/// Handlers are independent and run to completion under a single write
/// guard; whichever event is processed last wins. Only `new-question`
/// inspects the current phase before applying.
async fn apply_event(
    view: &Arc<RwLock<GameView>>,
    shared: &Arc<Shared>,
    tick: Duration,
    event: ServerEvent,
) {
    match event {
        ServerEvent::LobbyUpdate { players } => {
            view.write().await.players = players;
        }

        ServerEvent::GameStart { players } => {
            let mut view = view.write().await;
            view.players = players;
            view.phase = Phase::Playing;
            info!("Game started with {} players", view.players.len());
        }

        ServerEvent::NewQuestion(question) => {
            let mut guard = view.write().await;
            if guard.phase.is_terminal() {
                // A question pushed after elimination or game end never
                // reopens play for this client.
                debug!(
                    "Ignoring question {} in phase {:?}",
                    question.question_id, guard.phase
                );
                return;
            }

            let epoch = shared.question_epoch.fetch_add(1, Ordering::SeqCst) + 1;
            guard.time_left = Some(remaining_secs(question.deadline));
            guard.question = Some(question);
            guard.phase = Phase::Playing;
            drop(guard);

            start_countdown(view.clone(), shared.clone(), epoch, tick);
        }

        ServerEvent::RoundUpdate { players } => {
            let mut view = view.write().await;
            view.players = players;

            let eliminated = view
                .username
                .as_deref()
                .and_then(|name| view.players.iter().find(|p| p.username == name))
                .is_some_and(|p| p.status == PlayerStatus::Eliminated);

            if eliminated {
                info!("Local player eliminated");
                view.phase = Phase::Eliminated;
            }
        }

        ServerEvent::GameOver { winner } => {
            let mut view = view.write().await;
            match &winner {
                Some(w) => info!("Game over, winner: {}", w.username),
                None => info!("Game over, draw"),
            }
            view.winner = winner;
            view.phase = Phase::Finished;
        }

        ServerEvent::Eliminated => {
            view.write().await.phase = Phase::Eliminated;
        }
    }
}

/// Recompute `time_left` on a fixed cadence until the question this task
/// was started for is replaced or cleared.
///
/// The deadline is an absolute point in time supplied by the server, so
/// repeated recomputation cannot accumulate drift the way a locally
/// decremented counter would. The epoch check runs under the same lock as
/// event application; once the question changes, the task exits without
/// writing.
fn start_countdown(view: Arc<RwLock<GameView>>, shared: Arc<Shared>, epoch: u64, tick: Duration) {
    spawn(async move {
        let mut ticker = interval(tick);

        loop {
            ticker.tick().await;

            let mut guard = view.write().await;
            if shared.question_epoch.load(Ordering::SeqCst) != epoch {
                break;
            }
            let Some(deadline) = guard.question.as_ref().map(|q| q.deadline) else {
                break;
            };
            guard.time_left = Some(remaining_secs(deadline));
        }
    });
}
