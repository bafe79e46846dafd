//! # trivia-royale
//!
//! Client-side state controller for a real-time trivia elimination game.
//!
//! The game server is the single authority: it pushes lobby rosters,
//! questions, round results and the final winner over a bidirectional event
//! channel. This crate mirrors that stream into a local [`GameView`] the
//! rendering layer reads directly, and forwards user intents (join, answer,
//! leave) back over the same channel.
//!
//! ## Features
//!
//! - **Phase Machine**: welcome, lobby, playing, eliminated, finished
//! - **Roster Mirroring**: server-sent player lists, replaced wholesale
//! - **Deadline Countdown**: seconds remaining derived from the server's
//!   absolute deadline, immune to local clock drift
//! - **Injected Channel**: transport stays external; an in-memory pair
//!   doubles as the test harness
//!
//! ## Example
//!
//! ```rust,ignore
//! use trivia_royale::{ControllerConfig, GameChannel, GameController, Phase};
//!
//! #[tokio::main]
//! async fn main() {
//!     // The transport adapter keeps `server` and bridges it to the wire.
//!     let (channel, server) = GameChannel::pair(100);
//!     let controller = GameController::start(channel, ControllerConfig::default());
//!
//!     controller.join(Some("Alice")).await.unwrap();
//!
//!     loop {
//!         let view = controller.view().await;
//!         match view.phase {
//!             Phase::Playing => {
//!                 // render view.question and view.time_left
//!             }
//!             Phase::Finished => break,
//!             _ => {}
//!         }
//!         tokio::time::sleep(std::time::Duration::from_millis(100)).await;
//!     }
//! }
//! ```

pub mod channel;
pub mod controller;
pub mod error;
pub mod runtime;
pub mod types;


pub use channel::{GameChannel, ServerSide};
pub use controller::GameController;
pub use error::{GameError, Result};
pub use types::*;
