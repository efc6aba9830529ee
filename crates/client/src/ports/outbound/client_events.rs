//! Events consumed by the application layer.
//!
//! The WebSocket bridge translates every validated server message into one of
//! these, and synthesizes `Connected`/`Disconnected` on connection
//! transitions. Delivery order matches arrival order; the bridge task
//! dispatches events one at a time.

use goplaygo_shared::{CommandTag, GameMode, GameView};

/// One event on the client's inbound stream.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Transport opened. Emitted exactly once per successful (re)connect,
    /// before any message from the new socket.
    Connected,
    /// Transport closed or failed. Carries the delay before the next attempt.
    Disconnected { backoff_secs: u64 },
    /// The server assigned this client to a game (`{mode}/gameJoined`).
    GameJoined { mode: GameMode, game_id: String },
    /// Full game-state snapshot (`{mode}/gameInfo`), replacing any prior view.
    Snapshot(GameView),
    /// Poll trigger (`{mode}/update`): fetch a fresh snapshot.
    UpdateNotice { mode: GameMode },
    /// The game was left or forfeited (`{mode}/gameLeft`).
    GameLeft { mode: GameMode },
    /// `400`-class server error with user-facing text.
    BadRequest { message: String },
    /// A command failed; the payload carries only the failing command name.
    CommandFailed(CommandTag),
}
