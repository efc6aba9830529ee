//! Session reconciliation.
//!
//! Sole writer of the persisted game reference. Three jobs:
//! - on every (re)connect, issue exactly one rejoin when a session is
//!   persisted, in the persisted mode's namespace;
//! - mirror `gameJoined`/`gameLeft` into storage;
//! - evict the session when the server reports it no longer exists.
//!
//! Eviction is deliberately narrow: only failures of the session-addressing
//! commands (join, rejoin, getGameInfo) in the persisted session's own mode
//! prove the stored reference stale. Move failures leave it alone.

use goplaygo_shared::{ClientMessageBuilder, CommandKind};

use crate::application::session_store::SessionStore;
use crate::infrastructure::messaging::CommandBus;
use crate::ports::outbound::{ClientEvent, StorageProvider};

/// Shown when the server no longer knows the referenced game.
pub const GAME_NOT_FOUND: &str =
    "Game not found! Either you typed in an invalid game ID, or the server restarted.";

pub struct SessionService;

impl SessionService {
    /// React to one event. Returns a user-facing notice when there is one.
    pub fn handle_event<S: StorageProvider>(
        store: &SessionStore<S>,
        event: &ClientEvent,
        commands: &CommandBus,
    ) -> Option<String> {
        match event {
            ClientEvent::Connected => {
                if let Some((game_id, mode)) = store.game() {
                    tracing::info!(game_id = %game_id, mode = mode.as_str(), "Rejoining persisted game");
                    commands.send(ClientMessageBuilder::rejoin_game(
                        mode,
                        store.user_id(),
                        &game_id,
                    ));
                }
                None
            }
            ClientEvent::GameJoined { mode, game_id } => {
                store.set_game(game_id, *mode);
                None
            }
            ClientEvent::GameLeft { .. } => {
                store.clear_game();
                None
            }
            ClientEvent::CommandFailed(tag) => match tag.command {
                CommandKind::JoinGame | CommandKind::RejoinGame | CommandKind::GetGameInfo => {
                    if let Some((game_id, mode)) = store.game() {
                        if mode == tag.mode {
                            tracing::info!(game_id = %game_id, "Evicting stale session: {}", tag);
                            store.clear_game();
                        }
                    }
                    Some(GAME_NOT_FOUND.to_string())
                }
                _ => {
                    tracing::warn!("Command failed: {}", tag);
                    None
                }
            },
            _ => None,
        }
    }
}
