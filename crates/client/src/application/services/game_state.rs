//! Game state projection.
//!
//! The server is authoritative: every `{mode}/gameInfo` snapshot replaces the
//! whole view, and an `{mode}/update` notice only triggers a fresh
//! `getGameInfo` request. The projector never merges or patches state and
//! keeps nothing across a `gameLeft`.

use goplaygo_shared::{ClientMessageBuilder, GameView};

use crate::application::session_store::SessionStore;
use crate::infrastructure::messaging::CommandBus;
use crate::ports::outbound::{ClientEvent, StorageProvider};

/// Shown when an update notice arrives with no usable session to poll with.
pub const CANT_GET_GAME_INFO: &str = "Can't get game info: try refreshing the page";

/// Holds the current view of the game plus a one-slot user notice.
#[derive(Default)]
pub struct GameStateProjector {
    view: Option<GameView>,
    notice: Option<String>,
}

impl GameStateProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, if any.
    pub fn view(&self) -> Option<&GameView> {
        self.view.as_ref()
    }

    /// The current user-facing notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Replace the notice. Used for notices raised outside the projector.
    pub fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
    }

    /// React to one event, requesting snapshots through `commands` as needed.
    pub fn handle_event<S: StorageProvider>(
        &mut self,
        store: &SessionStore<S>,
        event: &ClientEvent,
        commands: &CommandBus,
    ) {
        match event {
            ClientEvent::Connected => {
                self.notice = None;
            }
            ClientEvent::Snapshot(view) => {
                self.view = Some(view.clone());
                self.notice = None;
            }
            ClientEvent::GameJoined { .. } => {
                // The old view belongs to a previous game. The session store
                // has already recorded the new reference, so poll it.
                self.view = None;
                self.request_snapshot(store, commands);
            }
            ClientEvent::UpdateNotice { .. } => {
                self.request_snapshot(store, commands);
            }
            ClientEvent::GameLeft { .. } => {
                self.view = None;
                self.notice = None;
            }
            ClientEvent::BadRequest { message } => {
                self.notice = Some(message.clone());
            }
            ClientEvent::Disconnected { .. } | ClientEvent::CommandFailed(_) => {}
        }
    }

    fn request_snapshot<S: StorageProvider>(&mut self, store: &SessionStore<S>, commands: &CommandBus) {
        match store.game() {
            Some((game_id, mode)) => {
                commands.send(ClientMessageBuilder::get_game_info(
                    mode,
                    store.user_id(),
                    &game_id,
                ));
            }
            None => {
                tracing::warn!("Update notice without a session reference");
                self.notice = Some(CANT_GET_GAME_INFO.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FixedRandom, MemoryStorage};
    use crate::infrastructure::messaging::COMMAND_QUEUE_DEPTH;
    use goplaygo_shared::{
        Coord, GameMode, LocalGameInfo, LocalGameState, RemoteGameInfo, RemoteGameState,
        ScoreData, Spaces, StoneColor,
    };
    use tokio::sync::mpsc;

    fn store_with(game: Option<(&str, GameMode)>) -> SessionStore<MemoryStorage> {
        let store = SessionStore::new(MemoryStorage::default(), &FixedRandom::new("abc12"));
        if let Some((id, mode)) = game {
            store.set_game(id, mode);
        }
        store
    }

    fn bus() -> (CommandBus, mpsc::Receiver<goplaygo_shared::ClientMessage>) {
        let (tx, rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        (CommandBus::new(tx), rx)
    }

    fn remote_view(turn: u32) -> GameView {
        GameView::Remote(RemoteGameInfo {
            size: 9,
            turn,
            player_turn: true,
            opponent_id: "opp99".to_string(),
            player_color: StoneColor::Black,
            state: RemoteGameState::Playing,
            score_data: ScoreData {
                winner: StoneColor::Black,
                point_difference: 0,
            },
            available_spaces: vec![Coord::new(0, 0)],
            spaces: Spaces::default(),
            last_coord: Coord::new(4, 4),
        })
    }

    fn local_view() -> GameView {
        GameView::Local(LocalGameInfo {
            size: 13,
            turn: 1,
            current_turn_color: StoneColor::Black,
            state: LocalGameState::Playing,
            score_data: ScoreData {
                winner: StoneColor::Black,
                point_difference: 0,
            },
            available_spaces: vec![],
            spaces: Spaces::default(),
            last_coord: Coord::new(0, 0),
        })
    }

    #[test]
    fn snapshot_replaces_the_view_wholesale() {
        let store = store_with(Some(("g9", GameMode::Remote)));
        let (commands, _rx) = bus();
        let mut projector = GameStateProjector::new();

        projector.handle_event(&store, &ClientEvent::Snapshot(remote_view(3)), &commands);
        assert_eq!(projector.view(), Some(&remote_view(3)));

        // A later snapshot wins even if it changes mode entirely.
        projector.handle_event(&store, &ClientEvent::Snapshot(local_view()), &commands);
        assert_eq!(projector.view(), Some(&local_view()));
    }

    #[test]
    fn applying_the_same_snapshot_twice_is_idempotent() {
        let store = store_with(Some(("g9", GameMode::Remote)));
        let (commands, _rx) = bus();
        let mut projector = GameStateProjector::new();

        projector.handle_event(&store, &ClientEvent::Snapshot(remote_view(3)), &commands);
        projector.handle_event(&store, &ClientEvent::Snapshot(remote_view(3)), &commands);
        assert_eq!(projector.view(), Some(&remote_view(3)));
    }

    #[test]
    fn update_notice_requests_a_snapshot_with_the_persisted_reference() {
        let store = store_with(Some(("g9", GameMode::Remote)));
        let (commands, mut rx) = bus();
        let mut projector = GameStateProjector::new();

        projector.handle_event(
            &store,
            &ClientEvent::UpdateNotice {
                mode: GameMode::Remote,
            },
            &commands,
        );

        let sent = rx.try_recv().expect("getGameInfo queued");
        assert_eq!(sent.wire_name(), "remote/getGameInfo");
        let json = serde_json::to_value(&sent).unwrap();
        assert_eq!(json["data"]["gameID"], "g9");
        assert_eq!(json["data"]["userID"], "abc12");
    }

    #[test]
    fn update_notice_without_a_session_raises_a_notice() {
        let store = store_with(None);
        let (commands, mut rx) = bus();
        let mut projector = GameStateProjector::new();

        projector.handle_event(
            &store,
            &ClientEvent::UpdateNotice {
                mode: GameMode::Remote,
            },
            &commands,
        );

        assert!(rx.try_recv().is_err());
        assert_eq!(projector.notice(), Some(CANT_GET_GAME_INFO));
    }

    #[test]
    fn game_joined_clears_the_old_view_and_polls_the_new_game() {
        let store = store_with(Some(("g2", GameMode::Local)));
        let (commands, mut rx) = bus();
        let mut projector = GameStateProjector::new();
        projector.handle_event(&store, &ClientEvent::Snapshot(remote_view(7)), &commands);

        projector.handle_event(
            &store,
            &ClientEvent::GameJoined {
                mode: GameMode::Local,
                game_id: "g2".to_string(),
            },
            &commands,
        );

        assert_eq!(projector.view(), None);
        let sent = rx.try_recv().expect("getGameInfo queued");
        assert_eq!(sent.wire_name(), "local/getGameInfo");
    }

    #[test]
    fn game_left_clears_view_and_notice() {
        let store = store_with(Some(("g9", GameMode::Remote)));
        let (commands, _rx) = bus();
        let mut projector = GameStateProjector::new();
        projector.handle_event(&store, &ClientEvent::Snapshot(remote_view(1)), &commands);
        projector.set_notice("stale".to_string());

        projector.handle_event(
            &store,
            &ClientEvent::GameLeft {
                mode: GameMode::Remote,
            },
            &commands,
        );

        assert_eq!(projector.view(), None);
        assert_eq!(projector.notice(), None);
    }

    #[test]
    fn bad_request_text_is_shown_verbatim_and_cleared_by_the_next_snapshot() {
        let store = store_with(Some(("g9", GameMode::Remote)));
        let (commands, _rx) = bus();
        let mut projector = GameStateProjector::new();

        projector.handle_event(
            &store,
            &ClientEvent::BadRequest {
                message: "Unable to play move".to_string(),
            },
            &commands,
        );
        assert_eq!(projector.notice(), Some("Unable to play move"));

        projector.handle_event(&store, &ClientEvent::Snapshot(remote_view(2)), &commands);
        assert_eq!(projector.notice(), None);
    }
}
