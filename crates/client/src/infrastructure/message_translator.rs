//! Translates validated [`ServerMessage`]s into [`ClientEvent`]s.
//!
//! The application layer never sees wire types directly; the mode namespace a
//! message arrived on becomes an explicit `GameMode` on the event.

use goplaygo_shared::{GameMode, GameView, ServerMessage};

use crate::ports::outbound::ClientEvent;

/// Translate a server message into an application event.
pub fn translate(msg: ServerMessage) -> ClientEvent {
    match msg {
        ServerMessage::LocalGameJoined(data) => ClientEvent::GameJoined {
            mode: GameMode::Local,
            game_id: data.game_id,
        },
        ServerMessage::RemoteGameJoined(data) => ClientEvent::GameJoined {
            mode: GameMode::Remote,
            game_id: data.game_id,
        },
        ServerMessage::LocalGameInfo(info) => ClientEvent::Snapshot(GameView::Local(*info)),
        ServerMessage::RemoteGameInfo(info) => ClientEvent::Snapshot(GameView::Remote(*info)),
        ServerMessage::LocalUpdate => ClientEvent::UpdateNotice {
            mode: GameMode::Local,
        },
        ServerMessage::RemoteUpdate => ClientEvent::UpdateNotice {
            mode: GameMode::Remote,
        },
        ServerMessage::LocalGameLeft => ClientEvent::GameLeft {
            mode: GameMode::Local,
        },
        ServerMessage::RemoteGameLeft => ClientEvent::GameLeft {
            mode: GameMode::Remote,
        },
        ServerMessage::Error(goplaygo_shared::ErrorData::BadRequest { message }) => {
            ClientEvent::BadRequest { message }
        }
        ServerMessage::Error(goplaygo_shared::ErrorData::CommandFailed(tag)) => {
            ClientEvent::CommandFailed(tag)
        }
    }
}
