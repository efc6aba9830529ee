//! ClientMessage builder.
//!
//! Centralizes construction of mode-namespaced commands so callers never
//! assemble wire names or payload structs by hand.

use crate::messages::{
    ClientMessage, CreateGamePayload, GameRefPayload, PlaceStonePayload,
};
use crate::types::{Coord, GameMode};

/// Builder for [`ClientMessage`] variants.
///
/// Each constructor takes the mode and emits the command in the matching
/// namespace; the payload shape is identical across modes.
pub struct ClientMessageBuilder;

impl ClientMessageBuilder {
    pub fn create_game(mode: GameMode, user_id: &str, size: u32) -> ClientMessage {
        let payload = CreateGamePayload {
            user_id: user_id.to_string(),
            size,
        };
        match mode {
            GameMode::Local => ClientMessage::LocalCreateGame(payload),
            GameMode::Remote => ClientMessage::RemoteCreateGame(payload),
        }
    }

    pub fn join_game(mode: GameMode, user_id: &str, game_id: &str) -> ClientMessage {
        let payload = game_ref(user_id, game_id);
        match mode {
            GameMode::Local => ClientMessage::LocalJoinGame(payload),
            GameMode::Remote => ClientMessage::RemoteJoinGame(payload),
        }
    }

    pub fn rejoin_game(mode: GameMode, user_id: &str, game_id: &str) -> ClientMessage {
        let payload = game_ref(user_id, game_id);
        match mode {
            GameMode::Local => ClientMessage::LocalRejoinGame(payload),
            GameMode::Remote => ClientMessage::RemoteRejoinGame(payload),
        }
    }

    pub fn get_game_info(mode: GameMode, user_id: &str, game_id: &str) -> ClientMessage {
        let payload = game_ref(user_id, game_id);
        match mode {
            GameMode::Local => ClientMessage::LocalGetGameInfo(payload),
            GameMode::Remote => ClientMessage::RemoteGetGameInfo(payload),
        }
    }

    pub fn leave_game(mode: GameMode, user_id: &str, game_id: &str) -> ClientMessage {
        let payload = game_ref(user_id, game_id);
        match mode {
            GameMode::Local => ClientMessage::LocalLeaveGame(payload),
            GameMode::Remote => ClientMessage::RemoteLeaveGame(payload),
        }
    }

    pub fn pass(mode: GameMode, user_id: &str, game_id: &str) -> ClientMessage {
        let payload = game_ref(user_id, game_id);
        match mode {
            GameMode::Local => ClientMessage::LocalPass(payload),
            GameMode::Remote => ClientMessage::RemotePass(payload),
        }
    }

    pub fn place_stone(mode: GameMode, user_id: &str, game_id: &str, coord: Coord) -> ClientMessage {
        let payload = PlaceStonePayload {
            user_id: user_id.to_string(),
            game_id: game_id.to_string(),
            coord,
        };
        match mode {
            GameMode::Local => ClientMessage::LocalPlaceStone(payload),
            GameMode::Remote => ClientMessage::RemotePlaceStone(payload),
        }
    }
}

fn game_ref(user_id: &str, game_id: &str) -> GameRefPayload {
    GameRefPayload {
        user_id: user_id.to_string(),
        game_id: game_id.to_string(),
    }
}
