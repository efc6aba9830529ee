//! GoPlayGo shared wire protocol.
//!
//! This crate defines the message types exchanged over the WebSocket
//! connection between the client and the game server, plus the schema
//! validation step that turns raw wire text into typed messages.
//!
//! Every wire message is an envelope `{"name": <string>, "data": <payload>}`
//! where `name` is drawn from a closed set and fully determines the shape of
//! `data`. Validation is exact: unknown names, missing fields, extra fields,
//! and mistyped fields are all rejected (see [`decode_server_message`]).

pub mod builder;
pub mod messages;
pub mod types;

pub use builder::ClientMessageBuilder;
pub use messages::{
    decode_server_message, ClientMessage, CommandKind, CommandTag, CreateGamePayload, DecodeError,
    ErrorData, GameRefPayload, PlaceStonePayload, ServerMessage,
};
pub use types::{
    Coord, GameIdData, GameMode, GameView, LocalGameInfo, LocalGameState, RemoteGameInfo,
    RemoteGameState, ScoreData, Spaces, StoneColor, BOARD_SIZES, NO_OPPONENT,
};
